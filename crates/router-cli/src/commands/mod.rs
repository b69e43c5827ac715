//! Command implementations

mod check;
mod generate;
mod print;
mod validate;

pub use check::{run_check, run_diff};
pub use generate::run_generate;
pub use print::run_print;
pub use validate::run_validate;
