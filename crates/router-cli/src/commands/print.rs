//! Print command implementation

use router_manifest::{render, smart_router_manifest};

use crate::error::Result;

/// Write the rendered manifest to stdout.
pub fn run_print() -> Result<()> {
    let content = render(&smart_router_manifest()?)?;
    println!("{content}");
    Ok(())
}
