//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use router_manifest::MANIFEST_FILENAME;

/// Smart Router manifest builder - writes the extension's package.json
#[derive(Parser, Debug)]
#[command(name = "smart-router-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate and write the manifest
    Generate {
        /// Destination file
        #[arg(short, long, default_value = MANIFEST_FILENAME)]
        output: PathBuf,
    },

    /// Fail if the manifest on disk is missing or out of date
    Check {
        /// Manifest file to check
        #[arg(short, long, default_value = MANIFEST_FILENAME)]
        output: PathBuf,
    },

    /// Show how the manifest on disk differs from the generated one
    Diff {
        /// Manifest file to compare
        #[arg(short, long, default_value = MANIFEST_FILENAME)]
        output: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the generated manifest to stdout
    Print,

    /// Check the manifest invariants without writing anything
    Validate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate {
            output: PathBuf::from(MANIFEST_FILENAME),
        }
    }
}
