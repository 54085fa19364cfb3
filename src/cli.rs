//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::content::Collection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plume content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: plume.toml)
    #[arg(short = 'C', long, default_value = "plume.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the rss feed from the blog, news, and event collections
    Feed {
        /// Write the feed to this path instead of the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print tag usage across the blog, news, and event collections
    Tags {
        /// Print the tag index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a collection's posts grouped by publication year
    Archive {
        /// Collection to list
        #[arg(value_enum, default_value = "blog")]
        collection: Collection,
    },

    /// Validate post ids and subpost parent references
    Check,
}
