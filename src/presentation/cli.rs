//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use crate::domain::value_objects::TaxonomyDimension;
use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tagtree - pick tags from hierarchical taxonomies
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./tagtree.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tag forest with checkbox states
    Tree {
        /// JSON file with the flat tag list
        #[arg(short, long)]
        tags: PathBuf,

        /// JSON file with the selected ids
        #[arg(short, long)]
        selection: Option<PathBuf>,

        /// Only show one dimension (e.g. job-category)
        #[arg(short, long)]
        dimension: Option<TaxonomyDimension>,
    },

    /// Toggle tags on or off, in the order given
    Toggle {
        #[arg(short, long)]
        tags: PathBuf,

        #[arg(short, long)]
        selection: Option<PathBuf>,

        /// Save the result back to the selection file
        #[arg(short, long, requires = "selection")]
        write: bool,

        /// Tag ids to toggle
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Print the selection as compact chips
    Chips {
        #[arg(short, long)]
        tags: PathBuf,

        #[arg(short, long)]
        selection: PathBuf,
    },

    /// Interactive tree selector
    Pick {
        #[arg(short, long)]
        tags: PathBuf,

        #[arg(short, long)]
        selection: Option<PathBuf>,

        /// Save the confirmed selection back to the selection file
        #[arg(short, long, requires = "selection")]
        write: bool,
    },

    /// Validate a tag list and report forest statistics
    Check {
        #[arg(short, long)]
        tags: PathBuf,
    },
}
