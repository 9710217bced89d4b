pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hnfeed")]
#[command(about = "A hash-routed Hacker News reader rendering to HTML", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/hnfeed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Navigate through routes in one session and output the final page
    Render {
        /// URL hashes to visit in order, e.g. "" "#/page/2" "#/show/42"
        routes: Vec<String>,

        /// Write a full HTML page here instead of printing the root content
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Read hash changes from stdin, one per line, re-rendering a page file
    Browse {
        /// HTML page to keep rewritten
        #[arg(short, long)]
        out: PathBuf,

        /// Route rendered on start-up
        #[arg(short, long, default_value = "")]
        start: String,
    },
}
