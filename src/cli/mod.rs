//! CLI module - Command-line interface for Folio
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio - personal portfolio and ratings server
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the usual lookup locations)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    #[command(alias = "web")]
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List ratings with search, filter and sort
    #[command(alias = "ls")]
    Ratings {
        /// Case-insensitive match on title or genre
        #[arg(long, short)]
        search: Option<String>,
        /// all, movie or series
        #[arg(long = "type", short = 't', default_value = "all")]
        media: String,
        /// date_rated, my_rating, imdb_rating, year, title or runtime
        #[arg(long, default_value = "date_rated")]
        sort: String,
        /// asc or desc
        #[arg(long, default_value = "desc")]
        dir: String,
        /// Maximum number of rows to print
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show score histogram, release-year timeline and average score
    Stats,

    /// Pick the featured title
    Spotlight {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the biographical profile
    Profile {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
