//! Command line arguments.

use {
    crate::domain::eth,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,menaces=info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the home menu with the arrow keys.
    Menu {
        /// Configuration used if "CHECK ELIGIBILITY" is chosen.
        #[arg(long, env = "MENACES_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Open a page by its path, e.g. `/about`.
    Go {
        path: String,

        /// Configuration used if the page is `/check-eligibility`.
        #[arg(long, env = "MENACES_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the lore.
    About,
    /// Check whether a wallet holds a MENACE.
    CheckEligibility(Check),
    /// Build a conjure submission from a prompt and a drawing.
    Conjure(Conjure),
}

#[derive(clap::Args, Debug)]
pub struct Check {
    /// Path to the TOML configuration file.
    #[arg(long, env = "MENACES_CONFIG")]
    pub config: PathBuf,

    /// Check this address instead of asking the configured wallet.
    #[arg(long)]
    pub address: Option<eth::Address>,

    /// Keep following wallet account changes until interrupted.
    #[arg(long)]
    pub watch: bool,
}

#[derive(clap::Args, Debug)]
pub struct Conjure {
    /// The defined purpose of your MENACE.
    #[arg(long)]
    pub prompt: String,

    /// JSON file with the drawing as a list of strokes, each a list of
    /// `[x, y]` points in canvas pixels.
    #[arg(long)]
    pub strokes: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 169, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 169, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub height: u32,
}
