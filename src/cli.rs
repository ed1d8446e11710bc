use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stridecalc",
    about = "Compute distance, speed and calories from workout sensor packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// JSON file with an array of `{"code": "RUN", "fields": [...]}` packages.
    ///
    /// Default: the built-in sample sessions.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Print one JSON object per workout instead of a text line
    #[arg(long, global = true)]
    pub json: bool,

    /// Warn about invalid packages and continue with the rest
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Compute a single workout, e.g. `calc RUN 15000 1 75`
    Calc {
        /// Workout type code: SWM, RUN or WLK
        code: String,

        /// Positional fields for the workout type
        #[arg(allow_negative_numbers = true)]
        fields: Vec<f64>,
    },
}
