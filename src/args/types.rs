use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::model::ShotType;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count golf shots hole by hole and get practice suggestions", long_about = None)]
pub struct Args {
    /// The sqlite database file. Created on first use.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "golf_shots.db"
    )]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with a semi-colon.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub db_startup_script: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create or update the player profile.
    Profile {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Start a new round; every hole starts at par 4.
    NewRound {
        #[arg(long)]
        course: String,
        #[arg(long, default_value_t = 18)]
        holes: u32,
    },
    /// List active rounds, newest first.
    Rounds,
    /// Add (or with --decrement remove) shots on a hole.
    Shot {
        #[arg(long)]
        round: Uuid,
        #[arg(long)]
        hole: u32,
        #[arg(long = "type", value_name = "SHOT_TYPE")]
        shot: ShotType,
        #[arg(long)]
        decrement: bool,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Set the par of a hole (3 to 6).
    Par {
        #[arg(long)]
        round: Uuid,
        #[arg(long)]
        hole: u32,
        #[arg(long)]
        par: u32,
    },
    /// Overwrite every counter and the par of a hole at once.
    SetHole {
        #[arg(long)]
        round: Uuid,
        #[arg(long)]
        hole: u32,
        #[arg(long, default_value_t = 4)]
        par: u32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        drives: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        long_shots: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        approaches: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        chips: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        putts: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        fairway_bunker_shots: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        greenside_bunker_shots: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        penalties: i64,
    },
    /// Print the hole-by-hole scorecard of a round.
    Scorecard {
        #[arg(long)]
        round: Uuid,
    },
    /// Hide a round from lists and stats. Its data is kept until purge.
    Discard {
        #[arg(long)]
        round: Uuid,
    },
    /// Permanently delete every discarded round.
    Purge,
    /// Lifetime statistics and practice suggestions.
    Stats {
        /// Print the stats summary as json instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub combined_sql_script: String,
    pub command: Command,
}
