pub mod database;
pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs, Command};

/// Parses the command line and resolves it into `CleanArgs`.
///
/// # Errors
///
/// Will return `Err` if the database settings are invalid or a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    clean_args(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the database settings are invalid or a startup script cannot be read
pub fn clean_args(mut args: Args) -> Result<CleanArgs, String> {
    args.validate()?;
    let combined_sql_script = match &args.db_startup_script {
        Some(files) => validation::combine_sql_scripts(files)?,
        None => String::new(),
    };
    Ok(CleanArgs {
        db_name: args.db_name,
        db_startup_script: args.db_startup_script,
        combined_sql_script,
        command: args.command,
    })
}
