//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_domain::{JobId, JobStore};
use prospector_store::open_store;

/// Execute the show command.
pub async fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = open_store(&config.store)?;
    let job = store
        .get_job(JobId(args.id))?
        .ok_or_else(|| CliError::NotFound(format!("Job {} does not exist", args.id)))?;
    println!("{}", formatter.format_job(&job)?);
    Ok(())
}
