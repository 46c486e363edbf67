//! History command implementation.

use crate::cli::HistoryArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prospector_domain::JobStore;
use prospector_store::open_store;

/// Execute the history command.
pub async fn execute_history(
    args: HistoryArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if args.limit == 0 {
        return Err(CliError::InvalidInput("Limit must be at least 1".to_string()));
    }
    let store = open_store(&config.store)?;
    let jobs = store.list_jobs(args.limit)?;
    println!("{}", formatter.format_history(&jobs)?);
    Ok(())
}
