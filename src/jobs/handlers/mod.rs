use std::sync::Arc;

use apalis::prelude::{Attempt, Error};
use eyre::Report;
use log::{info, warn};

mod console_message_handler;
pub use console_message_handler::*;

mod recurring_job_handler;
pub use recurring_job_handler::*;

/// Converts a handler outcome into the worker result.
///
/// Failures are retried until `max_attempts` is reached, after which the job
/// is aborted.
pub fn handle_result(
    result: Result<(), Report>,
    attempt: Attempt,
    job_type: &str,
    max_attempts: usize,
) -> Result<(), Error> {
    let error = match result {
        Ok(()) => {
            info!("{} job handled successfully", job_type);
            return Ok(());
        }
        Err(e) => e,
    };
    warn!(
        "{} job failed on attempt {}: {:?}",
        job_type,
        attempt.current(),
        error
    );

    if attempt.current() >= max_attempts {
        warn!("Max attempts ({}) reached, failing job", max_attempts);
        return Err(Error::Abort(Arc::new(
            format!("{} job failed: {}", job_type, error).into(),
        )));
    }

    Err(Error::Failed(Arc::new(
        format!("{} job failed, retrying: {}", job_type, error).into(),
    )))
}
