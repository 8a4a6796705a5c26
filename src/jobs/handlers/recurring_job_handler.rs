//! Recurring job worker implementation.
//!
//! Driven by a cron stream rather than the Redis queue: every tick of the
//! configured schedule prints a fixed line.

use std::io::{self, Write};

use apalis::prelude::*;
use eyre::{Result, WrapErr};
use log::info;

use crate::{
    constants::{RECURRING_JOB_MESSAGE, WORKER_DEFAULT_MAXIMUM_RETRIES},
    jobs::{handle_result, RecurringJobReminder},
};

/// Handles each tick of the recurring schedule.
pub async fn recurring_job_handler(
    job: RecurringJobReminder,
    attempt: Attempt,
) -> Result<(), Error> {
    match job.0 {
        Some(fired_at) => info!("Recurring job fired at {}", fired_at.to_rfc3339()),
        None => info!("Recurring job fired"),
    }

    let result = run_recurring_job(&mut io::stdout().lock());

    handle_result(
        result,
        attempt,
        "RecurringJob",
        WORKER_DEFAULT_MAXIMUM_RETRIES,
    )
}

fn run_recurring_job(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", RECURRING_JOB_MESSAGE).wrap_err("Failed to write recurring job output")?;
    out.flush().wrap_err("Failed to flush console output")
}
