//! Console message worker implementation.
//!
//! Prints the message carried by each job to the worker's standard output.

use std::io::{self, Write};

use apalis::prelude::*;
use eyre::{Result, WrapErr};
use log::info;

use crate::{
    constants::WORKER_DEFAULT_MAXIMUM_RETRIES,
    jobs::{handle_result, ConsoleMessage, Job},
};

/// Handles incoming console message jobs from the queue.
pub async fn console_message_handler(
    job: Job<ConsoleMessage>,
    attempt: Attempt,
) -> Result<(), Error> {
    info!(
        "handling console message job {} (attempt {})",
        job.message_id,
        attempt.current()
    );

    let result = write_console_message(&job.data, &mut io::stdout().lock());

    handle_result(
        result,
        attempt,
        "ConsoleMessage",
        WORKER_DEFAULT_MAXIMUM_RETRIES,
    )
}

pub fn write_console_message(message: &ConsoleMessage, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", message.message).wrap_err("Failed to write console message")?;
    out.flush().wrap_err("Failed to flush console output")
}
