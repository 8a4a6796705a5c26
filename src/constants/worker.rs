pub const WORKER_DEFAULT_MAXIMUM_RETRIES: usize = 5;

pub const DEFAULT_WORKER_CONCURRENCY: usize = 2;

/// Queue namespace shared by the web producer and the worker consumer.
pub const CONSOLE_MESSAGE_QUEUE_NAMESPACE: &str = "console_message_queue";

/// Six-field cron expression, fires at second zero of every minute.
pub const DEFAULT_RECURRING_JOB_SCHEDULE: &str = "0 * * * * *";

pub const RECURRING_JOB_MESSAGE: &str = "Recurring job executed!";
pub const ENQUEUED_JOB_MESSAGE: &str = "Hello from the job queue!";
