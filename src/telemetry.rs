//! Tracing subscriber setup shared by every binary.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Where the process runs, which decides how log lines are stamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// Local server or CLI: timestamps and ANSI colors on.
    Local,
    /// AWS Lambda: CloudWatch adds timestamps and does not render ANSI.
    Lambda,
}

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `config.log_level`) and
/// the formatter from `LOG_FORMAT`.
pub fn init_tracing(config: &Config, runtime: Runtime) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(runtime == Runtime::Local);

    match (runtime, config.log_format.as_str()) {
        (Runtime::Lambda, "json") => builder.json().without_time().init(),
        (Runtime::Lambda, _) => builder.without_time().init(),
        (Runtime::Local, "json") => builder.json().init(),
        (Runtime::Local, _) => builder.init(),
    }
}
