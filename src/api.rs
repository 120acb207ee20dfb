use crate::engine;
use crate::report::report;
use crate::{Error, Result, Service};
use std::path::Path;
use std::time::{Duration, Instant};

/// What to do with a service whose server has no `add server` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingServer {
    /// Fail the whole run with [`Error::ServerNotFound`].
    #[default]
    Abort,
    /// Drop the service and log a warning.
    Skip,
}

/// Options that affect resolution and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Token whose follower is the flag value, e.g. `-usip`.
    pub flag_marker: String,
    /// Flag value a service must carry to be reported, e.g. `YES`.
    pub sentinel: String,
    pub missing_server: MissingServer,
}

impl Default for Options {
    fn default() -> Self {
        Self { flag_marker: "-usip".to_string(), sentinel: "YES".to_string(), missing_server: MissingServer::Abort }
    }
}

/// Result of [`audit`] and [`audit_file`].
#[derive(Debug, Clone)]
pub struct Audit {
    /// Every resolved service, in file order.
    pub services: Vec<Service>,
    /// Report lines for the services whose flag equals the sentinel.
    pub lines: Vec<String>,
    /// Time spent resolving and filtering.
    pub elapsed: Duration,
}

/// Resolve all services in `text` and build the report.
pub fn audit(text: &str, options: &Options) -> Result<Audit> {
    let started = Instant::now();
    let services = engine::resolve_services_with(text, options)?;
    let lines = report(&services, &options.sentinel);

    tracing::info!(services = services.len(), reported = lines.len(), sentinel = %options.sentinel, "audit complete");
    Ok(Audit { services, lines, elapsed: started.elapsed() })
}

/// Read a configuration dump into memory.
pub fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::FileUnavailable { path: path.to_path_buf(), source })
}

/// [`read_config`] followed by [`audit`].
pub fn audit_file(path: &Path, options: &Options) -> Result<Audit> {
    let text = read_config(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded configuration");
    audit(&text, options)
}
