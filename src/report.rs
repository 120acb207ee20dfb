//! Flag filtering and report output.

use crate::{Error, Result, Service};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appended to the input path to name the report file.
pub const OUTPUT_SUFFIX: &str = "-usip-output.txt";

/// Format every service whose flag equals `sentinel` (case-sensitive) as
/// `"<service> <server> <address>"`, preserving input order.
pub fn report(services: &[Service], sentinel: &str) -> Vec<String> {
    services
        .iter()
        .filter(|service| service.flag_is(sentinel))
        .map(|service| format!("{} {} {}", service.name, service.server.name, service.server.address))
        .collect()
}

/// `conf/ns.conf` -> `conf/ns.conf-usip-output.txt`
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Append `lines` to `path`, one per line, creating the file if needed.
///
/// Nothing is created when `lines` is empty. Returns the number of lines written.
pub fn write_report(path: &Path, lines: &[String]) -> Result<usize> {
    if lines.is_empty() {
        tracing::debug!(path = %path.display(), "nothing to report");
        return Ok(0);
    }

    let unavailable = |source| Error::OutputUnavailable { path: path.to_path_buf(), source };
    let file = OpenOptions::new().create(true).append(true).open(path).map_err(unavailable)?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{line}").map_err(unavailable)?;
    }
    out.flush().map_err(unavailable)?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "report written");
    Ok(lines.len())
}
