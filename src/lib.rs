//! Offline auditing of NetScaler-style configuration dumps.
//!
//! The crate resolves `add server` and `add service` directives into typed
//! [`Server`] and [`Service`] records and reports the services whose flag
//! (by default `-usip`) equals a sentinel (by default `YES`).
//!
//! ```
//! use nsusip::{Options, audit};
//!
//! let config = "add server web01 10.0.0.1\nadd service \"Web 80\" web01 HTTP 80 -usip YES\n";
//! let out = audit(config, &Options::default()).unwrap();
//! assert_eq!(out.lines, vec!["Web 80 web01 10.0.0.1".to_string()]);
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod report;

pub use api::{Audit, MissingServer, Options, audit, audit_file, read_config};
pub use engine::{
    ADD_SERVER, ADD_SERVICE, Directive, Field, FieldShape, ServerIndex, read_field, resolve_server, resolve_services,
    resolve_services_with, select,
};
pub use error::{Error, Result};
pub use report::{OUTPUT_SUFFIX, output_path, report, write_report};

// --- Records ----------------------------------------------------------------

/// One `add server` directive: a named network endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    pub address: String,
    /// 1-based line of the defining directive.
    pub line: usize,
}

/// One `add service` directive bound to the server it names.
///
/// The server is embedded by value; a `Service` never borrows from the
/// configuration text or from other records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub server: Server,
    pub protocol: String,
    pub port: String,
    /// Value following the flag marker, if the directive carries one.
    pub flag: Option<String>,
    /// 1-based line of the defining directive.
    pub line: usize,
}

impl Service {
    /// Whether the flag is present and equals `sentinel` exactly.
    pub fn flag_is(&self, sentinel: &str) -> bool {
        self.flag.as_deref() == Some(sentinel)
    }
}
