//! Service resolution.
//!
//! Each `add service` body is read in a fixed order:
//!
//! ```text
//! <name> <server-ref> <protocol> <port> [tokens...] [<marker> <value>]
//!   │         │            └─ whitespace tokens, bounds-checked;
//!   │         │               quoted comments skipped when scanning for the marker
//!   │         └─ read_field, then looked up in the ServerIndex
//!   └─ read_field
//! ```
//!
//! A directive is validated completely before its server is looked up, so a
//! malformed line is reported as such even when its server is also missing.

use super::fields::{quoted_span, read_field};
use super::select::{ADD_SERVICE, Directive, select};
use super::servers::ServerIndex;
use crate::{Error, MissingServer, Options, Result, Service};

/// Resolve every service with the default [`Options`].
pub fn resolve_services(text: &str) -> Result<Vec<Service>> {
    resolve_services_with(text, &Options::default())
}

/// Resolve every `add service` directive in file order.
///
/// The first error aborts the run, except an unknown server under
/// [`MissingServer::Skip`], which drops that one service with a warning.
pub fn resolve_services_with(text: &str, options: &Options) -> Result<Vec<Service>> {
    let index = ServerIndex::build(text)?;
    let directives = select(text, ADD_SERVICE)?;
    let mut services = Vec::with_capacity(directives.len());

    for directive in directives {
        let parsed = ServiceDirective::parse(&directive, &options.flag_marker)?;

        let server = match index.get(parsed.server) {
            Some(server) => server?,
            None if options.missing_server == MissingServer::Skip => {
                tracing::warn!(
                    service = parsed.name,
                    server = parsed.server,
                    line = directive.line,
                    "skipping service bound to an undefined server"
                );
                continue;
            }
            None => {
                return Err(Error::ServerNotFound { name: parsed.server.to_string(), line: Some(directive.line) });
            }
        };

        services.push(Service {
            name: parsed.name.to_string(),
            server,
            protocol: parsed.protocol.to_string(),
            port: parsed.port.to_string(),
            flag: parsed.flag.map(str::to_string),
            line: directive.line,
        });
    }

    tracing::debug!(services = services.len(), servers = index.len(), "resolved services");
    Ok(services)
}

/// Borrowed, validated fields of one service directive.
#[derive(Debug, PartialEq, Eq)]
struct ServiceDirective<'a> {
    name: &'a str,
    server: &'a str,
    protocol: &'a str,
    port: &'a str,
    flag: Option<&'a str>,
}

impl<'a> ServiceDirective<'a> {
    fn parse(directive: &Directive<'a>, marker: &str) -> Result<Self> {
        let line = directive.line;
        let service = read_field(directive.body).ok_or_else(|| Error::malformed(line, "missing service name"))?;
        let server = read_field(service.rest)
            .ok_or_else(|| Error::malformed(line, format!("service \"{}\" names no server", service.name)))?;

        let tokens: Vec<&str> = server.rest.split_whitespace().collect();
        let (protocol, port) = match tokens.as_slice() {
            [protocol, port, ..] => (*protocol, *port),
            _ => {
                return Err(Error::malformed(line, format!("service \"{}\" needs a protocol and a port", service.name)));
            }
        };

        // Tokens inside quoted comments are never markers or values.
        // Repeated markers: the last one wins.
        let switches: Vec<&str> = quoted_span().split(server.rest).flat_map(str::split_whitespace).collect();
        let mut flag = None;
        for (idx, token) in switches.iter().enumerate() {
            if *token == marker {
                let value = switches
                    .get(idx + 1)
                    .ok_or_else(|| Error::malformed(line, format!("{marker} is not followed by a value")))?;
                flag = Some(*value);
            }
        }

        tracing::trace!(
            line,
            name = service.name,
            name_shape = ?service.shape,
            server = server.name,
            server_shape = ?server.shape,
            protocol,
            port,
            flag,
            "parsed service directive"
        );
        Ok(Self { name: service.name, server: server.name, protocol, port, flag })
    }
}
