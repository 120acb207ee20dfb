//! Server resolution.

use super::fields::{Field, read_field};
use super::select::{ADD_SERVER, Directive, select};
use crate::{Error, Result, Server};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Find the first `add server` directive named `name`.
///
/// Scans the whole text on every call. Later directives with the same name are
/// never reached.
pub fn resolve_server(text: &str, name: &str) -> Result<Server> {
    for directive in select(text, ADD_SERVER)? {
        let Some(field) = read_field(directive.body) else {
            continue;
        };
        if field.name == name {
            return build(&directive, &field);
        }
    }
    Err(Error::ServerNotFound { name: name.to_string(), line: None })
}

/// Name to first-defining-directive table, built once per text.
///
/// Only the name is read while indexing; the address is read on lookup, which
/// keeps lookups equivalent to [`resolve_server`].
#[derive(Debug, Default)]
pub struct ServerIndex<'a> {
    entries: HashMap<&'a str, (Directive<'a>, Field<'a>)>,
}

impl<'a> ServerIndex<'a> {
    pub fn build(text: &'a str) -> Result<Self> {
        let mut entries = HashMap::new();
        for directive in select(text, ADD_SERVER)? {
            let Some(field) = read_field(directive.body) else {
                tracing::debug!(line = directive.line, "server directive without a name");
                continue;
            };
            match entries.entry(field.name) {
                Entry::Vacant(slot) => {
                    slot.insert((directive, field));
                }
                Entry::Occupied(first) => {
                    tracing::debug!(
                        name = field.name,
                        line = directive.line,
                        first = first.get().0.line,
                        "duplicate server ignored"
                    );
                }
            }
        }
        Ok(Self { entries })
    }

    /// Build the server named `name`, or `None` if no directive defines it.
    pub fn get(&self, name: &str) -> Option<Result<Server>> {
        self.entries.get(name).map(|(directive, field)| build(directive, field))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Address is the first token after the name; a trailing comment or option is dropped.
fn build(directive: &Directive<'_>, field: &Field<'_>) -> Result<Server> {
    let address = field
        .rest
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::malformed(directive.line, format!("server \"{}\" has no address", field.name)))?;

    tracing::trace!(name = field.name, address, line = directive.line, "resolved server");
    Ok(Server { name: field.name.to_string(), address: address.to_string(), line: directive.line })
}
