//! Directive resolution engine.
//!
//! The engine turns raw configuration text into typed records. Every stage
//! reads the output of the previous one and nothing flows backwards:
//!
//! ```text
//! text ── select(text, keyword)          (select.rs)
//!           │  Vec<Directive>: line number + prefix-stripped body
//!           v
//!         read_field(body)               (fields.rs)
//!           │  quoted / bare-before-comment / bare
//!           │  -> name + unconsumed remainder
//!           v
//!   ┌───────┴────────────────────┐
//!   │                            │
//! resolve_server            resolve_services_with
//! ServerIndex (servers.rs)  (services.rs)
//!   │                            │  read_field twice (service, server ref)
//!   │ <──── server lookup ───────┤  protocol, port, flag
//!   v                            v
//! Server                    Vec<Service>
//! ```
//!
//! ## Quote position is the only signal
//!
//! Names may be bare (`web01`), quoted (`"Web 01"`), or bare with an unrelated
//! quoted comment further along the line (`web01 10.0.0.1 "rack 4"`). The field
//! reader tells these apart purely by where the first quoted span starts, and
//! the same reader is used for every name-like field. Callers never special-case
//! a field.
//!
//! ## Lookups
//!
//! [`resolve_server`] re-scans the text on every call and stops at the first
//! match. [`ServerIndex`] records the first directive per name once and builds
//! the `Server` on lookup, so both paths agree on duplicates and on which line
//! reports a malformed address. The service resolver uses the index.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=nsusip=trace` to see every directive and how its fields
//! were classified.

#[path = "engine/fields.rs"]
mod fields;
#[path = "engine/select.rs"]
mod select;
#[path = "engine/servers.rs"]
mod servers;
#[path = "engine/services.rs"]
mod services;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use fields::{Field, FieldShape, read_field};
pub use select::{ADD_SERVER, ADD_SERVICE, Directive, select};
pub use servers::{ServerIndex, resolve_server};
pub use services::{resolve_services, resolve_services_with};
