//! Backend Service Wrappers
//!
//! Typed bindings to the REST API, organized by resource.

mod http;
mod projects;
mod tasks;
mod admin;
mod search;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub use projects::*;
pub use tasks::*;
pub use admin::*;
pub use search::*;

/// Everything but unreserved URL characters gets escaped inside a segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode an id for use as a single path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}
