//! Server API
//!
//! HTTP bindings to the site's JSON endpoints, organized by feature.
//! Every request is same-origin and marked as XHR so the server answers
//! with JSON instead of a redirect.

mod comment;
mod like;

use gloo_net::http::RequestBuilder;
use percent_encoding::{AsciiSet, CONTROLS};
use web_sys::RequestCredentials;

// Re-export all public items
pub use comment::*;
pub use like::*;

/// Characters escaped inside a single URL path segment
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn ajax(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("X-Requested-With", "XMLHttpRequest")
        .credentials(RequestCredentials::SameOrigin)
}
