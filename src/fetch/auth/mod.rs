//! Credential injection for outgoing requests.

mod url_param;

pub use url_param::UrlParam;
