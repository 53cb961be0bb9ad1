//! Authenticated session against the site
//!
//! The site has no API, so a "session" is nothing more than a cookie jar
//! that has been through the login form. [`Client`] owns one jar for its
//! whole lifetime and reproduces the navigation the extractors rely on:
//! log in, switch the current account, fetch a rendered page.
//!
//! Success of every state-changing navigation is decided by where the
//! redirects end up, never by the status code.

pub mod client;
pub mod request;
pub mod transport;

pub use client::Client;
pub use request::{Method, Page, Request};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub(crate) mod testing;
