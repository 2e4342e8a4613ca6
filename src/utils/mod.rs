//! Utility functions and helpers.

pub mod http;
pub mod url;

#[cfg(test)]
pub(crate) mod test_server;
