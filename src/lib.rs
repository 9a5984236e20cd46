//! Client library and command-line front end for a personal-data timeline server.
//!
//! [`client::TimelineClient`] wraps the server's HTTP API, one method per
//! endpoint, returning raw responses. The [`cli`] module builds the
//! `timeline` binary on top of it.

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod options;
pub mod output;
pub mod request;
