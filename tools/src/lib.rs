//! Query and inspection tools for `A2S_INFO` responses.
//!
//! This crate provides the transport and presentation around the `wire`
//! decoder:
//!
//! - Send the info request over UDP and decode the reply
//! - Print decoded responses as JSON or as text
//! - Decode previously captured response files
//!
//! # Design Principles
//!
//! - **Typed failures** - Transport problems surface as [`QueryError`], never as a process exit.
//! - **One shot** - A query sends one datagram and waits for one reply; retry policy is the caller's.

mod config;
mod query;
mod report;

pub use config::QueryConfig;
pub use query::{query_info, query_raw, resolve, QueryError, QueryResponse, DEFAULT_PORT};
pub use report::{InfoReport, InfoSummary};
