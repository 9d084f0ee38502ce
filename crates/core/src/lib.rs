//! Core library for ittools
//!
//! This crate implements the **Functional Core** of the ittools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The ittools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`ittools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`ittools`**: CLI, MCP server and HTTP API (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Total where possible**: Malformed input degrades to empty fields instead of failing
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`url`]: URI decomposition, authority parsing, query decoding and percent-encoding
//! - [`error`]: The [`ToolError`] shared by every tool entry point
//!
//! Tools follow one convention: a typed request goes in, and either a typed
//! response or a [`ToolError`] comes out.
//!
//! # Example Usage
//!
//! ```rust
//! use ittools_core::url::{parse_url, ParseRequest};
//!
//! let response = parse_url(&ParseRequest {
//!     url: "http://[::1]:8080/?multi=1&multi=2".to_string(),
//! })
//! .unwrap();
//!
//! assert_eq!(response.hostname.as_deref(), Some("::1"));
//! assert_eq!(response.port, Some(8080));
//! assert_eq!(response.query_params["multi"], vec!["1", "2"]);
//! ```

pub mod error;
pub mod url;

pub use error::ToolError;
