//! # Tally Architecture
//!
//! Tally adds a list of transaction amounts to a starting balance. The arithmetic is a
//! one-liner; the point of the crate is where that one-liner lives. Tally is organized
//! as a **functional core** wrapped in an **imperative shell**.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses argv, loads config, installs the logger           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Turns raw argument strings into amounts                  │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Core (core.rs)             │
//! │  - Pure functions over `Balance` and `Transaction`          │
//! │  - Cannot fail, never performs I/O                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types
//! - **Never** writes to stdout/stderr, logs, or calls `std::process::exit`
//!
//! The only fallible step is parsing, and it lives at the API boundary. Once the
//! amounts are typed, nothing below can go wrong.
//!
//! ## Module Overview
//!
//! - [`api`]: Entry point for all operations
//! - [`commands`]: `total` and `history` commands and the shared `CmdResult`
//! - [`core`]: The reducer and its running-balance scan
//! - [`model`]: `Balance`, `Transaction`, `Step`
//! - [`config`]: Output configuration (precision, label)
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering, and logging for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
