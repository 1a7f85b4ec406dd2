//! `cg-cli`: the `citydata` command-line tool.
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`cli`]      | clap definitions, ordered `Operation` extraction  |
//! | [`output`]   | text and JSON rendering of query results          |
//! | [`dump`]     | adjacency printer                                 |
//!
//! The binary in `main.rs` only wires these to files and standard streams.

pub mod cli;
pub mod dump;
pub mod output;
