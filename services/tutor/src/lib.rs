//! Tutor Service Library Crate
//!
//! Everything around the tutoring core that a terminal session needs:
//! environment configuration and the line-oriented console. The `tutor`
//! binary is a thin wrapper around this library.

pub mod config;
pub mod console;
