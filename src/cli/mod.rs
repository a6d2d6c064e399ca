//! Command implementations behind the `ldg` binary.

pub mod commands;
