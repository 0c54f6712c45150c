//! Handler for the `stats` command.

mod format;
mod json;

pub mod handler;
