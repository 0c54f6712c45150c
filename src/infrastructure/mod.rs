//! Infrastructure: configuration and process setup.

pub mod config;
