//! Database models and runtime configuration.

pub mod config;
pub mod customer;
