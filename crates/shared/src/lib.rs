//! Shared types, errors, and configuration for Canteiro.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision and pt-PT formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
