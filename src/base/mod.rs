//! Core components, types, and utilities for PsyCare.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Static reply templates and crisis-card copy.
//! - Common types and result handling.

pub mod config;
pub mod templates;
pub mod types;
