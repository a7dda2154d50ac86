//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Logger setup and verbose output
pub mod logging;

/// Terminal text helpers
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
