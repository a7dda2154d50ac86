//! Input validation and sanitization utilities
//!
//! This module validates user-supplied page numbers, page sizes and
//! configuration values before they reach the pager.

use crate::error::{CliError, UtilsError};

/// Validate that a page size can paginate anything
pub fn validate_page_size(page_size: usize) -> crate::Result<()> {
    if page_size == 0 {
        return Err(UtilsError::Validation {
            message: "Page size must be greater than 0".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Parse a 1-based page number typed by the user
pub fn parse_page_number(input: &str) -> crate::Result<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::InvalidArguments("Page number is required".to_string()).into());
    }

    match input.parse::<usize>() {
        Ok(0) => Err(CliError::InvalidArguments("Pages start at 1".to_string()).into()),
        Ok(page) => Ok(page),
        Err(_) => Err(CliError::InvalidArguments(format!(
            "Invalid page number '{}': expected a positive integer",
            input
        ))
        .into()),
    }
}

/// Validate a region selector
pub fn validate_selector(selector: &str) -> crate::Result<()> {
    if selector.trim().is_empty() {
        return Err(UtilsError::Validation {
            message: "Region selector cannot be empty".to_string(),
        }
        .into());
    }

    if selector.chars().any(|c| c == '<' || c == '>') {
        return Err(UtilsError::Validation {
            message: format!("Region selector '{}' cannot contain markup", selector),
        }
        .into());
    }

    Ok(())
}
