//! Storage layer for roster-pager
//!
//! Handles the TOML configuration file and loading collections from disk.

use crate::error::StorageError;

pub mod collection;
pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
