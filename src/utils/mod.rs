//! Utility modules for res-fetch
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: Output directory management
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
