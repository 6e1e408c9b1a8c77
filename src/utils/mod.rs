//! # Utility Modules
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Fixed response strings both endpoints return

pub mod constant;
