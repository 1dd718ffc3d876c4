// ABOUTME: Core types and constants for the Studio Engine workspace
// ABOUTME: Foundation crate with unified error handling and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Studio Core
//!
//! Foundation crate providing shared types and constants for the Studio Engine
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Service names and environment variable prefixes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse};
