//! Shared utilities and common types for the cricket tournament backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Access token verification for the external identity provider
//! - Field validation helpers for request payloads
//! - Lenient numeric deserialization for form-style input

pub mod jwt;
pub mod numeric;
pub mod validation;
