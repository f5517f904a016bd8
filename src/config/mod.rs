//! Configuration module for findash
//!
//! Provides XDG-compliant path resolution for the durable stores.

pub mod paths;

pub use paths::FindashPaths;
