//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod dashboard;
pub mod insights;
pub mod profile;
pub mod transactions;

// Re-export all handlers for use in router
pub use dashboard::*;
pub use insights::*;
pub use profile::*;
pub use transactions::*;
