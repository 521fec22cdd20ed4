//! Shared test fixtures for the UI registry builder workspace.
//!
//! A dev-dependency only, never published.
//!
//! - [`site`]: [`TestSite`], a temporary project with a `registry/` source
//!   tree, a registry document and output directories
//! - [`sources`]: sample component sources used across test suites

pub mod site;
pub mod sources;

pub use site::TestSite;
