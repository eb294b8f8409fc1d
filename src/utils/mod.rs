//! Utility modules: build info, persistence, terminal teardown.

pub mod build_info;
pub mod persistence;
pub mod terminal;
