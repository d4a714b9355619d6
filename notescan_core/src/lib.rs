pub mod ai;
pub mod config;
pub mod notes;
pub mod summary;
