//! Stored scan results and the scan-to-note flow.

pub mod dto;
pub mod handler;
pub mod helpers;
pub mod storage;
