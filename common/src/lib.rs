//! Shared models and contracts for sweepr.
//!
//! Everything the engine (`sweepr-core`) and the front-end (`sweepr-cli`)
//! exchange lives here: the subnet and port models, the scan report, the
//! probe traits and the presentation interface.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod probe;
pub mod report;
pub mod ui;
