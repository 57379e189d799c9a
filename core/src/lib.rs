//! Discovery-and-probe engine.
//!
//! Resolve the local /24, sweep it for live hosts through a bounded worker
//! pool, then probe a fixed port set on every live host. Output goes to a
//! [`UserInterface`](sweepr_common::ui::UserInterface); nothing in here
//! writes to the terminal directly.

pub mod network;
pub mod pool;
pub mod scanner;
