//! Gridfill (workspace facade crate).
//!
//! This package keeps a stable `gridfill::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use gridfill_core as core;
pub use gridfill_types as types;
