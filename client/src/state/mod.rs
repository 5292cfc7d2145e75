//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types with no browser dependencies, so they compile and test
//! natively as well as under WASM.

pub mod mode;
pub mod ui;
