//! State Management
//!
//! Global application state and the signal-backed controller surfaces.

pub mod global;

pub use global::{provide_global_state, use_global_state, GlobalState};
