//! State Management
//!
//! Global notifications and the per-page countdown ticker.

pub mod global;
pub mod ticker;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use ticker::use_ticker;
