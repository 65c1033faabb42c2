//! Backend access
//!
//! `gloo-net` requests built from the shared endpoint table.

pub mod client;

pub use client::*;
