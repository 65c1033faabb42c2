//! StudyBuddy AI
//!
//! Study companion front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Timed quizzes with instant scoring and answer review
//! - Exam simulation against the clock
//! - Practice questions with hints and explanations
//! - Study material upload with a generated summary
//! - Subject leaderboards
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the `studybuddy` crate's state machines;
//! components own the signals and the one-second timers that drive them.
//! The backend is reached over HTTP with `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
