//! Interactive terminal client for the Jotto word-guessing service.
//!
//! Each submitted guess gets a stable row, its own concurrently-running
//! request, and its result routed back to that row no matter the
//! completion order. Switching puzzles cancels every outstanding guess.

pub mod config;
pub mod controller;
pub mod display;
pub mod logging;
pub mod service;
pub mod session;
pub mod ui;
