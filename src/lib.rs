//! Swatchbook
//!
//! Color-harmony palette service with undo/redo history.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
