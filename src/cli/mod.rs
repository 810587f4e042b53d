//! CLI infrastructure for the noughts binary
//!
//! Parses typed commands into intents and wires a session to a stdout
//! renderer.

pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
