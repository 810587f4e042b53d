//! Ports (trait boundaries) for external dependencies.
//!
//! The game state is pure; everything that leaves the process goes through
//! the traits defined here and is implemented by the adapters module.

pub mod renderer;

pub use renderer::Renderer;
