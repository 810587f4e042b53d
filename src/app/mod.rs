//! Application layer: the session that owns game state and a renderer.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │  Session (app)                │
//! │   owns GameState              │
//! │   owns R: Renderer            │
//! └──────┬───────────────┬────────┘
//!        │ intents       │ GameView
//!        ▼               ▼
//!  tictactoe::GameState  adapters::{TextRenderer, JsonRenderer, ...}
//! ```
//!
//! # Usage
//!
//! ```
//! use noughts::adapters::TextRenderer;
//! use noughts::app::{RenderConfig, Session};
//! use noughts::tictactoe::Intent;
//!
//! let renderer = TextRenderer::new(Vec::new(), RenderConfig::default());
//! let mut session = Session::start(renderer)?;
//! session.dispatch(Intent::PlaceMark(4))?;
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod session;

pub use config::RenderConfig;
pub use session::Session;
