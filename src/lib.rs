//! # docchat
//!
//! A document-grounded chat backend with translated replies.
//!
//! docchat exposes a small JSON HTTP API: upload a document to use as chat
//! context, send a chat message and receive a simulated reply, and reset the
//! stored context. The reply is the assembled prompt (current document,
//! assistant instruction, user message) passed through an external
//! translation service into the caller-requested language.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌─────────────┐
//! │   HTTP   │──▶│   Response    │──▶│ Translation  │
//! │  (axum)  │   │   Builder     │   │ collaborator │
//! └────┬─────┘   └──────┬────────┘   └─────────────┘
//!      │                │
//!      ▼                ▼
//! ┌─────────────────────────┐
//! │      Context Store      │
//! │  (in-memory documents)  │
//! └─────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! docchat serve                 # start the HTTP server
//! docchat languages             # list supported target languages
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`context`] | In-memory document context store |
//! | [`prompt`] | Prompt assembly |
//! | [`language`] | Target-language resolution |
//! | [`translate`] | Translation collaborator abstraction |
//! | [`chat`] | Response builder |
//! | [`server`] | JSON HTTP server |

pub mod chat;
pub mod config;
pub mod context;
pub mod language;
pub mod prompt;
pub mod server;
pub mod translate;
