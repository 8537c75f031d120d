//! # Stocktake Architecture
//!
//! Stocktake keeps a small product inventory in a local SQLite file. It loads
//! a seed CSV at startup, lets an operator view and add products, and writes the
//! table back out as a CSV backup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu and prompt loops         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + normalize.rs               │
//! │  - Seed, view, add, export                                  │
//! │  - Returns Rust types, never prints                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait + upsert merge policy                    │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operator action, plus the seed loader
//! - [`normalize`]: Raw CSV / prompt strings to typed values and back
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product` and `NewProduct`
//! - [`config`]: File locations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod store;
