//! # JSeven Backoffice Library
//!
//! The orchestration layer over the three library crates.
//!
//! ## Module Organization
//! ```text
//! jseven_backoffice/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── editor.rs   ◄─── Editor dialog state machine
//! │   └── store.rs    ◄─── Shared repositories + seed data
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quotation.rs◄─── Quotation list/editor/export commands
//! │   └── catalog.rs  ◄─── Client/supplier/material commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The binary (`main.rs`) seeds the stores and walks one editor session end
//! to end; a real frontend shell would register the command functions with
//! its IPC layer instead.

pub mod commands;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{EditorMode, EditorState, QuotationEditor, StoreState};
