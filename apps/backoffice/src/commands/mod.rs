//! # Backoffice Commands Module
//!
//! All commands exposed to the dashboard frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── quotation.rs  ◄─── List, editor dialog lifecycle, edits, export
//! └── catalog.rs    ◄─── Client/supplier/material CRUD
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Dashboard Frontend                                                     │
//! │  ──────────────────                                                     │
//! │  const summary = await invoke('save_quotation');                        │
//! │         │                                                               │
//! │         │ (IPC)                                                         │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn save_quotation(                                                     │
//! │      stores: &StoreState,   ◄── Shared repositories                    │
//! │      editor: &EditorState,  ◄── The one open dialog                    │
//! │  ) -> Result<QuotationSummary, ApiError>                                │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: QuotationSummary | ApiError                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command is synchronous and returns before the next event is
//! processed; nothing here suspends or races.

pub mod catalog;
pub mod quotation;
