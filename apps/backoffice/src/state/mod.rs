//! # State Module
//!
//! Application state for the backoffice command layer.
//!
//! ## Why Two State Types?
//! Commands declare exactly what they touch:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐   │
//! │  │       StoreState         │   │          EditorState             │   │
//! │  │                          │   │                                  │   │
//! │  │  QuotationRepository     │   │  Arc<Mutex<Option<Editor>>>      │   │
//! │  │  ClientRepository        │   │                                  │   │
//! │  │  SupplierRepository      │   │  The ONE open dialog (or None)   │   │
//! │  │  MaterialRepository      │   │  and its exclusively-owned       │   │
//! │  │                          │   │  document                        │   │
//! │  └──────────────────────────┘   └──────────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: each repository locks internally                        │
//! │  • EditorState: protected by Arc<Mutex<T>> for exclusive access        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod editor;
mod store;

pub use editor::{EditorMode, EditorState, QuotationEditor};
pub use store::StoreState;
