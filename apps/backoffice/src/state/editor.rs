//! # Editor State
//!
//! The quotation dialog state machine.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Editor Dialog State Machine                          │
//! │                                                                         │
//! │                 open_new ──────────────┐                                │
//! │   ┌────────┐                           ▼                                │
//! │   │ CLOSED │                    ┌─────────────┐                         │
//! │   │ (None) │                    │ OPEN(new)   │                         │
//! │   └────────┘                    │ OPEN(editing)│                        │
//! │      ▲  ▲    open_editing ────► └─────────────┘                         │
//! │      │  │                             │                                 │
//! │      │  └──── cancel (discard) ───────┤                                 │
//! │      └─────── take_for_save ──────────┘                                 │
//! │                                                                         │
//! │  • Opening while OPEN is an error: the transition only exists          │
//! │    from CLOSED (the dialog is modal)                                   │
//! │  • Close always discards the in-memory editor; reopening "new"         │
//! │    starts from the boilerplate defaults again                          │
//! │  • All field edits happen through with_document_mut while OPEN         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The editor is wrapped in `Arc<Mutex<T>>`: commands may run concurrently,
//! and only one may touch the open document at a time. The open document is
//! exclusively owned by the dialog that created it; nothing outside this
//! state observes partial edits.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use jseven_core::QuotationDocument;

/// How the dialog was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorMode {
    /// "New Quotation": started from the boilerplate defaults.
    New,
    /// "Edit": started from the stored document behind a list row.
    Editing { quote_no: String },
}

/// An open quotation dialog: its mode and the document being edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationEditor {
    pub mode: EditorMode,
    pub document: QuotationDocument,
}

/// Shared editor state. `None` is the CLOSED state.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    inner: Arc<Mutex<Option<QuotationEditor>>>,
}

impl EditorState {
    /// Creates the state machine in the CLOSED state.
    pub fn new() -> Self {
        EditorState {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Checks whether a dialog is open.
    pub fn is_open(&self) -> bool {
        self.inner.lock().expect("editor mutex poisoned").is_some()
    }

    /// CLOSED → OPEN(new) with a default document.
    ///
    /// ## Returns
    /// The fresh document for the dialog to display, or an error if a
    /// dialog is already open.
    pub fn open_new(&self) -> Result<QuotationDocument, String> {
        let mut slot = self.inner.lock().expect("editor mutex poisoned");
        if slot.is_some() {
            return Err("A quotation dialog is already open".to_string());
        }

        let document = QuotationDocument::new();
        *slot = Some(QuotationEditor {
            mode: EditorMode::New,
            document: document.clone(),
        });
        Ok(document)
    }

    /// CLOSED → OPEN(editing) with a loaded document.
    pub fn open_editing(&self, quote_no: String, document: QuotationDocument) -> Result<(), String> {
        let mut slot = self.inner.lock().expect("editor mutex poisoned");
        if slot.is_some() {
            return Err("A quotation dialog is already open".to_string());
        }

        *slot = Some(QuotationEditor {
            mode: EditorMode::Editing { quote_no },
            document,
        });
        Ok(())
    }

    /// OPEN(*) → CLOSED, discarding all edits.
    pub fn cancel(&self) -> Result<(), String> {
        let mut slot = self.inner.lock().expect("editor mutex poisoned");
        if slot.take().is_none() {
            return Err("No quotation dialog is open".to_string());
        }
        Ok(())
    }

    /// OPEN(*) → CLOSED, handing the editor to the caller for persistence.
    ///
    /// The dialog is closed once this returns; a failed save must re-open
    /// deliberately rather than resurrect stale state.
    pub fn take_for_save(&self) -> Result<QuotationEditor, String> {
        let mut slot = self.inner.lock().expect("editor mutex poisoned");
        slot.take()
            .ok_or_else(|| "No quotation dialog is open".to_string())
    }

    /// Executes a function with read access to the open document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = editor.with_document(|doc| doc.totals())?;
    /// ```
    pub fn with_document<F, R>(&self, f: F) -> Result<R, String>
    where
        F: FnOnce(&QuotationDocument) -> R,
    {
        let slot = self.inner.lock().expect("editor mutex poisoned");
        match slot.as_ref() {
            Some(editor) => Ok(f(&editor.document)),
            None => Err("No quotation dialog is open".to_string()),
        }
    }

    /// Executes a function with write access to the open document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// editor.with_document_mut(|doc| doc.terms.push(text))?;
    /// ```
    pub fn with_document_mut<F, R>(&self, f: F) -> Result<R, String>
    where
        F: FnOnce(&mut QuotationDocument) -> R,
    {
        let mut slot = self.inner.lock().expect("editor mutex poisoned");
        match slot.as_mut() {
            Some(editor) => Ok(f(&mut editor.document)),
            None => Err("No quotation dialog is open".to_string()),
        }
    }

    /// Returns the current mode, if a dialog is open.
    pub fn mode(&self) -> Option<EditorMode> {
        let slot = self.inner.lock().expect("editor mutex poisoned");
        slot.as_ref().map(|e| e.mode.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let editor = EditorState::new();
        assert!(!editor.is_open());
        assert!(editor.mode().is_none());
    }

    #[test]
    fn test_open_new_then_cancel_discards_edits() {
        let editor = EditorState::new();
        editor.open_new().unwrap();
        assert_eq!(editor.mode(), Some(EditorMode::New));

        editor
            .with_document_mut(|doc| doc.recipient.to_company = "Mega Supplies".to_string())
            .unwrap();
        editor.cancel().unwrap();
        assert!(!editor.is_open());

        // Reopening "new" starts from defaults again
        let fresh = editor.open_new().unwrap();
        assert_eq!(fresh.recipient.to_company, "");
    }

    #[test]
    fn test_open_while_open_is_rejected() {
        let editor = EditorState::new();
        editor.open_new().unwrap();

        assert!(editor.open_new().is_err());
        assert!(editor
            .open_editing("QTN-001".to_string(), QuotationDocument::new())
            .is_err());
    }

    #[test]
    fn test_edits_require_an_open_dialog() {
        let editor = EditorState::new();
        assert!(editor.with_document(|d| d.totals()).is_err());
        assert!(editor.with_document_mut(|d| d.terms.clear()).is_err());
        assert!(editor.cancel().is_err());
        assert!(editor.take_for_save().is_err());
    }

    #[test]
    fn test_take_for_save_closes_the_dialog() {
        let editor = EditorState::new();
        editor.open_new().unwrap();

        let taken = editor.take_for_save().unwrap();
        assert_eq!(taken.mode, EditorMode::New);
        assert!(!editor.is_open());
    }

    #[test]
    fn test_open_editing_keeps_quote_no() {
        let editor = EditorState::new();
        let mut doc = QuotationDocument::new();
        doc.quote_no = Some("QTN-007".to_string());
        editor.open_editing("QTN-007".to_string(), doc).unwrap();

        assert_eq!(
            editor.mode(),
            Some(EditorMode::Editing {
                quote_no: "QTN-007".to_string()
            })
        );
    }
}
