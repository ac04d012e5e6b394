/// Keyboard shortcut mapping for undo/redo.
///
/// Pure key-combo resolution: the host event loop owns the actual listener
/// and its attach/detach lifetime, and feeds key combos through `dispatch`.
/// The platform's native undo must be suppressed whenever one of the bound
/// combos fires, even when the matching stack is empty, so native and
/// application undo never diverge.
use crate::store::HistoryStore;

/// A pressed key plus its modifier state.
///
/// `primary` is the platform primary modifier (Ctrl on Windows/Linux,
/// Cmd on macOS); the host maps whichever applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    /// The pressed character key.
    pub key: char,
    /// Primary modifier held.
    pub primary: bool,
    /// Shift held.
    pub shift: bool,
}

impl KeyCombo {
    pub fn new(key: char, primary: bool, shift: bool) -> Self {
        Self { key, primary, shift }
    }
}

/// History action resolved from a key combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// Resolves a key combo to a history action.
///
/// Undo: primary+Z (without Shift). Redo: primary+Shift+Z or primary+Y.
pub fn action_for(combo: KeyCombo) -> Option<HistoryAction> {
    if !combo.primary {
        return None;
    }
    match combo.key.to_ascii_lowercase() {
        'z' if combo.shift => Some(HistoryAction::Redo),
        'z' => Some(HistoryAction::Undo),
        'y' if !combo.shift => Some(HistoryAction::Redo),
        _ => None,
    }
}

/// Whether the host must suppress the platform default for this combo.
///
/// True for every bound combo regardless of whether the store can
/// currently undo or redo.
pub fn suppresses_default(combo: KeyCombo) -> bool {
    action_for(combo).is_some()
}

/// Applies a key combo to a store.
///
/// Runs the resolved action only if the matching stack is non-empty.
/// Returns `true` if the host should suppress the platform default.
pub fn dispatch<D: Clone + PartialEq>(store: &mut HistoryStore<D>, combo: KeyCombo) -> bool {
    match action_for(combo) {
        Some(HistoryAction::Undo) => {
            if store.can_undo() {
                store.undo();
            }
            true
        }
        Some(HistoryAction::Redo) => {
            if store.can_redo() {
                store.redo();
            }
            true
        }
        None => false,
    }
}
