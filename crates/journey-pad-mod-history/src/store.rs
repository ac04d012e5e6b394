/// Core snapshot history store.
///
/// Keeps the current document plus linear undo/redo stacks of full
/// snapshots. New edits invalidate the redo stack (no branching), and the
/// undo stack is capped so the oldest snapshots are dropped first.
use std::collections::VecDeque;

use crate::config::HistoryConfig;

/// Linear undo/redo history for a single document.
///
/// Each open document gets its own `HistoryStore` with independent stacks;
/// one store must never be shared across logically distinct documents.
/// All operations are synchronous and infallible: undo/redo on an empty
/// stack is a logged no-op, never an error.
///
/// `D` is the snapshot type. Equality is structural (`PartialEq`), so a
/// `set` that produces a value equal to the current one leaves the stacks
/// untouched regardless of how the value was built.
pub struct HistoryStore<D> {
    /// Undo stack, oldest snapshot first. Capped at `max_history_depth`.
    past: VecDeque<D>,
    /// Current document, `None` until one is loaded.
    present: Option<D>,
    /// Redo stack, nearest redo at the front.
    future: VecDeque<D>,
    /// One-shot latch: the next write through `apply` comes from undo/redo
    /// replay and must not be recorded as a new edit.
    in_transition: bool,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<D> std::fmt::Debug for HistoryStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("past_len", &self.past.len())
            .field("has_present", &self.present.is_some())
            .field("future_len", &self.future.len())
            .field("in_transition", &self.in_transition)
            .finish()
    }
}

impl<D: Clone + PartialEq> HistoryStore<D> {
    /// Creates a store with the given initial document and empty stacks.
    ///
    /// Pass `initial: None` when no document is loaded yet; the first
    /// `set` then becomes the present without recording an undo entry.
    pub fn new(initial: Option<D>, config: HistoryConfig) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            in_transition: false,
            config,
        }
    }

    /// Creates an empty store with default config.
    ///
    /// Convenience constructor for tests and simple usage.
    pub fn empty() -> Self {
        Self::new(None, HistoryConfig::default())
    }

    /// Returns the current document, if any.
    pub fn get(&self) -> Option<&D> {
        self.present.as_ref()
    }

    /// Replaces the current document with a literal value.
    ///
    /// Setting a value structurally equal to the present one is a no-op.
    /// Any other value pushes the old present onto the undo stack (capped)
    /// and clears the redo stack.
    pub fn set(&mut self, value: D) {
        self.apply(value);
    }

    /// Replaces the current document via a function of the previous value.
    ///
    /// Functional form of `set` for derived updates; the closure sees the
    /// present as it is at call time, so queued updates never act on a
    /// stale snapshot.
    pub fn set_with<F>(&mut self, f: F)
    where
        F: FnOnce(Option<&D>) -> D,
    {
        let computed = f(self.present.as_ref());
        self.apply(computed);
    }

    /// Shared write path for `set`, `set_with`, `undo` and `redo`.
    fn apply(&mut self, computed: D) {
        // Undo/redo replay: install the snapshot without touching the
        // stacks, and consume the latch.
        if self.in_transition {
            self.present = Some(computed);
            self.in_transition = false;
            return;
        }

        if self.present.as_ref() == Some(&computed) {
            return;
        }

        if let Some(prev) = self.present.take() {
            self.past.push_back(prev);
            while self.past.len() > self.config.max_history_depth {
                self.past.pop_front();
            }
        }
        self.present = Some(computed);
        self.future.clear();
    }

    /// Steps back to the previous snapshot.
    ///
    /// The current present moves to the front of the redo stack. No-op if
    /// there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(previous) = self.past.pop_back() else {
            tracing::debug!("undo requested with empty history");
            return;
        };
        if let Some(current) = self.present.take() {
            self.future.push_front(current);
        }
        self.in_transition = true;
        self.apply(previous);
    }

    /// Steps forward to the most recently undone snapshot.
    ///
    /// The current present moves to the back of the undo stack. No-op if
    /// there is nothing to redo.
    pub fn redo(&mut self) {
        let Some(next) = self.future.pop_front() else {
            tracing::debug!("redo requested with empty redo stack");
            return;
        };
        if let Some(current) = self.present.take() {
            self.past.push_back(current);
            while self.past.len() > self.config.max_history_depth {
                self.past.pop_front();
            }
        }
        self.in_transition = true;
        self.apply(next);
    }

    /// Replaces the entire state, discarding all history.
    ///
    /// Used when the host switches to a different document; history is
    /// never merged across documents.
    pub fn reset(&mut self, value: Option<D>) {
        self.past.clear();
        self.future.clear();
        self.in_transition = false;
        self.present = value;
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn history_len(&self) -> usize {
        self.past.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HistoryStore<String> {
        HistoryStore::empty()
    }

    fn s(v: &str) -> String {
        v.to_string()
    }

    // --- Basic set/undo/redo ---

    #[test]
    fn test_first_set_records_no_history() {
        let mut st = store();
        st.set(s("a"));
        assert_eq!(st.get(), Some(&s("a")));
        assert!(!st.can_undo());
        assert!(!st.can_redo());
    }

    #[test]
    fn test_set_pushes_previous_present() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        assert_eq!(st.get(), Some(&s("b")));
        assert!(st.can_undo());
        assert_eq!(st.history_len(), 1);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.set(s("c"));

        st.undo();
        assert_eq!(st.get(), Some(&s("b")));
        st.undo();
        assert_eq!(st.get(), Some(&s("a")));
        assert!(!st.can_undo());

        st.redo();
        assert_eq!(st.get(), Some(&s("b")));
        st.redo();
        assert_eq!(st.get(), Some(&s("c")));
        assert!(!st.can_redo());
    }

    #[test]
    fn test_undo_with_initial_value() {
        let mut st = HistoryStore::new(Some(s("init")), HistoryConfig::default());
        st.set(s("a"));
        st.undo();
        assert_eq!(st.get(), Some(&s("init")));
        assert!(!st.can_undo());
        st.redo();
        assert_eq!(st.get(), Some(&s("a")));
    }

    // --- No-op suppression ---

    #[test]
    fn test_set_equal_value_is_noop() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        let before = st.history_len();

        st.set(s("b"));
        assert_eq!(st.history_len(), before);
        assert_eq!(st.get(), Some(&s("b")));
    }

    #[test]
    fn test_set_equal_value_preserves_redo() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.undo();
        assert!(st.can_redo());

        // Re-setting the value we are already on must not clobber redo.
        st.set(s("a"));
        assert!(st.can_redo());
    }

    // --- Redo invalidation ---

    #[test]
    fn test_new_edit_clears_redo() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.undo();
        assert!(st.can_redo());

        st.set(s("x"));
        assert!(!st.can_redo());

        // Redo after invalidation is a no-op.
        st.redo();
        assert_eq!(st.get(), Some(&s("x")));
    }

    // --- Functional updater ---

    #[test]
    fn test_set_with_sees_current_present() {
        let mut st = store();
        st.set(s("a"));
        st.set_with(|prev| format!("{}b", prev.expect("present")));
        assert_eq!(st.get(), Some(&s("ab")));
        st.undo();
        assert_eq!(st.get(), Some(&s("a")));
    }

    #[test]
    fn test_set_with_on_empty_store() {
        let mut st = store();
        st.set_with(|prev| {
            assert!(prev.is_none());
            s("fresh")
        });
        assert_eq!(st.get(), Some(&s("fresh")));
        assert!(!st.can_undo());
    }

    #[test]
    fn test_set_with_identity_is_noop() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.undo();

        st.set_with(|prev| prev.expect("present").clone());
        assert!(st.can_redo());
        assert_eq!(st.history_len(), 0);
    }

    // --- Empty-stack no-ops ---

    #[test]
    fn test_undo_redo_on_fresh_store() {
        let mut st = store();
        st.undo();
        st.redo();
        assert!(st.get().is_none());
        assert!(!st.can_undo());
        assert!(!st.can_redo());
    }

    #[test]
    fn test_undo_past_bottom_is_noop() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.undo();
        st.undo();
        st.undo();
        assert_eq!(st.get(), Some(&s("a")));
        assert!(st.can_redo());
    }

    // --- Bounded history ---

    #[test]
    fn test_history_depth_capped() {
        let mut st = store();
        for i in 0..60 {
            st.set(format!("v{i}"));
        }
        assert!(st.history_len() <= 50);

        // Walking all the way back stops at the oldest surviving snapshot.
        while st.can_undo() {
            st.undo();
        }
        assert_eq!(st.get(), Some(&s("v9")));
    }

    #[test]
    fn test_small_cap_evicts_oldest() {
        let mut st = HistoryStore::new(None, HistoryConfig::with_depth(2));
        st.set(s("a"));
        st.set(s("b"));
        st.set(s("c"));
        st.set(s("d"));

        assert_eq!(st.history_len(), 2);
        st.undo();
        st.undo();
        assert_eq!(st.get(), Some(&s("b")));
        assert!(!st.can_undo());
    }

    #[test]
    fn test_redo_respects_cap() {
        let mut st = HistoryStore::new(None, HistoryConfig::with_depth(2));
        st.set(s("a"));
        st.set(s("b"));
        st.set(s("c"));
        st.undo();
        st.undo();
        st.redo();
        st.redo();
        assert_eq!(st.get(), Some(&s("c")));
        assert!(st.history_len() <= 2);
    }

    // --- Reset ---

    #[test]
    fn test_reset_discards_history() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.undo();

        st.reset(Some(s("other-doc")));
        assert_eq!(st.get(), Some(&s("other-doc")));
        assert!(!st.can_undo());
        assert!(!st.can_redo());
    }

    #[test]
    fn test_reset_to_empty() {
        let mut st = store();
        st.set(s("a"));
        st.reset(None);
        assert!(st.get().is_none());
        assert!(!st.can_undo());
    }

    #[test]
    fn test_set_after_reset_starts_fresh_history() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        st.reset(Some(s("x")));
        st.set(s("y"));

        assert_eq!(st.history_len(), 1);
        st.undo();
        assert_eq!(st.get(), Some(&s("x")));
        assert!(!st.can_undo());
    }

    // --- Interleaved cycles ---

    #[test]
    fn test_repeated_undo_redo_cycles_are_stable() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));

        for _ in 0..3 {
            st.undo();
            assert_eq!(st.get(), Some(&s("a")));
            st.redo();
            assert_eq!(st.get(), Some(&s("b")));
        }
        assert_eq!(st.history_len(), 1);
        assert!(!st.can_redo());
    }

    #[test]
    fn test_debug_output_reports_lengths() {
        let mut st = store();
        st.set(s("a"));
        st.set(s("b"));
        let dbg = format!("{st:?}");
        assert!(dbg.contains("past_len: 1"));
        assert!(dbg.contains("has_present: true"));
    }
}
