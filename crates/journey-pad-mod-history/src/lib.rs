/// Snapshot-based undo/redo history management.
///
/// Provides a `HistoryStore` that keeps the current document snapshot plus
/// bounded past and future stacks. The store is generic over the document
/// type and performs no I/O; the host application is responsible for
/// persisting the current snapshot on its own cadence.
pub mod config;
pub mod shortcuts;
pub mod store;

pub use config::HistoryConfig;
pub use shortcuts::{action_for, dispatch, suppresses_default, HistoryAction, KeyCombo};
pub use store::HistoryStore;
