/// The journey-map document: a grid of stages (columns) by lanes (rows).
///
/// This is the snapshot type the history store tracks, so every type here
/// is `Clone + PartialEq` and the grid lives in a `BTreeMap`: structural
/// equality and the serialized form are both independent of the order in
/// which cells were written.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::annotations::{Comment, Sticker};
use crate::persona::Persona;

/// A column of the grid: one step of the customer's experience over time,
/// e.g. "Discover", "Purchase", "Onboard".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub title: String,
}

/// A row of the grid: one category observed across all stages,
/// e.g. "Actions", "Emotions", "Touchpoints".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub title: String,
}

/// Composite grid key: `"{stage_id}:{lane_id}"`.
///
/// Kept as a single string so the grid serializes as a plain JSON object
/// with deterministic (ordered) keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellKey(String);

impl CellKey {
    pub fn new(stage_id: &str, lane_id: &str) -> Self {
        Self(format!("{stage_id}:{lane_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn stage_id(&self) -> &str {
        self.0.split_once(':').map(|(s, _)| s).unwrap_or(&self.0)
    }

    fn lane_id(&self) -> &str {
        self.0.split_once(':').map(|(_, l)| l).unwrap_or("")
    }
}

/// One grid cell: free text plus annotations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Cell body text.
    pub text: String,
    /// Marker badges, in placement order. Duplicates allowed.
    pub stickers: Vec<Sticker>,
    /// Comment thread, oldest first.
    pub comments: Vec<Comment>,
}

impl Cell {
    /// True when the cell carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.stickers.is_empty() && self.comments.is_empty()
    }
}

/// A complete journey map.
///
/// All edit operations mutate in place; the host clones the map into the
/// history store around each edit. Operations addressing an unknown stage,
/// lane, or cell return `false` and leave the map untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyMap {
    pub id: String,
    pub title: String,
    /// Assigned persona, if any.
    pub persona: Option<Persona>,
    /// Grid columns, in display order.
    pub stages: Vec<Stage>,
    /// Grid rows, in display order.
    pub lanes: Vec<Lane>,
    /// Sparse grid contents keyed by (stage, lane).
    pub cells: BTreeMap<CellKey, Cell>,
}

impl JourneyMap {
    /// Creates an empty map with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            persona: None,
            stages: Vec::new(),
            lanes: Vec::new(),
            cells: BTreeMap::new(),
        }
    }

    // --- Stage operations ---

    /// Appends a stage column and returns its id.
    pub fn add_stage(&mut self, title: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.stages.push(Stage {
            id: id.clone(),
            title: title.into(),
        });
        id
    }

    /// Renames a stage. Returns `false` if the id is unknown.
    pub fn rename_stage(&mut self, stage_id: &str, title: impl Into<String>) -> bool {
        match self.stages.iter_mut().find(|s| s.id == stage_id) {
            Some(stage) => {
                stage.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Removes a stage and all cells in its column.
    /// Returns `false` if the id is unknown.
    pub fn remove_stage(&mut self, stage_id: &str) -> bool {
        let before = self.stages.len();
        self.stages.retain(|s| s.id != stage_id);
        if self.stages.len() == before {
            return false;
        }
        self.cells.retain(|key, _| key.stage_id() != stage_id);
        true
    }

    // --- Lane operations ---

    /// Appends a lane row and returns its id.
    pub fn add_lane(&mut self, title: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.lanes.push(Lane {
            id: id.clone(),
            title: title.into(),
        });
        id
    }

    /// Removes a lane and all cells in its row.
    /// Returns `false` if the id is unknown.
    pub fn remove_lane(&mut self, lane_id: &str) -> bool {
        let before = self.lanes.len();
        self.lanes.retain(|l| l.id != lane_id);
        if self.lanes.len() == before {
            return false;
        }
        self.cells.retain(|key, _| key.lane_id() != lane_id);
        true
    }

    // --- Cell operations ---

    fn has_coords(&self, stage_id: &str, lane_id: &str) -> bool {
        self.stages.iter().any(|s| s.id == stage_id) && self.lanes.iter().any(|l| l.id == lane_id)
    }

    /// Returns the cell at (stage, lane), if it has content.
    pub fn cell(&self, stage_id: &str, lane_id: &str) -> Option<&Cell> {
        self.cells.get(&CellKey::new(stage_id, lane_id))
    }

    /// Sets the text of a cell, creating the cell if needed.
    /// Returns `false` if the coordinates are unknown.
    pub fn set_cell_text(&mut self, stage_id: &str, lane_id: &str, text: impl Into<String>) -> bool {
        if !self.has_coords(stage_id, lane_id) {
            return false;
        }
        let cell = self.cells.entry(CellKey::new(stage_id, lane_id)).or_default();
        cell.text = text.into();
        true
    }

    /// Removes a cell's content entirely. Returns `false` if there was none.
    pub fn clear_cell(&mut self, stage_id: &str, lane_id: &str) -> bool {
        self.cells.remove(&CellKey::new(stage_id, lane_id)).is_some()
    }

    /// Appends a comment to a cell, creating the cell if needed.
    /// Returns `false` if the coordinates are unknown.
    pub fn add_comment(&mut self, stage_id: &str, lane_id: &str, comment: Comment) -> bool {
        if !self.has_coords(stage_id, lane_id) {
            return false;
        }
        self.cells
            .entry(CellKey::new(stage_id, lane_id))
            .or_default()
            .comments
            .push(comment);
        true
    }

    /// Places a sticker on a cell, creating the cell if needed.
    /// Returns `false` if the coordinates are unknown.
    pub fn place_sticker(&mut self, stage_id: &str, lane_id: &str, sticker: Sticker) -> bool {
        if !self.has_coords(stage_id, lane_id) {
            return false;
        }
        self.cells
            .entry(CellKey::new(stage_id, lane_id))
            .or_default()
            .stickers
            .push(sticker);
        true
    }

    /// Removes the first matching sticker from a cell.
    /// Returns `false` if the cell has no such sticker.
    pub fn remove_sticker(&mut self, stage_id: &str, lane_id: &str, sticker: Sticker) -> bool {
        let Some(cell) = self.cells.get_mut(&CellKey::new(stage_id, lane_id)) else {
            return false;
        };
        let Some(pos) = cell.stickers.iter().position(|s| *s == sticker) else {
            return false;
        };
        cell.stickers.remove(pos);
        if cell.is_empty() {
            self.cells.remove(&CellKey::new(stage_id, lane_id));
        }
        true
    }

    // --- Persona ---

    /// Assigns or replaces the map's persona.
    pub fn set_persona(&mut self, persona: Option<Persona>) {
        self.persona = persona;
    }
}
