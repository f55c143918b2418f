use serde::{Deserialize, Serialize};

/// Direction for stepping through search matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDirection {
    Next,
    Previous,
}

/// Result of the most recent search plus the navigation cursor.
///
/// `active == false` always comes with no matches and a zero cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub match_indices: Vec<usize>,
    pub cursor: usize,
    pub active: bool,
}

impl SearchState {
    /// State with no query and no matches
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Message index under the cursor, if any
    pub fn current_match(&self) -> Option<usize> {
        self.match_indices.get(self.cursor).copied()
    }

    /// Whether the message with `index` is part of the current result set
    pub fn is_match(&self, index: usize) -> bool {
        // match_indices is ascending
        self.match_indices.binary_search(&index).is_ok()
    }

    pub fn match_count(&self) -> usize {
        self.match_indices.len()
    }

    /// "2 of 5" style label for the cursor, `None` when there is nothing to show
    pub fn position_label(&self) -> Option<String> {
        if !self.active || self.match_indices.is_empty() {
            return None;
        }
        Some(format!("{} of {}", self.cursor + 1, self.match_indices.len()))
    }
}
