//! Radio option selection

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How options of one radio field relate to each other when toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every option toggles on its own; several may be selected at once
    #[default]
    Independent,
    /// At most one option is selected; picking one clears the others
    Exclusive,
}

impl SelectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Exclusive => "exclusive",
        }
    }
}

/// Selection state shared by all options of one radio field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroup {
    mode: SelectionMode,
    selected: BTreeSet<String>,
}

impl RadioGroup {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: BTreeSet::new(),
        }
    }

    /// Flip the option's indicator, applying the group's mode to its siblings
    pub fn toggle(&mut self, option_id: &str) {
        if self.selected.remove(option_id) {
            return;
        }
        if self.mode == SelectionMode::Exclusive {
            self.selected.clear();
        }
        self.selected.insert(option_id.to_string());
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.contains(option_id)
    }
}
