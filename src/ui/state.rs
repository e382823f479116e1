//! UI state for the terminal front-end
//!
//! Only presentation state lives here (focus, grid cursor, status log).
//! Role, level and skill selection belong to the model.

use std::collections::VecDeque;

/// Maximum status entries to keep
const MAX_STATUS_ENTRIES: usize = 20;

/// Skills per row in the checkbox grid
pub const GRID_COLUMNS: usize = 4;

/// Which control receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    RoleA,
    LevelA,
    RoleB,
    LevelB,
    Skills,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::RoleA,
        Focus::LevelA,
        Focus::RoleB,
        Focus::LevelB,
        Focus::Skills,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// An entry in the status log
#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub message: String,
    pub kind: StatusKind,
}

#[derive(Debug)]
pub struct UiState {
    pub focus: Focus,
    /// Index into the skill universe
    pub skill_cursor: usize,
    pub status: VecDeque<StatusEntry>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::RoleA,
            skill_cursor: 0,
            status: VecDeque::with_capacity(MAX_STATUS_ENTRIES),
        }
    }

    /// Add an entry to the status log
    pub fn push_status(&mut self, message: String, kind: StatusKind) {
        if self.status.len() >= MAX_STATUS_ENTRIES {
            self.status.pop_front();
        }
        self.status.push_back(StatusEntry { message, kind });
    }

    pub fn latest_status(&self) -> Option<&StatusEntry> {
        self.status.back()
    }

    /// Move the grid cursor by (rows, cols), staying inside `skill_count`
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize, skill_count: usize) {
        if skill_count == 0 {
            self.skill_cursor = 0;
            return;
        }
        let row = (self.skill_cursor / GRID_COLUMNS) as isize + d_row;
        let col = (self.skill_cursor % GRID_COLUMNS) as isize + d_col;
        if row < 0 || col < 0 || col >= GRID_COLUMNS as isize {
            return;
        }
        let target = row as usize * GRID_COLUMNS + col as usize;
        if target < skill_count {
            self.skill_cursor = target;
        }
    }

    /// Pull the cursor back inside the grid after the skill list shrinks
    pub fn clamp_cursor(&mut self, skill_count: usize) {
        self.skill_cursor = self.skill_cursor.min(skill_count.saturating_sub(1));
    }
}
