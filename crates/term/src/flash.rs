//! Merge highlight timer.
//!
//! Holds the merge events of the most recent move for a fixed time, then
//! drops them. The renderer reads [`MergeFlash::events`] every frame; nothing
//! in the game state is touched when the highlight expires.

use arrayvec::ArrayVec;

use crate::core::{MergeEvent, MAX_MERGES};

#[derive(Debug, Clone, Default)]
pub struct MergeFlash {
    events: ArrayVec<MergeEvent, MAX_MERGES>,
    remaining_ms: u32,
}

impl MergeFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current highlight with `events` for `duration_ms`.
    pub fn start(&mut self, events: &[MergeEvent], duration_ms: u32) {
        self.events.clear();
        for event in events.iter().take(MAX_MERGES) {
            self.events.push(*event);
        }
        self.remaining_ms = if self.events.is_empty() { 0 } else { duration_ms };
    }

    /// Advance the timer. Returns true on the tick the highlight expires,
    /// i.e. when one more redraw is needed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.events.is_empty() {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.events.clear();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.remaining_ms = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn events(&self) -> &[MergeEvent] {
        &self.events
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.events
            .iter()
            .any(|e| e.row as usize == row && e.col as usize == col)
    }
}
