//! Pagination types

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Configuration for one aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Maximum number of pages to fetch.
    ///
    /// `None` follows the server until it returns an empty cursor, however
    /// many pages that takes.
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl PaginationConfig {
    /// Unbounded aggregation
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Aggregation that fails once more than `max_pages` pages are needed
    pub fn bounded(max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
        }
    }
}

/// Phase of an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the transport for a page
    Fetching,
    /// Specializing the generic response into a page
    Decoding,
    /// Appending the page's records
    Accumulating,
    /// Last page seen, response assembled
    Done,
    /// Aborted on the first error
    Failed,
}

impl Phase {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done | Phase::Failed)
    }

    /// Whether `next` is a legal successor of this phase
    pub fn can_transition_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Fetching, Phase::Decoding | Phase::Failed)
                | (Phase::Decoding, Phase::Accumulating | Phase::Failed)
                | (
                    Phase::Accumulating,
                    Phase::Fetching | Phase::Done | Phase::Failed
                )
        )
    }
}

/// Progress of one aggregation call
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Current phase
    pub phase: Phase,
    /// Pages requested so far
    pub pages: u32,
    /// Records accumulated so far
    pub records: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            phase: Phase::Fetching,
            pages: 0,
            records: 0,
        }
    }
}

impl PaginationState {
    /// Create a new state, starting in [`Phase::Fetching`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next phase
    pub fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal pagination transition {:?} -> {:?}",
            self.phase,
            next
        );
        trace!(from = ?self.phase, to = ?next, page = self.pages, "pagination transition");
        self.phase = next;
    }

    /// Count one issued request
    pub fn add_page(&mut self) {
        self.pages += 1;
    }

    /// Count accumulated records
    pub fn add_records(&mut self, count: usize) {
        self.records += count;
    }
}
