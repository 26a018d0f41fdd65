//! Workbench — reference slots, a query buffer and a memory, driven together.
//!
//! The workbench is the data half of a pattern-authoring tool. Whatever
//! draws the grids owns pixels; the workbench owns bit vectors. A small
//! fixed set of slots holds the patterns to learn, one buffer holds the
//! query, and one holds the pattern to display as the result.
//!
//! Every operation returns a structured report and leaves a [`Status`]
//! behind. Rendering of either is left to the caller.

use engram_core::error::{EngramError, Result};
use engram_core::grid::Grid;
use engram_core::matcher::{MatchPolicy, MatchResult, PatternMatcher};
use engram_core::memory::{AssociativeMemory, LearnOutcome, RecallConfig};
use engram_core::vector::BinaryVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Default grid side.
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Default number of reference slots.
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Configuration for a [`Workbench`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Side of the square pattern grid; vectors have `grid_size²` bits.
    pub grid_size: usize,
    /// Number of reference slots.
    pub slot_count: usize,
    pub match_policy: MatchPolicy,
    pub recall: RecallConfig,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            slot_count: DEFAULT_SLOT_COUNT,
            match_policy: MatchPolicy::default(),
            recall: RecallConfig::default(),
        }
    }
}

impl WorkbenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(EngramError::invalid_config(
                "grid_size",
                "0",
                "grid must have at least one cell",
            ));
        }
        if self.slot_count == 0 {
            return Err(EngramError::invalid_config(
                "slot_count",
                "0",
                "at least one slot is required",
            ));
        }
        self.match_policy.validate()
    }
}

/// The last thing the workbench did, for display.
///
/// Slots are zero-based in code and one-based when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ready,
    Learned { slot: usize },
    NothingToLearn { slot: usize },
    QueryDisplayed,
    NoMatch,
    LearnedPatternDisplayed { slot: usize },
    Cleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Learned { slot } => write!(f, "Pattern {} learned", slot + 1),
            Status::NothingToLearn { slot } => {
                write!(f, "Nothing to learn in Pattern {}", slot + 1)
            }
            Status::QueryDisplayed => write!(f, "Query result displayed"),
            Status::NoMatch => write!(f, "No matching learned pattern found"),
            Status::LearnedPatternDisplayed { slot } => {
                write!(f, "Learned pattern {} displayed", slot + 1)
            }
            Status::Cleared => write!(f, "Cleared"),
        }
    }
}

/// Events emitted by workbench operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkbenchEvent {
    /// A slot's pattern was replaced.
    SlotSet { slot: usize, active: usize },
    /// A slot was reset to blank.
    SlotCleared { slot: usize },
    /// The query buffer was replaced.
    QuerySet { active: usize },
    /// A slot's pattern was accumulated into the memory.
    Learned { slot: usize },
    /// A blank slot was skipped during learning.
    NothingToLearn { slot: usize },
    /// The query was pushed through the memory.
    Recalled { changed_bits: usize },
    /// The query matched a slot.
    Matched { slot: usize, distance: usize },
    /// The query matched no slot.
    NoMatch,
    /// Every slot and buffer was reset.
    Cleared,
}

/// Outcome of learning one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLearnReport {
    pub slot: usize,
    pub outcome: LearnOutcome,
}

impl SlotLearnReport {
    pub fn status(&self) -> Status {
        match self.outcome {
            LearnOutcome::Learned => Status::Learned { slot: self.slot },
            LearnOutcome::EmptyPattern => Status::NothingToLearn { slot: self.slot },
        }
    }
}

/// Outcome of a query: the memory's reconstruction and the slot it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    /// Single-pass recall of the query through the learned weights.
    pub recalled: BinaryVector,
    /// First slot within tolerance of the query, if any.
    pub matched: Option<MatchResult>,
}

impl QueryReport {
    pub fn status(&self) -> Status {
        if self.matched.is_some() {
            Status::QueryDisplayed
        } else {
            Status::NoMatch
        }
    }
}

/// Counters describing a workbench.
#[derive(Debug, Clone, Serialize)]
pub struct WorkbenchStats {
    pub grid_size: usize,
    pub vector_len: usize,
    pub slot_count: usize,
    pub slots_filled: usize,
    pub patterns_learned: usize,
    pub queries_run: usize,
    pub matches_found: usize,
    pub tolerance: usize,
}

/// Slots, query buffer, result buffer and the memory they feed.
#[derive(Debug)]
pub struct Workbench {
    config: WorkbenchConfig,
    grid: Grid,
    memory: AssociativeMemory,
    matcher: PatternMatcher,
    slots: Vec<BinaryVector>,
    query: BinaryVector,
    result: Option<BinaryVector>,
    status: Status,
    events: Vec<WorkbenchEvent>,
    queries_run: usize,
    matches_found: usize,
}

impl Workbench {
    /// Create a workbench with blank slots and an empty memory.
    pub fn new(config: WorkbenchConfig) -> Result<Self> {
        config.validate()?;
        info!(
            grid_size = config.grid_size,
            slots = config.slot_count,
            "Workbench created"
        );
        Ok(Self::build(config))
    }

    fn build(config: WorkbenchConfig) -> Self {
        let grid = Grid::new(config.grid_size);
        let len = grid.len();
        Self {
            grid,
            memory: AssociativeMemory::with_config(len, config.recall),
            matcher: PatternMatcher::from(config.match_policy),
            slots: vec![BinaryVector::zeros(len); config.slot_count],
            query: BinaryVector::zeros(len),
            result: None,
            status: Status::Ready,
            events: Vec::new(),
            queries_run: 0,
            matches_found: 0,
            config,
        }
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn memory(&self) -> &AssociativeMemory {
        &self.memory
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Absolute Hamming tolerance for this grid.
    pub fn tolerance(&self) -> usize {
        self.matcher.policy().tolerance_for(self.grid.len())
    }

    // ── Slots ────────────────────────────────────────────────

    pub fn slots(&self) -> &[BinaryVector] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&BinaryVector> {
        let count = self.slots.len();
        self.slots
            .get(index)
            .ok_or(EngramError::SlotOutOfRange { index, count })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut BinaryVector> {
        let count = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(EngramError::SlotOutOfRange { index, count })
    }

    /// Replace a slot's pattern.
    pub fn set_slot(&mut self, index: usize, pattern: BinaryVector) -> Result<()> {
        self.check_len(&pattern)?;
        let active = pattern.count_ones();
        *self.slot_mut(index)? = pattern;
        self.events.push(WorkbenchEvent::SlotSet { slot: index, active });
        Ok(())
    }

    /// Parse `text` with the workbench grid and store it in a slot.
    pub fn load_slot_text(&mut self, index: usize, text: &str) -> Result<()> {
        let pattern = self.grid.parse(text)?;
        self.set_slot(index, pattern)
    }

    /// Reset a slot to blank. A blank slot still takes part in matching.
    pub fn clear_slot(&mut self, index: usize) -> Result<()> {
        let len = self.grid.len();
        *self.slot_mut(index)? = BinaryVector::zeros(len);
        self.events.push(WorkbenchEvent::SlotCleared { slot: index });
        Ok(())
    }

    /// Flip one cell of a slot, as a click on the drawing surface would.
    pub fn toggle_slot_cell(&mut self, index: usize, row: usize, col: usize) -> Result<bool> {
        let cell = self.grid.index(row, col)?;
        self.slot_mut(index)?.toggle(cell)
    }

    // ── Query ────────────────────────────────────────────────

    pub fn query(&self) -> &BinaryVector {
        &self.query
    }

    pub fn set_query(&mut self, pattern: BinaryVector) -> Result<()> {
        self.check_len(&pattern)?;
        self.events.push(WorkbenchEvent::QuerySet {
            active: pattern.count_ones(),
        });
        self.query = pattern;
        Ok(())
    }

    pub fn load_query_text(&mut self, text: &str) -> Result<()> {
        let pattern = self.grid.parse(text)?;
        self.set_query(pattern)
    }

    pub fn toggle_query_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        let cell = self.grid.index(row, col)?;
        self.query.toggle(cell)
    }

    /// Pattern currently shown as the result, if any.
    pub fn result(&self) -> Option<&BinaryVector> {
        self.result.as_ref()
    }

    // ── Operations ───────────────────────────────────────────

    /// Learn every slot in order, skipping blank ones.
    ///
    /// Slots are re-learned on each call, so calling twice doubles their
    /// weight. The status reflects the last slot visited.
    pub fn learn_all(&mut self) -> Result<Vec<SlotLearnReport>> {
        let mut reports = Vec::with_capacity(self.slots.len());
        for (slot, pattern) in self.slots.iter().enumerate() {
            let outcome = self.memory.learn(pattern)?;
            let report = SlotLearnReport { slot, outcome };
            self.events.push(match outcome {
                LearnOutcome::Learned => WorkbenchEvent::Learned { slot },
                LearnOutcome::EmptyPattern => WorkbenchEvent::NothingToLearn { slot },
            });
            self.status = report.status();
            reports.push(report);
        }
        debug!(
            learned = reports.iter().filter(|r| r.outcome.is_learned()).count(),
            total = self.memory.patterns_learned(),
            "Learned slots"
        );
        Ok(reports)
    }

    /// Recall the query through the memory and match it against the slots.
    ///
    /// The result buffer shows the matched slot, or is emptied when no slot
    /// is within tolerance.
    pub fn query_and_match(&mut self) -> Result<QueryReport> {
        let recalled = self.memory.recall(&self.query)?;
        let changed_bits = self.query.hamming_distance(&recalled)?;
        self.events.push(WorkbenchEvent::Recalled { changed_bits });
        self.queries_run += 1;

        let matched = self.match_query()?;
        let report = QueryReport { recalled, matched };
        self.status = report.status();
        Ok(report)
    }

    /// Match the query against the slots without consulting the memory.
    pub fn show_learned_pattern(&mut self) -> Result<Option<MatchResult>> {
        let matched = self.match_query()?;
        self.status = match &matched {
            Some(m) => Status::LearnedPatternDisplayed { slot: m.index },
            None => Status::NoMatch,
        };
        Ok(matched)
    }

    fn match_query(&mut self) -> Result<Option<MatchResult>> {
        let matched = self.matcher.find(&self.query, &self.slots)?;
        match &matched {
            Some(m) => {
                self.matches_found += 1;
                self.events.push(WorkbenchEvent::Matched {
                    slot: m.index,
                    distance: m.distance,
                });
                self.result = Some(m.pattern.clone());
            }
            None => {
                self.events.push(WorkbenchEvent::NoMatch);
                self.result = None;
            }
        }
        Ok(matched)
    }

    /// Blank every slot, the query and the result. Learned weights are kept.
    pub fn clear(&mut self) {
        let len = self.grid.len();
        for slot in &mut self.slots {
            *slot = BinaryVector::zeros(len);
        }
        self.query = BinaryVector::zeros(len);
        self.result = None;
        self.status = Status::Cleared;
        self.events.push(WorkbenchEvent::Cleared);
    }

    // ── Introspection ────────────────────────────────────────

    pub fn events(&self) -> &[WorkbenchEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<WorkbenchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> WorkbenchStats {
        WorkbenchStats {
            grid_size: self.grid.size(),
            vector_len: self.grid.len(),
            slot_count: self.slots.len(),
            slots_filled: self.slots.iter().filter(|s| !s.is_blank()).count(),
            patterns_learned: self.memory.patterns_learned(),
            queries_run: self.queries_run,
            matches_found: self.matches_found,
            tolerance: self.tolerance(),
        }
    }

    fn check_len(&self, pattern: &BinaryVector) -> Result<()> {
        if pattern.len() == self.grid.len() {
            Ok(())
        } else {
            Err(EngramError::shape_mismatch(self.grid.len(), pattern.len()))
        }
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::build(WorkbenchConfig::default())
    }
}
