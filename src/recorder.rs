//! Append-only log of per-decision search costs.

use std::time::Duration;

/// Cost of a single AI decision.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionRecord {
    pub sequence_number: usize,
    pub nodes_evaluated: usize,
    pub depth_used: u8,
    pub elapsed: Duration,
    pub difficulty_label: &'static str,
}

/// Ordered log of decisions for the current session.
///
/// Entries are only ever appended by the difficulty modulator; the log can be
/// read by anyone and is emptied as a whole with `clear`.
#[derive(Clone, Debug, Default)]
pub struct DecisionRecorder {
    records: Vec<DecisionRecord>,
}

impl DecisionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&DecisionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub(crate) fn append(
        &mut self,
        nodes_evaluated: usize,
        depth_used: u8,
        elapsed: Duration,
        difficulty_label: &'static str,
    ) -> &DecisionRecord {
        let sequence_number = self.records.len() + 1;
        self.records.push(DecisionRecord {
            sequence_number,
            nodes_evaluated,
            depth_used,
            elapsed,
            difficulty_label,
        });
        &self.records[sequence_number - 1]
    }
}

/// Aggregate cost of a sequence of decisions.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSummary {
    pub decisions: usize,
    pub total_nodes: usize,
    pub average_nodes: f64,
    pub total_elapsed: Duration,
    pub average_elapsed: Duration,
    pub max_depth: u8,
}

/// Summarizes `records`, or returns `None` if there is nothing to summarize.
pub fn summarize(records: &[DecisionRecord]) -> Option<RecordSummary> {
    if records.is_empty() {
        return None;
    }

    let decisions = records.len();
    let total_nodes: usize = records.iter().map(|r| r.nodes_evaluated).sum();
    let total_elapsed: Duration = records.iter().map(|r| r.elapsed).sum();
    let max_depth = records.iter().map(|r| r.depth_used).max().unwrap_or(0);

    Some(RecordSummary {
        decisions,
        total_nodes,
        average_nodes: total_nodes as f64 / decisions as f64,
        total_elapsed,
        average_elapsed: total_elapsed / decisions as u32,
        max_depth,
    })
}
