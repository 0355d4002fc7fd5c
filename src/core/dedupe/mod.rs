//! Deduplication by place id
//!
//! Rows sharing an `id` collapse into one: the row with the highest
//! confidence is kept, and on a tie the earliest row wins. Unique rows keep
//! the order in which their id first appeared.

use crate::domain::ValidatedRow;
use std::collections::HashMap;

/// All rows that shared one id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub id: String,

    /// Members in input order
    pub members: Vec<ValidatedRow>,

    /// Index into `members` of the kept row
    pub kept: usize,
}

impl DuplicateGroup {
    /// The row that survived deduplication
    pub fn kept_row(&self) -> &ValidatedRow {
        &self.members[self.kept]
    }

    /// Number of rows dropped from this group
    pub fn dropped_count(&self) -> usize {
        self.members.len() - 1
    }
}

/// Result of deduplication
#[derive(Debug, Clone, Default)]
pub struct DedupeOutcome {
    /// One row per distinct id, in first-occurrence order
    pub unique: Vec<ValidatedRow>,

    /// Groups for ids seen more than once, in first-occurrence order
    pub duplicates: Vec<DuplicateGroup>,
}

impl DedupeOutcome {
    /// Look up the duplicate group for an id
    pub fn group(&self, id: &str) -> Option<&DuplicateGroup> {
        self.duplicates.iter().find(|group| group.id == id)
    }

    /// Total rows dropped across all groups
    pub fn dropped_count(&self) -> usize {
        self.duplicates.iter().map(DuplicateGroup::dropped_count).sum()
    }
}

/// Collapse rows sharing an id
pub fn dedupe_rows(rows: Vec<ValidatedRow>) -> DedupeOutcome {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ValidatedRow>> = HashMap::new();

    for row in rows {
        let members = groups.entry(row.id.clone()).or_insert_with(|| {
            order.push(row.id.clone());
            Vec::new()
        });
        members.push(row);
    }

    let mut outcome = DedupeOutcome::default();
    for id in order {
        let Some(members) = groups.remove(&id) else {
            continue;
        };

        let kept = stable_max_index(&members);
        outcome.unique.push(members[kept].clone());

        if members.len() > 1 {
            tracing::debug!(
                id = %id,
                occurrences = members.len(),
                kept_line = members[kept].source_line,
                "Duplicate id collapsed"
            );
            outcome.duplicates.push(DuplicateGroup { id, members, kept });
        }
    }

    outcome
}

/// Index of the highest confidence, first one on ties
fn stable_max_index(members: &[ValidatedRow]) -> usize {
    let mut best = 0;
    for (idx, member) in members.iter().enumerate().skip(1) {
        if member.confidence > members[best].confidence {
            best = idx;
        }
    }
    best
}
