//! In-memory, append-only operation log.
//!
//! Insertion order is chronological order is replay order. Entries are never
//! mutated or removed individually: the log only grows through [`OpLog::append`]
//! or drops back to empty through [`OpLog::clear`].

use std::fmt;

use super::types::Operation;

/// Ordered record of every applied [`Operation`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpLog {
    entries: Vec<Operation>,
}

impl OpLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an operation at the end. Never fails.
    pub fn append(&mut self, op: Operation) {
        self.entries.push(op);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Operations in `[from, to)`, clipped to the log's bounds.
    ///
    /// Returns an empty slice when `from >= to` after clipping.
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> &[Operation] {
        let to = to.min(self.entries.len());
        if from >= to {
            return &[];
        }
        &self.entries[from..to]
    }

    /// Number of recorded operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The operation at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.entries.get(index)
    }

    /// Iterate over operations oldest-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.entries.iter()
    }

    /// Human-readable `"operator - operands"` lines, oldest-first.
    ///
    /// The iterator is lazy and borrows the log; call again to restart.
    pub fn history(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

impl<'a> IntoIterator for &'a OpLog {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for OpLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oplog({} ops)", self.entries.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OpLog {
        let mut log = OpLog::new();
        log.append(Operation::Add(5.0));
        log.append(Operation::Multiply(2.0));
        log.append(Operation::Negate);
        log
    }

    #[test]
    fn append_preserves_order() {
        let log = sample();
        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0), Some(&Operation::Add(5.0)));
        assert_eq!(log.get(2), Some(&Operation::Negate));
        assert_eq!(log.get(3), None);
    }

    #[test]
    fn clear_empties() {
        let mut log = sample();
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.history().count(), 0);
    }

    #[test]
    fn slice_in_bounds() {
        let log = sample();
        assert_eq!(
            log.slice(1, 3),
            &[Operation::Multiply(2.0), Operation::Negate]
        );
    }

    #[test]
    fn slice_clips_upper_bound() {
        let log = sample();
        assert_eq!(log.slice(2, 100), &[Operation::Negate]);
    }

    #[test]
    fn slice_empty_when_reversed_or_out_of_range() {
        let log = sample();
        assert!(log.slice(2, 2).is_empty());
        assert!(log.slice(3, 1).is_empty());
        assert!(log.slice(10, 20).is_empty());
        assert!(OpLog::new().slice(0, 5).is_empty());
    }

    #[test]
    fn history_lines() {
        let log = sample();
        let lines: Vec<_> = log.history().collect();
        assert_eq!(lines, ["add - [5]", "multiply - [2]", "negate - []"]);
    }

    #[test]
    fn history_is_restartable() {
        let log = sample();
        let first: Vec<_> = log.history().take(1).collect();
        let again: Vec<_> = log.history().collect();
        assert_eq!(first, ["add - [5]"]);
        assert_eq!(again.len(), 3);
    }

    #[test]
    fn display_counts_entries() {
        assert_eq!(sample().to_string(), "oplog(3 ops)");
    }
}
