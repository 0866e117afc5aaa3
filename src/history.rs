use std::collections::BTreeMap;

/// Record of executed token sequences keyed by sequence number.
///
/// Numbers come from a single counter starting at 0. Entries can only be
/// removed all at once with [`HistoryLedger::clear`], which also resets the
/// counter, so the keys are always `0..next`.
#[derive(Debug, Default, Clone)]
pub struct HistoryLedger {
    entries: BTreeMap<u64, Vec<String>>,
    next: u64,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `tokens` and returns the number assigned to them.
    pub fn append(&mut self, tokens: Vec<String>) -> u64 {
        let seq = self.next;
        self.entries.insert(seq, tokens);
        self.next += 1;
        seq
    }

    /// Entries from the most recent back to number 0.
    pub fn list_descending(&self) -> impl Iterator<Item = (u64, &[String])> + '_ {
        self.entries
            .iter()
            .rev()
            .map(|(seq, tokens)| (*seq, tokens.as_slice()))
    }

    pub fn get(&self, seq: u64) -> Option<&[String]> {
        self.entries.get(&seq).map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number the next [`HistoryLedger::append`] will assign.
    pub fn next_seq(&self) -> u64 {
        self.next
    }
}
