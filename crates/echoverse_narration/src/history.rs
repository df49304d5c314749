//! Session history of committed narrations.

use echoverse_core::Narration;
use tracing::debug;

/// Narrations of this session, most recent first.
///
/// Unbounded, memory only, no deduplication. The orchestrator is the only
/// writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<Narration>,
}

impl HistoryStore {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `narration` at the front.
    pub(crate) fn prepend(&mut self, narration: Narration) {
        debug!(id = %narration.id(), "Prepending narration to history");
        self.entries.insert(0, narration);
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[Narration] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&Narration> {
        self.entries.get(index)
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, Narration> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a Narration;
    type IntoIter = std::slice::Iter<'a, Narration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
