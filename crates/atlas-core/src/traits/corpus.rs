use crate::models::Entry;

/// Read-only indexed access to the knowledge base.
pub trait ICorpusStore: Send + Sync {
    /// Entry at position `index`, in load order.
    fn entry(&self, index: usize) -> Option<&Entry>;

    /// Number of entries.
    fn size(&self) -> usize;

    /// Whether the corpus holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
