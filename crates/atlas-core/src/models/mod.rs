pub mod entry;
pub mod retrieval_hit;

pub use entry::Entry;
pub use retrieval_hit::RetrievalHit;
