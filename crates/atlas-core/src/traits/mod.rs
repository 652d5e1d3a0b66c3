pub mod corpus;
pub mod retriever;

pub use corpus::ICorpusStore;
pub use retriever::IRetriever;
