mod publication_store;

pub use publication_store::PublicationStore;
