mod mock_publication_store;

pub use mock_publication_store::MockPublicationStore;
