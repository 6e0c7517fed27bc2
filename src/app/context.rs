use crate::ports::PublicationStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: PublicationStore> {
    store: S,
}

impl<S: PublicationStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the publication store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
