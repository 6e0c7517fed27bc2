mod publication_filesystem;

pub use publication_filesystem::FilesystemPublicationStore;
