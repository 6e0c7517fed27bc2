pub mod error;
pub mod format;
pub mod layout;
pub mod publication;
pub mod title;

pub use error::AppError;
pub use format::OutputFormat;
pub use layout::PublicationLayout;
pub use publication::{Publication, PublicationOptions};
pub use title::PublicationTitle;
