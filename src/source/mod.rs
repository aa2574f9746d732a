//! Document sources: where form XML comes from

mod error;
mod file;
mod reference;
mod traits;

pub use error::SourceError;
pub use file::FileDocumentSource;
pub use reference::REFERENCE_FORM;
pub use traits::DocumentSource;

#[cfg(test)]
pub use traits::MockDocumentSource;
