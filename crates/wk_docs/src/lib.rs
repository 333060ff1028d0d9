pub mod download;
pub mod index;
pub mod resolver;

pub use download::RestPdfDownloader;
pub use index::{MemoryDocumentIndex, UnlinkedDocumentOpener};
pub use resolver::LinkResolver;

pub mod prelude {
    pub use crate::{LinkResolver, MemoryDocumentIndex, RestPdfDownloader};
    pub use wk_core::documents::{DocumentHandle, DocumentIndex, DocumentOpener, PdfDownloader};
    pub use wk_core::{Error, Result};
}
