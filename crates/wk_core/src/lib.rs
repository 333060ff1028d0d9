pub mod documents;
pub mod error;
pub mod record;
pub mod source;
pub mod types;

pub use error::Error;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::documents::{DocumentHandle, DocumentIndex, DocumentOpener, PdfDownloader};
    pub use crate::source::ArticleSource;
    pub use crate::{Article, Error, Result};
}
