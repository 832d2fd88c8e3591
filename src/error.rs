use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Sitemap generation error
#[derive(Error, Debug)]
pub enum SitemapError {
    /// The parent directory of the destination file does not exist.
    #[error("please specify a valid file path, directory does not exist: {0:?}")]
    DirectoryNotFound(PathBuf),

    /// A file already exists at the destination and could not be removed.
    #[error("existing file {path:?} is not writable: {source}")]
    FileNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The item location is not a syntactically valid absolute URL.
    #[error("the location must be a valid URL, you have specified: {0}")]
    InvalidLocation(String),

    /// A required item field was never set on the builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The publication timestamp is outside the representable date range.
    #[error("publication timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// The publication date could not be rendered as RFC 3339.
    #[error("failed to format publication date: {0}")]
    DateFormat(#[from] time::error::Format),

    /// An I/O failure while writing or flushing the sitemap.
    #[error("failed to write sitemap: {0}")]
    Io(#[from] io::Error),
}
