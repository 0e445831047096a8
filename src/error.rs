//! Errors raised while building or writing a document.

/// Failures detected by the tree builder while it consumes parse events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The closing tag does not match the element that is currently open.
    #[error("Tag mismatch...Start:{start}, End:{end}")]
    TagMismatch { start: String, end: String },
    /// A second element was opened at document level.
    #[error("Extra content at the end of the document: {name}")]
    ExtraRootElement { name: String },
    /// The document ended while elements were still open.
    #[error("Unexpected end of file: {open} is not closed")]
    UnterminatedDocument { open: String },
    /// An end tag arrived while no element is open.
    #[error("Unexpected end tag: {name}")]
    UnbalancedEndElement { name: String },
    /// The reader asked for a mode the builder cannot honor.
    #[error("Not supported: {feature}")]
    UnsupportedFeature { feature: String },
}

impl BuildError {
    /// Check if this error is a failure of the document structure, as opposed
    /// to a request for an unsupported parsing mode.
    pub fn is_structure_error(&self) -> bool {
        !matches!(self, Self::UnsupportedFeature { .. })
    }
}

/// The error record of a failed parse.
///
/// `line` and `column` are 1-based positions reported by the reader.
/// Errors detected before the reader started have position `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{message}, Line={line}, Column={column}")]
pub struct ParseException {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseException {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl From<BuildError> for ParseException {
    fn from(value: BuildError) -> Self {
        Self::new(value.to_string(), 0, 0)
    }
}

/// Failures of the byte output path.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
