use crate::SegmentTitle;

/// A SimCity 2000 save error
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Sc2kError(#[from] Box<Sc2kErrorKind>);

impl Sc2kError {
    pub(crate) fn new(kind: Sc2kErrorKind) -> Sc2kError {
        Sc2kError(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &Sc2kErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> Sc2kErrorKind {
        *self.0
    }
}

impl From<Sc2kErrorKind> for Sc2kError {
    fn from(err: Sc2kErrorKind) -> Self {
        Sc2kError::new(err)
    }
}

/// Specific type of error
#[derive(thiserror::Error, Debug)]
pub enum Sc2kErrorKind {
    #[error("not a sc2k save file: expected FORM and SCDH signatures")]
    NotASaveFile,

    #[error("segment at offset {offset} needs {needed} bytes but only {remaining} remain")]
    MalformedFile {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("unable to decompress segment {title}: {source}")]
    MalformedSegment {
        title: SegmentTitle,
        #[source]
        source: RleError,
    },

    #[error("no interpreter for segment {title}")]
    UnknownSegment { title: SegmentTitle },
}

/// A run-length chunk that reaches past the end of its input
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chunk at offset {offset} needs {needed} data bytes but only {available} are left")]
pub struct RleError {
    /// Position of the control byte within the compressed input
    pub offset: usize,
    pub needed: usize,
    pub available: usize,
}
