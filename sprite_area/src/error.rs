use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CorruptRecord {
    #[error("starts inside the area header")]
    InsideHeader,
    #[error("starts past the end of the area")]
    OutOfBounds,
    #[error("header is cut off by the end of the area")]
    TruncatedHeader,
    #[error("declared size {size} is smaller than a sprite header")]
    Undersized { size: u32 },
    #[error("declared size {size} runs past the end of the area")]
    Overrun { size: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum SpriteAreaError {
    #[error("Cannot parse sprite area header")]
    ParseHeader,
    #[error("Sprite area of {length} bytes is too large")]
    TooLarge { length: usize },
    #[error("Used offset {used} lies outside the area ({length} bytes)")]
    UsedOutOfBounds { used: u32, length: usize },
    #[error("Sprite {index} at offset {offset:#x} is corrupt: {source}")]
    CorruptRecord {
        index: u32,
        offset: usize,
        #[source]
        source: CorruptRecord,
    },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}

impl SpriteAreaError {
    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

/// Why a save did not happen. Messages are meant to be shown to the user as they are.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Cannot open `{path}` for output: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write `{path}`: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot save `{path}`: {source}")]
    CorruptArea {
        path: PathBuf,
        #[source]
        source: SpriteAreaError,
    },
    #[error("Saved `{path}` but cannot set its file type: {source}")]
    TypeTagFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// Sorts a failure from the writing stage into the save taxonomy.
    pub(crate) fn from_write_stage(path: impl Into<PathBuf>, err: SpriteAreaError) -> Self {
        let path = path.into();

        match err {
            SpriteAreaError::IOError { source } => Self::WriteFailed { path, source },
            source => Self::CorruptArea { path, source },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::OpenFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::CorruptArea { path, .. }
            | Self::TypeTagFailed { path, .. } => path,
        }
    }
}
