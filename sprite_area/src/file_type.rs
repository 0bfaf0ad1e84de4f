//! File type tagging.
//!
//! Foreign filesystems have no file type attribute, so emulators and network filers keep the type
//! in a `,xxx` suffix on the file name. `Sprites,ff9` is a sprite file.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::constants::SPRITE_FILE_TYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileType(pub u16);

impl FileType {
    pub const SPRITE: FileType = FileType(SPRITE_FILE_TYPE);

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        if suffix.len() != 3 || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        u16::from_str_radix(suffix, 16).ok().map(FileType)
    }

    pub fn suffix(&self) -> String {
        format!("{:03x}", self.0)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03X}", self.0)
    }
}

/// Marks a written file with its type.
pub trait TypeTagger {
    /// Where a file asked to be written at `path` should go. Taggers that keep the type in the
    /// name decide it here, so the file is written under its final name straight away.
    fn destination(&self, path: &Path, _file_type: FileType) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }

    /// Tags the file written at `path`. Returns where the file is once tagged.
    fn tag(&self, path: &Path, file_type: FileType) -> io::Result<PathBuf>;
}

/// Names the file with a `,xxx` type suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaSuffix;

impl TypeTagger for CommaSuffix {
    fn destination(&self, path: &Path, file_type: FileType) -> io::Result<PathBuf> {
        tagged_path(path, file_type)
    }

    /// Renames `path` if it does not carry the suffix yet.
    fn tag(&self, path: &Path, file_type: FileType) -> io::Result<PathBuf> {
        let tagged = tagged_path(path, file_type)?;

        if tagged != path {
            fs::rename(path, &tagged)?;
        }

        Ok(tagged)
    }
}

/// Splits `name,xxx` into `name` and its type. Names without a type suffix have no type.
pub fn split_file_type(file_name: &str) -> (&str, Option<FileType>) {
    match file_name.rsplit_once(',') {
        Some((stem, suffix)) if !stem.is_empty() => match FileType::from_suffix(suffix) {
            Some(file_type) => (stem, Some(file_type)),
            None => (file_name, None),
        },
        _ => (file_name, None),
    }
}

pub fn file_type_of(path: &Path) -> Option<FileType> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| split_file_type(name).1)
}

/// Where `path` ends up once tagged with `file_type`. An existing type suffix is replaced.
pub fn tagged_path(path: &Path, file_type: FileType) -> io::Result<PathBuf> {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` has no usable file name", path.display()),
        ));
    };

    let (stem, _) = split_file_type(file_name);

    Ok(path.with_file_name(format!("{},{}", stem, file_type.suffix())))
}
