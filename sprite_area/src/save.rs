use std::{
    fs::File,
    io::{Seek, Write},
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::{
    error::SaveError,
    file_type::{CommaSuffix, FileType, TypeTagger},
    SaveMode, SpriteArea,
};

/// Saves `area` to `path` without its deleted sprites and tags it as a sprite file.
///
/// Returns the path of the tagged file.
pub fn save_sprite_area(area: &SpriteArea, path: impl AsRef<Path>) -> Result<PathBuf, SaveError> {
    save_sprite_area_with(area, path, SaveMode::Squash, &CommaSuffix)
}

/// The output is written to a temporary file and only moved into place once it is complete. If
/// anything fails before that, the temporary file is removed and whatever was there is left alone.
///
/// Taggers that name files by type pick the final name before the move, so the file lands under
/// it directly and nothing else is touched. A tagging failure leaves the saved file where it is.
pub fn save_sprite_area_with(
    area: &SpriteArea,
    path: impl AsRef<Path>,
    mode: SaveMode,
    tagger: &impl TypeTagger,
) -> Result<PathBuf, SaveError> {
    save_through(area, path.as_ref(), mode, tagger, |file| file)
}

fn save_through<W, F>(
    area: &SpriteArea,
    path: &Path,
    mode: SaveMode,
    tagger: &impl TypeTagger,
    sink: F,
) -> Result<PathBuf, SaveError>
where
    W: Write + Seek,
    F: FnOnce(File) -> W,
{
    let destination = tagger
        .destination(path, FileType::SPRITE)
        .map_err(|source| SaveError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
    let path = destination.as_path();

    let open_failed = |source: std::io::Error| SaveError::OpenFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".grab");

    // temporary files are private, saved sprites get the usual umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let (file, temp_path) = builder
        .tempfile_in(dir)
        .map_err(open_failed)?
        .into_parts();

    let mut writer = ByteWriter::new(sink(file));

    let written = area
        .write_to_writer(&mut writer, mode)
        .and_then(|_| writer.flush().map_err(Into::into));

    // closes the file before it is moved
    drop(writer);

    // `temp_path` removes the file when dropped on any of these returns
    written.map_err(|err| SaveError::from_write_stage(path, err))?;

    temp_path
        .persist(path)
        .map_err(|err| open_failed(err.error))?;

    log::debug!("saved sprite area to {}", path.display());

    tagger
        .tag(path, FileType::SPRITE)
        .map_err(|source| SaveError::TypeTagFailed {
            path: path.to_path_buf(),
            source,
        })
}
