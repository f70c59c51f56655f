//! Dataset ingestion from a directory tree.
//!
//! A dataset is laid out as `<root>/.../<type>s/<filename>`: the parent
//! directory of each file names the sign type, with a trailing character
//! (the plural `s`) stripped. The same filename appearing under several
//! type directories yields one record with several types.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sign_eval::dataset::{self, FsListing};
//!
//! let collection = dataset::build_collection(&FsListing, "./Dataset")?;
//! println!("{} images", collection.len());
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::collection::RecordCollection;
use crate::error::{Error, Result};
use crate::record::ImageRecord;

/// Source of file paths under a dataset root.
///
/// Implementations return paths relative to `root`. Tests substitute an
/// in-memory listing for [`FsListing`].
pub trait DirectoryListing {
    /// List every file below `root`, relative to it.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists files by walking the filesystem recursively.
///
/// Hidden files and directories (leading `.`) are skipped. Entries are
/// sorted per directory so ingestion order is stable across platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsListing;

impl DirectoryListing for FsListing {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(Error::Dataset(format!("Path does not exist: {}", root.display())));
        }

        if !root.is_dir() {
            return Err(Error::Dataset(format!("Path is not a directory: {}", root.display())));
        }

        let mut files = Vec::new();
        list_recursive(root, root, &mut files)?;
        Ok(files)
    }
}

impl<F> DirectoryListing for F
where
    F: Fn(&Path) -> Result<Vec<PathBuf>>,
{
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self(root)
    }
}

fn list_recursive(root: &Path, current: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(current).map_err(|e| {
        Error::Dataset(format!("Failed to read directory {}: {}", current.display(), e))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::Dataset(format!("Failed to read entry in {}: {}", current.display(), e))
        })?;
        paths.push(entry.path());
    }
    paths.sort();

    for path in paths {
        if is_hidden(&path) {
            continue;
        }

        if path.is_dir() {
            list_recursive(root, &path, files)?;
        } else if path.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.starts_with('.'))
}

/// Derive a sign type label from its directory name by dropping the last
/// character (`stop_signs` -> `stop_sign`).
#[must_use]
pub fn type_from_dir_name(dir_name: &str) -> &str {
    match dir_name.char_indices().next_back() {
        Some((idx, _)) => &dir_name[..idx],
        None => dir_name,
    }
}

/// A `(filename, type)` pair extracted from a dataset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    /// File name (last path segment).
    pub filename: String,
    /// Sign type label derived from the parent directory.
    pub type_name: String,
}

impl DatasetEntry {
    /// Parse a relative path. Returns `None` when the path has no parent
    /// directory segment.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let mut segments = path.components().rev().filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        });

        let filename = segments.next()?.into_owned();
        let dir_name = segments.next()?;

        Some(Self {
            filename,
            type_name: type_from_dir_name(&dir_name).to_string(),
        })
    }
}

/// Build a collection from `(filename, type)` entries.
///
/// The first occurrence of a filename creates a record; later occurrences
/// append their type to it.
pub fn ingest<I>(entries: I) -> RecordCollection
where
    I: IntoIterator<Item = DatasetEntry>,
{
    let mut collection = RecordCollection::new();

    for entry in entries {
        if let Some(record) = collection.find_by_filename_mut(&entry.filename) {
            debug!("Adding type {} to {}", entry.type_name, entry.filename);
            record.add_type(entry.type_name);
        } else {
            collection.add(ImageRecord::new(entry.filename, entry.type_name));
        }
    }

    collection
}

/// List the dataset under `root` and ingest every file into a collection.
pub fn build_collection(
    listing: &impl DirectoryListing,
    root: impl AsRef<Path>,
) -> Result<RecordCollection> {
    let root = root.as_ref();
    let files = listing.list_files(root)?;
    debug!("Found {} files under {}", files.len(), root.display());

    let entries = files.iter().filter_map(|path| {
        let entry = DatasetEntry::from_path(path);
        if entry.is_none() {
            debug!("Skipping {}: no type directory", path.display());
        }
        entry
    });

    Ok(ingest(entries))
}
