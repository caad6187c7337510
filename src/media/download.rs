// SPDX-License-Identifier: MPL-2.0
//! Saving the current slide to disk.
//!
//! The bytes are streamed into a `.part` file next to the final target and
//! moved into place once complete. The partial file is owned by a
//! [`PartialFile`] guard which deletes it when dropped uncommitted, so every
//! failure path (network error mid-stream, write error, cancelled task)
//! releases it.
//!
//! Several downloads of the same slide may run at once. Each one reserves
//! its own `.part` name with an exclusive create, and the commit never
//! replaces an existing file: a taken name moves on to the next ` (n)`
//! suffix.

use super::fetch;
use crate::error::{Error, Result};
use crate::gallery::GalleryImage;
use futures_util::StreamExt;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PART_SUFFIX: &str = ".part";
const FALLBACK_STEM: &str = "image";
const DEFAULT_EXTENSION: &str = "jpg";
const KNOWN_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Upper bound on ` (n)` suffixes tried before giving up.
const MAX_SUFFIX: usize = 10_000;

/// The family of names a download may be saved under:
/// `stem.ext`, `stem (1).ext`, `stem (2).ext`...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    dir: PathBuf,
    stem: String,
    extension: &'static str,
}

impl TargetName {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>, extension: &'static str) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            extension,
        }
    }

    /// Name number `n`; `0` is the bare stem.
    #[must_use]
    pub fn candidate(&self, n: usize) -> PathBuf {
        let Self {
            dir,
            stem,
            extension,
        } = self;
        if n == 0 {
            dir.join(format!("{stem}.{extension}"))
        } else {
            dir.join(format!("{stem} ({n}).{extension}"))
        }
    }
}

fn part_path(target: &Path) -> PathBuf {
    let mut name: OsString = target.as_os_str().to_owned();
    name.push(PART_SUFFIX);
    PathBuf::from(name)
}

fn suffixes_exhausted(name: &TargetName) -> Error {
    Error::Io(format!(
        "no free file name for {}",
        name.candidate(0).display()
    ))
}

/// Temporary file that only survives if [`commit`](Self::commit)ted.
#[derive(Debug)]
pub struct PartialFile {
    path: PathBuf,
    file: Option<File>,
    name: TargetName,
    /// Suffix number the `.part` file was reserved under.
    slot: usize,
}

impl PartialFile {
    /// Reserves the first name whose final file does not exist and whose
    /// `.part` file can be created exclusively.
    ///
    /// # Errors
    ///
    /// Any I/O error other than the name being taken, or running out of
    /// suffixes.
    pub fn reserve(name: TargetName) -> Result<Self> {
        for slot in 0..=MAX_SUFFIX {
            let target = name.candidate(slot);
            if target.exists() {
                continue;
            }
            let path = part_path(&target);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    return Ok(Self {
                        path,
                        file: Some(file),
                        name,
                        slot,
                    });
                }
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Err(suffixes_exhausted(&name))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name the file is expected to be saved under if nothing else claims it
    /// first.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.name.candidate(self.slot)
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.write_all(bytes)?;
        }
        Ok(())
    }

    /// Flushes and closes the file, then moves it to the first free name
    /// starting at its reserved one. Returns the final path.
    ///
    /// An existing file is never replaced.
    pub fn commit(mut self) -> Result<PathBuf> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }

        for slot in self.slot..=MAX_SUFFIX {
            let target = self.name.candidate(slot);
            if publish(&self.path, &target)? {
                // Moved away; nothing left for Drop to clean up.
                self.path = PathBuf::new();
                return Ok(target);
            }
        }
        Err(suffixes_exhausted(&self.name))
    }
}

/// Moves `part` to `target` unless `target` exists. Returns `false` when
/// the name is taken.
///
/// A hard link fails atomically on an existing target; filesystems without
/// hard links fall back to a checked rename.
fn publish(part: &Path, target: &Path) -> Result<bool> {
    match fs::hard_link(part, target) {
        Ok(()) => {
            fs::remove_file(part)?;
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => {
            tracing::debug!(target = %target.display(), "hard link unavailable, renaming: {err}");
            if target.exists() {
                return Ok(false);
            }
            fs::rename(part, target)?;
            Ok(true)
        }
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        self.file.take();
        if self.path.as_os_str().is_empty() {
            return;
        }
        if let Err(err) = fs::remove_file(&self.path) {
            tracing::debug!(path = %self.path.display(), "could not remove partial download: {err}");
        }
    }
}

/// Turns a slide title into a safe file stem.
///
/// Path separators, characters reserved on Windows and control characters
/// become `_`; leading/trailing dots and spaces are trimmed.
#[must_use]
pub fn sanitize_file_stem(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extension to save `url` with, taken from its path when recognised.
#[must_use]
pub fn extension_for_url(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let candidate = path
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    candidate
        .and_then(|ext| KNOWN_EXTENSIONS.iter().find(|known| **known == ext).copied())
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Downloads `image` into `dir` and returns the saved path.
///
/// # Errors
///
/// Network and HTTP status failures, or any I/O error while writing. The
/// partial file never outlives a failed call.
pub async fn download_image(
    client: reqwest::Client,
    image: GalleryImage,
    dir: PathBuf,
) -> Result<PathBuf> {
    let response = fetch::get(&client, &image.url).await?;

    tokio::fs::create_dir_all(&dir).await?;
    let name = TargetName::new(
        dir,
        sanitize_file_stem(&image.title),
        extension_for_url(&image.url),
    );
    let mut partial = PartialFile::reserve(name)?;

    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        partial.write_all(&chunk)?;
        written += chunk.len() as u64;
    }

    let target = partial.commit()?;
    tracing::info!(id = image.id, path = %target.display(), bytes = written, "slide downloaded");
    Ok(target)
}
