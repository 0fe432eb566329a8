//! Project location and spec file access.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::config::BookConfig;
use crate::entity::EntityKind;
use crate::error::{BookError, BookResult};
use crate::layout::Layout;
use crate::record::Record;

/// An existing book project on disk.
///
/// Holds no spec data: every operation re-reads from the filesystem.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: BookConfig,
}

impl Project {
    /// Locate an existing project. Does not create anything.
    pub fn open(path: impl AsRef<Path>, config: BookConfig) -> BookResult<Self> {
        let root = path.as_ref();
        if !root.exists() {
            return Err(BookError::ProjectNotFound(root.to_path_buf()));
        }
        tracing::debug!(root = %root.display(), format = %config.format, "opened project");
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Create the project tree and seed spec. Existing files are kept.
    pub fn init(path: impl AsRef<Path>, config: BookConfig) -> BookResult<Self> {
        let root = path.as_ref();
        for dir in Layout::ALL {
            let full = root.join(dir.relative());
            fs::create_dir_all(&full).map_err(|e| BookError::io(&full, e))?;
        }

        let project = Self {
            root: root.to_path_buf(),
            config,
        };
        let seed_path = project.spec_path("seed");
        if project.save_new(&seed_path, &seed_record())? {
            tracing::info!(path = %seed_path.display(), "wrote seed spec");
        }
        Ok(project)
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration this project was opened with.
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Absolute path of a layout directory.
    pub fn dir(&self, dir: Layout) -> PathBuf {
        self.root.join(dir.relative())
    }

    /// Path of a top-level spec file such as `specs/seed.yaml`.
    pub fn spec_path(&self, stem: &str) -> PathBuf {
        self.dir(Layout::Specs)
            .join(format!("{stem}.{}", self.config.format.extension()))
    }

    /// Path of the spec file for an entity identity.
    pub fn record_path(&self, kind: EntityKind, identity: &str) -> PathBuf {
        self.dir(kind.dir())
            .join(format!("{identity}.{}", self.config.format.extension()))
    }

    /// Identities of every spec of `kind`, ordered by file name.
    ///
    /// Only direct children with the configured extension count. A missing
    /// directory yields no candidates.
    pub fn candidates(&self, kind: EntityKind) -> BookResult<Vec<String>> {
        let dir = self.dir(kind.dir());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BookError::io(&dir, e)),
        };

        let ext = self.config.format.extension();
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|x| x == ext))
            .collect();
        paths.sort();

        let identities: Vec<String> = paths
            .iter()
            .filter_map(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        tracing::debug!(%kind, count = identities.len(), "listed candidates");
        Ok(identities)
    }

    /// Read and parse a spec file strictly.
    ///
    /// A missing file is an empty record; unparsable content is
    /// [`BookError::MalformedRecord`].
    pub fn parse(&self, path: &Path) -> BookResult<Record> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Record::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(BookError::MalformedRecord {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(BookError::io(path, e)),
        };
        self.config
            .format
            .decode(&source)
            .map_err(|reason| BookError::MalformedRecord {
                path: path.to_path_buf(),
                reason,
            })
    }

    /// Read a spec file, substituting an empty record (with a warning) when
    /// its content cannot be parsed.
    pub fn load(&self, path: &Path) -> BookResult<Record> {
        match self.parse(path) {
            Err(err @ BookError::MalformedRecord { .. }) => {
                tracing::warn!("{err}");
                Ok(Record::new())
            }
            other => other,
        }
    }

    /// Serialize a record to `path`, replacing any existing file.
    pub fn save(&self, path: &Path, record: &Record) -> BookResult<()> {
        let text = self.config.format.encode(record).map_err(BookError::Encode)?;
        ensure_parent(path)?;
        fs::write(path, text).map_err(|e| BookError::io(path, e))
    }

    /// Serialize a record to `path` unless the file already exists.
    /// Returns whether the file was written.
    pub fn save_new(&self, path: &Path, record: &Record) -> BookResult<bool> {
        let text = self.config.format.encode(record).map_err(BookError::Encode)?;
        write_new(path, &text)
    }
}

/// Write `contents` to a new file. An existing file is left untouched and
/// `Ok(false)` is returned. Parent directories are created as needed.
///
/// Uses exclusive creation, so concurrent writers never interleave content.
pub fn write_new(path: &Path, contents: &str) -> BookResult<bool> {
    ensure_parent(path)?;
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "file exists, keeping it");
            return Ok(false);
        }
        Err(e) => return Err(BookError::io(path, e)),
    };
    fill_new(path, file, contents)?;
    Ok(true)
}

/// Write `contents` into the freshly created file at `path`. On failure the
/// file is removed so a partial fragment never blocks a later write.
fn fill_new(path: &Path, mut out: impl Write, contents: &str) -> BookResult<()> {
    let result = out.write_all(contents.as_bytes()).and_then(|()| out.flush());
    drop(out);
    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %cleanup, "cannot remove partial file");
        }
        return Err(BookError::io(path, e));
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> BookResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| BookError::io(parent, e))
        }
        _ => Ok(()),
    }
}

pub(crate) fn seed_record() -> Record {
    Record::new()
        .with("idea", "")
        .with("genre", Value::Null)
        .with("themes", json!([]))
        .with("status", "seeded")
}
