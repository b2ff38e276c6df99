// Rust guideline compliant 2026-10-13

//! File-backed document storage.
//!
//! Projects live in a JSONL file, one record per line. The category lists
//! live in a single JSON document. Both are rewritten atomically (temp file
//! plus rename) and writers serialize through an exclusive lock file.

use crate::{CategorySet, Error, Project, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path cannot be empty",
        )));
    }
    Ok(())
}

fn write_atomically(path: &Path, tmp_extension: &str, body: &[u8]) -> Result<()> {
    let temp_path = path.with_extension(tmp_extension);
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(body)?;
        file.sync_all()?;
    }
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Runs `f` while holding an exclusive lock on `<path>.lock`.
fn with_lock_file<F, T>(path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    use fs2::FileExt;

    let lock_path = path.with_extension("lock");
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)?;

    lock_file
        .try_lock_exclusive()
        .map_err(|e| Error::Locked(format!("{}: {}", lock_path.display(), e)))?;

    let result = f();

    // Released on drop as well; an unlock failure must not mask the result.
    let _ = lock_file.unlock();

    result
}

/// Storage engine for project records.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_path(&path)?;
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every parseable record without validating it.
    fn read_records(&self) -> Result<Vec<Project>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut projects = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Project>(&line) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        error = %e,
                        "skipping malformed project record"
                    );
                }
            }
        }

        Ok(projects)
    }

    fn write_records(&self, projects: &[Project]) -> Result<()> {
        let mut body = Vec::new();
        for project in projects {
            serde_json::to_writer(&mut body, project)?;
            body.push(b'\n');
        }
        write_atomically(&self.path, "jsonl.tmp", &body)
    }

    /// Loads all projects, one record per line.
    ///
    /// A missing file reads as empty. Malformed records and records that
    /// fail validation are skipped with a warning so one bad line cannot
    /// hide the rest of the gallery. Skipped records stay in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<Project>> {
        let mut projects = self.read_records()?;
        projects.retain(|project| match project.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    id = %project.id,
                    error = %e,
                    "skipping invalid project record"
                );
                false
            }
        });
        Ok(projects)
    }

    /// Returns the ID of every stored record, valid or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn ids(&self) -> Result<Vec<String>> {
        Ok(self.read_records()?.into_iter().map(|p| p.id).collect())
    }

    /// Loads a single project by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no valid record has the ID, or an IO error.
    pub fn load_by_id(&self, id: &str) -> Result<Project> {
        self.load_all()?
            .into_iter()
            .find(|project| project.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Saves a single project, replacing a record with the same ID or appending.
    ///
    /// Only the record being written is validated; other records are kept
    /// as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the project fails validation or the file cannot be written.
    pub fn save(&self, project: &Project) -> Result<()> {
        project.validate()?;

        let mut projects = self.read_records()?;
        if let Some(pos) = projects.iter().position(|p| p.id == project.id) {
            projects[pos] = project.clone();
        } else {
            projects.push(project.clone());
        }

        self.write_records(&projects)
    }

    /// Replaces the file with the given projects.
    ///
    /// # Errors
    ///
    /// Returns an error if any project fails validation or the write fails.
    pub fn save_all(&self, projects: &[Project]) -> Result<()> {
        for project in projects {
            project.validate()?;
        }
        self.write_records(projects)
    }

    /// Deletes a project by ID, including a record that fails validation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no record has the ID, or an IO error.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut projects = self.read_records()?;
        let initial_len = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == initial_len {
            return Err(Error::NotFound(id.to_string()));
        }

        self.write_records(&projects)
    }

    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        with_lock_file(&self.path, f)
    }
}

/// The singleton category document.
#[derive(Debug, Clone)]
pub struct CategoryDocument {
    path: PathBuf,
}

impl CategoryDocument {
    /// Creates a handle for the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_path(&path)?;
        Ok(Self { path })
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, or `None` if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Option<CategorySet>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(Some(serde_json::from_reader(reader)?))
    }

    /// Overwrites the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&self, set: &CategorySet) -> Result<()> {
        let body = serde_json::to_vec_pretty(set)?;
        write_atomically(&self.path, "json.tmp", &body)
    }

    /// Applies a field-level update under the lock and writes the result back.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist, the lock is held, or IO fails.
    pub fn update<F>(&self, f: F) -> Result<CategorySet>
    where
        F: FnOnce(&mut CategorySet),
    {
        with_lock_file(&self.path, || {
            let mut set = self
                .load()?
                .ok_or_else(|| Error::NotFound("settings/categories".to_string()))?;
            f(&mut set);
            self.save(&set)?;
            Ok(set)
        })
    }
}
