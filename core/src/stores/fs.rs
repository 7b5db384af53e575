// ## 📂 File: `src/stores/fs.rs`
// Filesystem-backed collection and output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{MEDIA_DIR, MEDIA_EXT, METADATA_DIR};
use crate::stores::{BatchStore, MediaStore, MetadataStore, StoredBlob};
use crate::types::PrepareError;

/// Collection laid out as `{root}/json/{id}` and `{root}/images/{shard}.png`.
#[derive(Debug, Clone)]
pub struct FsCollection {
    root: PathBuf,
}

impl FsCollection {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    fn metadata_path(&self, shard: u64) -> PathBuf {
        self.metadata_dir().join(shard.to_string())
    }

    fn media_path(&self, shard: u64) -> PathBuf {
        self.root.join(MEDIA_DIR).join(format!("{}.{}", shard, MEDIA_EXT))
    }
}

impl MetadataStore for FsCollection {
    /// File names under `json/`, sorted as strings. Hidden entries and
    /// subdirectories are skipped. Symlinks are followed, so a linked id
    /// counts as a token and a dangling link is a listing error.
    fn token_ids(&self) -> Result<Vec<String>, PrepareError> {
        let dir = self.metadata_dir();
        let list_err = |source: io::Error| PrepareError::ListTokens { path: dir.clone(), source };

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|raw| PrepareError::InvalidTokenId(raw.to_string_lossy().into_owned()))?;
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            let meta = fs::metadata(&path)
                .map_err(|source| PrepareError::ListTokens { path: path.clone(), source })?;
            if meta.is_dir() {
                continue;
            }
            ids.push(name);
        }
        ids.sort();
        debug!(count = ids.len(), dir = %dir.display(), "listed token ids");
        Ok(ids)
    }

    fn read_metadata(&self, shard: u64) -> Result<StoredBlob, PrepareError> {
        let path = self.metadata_path(shard);
        let bytes = fs::read(&path).map_err(|source| PrepareError::MetadataRead {
            path: path.clone(),
            source,
        })?;
        Ok(StoredBlob { location: path, bytes })
    }
}

impl MediaStore for FsCollection {
    fn read_media(&self, shard: u64) -> Result<StoredBlob, PrepareError> {
        let path = self.media_path(shard);
        let bytes = fs::read(&path).map_err(|source| PrepareError::MediaRead {
            path: path.clone(),
            source,
        })?;
        Ok(StoredBlob { location: path, bytes })
    }
}

/// Output directory with one file per batch, named by batch index.
#[derive(Debug, Clone)]
pub struct FsBatchStore {
    dir: PathBuf,
}

impl FsBatchStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn batch_path(&self, index: u64) -> PathBuf {
        self.dir.join(index.to_string())
    }

    fn output_err(&self, path: &Path) -> impl Fn(io::Error) -> PrepareError {
        let path = path.to_path_buf();
        move |source| PrepareError::Output { path: path.clone(), source }
    }
}

impl BatchStore for FsBatchStore {
    /// Remove any previous directory of the same name, then recreate it.
    fn reset(&mut self) -> Result<(), PrepareError> {
        if self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "removing previous output");
            fs::remove_dir_all(&self.dir).map_err(self.output_err(&self.dir))?;
        }
        fs::create_dir_all(&self.dir).map_err(self.output_err(&self.dir))?;
        Ok(())
    }

    fn write_batch(&mut self, index: u64, artifact_text: &str) -> Result<(), PrepareError> {
        let path = self.batch_path(index);
        fs::write(&path, artifact_text).map_err(self.output_err(&path))?;
        Ok(())
    }
}
