// SPDX-License-Identifier: PMPL-1.0-or-later

//! Asset access for dictionary documents.
//!
//! Engines own their virtual filesystems (packed archives, Android assets,
//! web fetches), so the store only needs "give me the bytes at this path".

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a named asset into memory.
pub trait AssetReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

impl<T: AssetReader + ?Sized> AssetReader for &T {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// Assets on the local filesystem, relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsAssets {
    fn default() -> Self {
        Self::new(".")
    }
}

impl AssetReader for FsAssets {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        fs::read(&full).with_context(|| format!("reading asset {}", full.display()))
    }
}

/// Assets held in memory, e.g. bundled with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }
}

impl AssetReader for MemoryAssets {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("asset not found: {}", path.display()))
    }
}
