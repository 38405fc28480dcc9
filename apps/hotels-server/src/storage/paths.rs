// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path utilities for the JSON file store layout.

use std::path::{Path, PathBuf};

use super::Record;

/// Storage path utilities for the JSON file store.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    /// Create paths rooted at `DATA_DIR`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all records.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every record of type `R`.
    pub fn collection_dir<R: Record>(&self) -> PathBuf {
        self.root.join(R::COLLECTION)
    }

    /// Path to a single record file.
    pub fn record<R: Record>(&self, id: i32) -> PathBuf {
        self.collection_dir::<R>().join(format!("{id}.json"))
    }
}
