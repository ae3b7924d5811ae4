//! The package catalog: metadata for every available prompt package.
//!
//! Loaded once at startup from a JSON file. Prompt paths inside
//! descriptors are relative to the catalog file, so a catalog can ship
//! next to its prompt files as one directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Metadata for one prompt package. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Unique package id.
    pub id: u32,
    /// Human-readable package name.
    pub name: String,
    /// Short description shown during package selection.
    pub description: String,
    /// Path to the truth prompts (one per line), relative to the catalog.
    pub truth: PathBuf,
    /// Path to the dare prompts (one per line), relative to the catalog.
    pub dare: PathBuf,
}

/// The set of available packages.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    base_dir: PathBuf,
    packages: Vec<PackageDescriptor>,
}

impl ContentCatalog {
    /// Build a catalog from already-loaded descriptors.
    pub fn new(base_dir: impl Into<PathBuf>, packages: Vec<PackageDescriptor>) -> Self {
        Self {
            base_dir: base_dir.into(),
            packages,
        }
    }

    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| GameError::CatalogUnavailable {
            reason: e.to_string(),
        })?;
        let packages: Vec<PackageDescriptor> =
            serde_json::from_str(&raw).map_err(|e| GameError::CatalogUnavailable {
                reason: e.to_string(),
            })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        Ok(Self { base_dir, packages })
    }

    /// All packages in catalog order.
    pub fn list(&self) -> &[PackageDescriptor] {
        &self.packages
    }

    /// Look up a package by id.
    pub fn find(&self, id: u32) -> Option<&PackageDescriptor> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Resolve a descriptor-relative prompt path against the catalog's
    /// directory.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }
}
