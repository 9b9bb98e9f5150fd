// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog sources: where event definitions come from
//!
//! A catalog only ever yields instantiable definitions. Template-only
//! entries are resolved away by the parser and never reach the scheduler.

mod parser;

pub use parser::{parse_catalog, CatalogError};

use crate::definition::EventDefinition;
use std::path::{Path, PathBuf};

/// Enumerates every registered event definition
pub trait CatalogSource: Send + Sync {
    fn all_definitions(&self) -> Vec<EventDefinition>;
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    definitions: Vec<EventDefinition>,
}

impl StaticCatalog {
    pub fn new(definitions: Vec<EventDefinition>) -> Self {
        Self { definitions }
    }

    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(parse_catalog(content)?))
    }
}

impl CatalogSource for StaticCatalog {
    fn all_definitions(&self) -> Vec<EventDefinition> {
        self.definitions.clone()
    }
}

/// Catalog read from a TOML file on every enumeration
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, surfacing failures
    pub fn load(&self) -> Result<Vec<EventDefinition>, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_catalog(&content)
    }
}

impl CatalogSource for FileCatalog {
    /// An unreadable or malformed file counts as an empty catalog
    fn all_definitions(&self) -> Vec<EventDefinition> {
        match self.load() {
            Ok(definitions) => definitions,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "event catalog unavailable");
                Vec::new()
            }
        }
    }
}


#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
