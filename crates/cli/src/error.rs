// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors carry:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;
use stev_core::{CatalogError, ConfigError};

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct StevError {
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StevError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for StevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for StevError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users actually hit.
impl StevError {
    pub fn catalog(path: &Path, err: CatalogError) -> Self {
        let base = StevError::new(format!("Cannot load catalog '{}'", path.display()))
            .with_context(err.to_string());
        let base = match &err {
            CatalogError::Io { .. } => base
                .with_suggestion("Check the path; catalogs are TOML files with [[event]] tables"),
            CatalogError::Toml(_) => base
                .with_suggestion("Fix the TOML syntax at the reported line")
                .with_suggestion("Unknown keys are rejected; check event fields for typos"),
            CatalogError::DuplicateId(_) => {
                base.with_suggestion("Give every [[event]] a unique id")
            }
            CatalogError::InheritanceCycle(_) => {
                base.with_suggestion("Break the cycle in the `parent` chain")
            }
        };
        base.with_source(err)
    }

    pub fn config(path: &Path, err: ConfigError) -> Self {
        let base = StevError::new(format!("Cannot load config '{}'", path.display()))
            .with_context(err.to_string());
        let base = match &err {
            ConfigError::InvalidTimer { .. } => {
                base.with_suggestion("Set [timer] min_delay no longer than max_delay")
            }
            ConfigError::Io { .. } => base.with_suggestion("Check the --config path"),
            ConfigError::Toml(_) => base.with_suggestion(
                "Known keys: events_enabled, ambient_gating, weight_mode, seed, [timer]",
            ),
        };
        base.with_source(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
