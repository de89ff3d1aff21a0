//! Sources a [`FinanceSnapshot`] is loaded from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mfuko_config::Config;
use mfuko_core::validate_snapshot;
use mfuko_domain::FinanceSnapshot;

use crate::errors::Result;

const SAMPLE_DOCUMENT: &str = include_str!("sample.json");

/// Supplies the dataset the services and presenter read.
pub trait DataProvider: Send + Sync {
    fn snapshot(&self) -> Result<FinanceSnapshot>;
}

/// Deserializes and validates a snapshot document.
pub fn parse_snapshot(document: &str) -> Result<FinanceSnapshot> {
    let snapshot: FinanceSnapshot = serde_json::from_str(document)?;
    validate_snapshot(&snapshot)?;
    tracing::debug!(
        transactions = snapshot.transactions.len(),
        goals = snapshot.savings_goals.len(),
        tips = snapshot.tips.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// The bundled student dataset for March 2025.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataProvider;

impl DataProvider for SampleDataProvider {
    fn snapshot(&self) -> Result<FinanceSnapshot> {
        parse_snapshot(SAMPLE_DOCUMENT)
    }
}

#[derive(Debug, Clone)]
enum JsonSource {
    File(PathBuf),
    Document(String),
}

/// Reads a snapshot from a JSON file or an in-memory document.
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    source: JsonSource,
}

impl JsonDataProvider {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: JsonSource::File(path.into()),
        }
    }

    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            source: JsonSource::Document(document.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            JsonSource::File(path) => Some(path),
            JsonSource::Document(_) => None,
        }
    }
}

impl DataProvider for JsonDataProvider {
    fn snapshot(&self) -> Result<FinanceSnapshot> {
        match &self.source {
            JsonSource::File(path) => {
                let document = fs::read_to_string(path).map_err(|err| {
                    tracing::warn!(path = %path.display(), error = %err, "dataset unreadable");
                    err
                })?;
                parse_snapshot(&document)
            }
            JsonSource::Document(document) => parse_snapshot(document),
        }
    }
}

/// Provider for the configured `data_path`, falling back to the sample dataset.
pub fn provider_from_config(config: &Config) -> Box<dyn DataProvider> {
    match &config.data_path {
        Some(path) => Box::new(JsonDataProvider::from_path(path.clone())),
        None => Box::new(SampleDataProvider),
    }
}
