mod normalizer;
mod parser;
mod query;

pub use query::DirectoryQuery;

use crate::directory::domain::{Agency, Job};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Data-fetch collaborator a directory page reads its listings from.
pub trait ListingSource: Send + Sync {
    fn agencies(&self, query: &DirectoryQuery) -> Result<Vec<Agency>, SourceError>;
    fn jobs(&self, query: &DirectoryQuery) -> Result<Vec<Job>, SourceError>;
    fn service_areas(&self) -> Result<Vec<String>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("listing source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug)]
pub enum DirectoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DirectoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            DirectoryImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
        }
    }
}

impl std::error::Error for DirectoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryImportError::Io(err) => Some(err),
            DirectoryImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DirectoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads agency and job CSV exports. Rows repeating an earlier slug are
/// skipped.
pub struct DirectoryImporter;

impl DirectoryImporter {
    pub fn agencies_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Agency>, DirectoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::agencies_from_reader(file)
    }

    pub fn agencies_from_reader<R: Read>(reader: R) -> Result<Vec<Agency>, DirectoryImportError> {
        let rows = parser::parse_agencies(reader)?;
        Ok(dedupe_by_slug(rows, |agency| agency.slug.as_str()))
    }

    pub fn jobs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Job>, DirectoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::jobs_from_reader(file)
    }

    pub fn jobs_from_reader<R: Read>(reader: R) -> Result<Vec<Job>, DirectoryImportError> {
        let rows = parser::parse_jobs(reader)?;
        Ok(dedupe_by_slug(rows, |job| job.slug.as_str()))
    }
}

fn dedupe_by_slug<T, F>(rows: Vec<T>, slug: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(rows.len());

    for row in rows {
        if seen.insert(slug(&row).to_string()) {
            kept.push(row);
        } else {
            debug!(slug = slug(&row), "skipping duplicate listing row");
        }
    }

    kept
}

/// Immutable listing snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    agencies: Vec<Agency>,
    jobs: Vec<Job>,
}

impl InMemoryDirectory {
    pub fn new(agencies: Vec<Agency>, jobs: Vec<Job>) -> Self {
        Self { agencies, jobs }
    }

    /// Builds a snapshot from optional agency and job exports.
    pub fn load<A, J>(
        agencies_csv: Option<A>,
        jobs_csv: Option<J>,
    ) -> Result<Self, DirectoryImportError>
    where
        A: AsRef<Path>,
        J: AsRef<Path>,
    {
        let agencies = match agencies_csv {
            Some(path) => DirectoryImporter::agencies_from_path(path)?,
            None => Vec::new(),
        };
        let jobs = match jobs_csv {
            Some(path) => DirectoryImporter::jobs_from_path(path)?,
            None => Vec::new(),
        };

        info!(
            agencies = agencies.len(),
            jobs = jobs.len(),
            "directory snapshot loaded"
        );
        Ok(Self::new(agencies, jobs))
    }

    pub fn all_agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn all_jobs(&self) -> &[Job] {
        &self.jobs
    }
}

impl ListingSource for InMemoryDirectory {
    fn agencies(&self, query: &DirectoryQuery) -> Result<Vec<Agency>, SourceError> {
        Ok(query.select_agencies(&self.agencies))
    }

    fn jobs(&self, query: &DirectoryQuery) -> Result<Vec<Job>, SourceError> {
        Ok(query.select_jobs(&self.jobs))
    }

    fn service_areas(&self) -> Result<Vec<String>, SourceError> {
        let mut areas: BTreeMap<String, String> = BTreeMap::new();
        for agency in self.agencies.iter().filter(|agency| agency.is_published()) {
            for area in &agency.service_areas {
                areas
                    .entry(normalizer::normalize_key(area))
                    .or_insert_with(|| area.clone());
            }
        }
        let mut areas: Vec<String> = areas.into_values().collect();
        areas.sort();
        Ok(areas)
    }
}
