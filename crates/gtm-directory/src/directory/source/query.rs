use super::normalizer::{normalize_key, same_key};
use crate::directory::domain::{Agency, Job};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Selection a directory page asks its listing source for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl DirectoryQuery {
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    pub fn for_category(category: impl Into<String>, location: Option<String>) -> Self {
        Self {
            category: Some(category.into()),
            location,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Same selection without the result limit.
    pub fn unbounded(&self) -> Self {
        Self {
            limit: None,
            ..self.clone()
        }
    }

    pub fn matches_agency(&self, agency: &Agency) -> bool {
        if !agency.is_published() {
            return false;
        }

        let in_category = self.category.as_deref().map_or(true, |category| {
            agency.category_tags.iter().any(|tag| same_key(tag, category))
        });
        let in_location = self.location.as_deref().map_or(true, |location| {
            agency.service_areas.iter().any(|area| same_key(area, location))
        });

        in_category && in_location
    }

    pub fn matches_job(&self, job: &Job) -> bool {
        if !job.is_active {
            return false;
        }

        let in_location = self.location.as_deref().map_or(true, |location| {
            normalize_key(&job.location).contains(&normalize_key(location))
        });
        let in_role = self.role.as_deref().map_or(true, |role| {
            job.role_category
                .as_deref()
                .is_some_and(|category| same_key(category, role))
        });

        in_location && in_role
    }

    /// Matching agencies ordered by rank (unranked last), then name.
    pub fn select_agencies<'a, I>(&self, agencies: I) -> Vec<Agency>
    where
        I: IntoIterator<Item = &'a Agency>,
    {
        let mut selected: Vec<Agency> = agencies
            .into_iter()
            .filter(|agency| self.matches_agency(agency))
            .cloned()
            .collect();
        selected.sort_by(compare_agencies);
        self.truncate(selected)
    }

    /// Matching jobs, most recently posted first, undated last.
    pub fn select_jobs<'a, I>(&self, jobs: I) -> Vec<Job>
    where
        I: IntoIterator<Item = &'a Job>,
    {
        let mut selected: Vec<Job> = jobs
            .into_iter()
            .filter(|job| self.matches_job(job))
            .cloned()
            .collect();
        selected.sort_by(|a, b| match (a.posted_date, b.posted_date) {
            (Some(left), Some(right)) => right.cmp(&left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.truncate(selected)
    }

    fn truncate<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}

fn compare_agencies(a: &Agency, b: &Agency) -> Ordering {
    let rank = match (a.global_rank, b.global_rank) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    rank.then_with(|| a.name.cmp(&b.name))
}
