use super::normalizer::split_list;
use crate::directory::domain::{Agency, Job, ListingStatus};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_agencies<R: Read>(reader: R) -> Result<Vec<Agency>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<AgencyRow>()
        .map(|row| row.map(AgencyRow::into_agency))
        .collect()
}

pub(crate) fn parse_jobs<R: Read>(reader: R) -> Result<Vec<Job>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<JobRow>()
        .map(|row| row.map(JobRow::into_job))
        .collect()
}

#[derive(Debug, Deserialize)]
struct AgencyRow {
    slug: String,
    name: String,
    #[serde(default)]
    headquarters: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default)]
    global_rank: Option<u32>,
    #[serde(default)]
    min_budget: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pricing_model: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default)]
    founded_year: Option<u16>,
    #[serde(default)]
    employee_count: Option<u32>,
    #[serde(default)]
    specializations: String,
    #[serde(default)]
    service_areas: String,
    #[serde(default)]
    category_tags: String,
}

impl AgencyRow {
    fn into_agency(self) -> Agency {
        let status = ListingStatus::from_export(self.status.as_deref());

        Agency {
            slug: self.slug,
            name: self.name,
            headquarters: self.headquarters,
            status,
            global_rank: self.global_rank,
            min_budget: self.min_budget,
            pricing_model: self.pricing_model,
            website: self.website,
            founded_year: self.founded_year,
            employee_count: self.employee_count,
            specializations: split_list(&self.specializations),
            service_areas: split_list(&self.service_areas),
            category_tags: split_list(&self.category_tags),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobRow {
    slug: String,
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_remote: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_active: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    compensation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    role_category: Option<String>,
    #[serde(default)]
    skills_required: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    posted_date: Option<String>,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            slug: self.slug,
            title: self.title,
            company_name: self.company_name,
            location: self.location,
            is_remote: self.is_remote.as_deref().and_then(parse_flag).unwrap_or(false),
            is_active: self.is_active.as_deref().and_then(parse_flag).unwrap_or(true),
            compensation: self.compensation,
            role_category: self.role_category,
            skills_required: split_list(&self.skills_required),
            posted_date: self.posted_date.as_deref().and_then(parse_date),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

#[cfg(test)]
pub(crate) fn parse_flag_for_tests(value: &str) -> Option<bool> {
    parse_flag(value)
}
