use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Common view over agencies and jobs used by the default statistics.
pub trait ListingRecord {
    fn identifier(&self) -> &str;
    /// Budget or rate figure averaged on listing pages.
    fn amount(&self) -> Option<f64>;
    fn tags(&self) -> &[String];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Published,
    Draft,
    /// Any other export status (archived, pending, rejected, blank).
    Unlisted,
}

impl ListingStatus {
    /// Only an explicit `published` marks a listing as live.
    pub fn from_export(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(status) if status.eq_ignore_ascii_case("published") => Self::Published,
            Some(status) if status.eq_ignore_ascii_case("draft") => Self::Draft,
            _ => Self::Unlisted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub slug: String,
    pub name: String,
    pub headquarters: String,
    pub status: ListingStatus,
    #[serde(default)]
    pub global_rank: Option<u32>,
    #[serde(default)]
    pub min_budget: Option<f64>,
    #[serde(default)]
    pub pricing_model: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
    #[serde(default)]
    pub category_tags: Vec<String>,
}

impl Agency {
    pub fn is_published(&self) -> bool {
        self.status == ListingStatus::Published
    }
}

impl ListingRecord for Agency {
    fn identifier(&self) -> &str {
        &self.slug
    }

    fn amount(&self) -> Option<f64> {
        self.min_budget
    }

    fn tags(&self) -> &[String] {
        &self.specializations
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub slug: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub compensation: Option<String>,
    #[serde(default)]
    pub role_category: Option<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl Job {
    /// Numeric rate advertised in `compensation`, e.g. `£950/day` -> 950.
    ///
    /// The text must open with an optional currency sign and a digit; the
    /// leading digit run (ignoring `,` separators) is the rate.
    pub fn day_rate(&self) -> Option<f64> {
        self.compensation.as_deref().and_then(parse_rate)
    }
}

impl ListingRecord for Job {
    fn identifier(&self) -> &str {
        &self.slug
    }

    fn amount(&self) -> Option<f64> {
        self.day_rate()
    }

    fn tags(&self) -> &[String] {
        &self.skills_required
    }
}

fn parse_rate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix(['£', '$', '€'])
        .unwrap_or(trimmed);

    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let digits: String = body
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();

    digits.parse::<u64>().ok().map(|value| value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_compensation(compensation: Option<&str>) -> Job {
        Job {
            slug: "fractional-cmo-london".to_string(),
            title: "Fractional CMO".to_string(),
            company_name: "Northwind".to_string(),
            location: "London, UK".to_string(),
            is_remote: false,
            is_active: true,
            compensation: compensation.map(str::to_string),
            role_category: Some("CMO".to_string()),
            skills_required: vec!["Demand Gen".to_string()],
            posted_date: None,
        }
    }

    #[test]
    fn day_rate_reads_leading_amount() {
        assert_eq!(job_with_compensation(Some("£950/day")).day_rate(), Some(950.0));
        assert_eq!(job_with_compensation(Some("$1,200 per day")).day_rate(), Some(1200.0));
        assert_eq!(job_with_compensation(Some("800-1000")).day_rate(), Some(800.0));
    }

    #[test]
    fn day_rate_rejects_unstructured_text() {
        assert_eq!(job_with_compensation(Some("Competitive")).day_rate(), None);
        assert_eq!(job_with_compensation(Some("  ")).day_rate(), None);
        assert_eq!(job_with_compensation(None).day_rate(), None);
    }

    #[test]
    fn listing_record_exposes_agency_fields() {
        let agency = Agency {
            slug: "salescaptain".to_string(),
            name: "SalesCaptain".to_string(),
            headquarters: "Remote".to_string(),
            status: ListingStatus::Published,
            global_rank: Some(2),
            min_budget: Some(5_000.0),
            pricing_model: Some("Retainer".to_string()),
            website: None,
            founded_year: None,
            employee_count: None,
            specializations: vec!["Outbound Sales".to_string()],
            service_areas: vec!["US".to_string()],
            category_tags: vec!["GTM Agency".to_string()],
        };

        assert_eq!(agency.identifier(), "salescaptain");
        assert_eq!(agency.amount(), Some(5_000.0));
        assert_eq!(agency.tags(), &["Outbound Sales".to_string()]);
        assert!(agency.is_published());
    }

    #[test]
    fn only_explicit_published_status_is_live() {
        assert_eq!(
            ListingStatus::from_export(Some(" Published ")),
            ListingStatus::Published
        );
        assert_eq!(ListingStatus::from_export(Some("DRAFT")), ListingStatus::Draft);
        assert_eq!(
            ListingStatus::from_export(Some("archived")),
            ListingStatus::Unlisted
        );
        assert_eq!(
            ListingStatus::from_export(Some("publishd")),
            ListingStatus::Unlisted
        );
        assert_eq!(ListingStatus::from_export(None), ListingStatus::Unlisted);
    }
}
