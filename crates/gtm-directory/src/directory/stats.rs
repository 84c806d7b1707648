use super::aggregate::{average_of, count, top_tags, TagTally};
use super::currency::DisplayCurrency;
use super::domain::{Agency, Job, ListingRecord};
use serde::Serialize;

/// Budget shown when no agency in the selection lists one.
pub const DEFAULT_AGENCY_BUDGET: f64 = 10_000.0;
/// Day rate shown when no job in the selection advertises one.
pub const DEFAULT_DAY_RATE: f64 = 950.0;
pub const DEFAULT_TOP_TAGS: usize = 5;

/// Header and FAQ figures for an agency directory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStats {
    pub total_agencies: usize,
    pub avg_min_budget: f64,
    pub top_specializations: Vec<String>,
}

impl LocationStats {
    pub fn from_agencies(agencies: &[Agency], limit: usize) -> Self {
        Self {
            total_agencies: count(agencies),
            avg_min_budget: average_of(agencies, Agency::amount, DEFAULT_AGENCY_BUDGET),
            top_specializations: top_tags(agencies, tag_strs, limit),
        }
    }

    pub fn empty() -> Self {
        Self::from_agencies(&[], 0)
    }

    pub fn budget_label(&self, currency: DisplayCurrency) -> String {
        currency.format_thousands(self.avg_min_budget)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role_category: String,
    pub jobs: usize,
}

/// Header figures for a fractional jobs page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMarketStats {
    pub total_jobs: usize,
    pub avg_day_rate: f64,
    pub top_skills: Vec<String>,
    pub role_breakdown: Vec<RoleCount>,
}

impl JobMarketStats {
    pub fn from_jobs(jobs: &[Job], limit: usize) -> Self {
        let mut roles = TagTally::default();
        roles.extend(jobs.iter().filter_map(|job| job.role_category.as_deref()));

        let role_breakdown = roles
            .ranked()
            .into_iter()
            .map(|(role_category, jobs)| RoleCount {
                role_category,
                jobs,
            })
            .collect();

        Self {
            total_jobs: count(jobs),
            avg_day_rate: average_of(jobs, Job::day_rate, DEFAULT_DAY_RATE),
            top_skills: top_tags(jobs, tag_strs, limit),
            role_breakdown,
        }
    }
}

fn tag_strs<R: ListingRecord>(record: &R) -> impl Iterator<Item = &str> {
    record.tags().iter().map(String::as_str)
}

/// Generic statistics for an arbitrary listing collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSummary {
    pub count: usize,
    pub average: f64,
    pub top_tags: Vec<String>,
}

impl ListingSummary {
    pub fn of<R: ListingRecord>(records: &[R], fallback: f64, limit: usize) -> Self {
        Self {
            count: count(records),
            average: average_of(records, R::amount, fallback),
            top_tags: top_tags(records, tag_strs, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::ListingStatus;

    fn agency(slug: &str, min_budget: Option<f64>, specializations: &[&str]) -> Agency {
        Agency {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            headquarters: "London, UK".to_string(),
            status: ListingStatus::Published,
            global_rank: None,
            min_budget,
            pricing_model: None,
            website: None,
            founded_year: None,
            employee_count: None,
            specializations: specializations.iter().map(|s| s.to_string()).collect(),
            service_areas: vec!["UK".to_string()],
            category_tags: vec!["GTM Agency".to_string()],
        }
    }

    fn job(slug: &str, compensation: Option<&str>, role: Option<&str>, skills: &[&str]) -> Job {
        Job {
            slug: slug.to_string(),
            title: "Fractional Executive".to_string(),
            company_name: "Acme".to_string(),
            location: "London".to_string(),
            is_remote: false,
            is_active: true,
            compensation: compensation.map(str::to_string),
            role_category: role.map(str::to_string),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            posted_date: None,
        }
    }

    #[test]
    fn location_stats_follow_agency_scenario() {
        let agencies = vec![
            agency("a", Some(10_000.0), &["Fintech", "SaaS"]),
            agency("b", None, &["Fintech"]),
            agency("c", Some(20_000.0), &["SaaS", "SaaS"]),
        ];

        let stats = LocationStats::from_agencies(&agencies, 2);
        assert_eq!(stats.total_agencies, 3);
        assert_eq!(stats.avg_min_budget, 15_000.0);
        assert_eq!(stats.top_specializations, vec!["SaaS", "Fintech"]);
    }

    #[test]
    fn empty_location_uses_fallbacks() {
        let stats = LocationStats::empty();
        assert_eq!(stats.total_agencies, 0);
        assert_eq!(stats.avg_min_budget, DEFAULT_AGENCY_BUDGET);
        assert!(stats.top_specializations.is_empty());
        assert_eq!(stats.budget_label(DisplayCurrency::Gbp), "£10K+");
    }

    #[test]
    fn zero_budget_agency_pulls_average_down() {
        let agencies = vec![
            agency("gtmquest", Some(0.0), &[]),
            agency("salescaptain", Some(5_000.0), &[]),
        ];
        let stats = LocationStats::from_agencies(&agencies, DEFAULT_TOP_TAGS);
        assert_eq!(stats.avg_min_budget, 2_500.0);
    }

    #[test]
    fn job_stats_parse_rates_and_break_down_roles() {
        let jobs = vec![
            job("cmo-1", Some("£1,000/day"), Some("CMO"), &["Demand Gen", "ABM"]),
            job("cfo-1", Some("£800/day"), Some("CFO"), &["FP&A"]),
            job("cmo-2", Some("Competitive"), Some("CMO"), &["ABM"]),
            job("coo-1", None, None, &[]),
        ];

        let stats = JobMarketStats::from_jobs(&jobs, 2);
        assert_eq!(stats.total_jobs, 4);
        assert_eq!(stats.avg_day_rate, 900.0);
        assert_eq!(stats.top_skills, vec!["ABM", "Demand Gen"]);
        assert_eq!(
            stats.role_breakdown,
            vec![
                RoleCount {
                    role_category: "CMO".to_string(),
                    jobs: 2
                },
                RoleCount {
                    role_category: "CFO".to_string(),
                    jobs: 1
                },
            ]
        );
    }

    #[test]
    fn job_stats_without_rates_fall_back() {
        let jobs = vec![job("cto-1", Some("DOE"), Some("CTO"), &[])];
        let stats = JobMarketStats::from_jobs(&jobs, DEFAULT_TOP_TAGS);
        assert_eq!(stats.avg_day_rate, DEFAULT_DAY_RATE);
        assert!(stats.top_skills.is_empty());
    }

    #[test]
    fn listing_summary_works_for_any_listing_shape() {
        let agencies = vec![agency("a", Some(4_000.0), &["PLG"])];
        let summary = ListingSummary::of(&agencies, 1.0, 3);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average, 4_000.0);
        assert_eq!(summary.top_tags, vec!["PLG"]);
    }
}
