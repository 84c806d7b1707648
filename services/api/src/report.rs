use crate::infra::parse_currency;
use clap::Args;
use gtm_directory::directory::stats::DEFAULT_TOP_TAGS;
use gtm_directory::directory::{
    AgencyPageStats, DirectoryQuery, DirectoryService, DisplayCurrency, InMemoryDirectory,
    JobPageStats, ListingSource,
};
use gtm_directory::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DirectoryReportArgs {
    /// Agency CSV export
    #[arg(long)]
    pub(crate) agencies_csv: PathBuf,
    /// Optional jobs CSV export for the fractional jobs section
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// Market to report on, e.g. UK or London
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Agency category tag, e.g. "B2B Marketing Agency"
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Display currency code (defaults to the market's currency)
    #[arg(long, value_parser = parse_currency)]
    pub(crate) currency: Option<DisplayCurrency>,
    /// Number of top specializations and skills to show
    #[arg(long, default_value_t = DEFAULT_TOP_TAGS)]
    pub(crate) top: usize,
    /// Include the matching agency listing in the output
    #[arg(long)]
    pub(crate) list_agencies: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ServiceAreasArgs {
    /// Agency CSV export
    #[arg(long)]
    pub(crate) agencies_csv: PathBuf,
}

pub(crate) fn run_directory_report(args: DirectoryReportArgs) -> Result<(), AppError> {
    let DirectoryReportArgs {
        agencies_csv,
        jobs_csv,
        location,
        category,
        currency,
        top,
        list_agencies,
    } = args;

    let directory = Arc::new(InMemoryDirectory::load(Some(agencies_csv), jobs_csv)?);
    let service = DirectoryService::with_top_tags(directory.clone(), top);

    let query = DirectoryQuery {
        category,
        location: location.clone(),
        ..DirectoryQuery::default()
    };
    let agency_page = service.agency_stats(query.clone(), currency);
    render_agency_stats(&agency_page);

    if list_agencies {
        println!("\nMatching agencies");
        for agency in directory.agencies(&query)? {
            let budget = match agency.min_budget {
                Some(amount) => agency_page.currency.format_thousands(amount),
                None => "n/a".to_string(),
            };
            let rank = agency
                .global_rank
                .map(|rank| format!("#{rank}"))
                .unwrap_or_else(|| "unranked".to_string());
            println!(
                "- {} | {} | {} | min budget {}",
                rank, agency.name, agency.headquarters, budget
            );
        }
    }

    if !directory.all_jobs().is_empty() {
        let job_page = service.job_stats(DirectoryQuery {
            location,
            ..DirectoryQuery::default()
        });
        render_job_stats(&job_page);
    }

    Ok(())
}

pub(crate) fn run_service_areas(args: ServiceAreasArgs) -> Result<(), AppError> {
    let directory = InMemoryDirectory::load(Some(args.agencies_csv), None::<PathBuf>)?;
    let areas = directory.service_areas()?;

    if areas.is_empty() {
        println!("No service areas listed");
    } else {
        println!("Service areas ({})", areas.len());
        for area in areas {
            println!("- {area}");
        }
    }

    Ok(())
}

pub(crate) fn render_agency_stats(page: &AgencyPageStats) {
    println!("Agency directory");
    println!(
        "Selection: category {}, location {}",
        page.query.category.as_deref().unwrap_or("any"),
        page.query.location.as_deref().unwrap_or("any")
    );
    println!("- {} agencies", page.stats.total_agencies);
    println!(
        "- Average minimum budget: {} ({} {:.0})",
        page.budget_label,
        page.currency.code(),
        page.currency.convert(page.stats.avg_min_budget)
    );

    if page.stats.top_specializations.is_empty() {
        println!("- Top specializations: none");
    } else {
        println!(
            "- Top specializations: {}",
            page.stats.top_specializations.join(", ")
        );
    }
}

pub(crate) fn render_job_stats(page: &JobPageStats) {
    println!("\nFractional jobs");
    println!("- {} active roles", page.stats.total_jobs);
    println!("- Average day rate: {:.0}", page.stats.avg_day_rate);

    if !page.stats.top_skills.is_empty() {
        println!("- In-demand skills: {}", page.stats.top_skills.join(", "));
    }

    if page.stats.role_breakdown.is_empty() {
        println!("- Roles: none");
    } else {
        println!("- Roles");
        for role in &page.stats.role_breakdown {
            println!("  - {}: {}", role.role_category, role.jobs);
        }
    }
}
