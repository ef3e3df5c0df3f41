//! `search` subcommand: query the job endpoint and print distance-aware
//! results.

use anyhow::Context;
use clap::Args;

use jobreach_api::{
    annotate_distances, sort_hits, JobRecord, JobsClient, SearchQuery, SearchSession, SortBy,
};
use jobreach_core::{format_distance, AppConfig, ParticipantLocation};
use jobreach_geocode::{resolve_participant, GeocoderClient};

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Keyword to match against titles and descriptions.
    #[arg(long)]
    keyword: Option<String>,
    /// City name or 5-digit zip to filter listings by.
    #[arg(long)]
    location: Option<String>,
    /// Program site filter.
    #[arg(long)]
    site: Option<String>,
    #[arg(long)]
    employment_type: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Result page to fetch (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Sort order for the fetched page.
    #[arg(long, value_enum, default_value = "date")]
    sort: SortOrder,
    /// Participant street address; with city and state, enables precise
    /// geocoding instead of zip/city centroids.
    #[arg(long)]
    street: Option<String>,
    /// Participant city.
    #[arg(long)]
    city: Option<String>,
    /// Participant state.
    #[arg(long)]
    state: Option<String>,
    /// Participant zip code.
    #[arg(long)]
    zip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum SortOrder {
    Date,
    Title,
    Company,
    Distance,
}

impl From<SortOrder> for SortBy {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Date => SortBy::Date,
            SortOrder::Title => SortBy::Title,
            SortOrder::Company => SortBy::Company,
            SortOrder::Distance => SortBy::Distance,
        }
    }
}

pub(crate) async fn run(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let jobs_client = JobsClient::new(
        &config.api_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("constructing job API client")?;
    let geocoder = GeocoderClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocoder_url,
    )
    .context("constructing geocoder client")?;

    let participant = ParticipantLocation::new(
        args.street.clone(),
        args.city.clone(),
        args.state.clone(),
        args.zip.clone(),
    );
    let participant_coord = resolve_participant(&geocoder, &participant).await;
    if participant_coord.is_none() {
        tracing::info!("participant location unresolved; distances will be blank");
    }

    let query = SearchQuery {
        page: args.page,
        page_size: config.page_size,
        keyword: args.keyword,
        location: args.location,
        site: args.site,
        employment_type: args.employment_type,
        category: args.category,
    };
    let mut session = SearchSession::new(query);
    let generation = session.begin_search();
    let results = jobs_client
        .search(&session.query)
        .await
        .context("job search failed")?;
    session.accept(generation, results);

    let total = session.total_count();
    let pages = session.total_pages();
    let page = session.query.page;
    let mut hits = annotate_distances(participant_coord, session.take_jobs());
    sort_hits(&mut hits, args.sort.into());

    if hits.is_empty() {
        println!("no jobs found");
        return Ok(());
    }

    let plural = if total == 1 { "" } else { "s" };
    println!("{total} job{plural} found (page {page} of {pages})");
    println!();
    println!(
        "{:<34}{:<24}{:<22}{:<10}POSTED",
        "TITLE", "COMPANY", "LOCATION", "DISTANCE"
    );
    for hit in &hits {
        println!(
            "{:<34}{:<24}{:<22}{:<10}{}",
            truncate(hit.job.title.as_deref().unwrap_or("Untitled Position"), 32),
            truncate(hit.job.company.as_deref().unwrap_or("-"), 22),
            truncate(&job_location(&hit.job), 20),
            format_distance(hit.distance),
            hit.job.posted_date.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// Display location: the free-text field when present, else "City, ST".
fn job_location(job: &JobRecord) -> String {
    if let Some(location) = job.location.as_deref() {
        return location.to_string();
    }
    match (job.city.as_deref(), job.state.as_deref()) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.to_string(),
        _ => "-".to_string(),
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let kept: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        value.to_string()
    }
}
