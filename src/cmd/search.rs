use clap::Args;
use standard_error::{Interpolate, StandardError};

use crate::{
    pkg::{
        internal::adaptors::jobs::{selectors::JobSelector, spec::QueryParameters},
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text matched against titles and descriptions
    #[arg(short, long)]
    pub q: Option<String>,
    /// `all` or a category such as `gardening` or `dog-walking`
    #[arg(short, long)]
    pub category: Option<String>,
    /// `all`, `hourly`, `daily`, `monthly` or `fixed`
    #[arg(short, long)]
    pub rate_type: Option<String>,
    /// Print matches as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let params = QueryParameters::from_raw(
        args.q.as_deref(),
        args.category.as_deref(),
        args.rate_type.as_deref(),
    );
    let state = AppState::new().await?;
    let jobs = JobSelector::new(&state.board).matching(&params);
    if args.json {
        let out = serde_json::to_string_pretty(&jobs)
            .map_err(|e| StandardError::new("ERR-IO-000").interpolate_err(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }
    if jobs.is_empty() {
        println!("No jobs found matching your criteria.");
    }
    for job in jobs {
        let badge = if job.verified { " [verified]" } else { "" };
        println!("#{} {}{}", job.id, job.title, badge);
        println!("    {} | {} | {} | {}", job.category, job.rate, job.location, job.posted_time);
    }
    Ok(())
}

pub async fn categories() -> Result<()> {
    let state = AppState::new().await?;
    for summary in JobSelector::new(&state.board).category_summaries() {
        println!("{:<12} {:>3} jobs", summary.name, summary.jobs);
    }
    Ok(())
}
