use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::settings,
    pkg::{
        internal::adaptors::jobs::{
            mutators::{JobDraft, JobMutator},
            selectors::JobSelector,
            spec::{Category, Filter, RateType},
        },
        server::{
            handlers::jobs::SearchQuery,
            state::AppState,
            uispec::{FindWork, Home, PostJob, SelectOption},
        },
    },
    prelude::Result,
};

fn render(template: impl Template) -> Result<Html<String>> {
    let page = template
        .render()
        .map_err(|e| StandardError::new("ERR-UI-000").interpolate_err(e.to_string()))?;
    Ok(Html(page))
}

fn category_options(selected: &Filter<Category>) -> Vec<SelectOption> {
    Category::ALL
        .into_iter()
        .map(|c| SelectOption {
            label: c.name(),
            value: c.slug(),
            selected: *selected == Filter::Only(c),
        })
        .collect()
}

fn rate_type_options(selected: &Filter<RateType>) -> Vec<SelectOption> {
    RateType::ALL
        .into_iter()
        .map(|r| SelectOption {
            label: r.label(),
            value: r.slug(),
            selected: *selected == Filter::Only(r),
        })
        .collect()
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let selector = JobSelector::new(&state.board);
    render(Home {
        service_name: &settings.service_name,
        categories: selector.category_summaries(),
        featured: selector.featured(state.featured_limit),
    })
}

pub async fn find_work(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let params = query.params();
    let jobs = JobSelector::new(&state.board).matching(&params);
    render(FindWork {
        search_text: &params.search_text,
        categories: category_options(&params.category),
        rate_types: rate_type_options(&params.rate_type),
        jobs,
    })
}

fn post_job_page(draft: &JobDraft, error: Option<String>, posted: Option<String>) -> PostJob<'_> {
    PostJob {
        draft,
        categories: category_options(&Filter::parse(Some(draft.category.as_str()))),
        rate_types: rate_type_options(&Filter::parse(Some(draft.rate_type.as_str()))),
        error,
        posted,
    }
}

pub async fn post_job_form() -> Result<Html<String>> {
    render(post_job_page(&JobDraft::default(), None, None))
}

pub async fn post_job(Form(draft): Form<JobDraft>) -> Result<(StatusCode, Html<String>)> {
    match JobMutator::submit(draft.clone()) {
        Ok(submission) => {
            let page = render(post_job_page(
                &JobDraft::default(),
                None,
                Some(submission.job.title),
            ))?;
            Ok((StatusCode::OK, page))
        }
        Err(e) => {
            let page = render(post_job_page(&draft, Some(e.to_string()), None))?;
            Ok((StatusCode::BAD_REQUEST, page))
        }
    }
}
