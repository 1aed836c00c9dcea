use askama::Template;

use crate::pkg::internal::adaptors::jobs::{
    mutators::JobDraft, selectors::CategorySummary, spec::JobPosting,
};

pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub service_name: &'a str,
    pub categories: Vec<CategorySummary>,
    pub featured: &'a [JobPosting],
}

#[derive(Template)]
#[template(path = "find_work.html")]
pub struct FindWork<'a> {
    pub search_text: &'a str,
    pub categories: Vec<SelectOption>,
    pub rate_types: Vec<SelectOption>,
    pub jobs: Vec<&'a JobPosting>,
}

#[derive(Template)]
#[template(path = "post_job.html")]
pub struct PostJob<'a> {
    pub draft: &'a JobDraft,
    pub categories: Vec<SelectOption>,
    pub rate_types: Vec<SelectOption>,
    pub error: Option<String>,
    /// Title of the job just accepted.
    pub posted: Option<String>,
}
