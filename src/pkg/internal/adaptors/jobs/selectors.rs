use serde::Serialize;

use crate::pkg::internal::adaptors::jobs::spec::{Category, Filter, JobPosting, QueryParameters};
use crate::pkg::internal::catalog::JobBoard;

/// Lower-cases the search text once so every posting is checked against the same needle.
struct Matcher<'p> {
    needle: String,
    params: &'p QueryParameters,
}

impl<'p> Matcher<'p> {
    fn new(params: &'p QueryParameters) -> Self {
        Matcher {
            needle: params.search_text.to_lowercase(),
            params,
        }
    }

    fn matches(&self, job: &JobPosting) -> bool {
        let matches_search = self.needle.is_empty()
            || job.title.to_lowercase().contains(&self.needle)
            || job.description.to_lowercase().contains(&self.needle);
        matches_search
            && self.params.category.matches(&job.category)
            && self.params.rate_type.admits(job.rate.unit().as_ref())
    }
}

/// Order-preserving subsequence of `postings` matching every predicate in `params`.
pub fn filter_postings<'a>(
    postings: &'a [JobPosting],
    params: &QueryParameters,
) -> Vec<&'a JobPosting> {
    let matcher = Matcher::new(params);
    postings.iter().filter(|job| matcher.matches(job)).collect()
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: &'static str,
    pub slug: &'static str,
    pub jobs: usize,
}

pub struct JobSelector<'a> {
    board: &'a JobBoard,
}

impl<'a> JobSelector<'a> {
    pub fn new(board: &'a JobBoard) -> Self {
        JobSelector { board }
    }

    pub fn matching(&self, params: &QueryParameters) -> Vec<&'a JobPosting> {
        let matches = match &params.category {
            // positions are stored ascending, so the scan keeps catalog order
            Filter::Only(category) => {
                let matcher = Matcher::new(params);
                self.board
                    .in_category(*category)
                    .filter(|job| matcher.matches(job))
                    .collect()
            }
            _ => filter_postings(self.board.postings(), params),
        };
        tracing::debug!(?params, found = matches.len(), "job query");
        matches
    }

    pub fn get_by_id(&self, id: u32) -> Option<&'a JobPosting> {
        self.board.postings().iter().find(|job| job.id == id)
    }

    pub fn featured(&self, limit: usize) -> &'a [JobPosting] {
        let postings = self.board.postings();
        &postings[..limit.min(postings.len())]
    }

    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        Category::ALL
            .into_iter()
            .map(|category| CategorySummary {
                name: category.name(),
                slug: category.slug(),
                jobs: self.board.in_category(category).count(),
            })
            .collect()
    }
}
