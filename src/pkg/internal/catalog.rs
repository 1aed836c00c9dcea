use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::pkg::internal::adaptors::jobs::spec::{Category, JobPosting, Rate, RateType};
use crate::pkg::internal::errors::BoardError;

/// An immutable, validated set of postings with a per-category position index.
#[derive(Debug)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl JobBoard {
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, BoardError> {
        let mut seen = HashSet::with_capacity(postings.len());
        if let Some(dup) = postings.iter().find(|job| !seen.insert(job.id)) {
            return Err(BoardError::DuplicateId(dup.id));
        }
        Ok(JobBoard::indexed(postings))
    }

    fn indexed(postings: Vec<JobPosting>) -> Self {
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();
        for (pos, job) in postings.iter().enumerate() {
            by_category.entry(job.category).or_default().push(pos);
        }
        JobBoard {
            postings,
            by_category,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let postings: Vec<JobPosting> = serde_json::from_str(raw)?;
        JobBoard::new(postings)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let board = JobBoard::from_json(&raw)?;
        tracing::info!(
            "loaded {} postings from {}",
            board.postings.len(),
            path.as_ref().display()
        );
        Ok(board)
    }

    /// Sample listings shown on the find-work page until a real backend exists.
    pub fn samples() -> Self {
        let postings = vec![
            JobPosting {
                id: 1,
                title: "House Cleaning - 3 Bedroom Home".to_string(),
                description: "Need a thorough cleaning of my 3-bedroom home. All cleaning supplies provided.".to_string(),
                category: Category::Cleaning,
                rate: Rate::per(150, RateType::Hourly),
                location: "Soweto, Johannesburg".to_string(),
                posted_by: "Sarah M.".to_string(),
                verified: true,
                posted_time: "2 hours ago".to_string(),
            },
            JobPosting {
                id: 2,
                title: "Mathematics Tutoring - Grade 10".to_string(),
                description: "Looking for a qualified tutor to help my son with Grade 10 mathematics.".to_string(),
                category: Category::Tutoring,
                rate: Rate::per(200, RateType::Hourly),
                location: "Khayelitsha, Cape Town".to_string(),
                posted_by: "John D.".to_string(),
                verified: true,
                posted_time: "5 hours ago".to_string(),
            },
            JobPosting {
                id: 3,
                title: "Garden Maintenance".to_string(),
                description: "Weekly garden maintenance needed. Mowing, weeding, and general upkeep.".to_string(),
                category: Category::Gardening,
                rate: Rate::per(120, RateType::Hourly),
                location: "Alexandra, Johannesburg".to_string(),
                posted_by: "Linda K.".to_string(),
                verified: false,
                posted_time: "1 day ago".to_string(),
            },
        ];
        JobBoard::indexed(postings)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Postings filed under `category`, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &JobPosting> + '_ {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(|&pos| &self.postings[pos])
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const CATALOG: &str = r#"[
        {"id":7,"title":"Laundry pickup","description":"Two loads weekly","category":"Laundry",
         "rate":"R300/fixed","location":"Tembisa","postedBy":"Ayanda","verified":true,"postedTime":"3 days ago"},
        {"id":8,"title":"Sort recyclables","description":"Glass and cans","category":"Recycling",
         "rate":"R250/day","location":"Mamelodi","postedBy":"Kagiso","verified":false,"postedTime":"1 week ago"}
    ]"#;

    #[test]
    fn test_samples_are_valid() {
        let board = JobBoard::samples();
        assert_eq!(board.len(), 3);
        assert!(JobBoard::new(board.postings().to_vec()).is_ok());
        for c in [Category::Cleaning, Category::Tutoring, Category::Gardening] {
            assert_eq!(board.in_category(c).count(), 1);
        }
        assert_eq!(board.in_category(Category::Other).count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut postings = JobBoard::samples().postings().to_vec();
        let mut copy = postings[0].clone();
        copy.title = "Another cleaning job".to_string();
        postings.push(copy);
        assert!(matches!(
            JobBoard::new(postings),
            Err(BoardError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_from_json() {
        let board = JobBoard::from_json(CATALOG).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.in_category(Category::Laundry).count(), 1);
        assert_eq!(board.in_category(Category::Tutoring).count(), 0);
        assert_eq!(board.postings()[0].rate.unit(), Some(RateType::Fixed));
    }

    #[test]
    fn test_from_json_keeps_rate_display_strings() {
        let raw = CATALOG
            .replace("R300/fixed", "R1,500/month")
            .replace("R250/day", "R150.50/hour");
        let board = JobBoard::from_json(&raw).unwrap();
        assert_eq!(board.postings()[0].rate.to_string(), "R1,500/month");
        assert_eq!(board.postings()[0].rate.unit(), Some(RateType::Monthly));
        assert_eq!(board.postings()[1].rate.unit(), Some(RateType::Hourly));

        let free_form = CATALOG.replace("R250/day", "250 a day");
        let board = JobBoard::from_json(&free_form).unwrap();
        assert_eq!(board.postings()[1].rate.unit(), None);
    }

    #[test]
    fn test_from_json_accepts_category_slugs() {
        let raw = CATALOG
            .replace("\"Laundry\"", "\"cleaning\"")
            .replace("\"Recycling\"", "\"dog-walking\"");
        let board = JobBoard::from_json(&raw).unwrap();
        assert_eq!(board.postings()[0].category, Category::Cleaning);
        assert_eq!(board.postings()[1].category, Category::DogWalking);
        assert_eq!(board.in_category(Category::DogWalking).count(), 1);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let bad_category = CATALOG.replace("\"Recycling\"", "\"Plumbing\"");
        assert!(matches!(JobBoard::from_json(&bad_category), Err(BoardError::Parse(_))));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_from_missing_path() {
        let res = JobBoard::from_path("/nonexistent/towngig/catalog.json").await;
        assert!(matches!(res, Err(BoardError::Io(_))));
    }
}
