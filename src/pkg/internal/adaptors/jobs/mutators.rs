use serde::{Deserialize, Serialize};

use crate::pkg::internal::adaptors::jobs::spec::{Category, Rate, RateType};
use crate::pkg::internal::errors::BoardError;

/// Raw values from the post-a-job form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub rate_type: String,
    pub rate: String,
    pub location: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub rate: Rate,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct JobSubmission {
    pub status: &'static str,
    pub job: ValidDraft,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, BoardError> {
    match value.trim() {
        "" => Err(BoardError::MissingField(field)),
        v => Ok(v),
    }
}

impl JobDraft {
    pub fn validate(&self) -> Result<ValidDraft, BoardError> {
        let title = required(&self.title, "title")?;
        let description = required(&self.description, "description")?;
        let category: Category = required(&self.category, "category")?.parse()?;
        let unit: RateType = required(&self.rate_type, "rateType")?.parse()?;
        let amount = required(&self.rate, "rate")?;
        match amount.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => {}
            _ => return Err(BoardError::MalformedRate(amount.to_string())),
        }
        let location = required(&self.location, "location")?;
        Ok(ValidDraft {
            title: title.to_string(),
            description: description.to_string(),
            category,
            rate: Rate::per(amount, unit),
            location: location.to_string(),
        })
    }
}

/// Accepts drafts from the posting form. Nothing is stored until a backend exists.
pub struct JobMutator;

impl JobMutator {
    pub fn submit(draft: JobDraft) -> Result<JobSubmission, BoardError> {
        let job = draft.validate().inspect_err(|e| {
            tracing::warn!("rejected job draft: {}", e);
        })?;
        tracing::info!(
            title = %job.title,
            category = %job.category,
            rate = %job.rate,
            location = %job.location,
            "job posted"
        );
        Ok(JobSubmission {
            status: "received",
            job,
        })
    }
}
