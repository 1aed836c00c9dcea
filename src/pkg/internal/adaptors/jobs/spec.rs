use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pkg::internal::errors::BoardError;

/// Closed set of job types a posting can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Cleaning,
    Tutoring,
    Gardening,
    DogWalking,
    Babysitting,
    Laundry,
    Recycling,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cleaning,
        Category::Tutoring,
        Category::Gardening,
        Category::DogWalking,
        Category::Babysitting,
        Category::Laundry,
        Category::Recycling,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Cleaning => "Cleaning",
            Category::Tutoring => "Tutoring",
            Category::Gardening => "Gardening",
            Category::DogWalking => "Dog Walking",
            Category::Babysitting => "Babysitting",
            Category::Laundry => "Laundry",
            Category::Recycling => "Recycling",
            Category::Other => "Other",
        }
    }

    /// Form value used by the select controls, e.g. `dog-walking`.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Cleaning => "cleaning",
            Category::Tutoring => "tutoring",
            Category::Gardening => "gardening",
            Category::DogWalking => "dog-walking",
            Category::Babysitting => "babysitting",
            Category::Laundry => "laundry",
            Category::Recycling => "recycling",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// "Dog Walking", "dog-walking" and "DOG_WALKING" all name the same category.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Category {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.name()) == wanted)
            .ok_or_else(|| BoardError::UnknownCategory(s.to_string()))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

impl TryFrom<String> for Category {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Hourly,
    Daily,
    Monthly,
    Fixed,
}

impl RateType {
    pub const ALL: [RateType; 4] = [
        RateType::Hourly,
        RateType::Daily,
        RateType::Monthly,
        RateType::Fixed,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            RateType::Hourly => "hourly",
            RateType::Daily => "daily",
            RateType::Monthly => "monthly",
            RateType::Fixed => "fixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateType::Hourly => "Hourly",
            RateType::Daily => "Daily",
            RateType::Monthly => "Monthly",
            RateType::Fixed => "Fixed Price",
        }
    }

    /// Unit suffix in the displayed rate, `R150/hour`.
    pub fn unit(&self) -> &'static str {
        match self {
            RateType::Hourly => "hour",
            RateType::Daily => "day",
            RateType::Monthly => "month",
            RateType::Fixed => "fixed",
        }
    }
}

impl FromStr for RateType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RateType::ALL
            .into_iter()
            .find(|r| r.slug() == wanted || r.unit() == wanted)
            .ok_or_else(|| BoardError::UnknownRateType(s.to_string()))
    }
}

/// Display form of a rate, `R150/hour` or `R1,500/month`. The amount is kept
/// as written; only the unit after the last `/` is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Rate {
    display: String,
    unit: Option<RateType>,
}

impl Rate {
    pub fn per(amount: impl fmt::Display, unit: RateType) -> Self {
        Rate {
            display: format!("R{}/{}", amount, unit.unit()),
            unit: Some(unit),
        }
    }

    /// `None` when the display string carries no recognizable unit.
    pub fn unit(&self) -> Option<RateType> {
        self.unit
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<String> for Rate {
    fn from(display: String) -> Self {
        let unit = display
            .rsplit_once('/')
            .and_then(|(_, unit)| unit.parse().ok());
        Rate { display, unit }
    }
}

impl From<&str> for Rate {
    fn from(display: &str) -> Self {
        Rate::from(display.to_string())
    }
}

impl From<Rate> for String {
    fn from(rate: Rate) -> Self {
        rate.display
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub rate: Rate,
    pub location: String,
    pub posted_by: String,
    pub verified: bool,
    pub posted_time: String,
}

/// Either the `all` wildcard, exactly one value, or a value outside the
/// enumeration, which matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
    Unknown(String),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        self.admits(Some(value))
    }

    /// Like `matches`, for attributes a posting may not carry.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => value == Some(wanted),
            Filter::Unknown(_) => false,
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Absent and blank values mean `all`. The wildcard itself is the exact literal `all`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Filter::All,
            Some(value) => value
                .parse()
                .map(Filter::Only)
                .unwrap_or_else(|_| Filter::Unknown(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParameters {
    pub search_text: String,
    pub category: Filter<Category>,
    pub rate_type: Filter<RateType>,
}

impl QueryParameters {
    pub fn new(search_text: impl Into<String>) -> Self {
        QueryParameters {
            search_text: search_text.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Filter::Only(category);
        self
    }

    pub fn rate_type(mut self, rate_type: RateType) -> Self {
        self.rate_type = Filter::Only(rate_type);
        self
    }

    /// Builds parameters from raw form values. Missing values fall back to
    /// the neutral filter; values outside the closed enumerations match nothing.
    pub fn from_raw(
        search_text: Option<&str>,
        category: Option<&str>,
        rate_type: Option<&str>,
    ) -> Self {
        let params = QueryParameters {
            search_text: search_text.unwrap_or_default().to_string(),
            category: Filter::parse(category),
            rate_type: Filter::parse(rate_type),
        };
        if matches!(params.category, Filter::Unknown(_))
            || matches!(params.rate_type, Filter::Unknown(_))
        {
            tracing::debug!(?params, "unrecognized filter value, query matches nothing");
        }
        params
    }
}
