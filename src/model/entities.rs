use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

use super::RawListing;

/// The keywords used when none are configured.
pub const DEFAULT_RELEVANCE_KEYWORDS: [&str; 11] = [
    "python", "django", "flask", "fastapi", "node.js", "nodejs", "node", "react", "react.js",
    "reactjs", "aws",
];

/// The title of a job listing, lowercased.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingTitle(pub String);

impl Deref for ListingTitle {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ListingTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The publication date of a job listing, as reported by the API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingDate(pub String);

impl Deref for ListingDate {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ListingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity used to decide whether a listing has already been seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    /// The lowercased title of the listing.
    pub title: ListingTitle,

    /// The publication date of the listing.
    pub date: ListingDate,
}

impl ListingKey {
    /// Creates a new `ListingKey` instance.
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: ListingTitle(title.to_string()),
            date: ListingDate(date.to_string()),
        }
    }
}

impl Display for ListingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.title, self.date)
    }
}

/// A job listing that matched the relevance keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    /// The lowercased title of the listing.
    title: ListingTitle,

    /// The lowercased description of the listing.
    description: String,

    /// The link to the listing.
    url: String,

    /// The publication date of the listing.
    date: ListingDate,
}

impl JobListing {
    /// Creates a new `JobListing` instance, lowercasing the title and description.
    pub fn new(title: &str, description: &str, url: &str, date: &str) -> Self {
        Self {
            title: ListingTitle(title.to_lowercase()),
            description: description.to_lowercase(),
            url: url.to_string(),
            date: ListingDate(date.to_string()),
        }
    }

    /// Retrieves the listing title.
    pub fn title(&self) -> &ListingTitle {
        &self.title
    }

    /// Retrieves the listing description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Retrieves the listing url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieves the listing date.
    pub fn date(&self) -> &ListingDate {
        &self.date
    }

    /// Computes the deduplication key of the listing.
    pub fn key(&self) -> ListingKey {
        ListingKey {
            title: self.title.clone(),
            date: self.date.clone(),
        }
    }
}

impl From<&RawListing> for JobListing {
    fn from(raw: &RawListing) -> Self {
        Self::new(&raw.title, &raw.description, &raw.url, &raw.iso_date)
    }
}

impl Display for JobListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.url, self.date)
    }
}

/// The keywords a listing must contain to be considered relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceKeywords(Vec<String>);

impl RelevanceKeywords {
    /// Creates a new `RelevanceKeywords` instance, lowercasing and dropping blank keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        )
    }

    /// Checks whether the text contains at least one keyword, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();

        self.0.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    /// Checks whether either the title or the description of a listing is relevant.
    pub fn is_relevant(&self, title: &str, description: &str) -> bool {
        self.matches(title) || self.matches(description)
    }
}

impl Default for RelevanceKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_RELEVANCE_KEYWORDS)
    }
}

impl Deref for RelevanceKeywords {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
