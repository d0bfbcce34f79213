use serde::Deserialize;

/// A listing as returned by the job-listing API, before any filtering.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawListing {
    /// The title of the listing.
    pub title: String,

    /// The description of the listing.
    pub description: String,

    /// The link to the listing.
    pub url: String,

    /// The publication date of the listing.
    #[serde(rename = "isoDate")]
    pub iso_date: String,
}

impl RawListing {
    /// Creates a new `RawListing` instance.
    pub fn new(title: &str, description: &str, url: &str, iso_date: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            iso_date: iso_date.to_string(),
        }
    }
}

/// A page of listings returned by the job-listing API.
#[derive(Deserialize, Debug, Default)]
pub struct ListingsPage {
    /// The listings of the page, missing when the API found nothing.
    #[serde(default)]
    pub jobs: Vec<RawListing>,
}
