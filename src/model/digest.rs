use anyhow::anyhow;

use super::{JobListing, StdResult};

/// The subject of every digest email.
pub const DIGEST_SUBJECT: &str = "Interesting Job Listings";

const DIGEST_INTRODUCTION: &str = "Here are Indeed job listings that match your parameters:\n\n";

/// An email digest of new relevant listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    listings: Vec<JobListing>,
}

impl Digest {
    /// Creates a new `Digest`, refusing an empty list of listings.
    pub fn try_new(listings: Vec<JobListing>) -> StdResult<Self> {
        if listings.is_empty() {
            return Err(anyhow!("A digest requires at least one listing"));
        }

        Ok(Self { listings })
    }

    /// Retrieves the listings of the digest.
    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    /// Retrieves the subject of the digest.
    pub fn subject(&self) -> &str {
        DIGEST_SUBJECT
    }

    /// Renders the plain text body of the digest.
    pub fn body(&self) -> String {
        self.listings
            .iter()
            .fold(DIGEST_INTRODUCTION.to_string(), |mut body, listing| {
                body.push_str(&format!("{listing}\n"));
                body
            })
    }
}
