use crate::{Digest, StdResult};

/// A trait for delivering a digest of new listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DigestNotifier: Sync + Send {
    /// Sends the digest.
    async fn notify(&self, digest: &Digest) -> StdResult<()>;
}
