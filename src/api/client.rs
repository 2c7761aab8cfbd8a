use once_cell::sync::Lazy;
use thiserror::Error;

use crate::api::models::RemotePost;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const PAGE_SIZE: u32 = 5;

/// Failure modes of the remote fetch. Both variants are reported to the user
/// the same way; neither mutates the library.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote responded with a non-success status.
    #[error("Network not OK {0}")]
    Status(u16),
    /// The request could not complete or the body could not be parsed.
    #[error("{0}")]
    Transport(String),
}

/// Fetch one bounded page of remote records. No retries and no timeout beyond
/// the transport's own: a failed attempt is terminal until re-triggered.
pub async fn fetch_more_songs() -> Result<Vec<RemotePost>, FetchError> {
    let url = format!("{POSTS_URL}?_limit={PAGE_SIZE}");
    let response = HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .json::<Vec<RemotePost>>()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))
}
