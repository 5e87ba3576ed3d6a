//! Reading pages out of HTTP responses the caller already received.

use serde::de::DeserializeOwned;

use crate::decoder::PageDecoder;
use crate::types::PageModel;
use crate::Error;

const MAX_BODY_SNIPPET: usize = 2000;

/// Decodes the body of `resp` into a [`PageModel`] using the global decoder.
///
/// Non-success statuses become [`Error::HttpStatus`] carrying a truncated body.
pub async fn read_page<T>(resp: reqwest::Response) -> Result<PageModel<T>, Error>
where
    T: DeserializeOwned,
{
    PageDecoder::global().read_response(resp).await
}

impl PageDecoder {
    pub async fn read_response<T>(&self, resp: reqwest::Response) -> Result<PageModel<T>, Error>
    where
        T: DeserializeOwned,
    {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        self.decode_model(&body)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
