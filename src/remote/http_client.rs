use reqwest::{StatusCode, Url};
use reqwest::blocking::{RequestBuilder, Response};

use super::*;

const API_PREFIX: &str = "service/rest/v1";

impl NexusClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url(),
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    /// `script/{name}` plus an optional trailing segment, with `name` encoded
    /// as a single path segment.
    pub(super) fn script_url(&self, name: &str, action: Option<&str>) -> NexusResult<Url> {
        let base = self.url("script");
        let mut url = Url::parse(&base).map_err(|err| {
            NexusError::InvalidArgument(format!("invalid nexus url {}: {}", base, err))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                NexusError::InvalidArgument(format!("invalid nexus url {}", base))
            })?;
            segments.push(name);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    /// Adds credentials and sends. Failing to get any response at all is a
    /// connection error; statuses are left to `ensure_ok`.
    pub(super) fn send(&self, req: RequestBuilder, label: &str) -> NexusResult<Response> {
        tracing::trace!(label, "sending request");
        req.basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .map_err(|source| NexusError::Connection {
                url: self.config.base_url().to_string(),
                source,
            })
    }

    pub(super) fn ensure_ok(&self, resp: Response, label: &str) -> NexusResult<Response> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(NexusError::InvalidCredentials {
                url: self.config.base_url().to_string(),
            });
        }
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        tracing::debug!(label, status = status.as_u16(), body = %body, "request failed");
        Err(NexusError::Api {
            status: Some(status.as_u16()),
            message: format_api_failure(label, status, &body),
        })
    }
}

pub(super) fn format_api_failure(label: &str, status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("{} failed ({})", label, status)
    } else {
        format!("{} failed ({}): {}", label, status, body)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
