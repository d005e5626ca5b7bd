use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::Publisher;
use crate::config::PublisherConfig;
use crate::marsclock_errors::MarsClockError;
use crate::patch::{replace_between_markers, Markers};
use crate::time::now_unix_seconds;

/// Envelope of a wiki page as returned by `GET /r/{sub}/wiki/{page}`
#[derive(Debug, Deserialize)]
struct WikiPage {
    data: WikiPageData,
}

#[derive(Debug, Deserialize)]
struct WikiPageData {
    content_md: String,
}

/// Publisher editing a subreddit wiki page (by default the sidebar).
///
/// Every publication is one read of the page followed by one write of the
/// patched content. Token acquisition and retries are left to the caller.
#[derive(Debug, Clone)]
pub struct WikiPublisher {
    client: Client,
    api_base: String,
    access_token: String,
    page: String,
}

impl WikiPublisher {
    pub fn new(config: &PublisherConfig) -> Result<Self, MarsClockError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(WikiPublisher {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            page: config.wiki_page.clone(),
        })
    }

    fn page_url(&self, subreddit: &str) -> String {
        format!("{}/r/{}/wiki/{}.json", self.api_base, subreddit, self.page)
    }

    fn edit_url(&self, subreddit: &str) -> String {
        format!("{}/r/{}/api/wiki/edit", self.api_base, subreddit)
    }

    async fn fetch_document(&self, subreddit: &str) -> Result<String, MarsClockError> {
        let page: WikiPage = self
            .client
            .get(self.page_url(subreddit))
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.data.content_md)
    }

    async fn submit_document(&self, subreddit: &str, content: &str) -> Result<(), MarsClockError> {
        let reason = format!("automated edit {}", now_unix_seconds()?);
        let form = [
            ("content", content),
            ("page", self.page.as_str()),
            ("reason", reason.as_str()),
            ("api_type", "json"),
        ];

        let response = self
            .client
            .post(self.edit_url(subreddit))
            .bearer_auth(&self.access_token)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarsClockError::UnexpectedResponse(format!(
                "wiki edit returned {status}: {body}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Publisher for WikiPublisher {
    async fn publish(
        &self,
        destination: &str,
        text: &str,
        markers: &Markers,
    ) -> Result<(), MarsClockError> {
        let current = self.fetch_document(destination).await?;
        let updated = replace_between_markers(&current, markers, text)?;
        tracing::debug!(
            subreddit = destination,
            page = %self.page,
            bytes = updated.len(),
            "submitting wiki edit"
        );
        self.submit_document(destination, &updated).await
    }
}
