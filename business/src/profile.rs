//! Staff profile fetch.
//!
//! One GET against `/api/staff/miniProfile`, no retries. A non-success status
//! is reported as [`ProfileError::Status`] instead of being decoded.

use crate::config::BusinessConfig;
use campus_utils::Language;
use campus_utils::profile::MiniProfile;
use log::{debug, error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to get staff profile {profile_id}: server returned {status}")]
    Status { profile_id: i32, status: u16 },
    #[error("failed to get staff profile: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ProfileClient {
    config: BusinessConfig,
    client: reqwest::Client,
}

impl ProfileClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_mini_profile(
        &self,
        profile_id: i32,
        language: Language,
    ) -> Result<MiniProfile, ProfileError> {
        let url = format!("{}/staff/miniProfile", self.config.api_url());
        debug!("GET {url} profileId={profile_id} languageId={}", language.id());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("profileId", profile_id.to_string()),
                ("languageId", language.id().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Staff profile {profile_id} request failed with {status}");
            return Err(ProfileError::Status {
                profile_id,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<MiniProfile>().await?)
    }
}
