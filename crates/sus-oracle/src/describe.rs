//! Portrait descriptions.
//!
//! A description is generated once per (suspect, service, model) from the
//! suspect's portrait file and cached in the store; the answer pipeline reads
//! the cache and only falls back to generating when it is empty.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use sus_core::entities::{Description, Suspect};

use crate::error::OracleError;
use crate::oracle::AnswerOracle;
use crate::provider::{Credentials, ImageInput, TextProvider};

/// Result of a bulk description run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DescribeReport {
    pub described: Vec<String>,
    pub failed: Vec<DescribeFailure>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DescribeFailure {
    pub suspect_id: String,
    pub error: String,
}

/// MIME type from the portrait's extension. Unknown extensions are sent as JPEG.
#[must_use]
pub fn media_type_for(image: &str) -> &'static str {
    let ext = Path::new(image)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

impl AnswerOracle {
    /// Describe one suspect with `model` of `service` and cache the result.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] when the service is unknown, its token is
    /// missing, the portrait cannot be read, or the provider call fails.
    pub async fn generate_description(
        &self,
        suspect_id: &str,
        service: &str,
        model: &str,
    ) -> Result<Description, OracleError> {
        let (kind, provider) = self.providers.resolve(service)?;
        let credentials = self.credentials(kind).await?;
        self.describe_with(suspect_id, service, model, provider.as_ref(), &credentials)
            .await
    }

    /// Suspects that have fewer than `limit` descriptions for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Store`] if the query fails.
    pub async fn suspects_to_describe(
        &self,
        limit: i64,
        service: &str,
        model: &str,
    ) -> Result<Vec<Suspect>, OracleError> {
        Ok(self
            .store
            .suspects_lacking_descriptions(limit, service, model)
            .await?)
    }

    /// Describe every suspect with fewer than `limit` descriptions, one after
    /// another. Failures are logged and collected; the run continues.
    ///
    /// `on_progress(done, total)` is called after each suspect.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Store`] only if the initial suspect query fails.
    pub async fn generate_descriptions_for_all(
        &self,
        limit: i64,
        service: &str,
        model: &str,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<DescribeReport, OracleError> {
        let suspects = self.suspects_to_describe(limit, service, model).await?;
        let total = suspects.len();
        tracing::info!(total, service, model, limit, "describing suspects");

        let mut report = DescribeReport::default();
        for (done, suspect) in suspects.into_iter().enumerate() {
            match self.generate_description(&suspect.id, service, model).await {
                Ok(_) => report.described.push(suspect.id),
                Err(error) => {
                    tracing::warn!(suspect = %suspect.id, %error, "description failed");
                    report.failed.push(DescribeFailure {
                        suspect_id: suspect.id,
                        error: error.to_string(),
                    });
                }
            }
            on_progress(done + 1, total);
        }
        Ok(report)
    }

    pub(crate) async fn describe_with(
        &self,
        suspect_id: &str,
        service: &str,
        model: &str,
        provider: &dyn TextProvider,
        credentials: &Credentials,
    ) -> Result<Description, OracleError> {
        let suspect = self.store.get_suspect(suspect_id).await?;
        let path = self.settings.portraits_dir.join(&suspect.image);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| OracleError::Portrait {
                path: path.clone(),
                source,
            })?;

        let described = provider
            .describe_image(
                &ImageInput {
                    bytes: &bytes,
                    media_type: media_type_for(&suspect.image),
                },
                model,
                self.settings.description_max_tokens,
                credentials,
            )
            .await?;

        let mut description = Description {
            id: String::new(),
            suspect_id: suspect.id,
            service: service.to_string(),
            model: model.to_string(),
            description: described.text,
            prompt: described.prompt,
            created_at: Utc::now(),
        };
        description.id = self.store.save_description(&description).await?;
        tracing::info!(suspect = suspect_id, service, model, "description cached");
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a1b2.jpg", "image/jpeg")]
    #[case("a1b2.JPEG", "image/jpeg")]
    #[case("a1b2.png", "image/png")]
    #[case("a1b2.webp", "image/webp")]
    #[case("noext", "image/jpeg")]
    fn media_type_follows_extension(#[case] image: &str, #[case] expected: &str) {
        assert_eq!(media_type_for(image), expected);
    }
}
