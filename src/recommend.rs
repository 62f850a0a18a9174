//! Recommendation orchestration
//!
//! Tries the live provider, extracts a payload from its reply, and falls back
//! to the catalog on any failure. Callers always get an itinerary; the reason
//! for a fallback is reported only through [`GenerationOutcome`] and logs.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::config::TripBudConfig;
use crate::extract::{ExtractionError, parse_recommendations};
use crate::fallback::FallbackSynthesizer;
use crate::models::{ItineraryResponse, TripRequest};
use crate::prompt::build_prompt;
use crate::provider::{AnthropicConfig, AnthropicProvider, ProviderError, TextProvider};

/// How a response was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Parsed from the provider reply
    Live { count: usize },
    /// No credential configured
    CredentialAbsent,
    /// Provider call failed
    ProviderFault(ProviderError),
    /// Reply could not be turned into recommendations
    ExtractionFault(ExtractionError),
}

impl GenerationOutcome {
    /// Label emitted as the `outcome` log field
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GenerationOutcome::Live { .. } => "live",
            GenerationOutcome::CredentialAbsent => "credential_absent",
            GenerationOutcome::ProviderFault(_) => "provider_fault",
            GenerationOutcome::ExtractionFault(_) => "extraction_fault",
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, GenerationOutcome::Live { .. })
    }
}

/// Produces itineraries from the provider or the catalog
pub struct RecommendationService {
    provider: Option<Arc<dyn TextProvider>>,
    fallback: FallbackSynthesizer,
    max_live_results: usize,
}

impl RecommendationService {
    #[must_use]
    pub fn new(
        provider: Option<Arc<dyn TextProvider>>,
        fallback: FallbackSynthesizer,
        max_live_results: usize,
    ) -> Self {
        Self {
            provider,
            fallback,
            max_live_results,
        }
    }

    /// Build the service from configuration.
    ///
    /// Without a credential no provider is created and every request is
    /// served from the catalog.
    pub fn from_config(config: &TripBudConfig) -> Result<Self> {
        let provider: Option<Arc<dyn TextProvider>> = match config.api_key() {
            Some(api_key) => {
                let provider = AnthropicProvider::new(AnthropicConfig {
                    api_key: api_key.to_string(),
                    base_url: config.provider.base_url.clone(),
                    model: config.provider.model.clone(),
                    max_tokens: config.provider.max_tokens,
                    timeout: config.provider.timeout_seconds.map(Duration::from_secs),
                })
                .context("Failed to create Anthropic provider")?;
                info!(model = %config.provider.model, "Live recommendations enabled");
                Some(Arc::new(provider) as Arc<dyn TextProvider>)
            }
            None => {
                info!("No provider credential configured, serving catalog recommendations only");
                None
            }
        };

        Ok(Self::new(
            provider,
            FallbackSynthesizer::new(
                config.fallback.default_city.clone(),
                config.fallback.max_results,
            ),
            config.generation.max_live_results,
        ))
    }

    #[must_use]
    pub fn provider_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Produce an itinerary for `request`; never fails.
    pub async fn recommend(&self, request: &TripRequest) -> ItineraryResponse {
        self.generate(request).await.0
    }

    /// Produce an itinerary together with how it was obtained.
    #[instrument(skip(self, request), fields(city = %request.city, duration = request.duration))]
    pub async fn generate(&self, request: &TripRequest) -> (ItineraryResponse, GenerationOutcome) {
        let outcome = match self.try_live(request).await {
            Ok(response) => {
                let outcome = GenerationOutcome::Live {
                    count: response.recommendations.len(),
                };
                info!(
                    outcome = outcome.label(),
                    count = response.recommendations.len(),
                    "Generated live recommendations"
                );
                return (response, outcome);
            }
            Err(outcome) => outcome,
        };

        match &outcome {
            GenerationOutcome::CredentialAbsent => {
                debug!(outcome = outcome.label(), "Serving catalog recommendations");
            }
            GenerationOutcome::ProviderFault(e) => {
                warn!(
                    outcome = outcome.label(),
                    kind = e.kind(),
                    error = %e,
                    "Provider call failed, serving catalog recommendations"
                );
            }
            GenerationOutcome::ExtractionFault(e) => {
                warn!(
                    outcome = outcome.label(),
                    kind = e.kind(),
                    error = %e,
                    "Could not extract recommendations, serving catalog recommendations"
                );
            }
            GenerationOutcome::Live { .. } => {}
        }

        (self.fallback.synthesize(request), outcome)
    }

    async fn try_live(
        &self,
        request: &TripRequest,
    ) -> Result<ItineraryResponse, GenerationOutcome> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(GenerationOutcome::CredentialAbsent)?;

        let prompt = build_prompt(request);
        debug!(
            provider = provider.name(),
            prompt_len = prompt.len(),
            "Requesting recommendations"
        );

        let reply = provider
            .complete(&prompt)
            .await
            .map_err(GenerationOutcome::ProviderFault)?;

        let mut payload = parse_recommendations(&reply, request)
            .map_err(GenerationOutcome::ExtractionFault)?;
        payload.truncate(self.max_live_results);

        Ok(payload.into_response(request.city.clone()))
    }
}
