//! Process-wide model registry.
//!
//! Built once at startup: the sidecar is probed a single time and each learned
//! model is either wired in as a primary classifier or left out, in which case
//! its signal runs on the fallback alone. The registry is read-only afterwards
//! and shared through `Arc`.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::config::Settings;
use crate::emotion::{EmotionClassifier, EmotionSignal, RemoteEmotion};
use crate::ml::{SidecarClient, SidecarHealth};
use crate::mood::{MoodAnalyzer, MoodResolver, MoodThresholds};
use crate::sentiment::{RemoteSentiment, SentimentClassifier, SentimentSignal};
use crate::summarizer::{AbstractiveModel, RemoteAbstractive, Summarizer, SummarizerConfig};

/// Which learned models are wired in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelAvailability {
    pub sentiment: bool,
    pub emotion: bool,
    pub summarization: bool,
}

#[derive(Clone, Default)]
pub struct ModelRegistry {
    sentiment: Option<Arc<dyn SentimentClassifier>>,
    emotion: Option<Arc<dyn EmotionClassifier>>,
    abstractive: Option<Arc<dyn AbstractiveModel>>,
    timeout: Duration,
}

impl ModelRegistry {
    /// No learned models; every signal uses its fallback.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Registry with explicit classifiers. Used to plug in alternative models.
    pub fn with_models(
        sentiment: Option<Arc<dyn SentimentClassifier>>,
        emotion: Option<Arc<dyn EmotionClassifier>>,
        abstractive: Option<Arc<dyn AbstractiveModel>>,
        timeout: Duration,
    ) -> Self {
        Self {
            sentiment,
            emotion,
            abstractive,
            timeout,
        }
    }

    /// Probes the configured sidecar and wires in whatever it reports loaded.
    pub async fn connect(settings: &Settings) -> Self {
        let Some(url) = settings.sidecar_url.as_deref() else {
            info!("🧠 No ML sidecar configured. Using lexicon and keyword fallbacks.");
            return Self::offline();
        };

        let client = match SidecarClient::new(url, settings.ml_timeout) {
            Ok(client) => client,
            Err(e) => {
                warn!("⚠️ [ML] Could not build sidecar client: {}", e);
                return Self::offline();
            }
        };

        let health = match client.health().await {
            Ok(health) => health,
            Err(e) => {
                warn!("⚠️ [ML] Sidecar at {} unreachable ({}). Using fallbacks.", url, e);
                SidecarHealth::default()
            }
        };

        let registry = Self::from_health(client, health, settings.ml_timeout);
        let available = registry.availability();
        info!(
            sentiment = available.sentiment,
            emotion = available.emotion,
            summarization = available.summarization,
            "🧠 Model registry ready ({})",
            url
        );
        registry
    }

    fn from_health(client: SidecarClient, health: SidecarHealth, timeout: Duration) -> Self {
        let sentiment: Option<Arc<dyn SentimentClassifier>> = health
            .sentiment
            .then(|| Arc::new(RemoteSentiment::new(client.clone())) as Arc<dyn SentimentClassifier>);
        let emotion: Option<Arc<dyn EmotionClassifier>> = health
            .emotion
            .then(|| Arc::new(RemoteEmotion::new(client.clone())) as Arc<dyn EmotionClassifier>);
        let abstractive: Option<Arc<dyn AbstractiveModel>> = health
            .summarization
            .then(|| Arc::new(RemoteAbstractive::new(client)) as Arc<dyn AbstractiveModel>);
        Self::with_models(sentiment, emotion, abstractive, timeout)
    }

    pub fn availability(&self) -> ModelAvailability {
        ModelAvailability {
            sentiment: self.sentiment.is_some(),
            emotion: self.emotion.is_some(),
            summarization: self.abstractive.is_some(),
        }
    }

    pub fn mood_analyzer(&self, thresholds: MoodThresholds) -> MoodAnalyzer {
        MoodAnalyzer::new(
            SentimentSignal::new(self.sentiment.clone(), self.timeout),
            EmotionSignal::new(self.emotion.clone(), self.timeout),
            MoodResolver::new(thresholds),
        )
    }

    pub fn summarizer(&self, config: SummarizerConfig) -> Summarizer {
        Summarizer::new(self.abstractive.clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_has_nothing() {
        assert_eq!(ModelRegistry::offline().availability(), ModelAvailability::default());
        let analyzer = ModelRegistry::offline().mood_analyzer(MoodThresholds::default());
        assert!(!analyzer.sentiment_signal().has_model());
        assert!(!analyzer.emotion_signal().has_model());
    }

    #[test]
    fn test_health_decides_which_models_are_wired() {
        let client = SidecarClient::new("http://127.0.0.1:9", Duration::from_millis(100)).unwrap();
        let health = SidecarHealth {
            sentiment: true,
            emotion: false,
            summarization: true,
        };
        let registry = ModelRegistry::from_health(client, health, Duration::from_millis(100));
        assert_eq!(
            registry.availability(),
            ModelAvailability {
                sentiment: true,
                emotion: false,
                summarization: true,
            }
        );
        assert!(registry.summarizer(SummarizerConfig::default()).has_model());
    }

    #[tokio::test]
    async fn test_connect_without_url_is_offline() {
        let registry = ModelRegistry::connect(&Settings::default()).await;
        assert_eq!(registry.availability(), ModelAvailability::default());
    }

    #[tokio::test]
    async fn test_connect_to_dead_sidecar_degrades() {
        let settings = Settings {
            sidecar_url: Some("http://127.0.0.1:9".to_string()),
            ml_timeout: Duration::from_millis(200),
            ..Settings::default()
        };
        let registry = ModelRegistry::connect(&settings).await;
        assert_eq!(registry.availability(), ModelAvailability::default());
    }
}
