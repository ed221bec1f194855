//! Sentiment signal.
//!
//! Two classifiers share the [`SentimentClassifier`] contract: the learned
//! model behind the sidecar, and a lexicon polarity scorer that needs nothing
//! external. [`SentimentSignal`] tries the first and silently degrades to the
//! second, so callers always get a [`SentimentResult`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::error::{ModelError, ModelResult};
use crate::ml::SidecarClient;
use crate::text::{round_to, words};

/// Polarity above this is positive, below its negation negative.
pub const POLARITY_THRESHOLD: f32 = 0.1;

const STRONG_POSITIVE: &[&str] = &[
    "amazing", "wonderful", "fantastic", "excellent", "brilliant", "awesome", "perfect", "love",
    "loved", "loving", "best", "outstanding", "superb", "incredible", "magnificent", "delightful",
    "exceptional", "thrilled", "ecstatic", "joyful", "overjoyed",
];

const POSITIVE: &[&str] = &[
    "good", "great", "better", "happy", "glad", "pleased", "nice", "positive", "beautiful",
    "pleasant", "satisfied", "satisfying", "hopeful", "grateful", "thankful", "excited", "proud",
    "calm", "relaxed", "confident", "success", "successful", "win", "winning", "helpful", "enjoy",
    "enjoyed", "fun", "appreciated", "valued", "optimistic", "impressive", "remarkable", "recommend",
    "reliable", "favorable", "thriving", "fine",
];

const STRONG_NEGATIVE: &[&str] = &[
    "terrible", "awful", "horrible", "worst", "hate", "hated", "disgusting", "pathetic", "useless",
    "miserable", "devastated", "furious", "hopeless", "worthless", "dreadful", "garbage",
];

const NEGATIVE: &[&str] = &[
    "bad", "poor", "worse", "sad", "unhappy", "angry", "annoyed", "frustrated", "frustrating",
    "disappointed", "disappointing", "failure", "failed", "fail", "failing", "wrong", "difficult",
    "tired", "exhausted", "stressed", "overwhelmed", "worried", "anxious", "scared", "afraid",
    "lonely", "isolated", "upset", "hurt", "broken", "problem", "problems", "mistake", "mistakes",
    "negative", "boring", "tough", "brutal", "unfair", "dislike",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "absolutely", "incredibly", "totally", "completely", "truly",
    "super",
];

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "neither", "nor", "hardly"];

static LEXICON: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();
    for (list, polarity) in [
        (STRONG_POSITIVE, 0.8),
        (POSITIVE, 0.5),
        (STRONG_NEGATIVE, -0.8),
        (NEGATIVE, -0.5),
    ] {
        for word in list {
            lexicon.insert(*word, polarity);
        }
    }
    lexicon
});

/// Coarse sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Maps a free-form model label ("POSITIVE", "neg", "LABEL_1", ...) onto the
    /// three-way label. Anything unrecognised is neutral.
    pub fn from_model_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("pos") {
            SentimentLabel::Positive
        } else if label.contains("neg") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Which implementation produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    Model,
    Fallback,
}

/// Result of sentiment classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SentimentResult {
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    /// Always within `0.0..=1.0`.
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjectivity: Option<f32>,
    pub source: SignalSource,
}

/// Text in, sentiment out. Implemented by the learned model and the lexicon.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> ModelResult<SentimentResult>;

    fn name(&self) -> &str;
}

/// Learned sentiment model served by the sidecar.
pub struct RemoteSentiment {
    client: SidecarClient,
}

impl RemoteSentiment {
    pub fn new(client: SidecarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentClassifier for RemoteSentiment {
    async fn classify(&self, text: &str) -> ModelResult<SentimentResult> {
        let predictions = self.client.sentiment(text).await?;
        let top = predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(ModelError::EmptyOutput)?;
        Ok(SentimentResult {
            label: SentimentLabel::from_model_label(&top.label),
            confidence: round_to(top.score.clamp(0.0, 1.0), 3),
            raw_label: Some(top.label),
            polarity: None,
            subjectivity: None,
            source: SignalSource::Model,
        })
    }

    fn name(&self) -> &str {
        "sidecar-sentiment"
    }
}

/// Lexicon polarity scorer. Deterministic and infallible.
///
/// Polarity is the mean of the polarities of lexicon words found in the text.
/// An intensifier right before a word scales it by 1.3, a negator flips it and
/// halves it ("not good" is mildly negative, not strongly).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    /// Returns `(polarity, subjectivity)`; both are zero when nothing matches.
    pub fn polarity(&self, text: &str) -> (f32, f32) {
        let tokens = words(text);
        if tokens.is_empty() {
            return (0.0, 0.0);
        }

        let mut hits: Vec<f32> = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0f32;

        for token in &tokens {
            let token = token.as_str();
            if NEGATORS.contains(&token) || token.ends_with("n't") {
                negate = true;
                continue;
            }
            if INTENSIFIERS.contains(&token) {
                intensity *= 1.3;
                continue;
            }
            if let Some(base) = LEXICON.get(token) {
                let mut polarity = (base * intensity).clamp(-1.0, 1.0);
                if negate {
                    polarity *= -0.5;
                }
                hits.push(polarity);
            }
            negate = false;
            intensity = 1.0;
        }

        if hits.is_empty() {
            return (0.0, 0.0);
        }
        let polarity = (hits.iter().sum::<f32>() / hits.len() as f32).clamp(-1.0, 1.0);
        let subjectivity = (hits.len() as f32 / tokens.len() as f32).min(1.0);
        (polarity, subjectivity)
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let (polarity, subjectivity) = self.polarity(text);
        SentimentResult {
            label: SentimentLabel::from_polarity(polarity),
            confidence: round_to(polarity.abs().min(1.0), 3),
            raw_label: None,
            polarity: Some(round_to(polarity, 3)),
            subjectivity: Some(round_to(subjectivity, 3)),
            source: SignalSource::Fallback,
        }
    }
}

#[async_trait]
impl SentimentClassifier for LexiconSentiment {
    async fn classify(&self, text: &str) -> ModelResult<SentimentResult> {
        Ok(self.analyze(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Primary model with a lexicon safety net. Never fails.
#[derive(Clone)]
pub struct SentimentSignal {
    primary: Option<Arc<dyn SentimentClassifier>>,
    fallback: LexiconSentiment,
    timeout: Duration,
}

impl SentimentSignal {
    pub fn new(primary: Option<Arc<dyn SentimentClassifier>>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: LexiconSentiment,
            timeout,
        }
    }

    /// Lexicon only; used when no model is configured.
    pub fn fallback_only() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    pub fn has_model(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn classify(&self, text: &str) -> SentimentResult {
        if let Some(primary) = &self.primary {
            let outcome = match tokio::time::timeout(self.timeout, primary.classify(text)).await {
                Ok(result) => result,
                Err(_) => Err(ModelError::Timeout(self.timeout)),
            };
            match outcome {
                Ok(result) => return result,
                Err(e) => warn!(model = primary.name(), "sentiment model failed, using lexicon: {}", e),
            }
        }
        self.fallback.analyze(text)
    }
}
