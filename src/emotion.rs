//! Emotion signal: learned multi-class classifier with a keyword-vote fallback.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::error::{ModelError, ModelResult};
use crate::ml::{LabelScore, SidecarClient};
use crate::sentiment::SignalSource;
use crate::text::{round_to, KeywordSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Trust,
    Anticipation,
    Neutral,
}

impl Emotion {
    /// The keyword taxonomy in declaration order. Ties in the keyword vote go
    /// to whichever comes first here.
    pub const TAXONOMY: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Trust,
        Emotion::Anticipation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Trust => "trust",
            Emotion::Anticipation => "anticipation",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parses a model label. Labels outside the taxonomy collapse to neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "joy" => Emotion::Joy,
            "sadness" => Emotion::Sadness,
            "anger" => Emotion::Anger,
            "fear" => Emotion::Fear,
            "surprise" => Emotion::Surprise,
            "disgust" => Emotion::Disgust,
            "trust" => Emotion::Trust,
            "anticipation" => Emotion::Anticipation,
            _ => Emotion::Neutral,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &[
                "happy", "joyful", "excited", "cheerful", "delighted", "pleased", "glad", "thrilled",
                "elated", "content",
            ],
            Emotion::Sadness => &[
                "sad", "depressed", "unhappy", "melancholy", "down", "blue", "miserable", "dejected",
                "gloomy", "sorrowful",
            ],
            Emotion::Anger => &[
                "angry", "furious", "mad", "irritated", "annoyed", "frustrated", "enraged", "livid",
                "outraged", "irate",
            ],
            Emotion::Fear => &[
                "afraid", "scared", "terrified", "anxious", "worried", "nervous", "frightened",
                "panicked", "alarmed", "uneasy",
            ],
            Emotion::Surprise => &[
                "surprised", "amazed", "astonished", "shocked", "stunned", "bewildered", "startled",
                "astounded",
            ],
            Emotion::Disgust => &[
                "disgusted", "revolted", "sickened", "appalled", "repulsed", "nauseated", "horrified",
            ],
            Emotion::Trust => &[
                "trust", "confident", "secure", "assured", "certain", "optimistic", "hopeful", "positive",
            ],
            Emotion::Anticipation => &[
                "excited", "eager", "expectant", "hopeful", "looking forward", "anticipating",
            ],
            Emotion::Neutral => &[],
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static EMOTION_KEYWORDS: Lazy<Vec<(Emotion, KeywordSet)>> = Lazy::new(|| {
    Emotion::TAXONOMY
        .iter()
        .map(|emotion| (*emotion, KeywordSet::new(emotion.keywords())))
        .collect()
});

/// Confidence reported when no emotion keyword is present.
const NEUTRAL_CONFIDENCE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmotionResult {
    pub primary_emotion: Emotion,
    pub confidence: f32,
    /// Model probabilities, or keyword counts for the fallback.
    pub distribution: BTreeMap<String, f32>,
    pub source: SignalSource,
}

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> ModelResult<EmotionResult>;

    fn name(&self) -> &str;
}

/// Learned emotion model served by the sidecar.
pub struct RemoteEmotion {
    client: SidecarClient,
}

impl RemoteEmotion {
    pub fn new(client: SidecarClient) -> Self {
        Self { client }
    }
}

/// Builds a result from raw pipeline scores. The highest-scoring class wins
/// whatever order the sidecar sent them in.
pub fn from_predictions(predictions: &[LabelScore]) -> ModelResult<EmotionResult> {
    let top = predictions
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or(ModelError::EmptyOutput)?;
    let distribution = predictions
        .iter()
        .map(|p| (p.label.to_lowercase(), round_to(p.score.clamp(0.0, 1.0), 3)))
        .collect();
    Ok(EmotionResult {
        primary_emotion: Emotion::from_label(&top.label),
        confidence: round_to(top.score.clamp(0.0, 1.0), 3),
        distribution,
        source: SignalSource::Model,
    })
}

#[async_trait]
impl EmotionClassifier for RemoteEmotion {
    async fn classify(&self, text: &str) -> ModelResult<EmotionResult> {
        let predictions = self.client.emotion(text).await?;
        from_predictions(&predictions)
    }

    fn name(&self) -> &str {
        "sidecar-emotion"
    }
}

/// Keyword-frequency vote over the fixed taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEmotion;

impl KeywordEmotion {
    pub fn analyze(&self, text: &str) -> EmotionResult {
        let lowered = text.to_lowercase();
        let mut distribution = BTreeMap::new();
        let mut best: Option<(Emotion, usize)> = None;

        for (emotion, keywords) in EMOTION_KEYWORDS.iter() {
            let count = keywords.hits(&lowered);
            if count == 0 {
                continue;
            }
            distribution.insert(emotion.as_str().to_string(), count as f32);
            // Strictly greater keeps the earlier emotion on ties.
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((*emotion, count));
            }
        }

        match best {
            Some((emotion, count)) => EmotionResult {
                primary_emotion: emotion,
                confidence: (count as f32 / 10.0).min(1.0),
                distribution,
                source: SignalSource::Fallback,
            },
            None => EmotionResult {
                primary_emotion: Emotion::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
                distribution,
                source: SignalSource::Fallback,
            },
        }
    }
}

#[async_trait]
impl EmotionClassifier for KeywordEmotion {
    async fn classify(&self, text: &str) -> ModelResult<EmotionResult> {
        Ok(self.analyze(text))
    }

    fn name(&self) -> &str {
        "keywords"
    }
}

#[derive(Clone)]
pub struct EmotionSignal {
    primary: Option<Arc<dyn EmotionClassifier>>,
    fallback: KeywordEmotion,
    timeout: Duration,
}

impl EmotionSignal {
    pub fn new(primary: Option<Arc<dyn EmotionClassifier>>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: KeywordEmotion,
            timeout,
        }
    }

    pub fn fallback_only() -> Self {
        Self::new(None, Duration::from_secs(0))
    }

    pub fn has_model(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn classify(&self, text: &str) -> EmotionResult {
        if let Some(primary) = &self.primary {
            let outcome = match tokio::time::timeout(self.timeout, primary.classify(text)).await {
                Ok(result) => result,
                Err(_) => Err(ModelError::Timeout(self.timeout)),
            };
            match outcome {
                Ok(result) => return result,
                Err(e) => warn!(model = primary.name(), "emotion model failed, using keywords: {}", e),
            }
        }
        self.fallback.analyze(text)
    }
}
