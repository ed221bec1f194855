//! Mood resolution.
//!
//! Sentiment, emotion and indicator signals are fused by an ordered list of
//! guard rules ([`MOOD_RULES`]); the first rule that matches decides the mood.
//! The coarse [`MoodCategory`] is always derived from the mood, never decided
//! on its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::emotion::{Emotion, EmotionResult, EmotionSignal};
use crate::indicators::{self, IndicatorSet};
use crate::sentiment::{SentimentLabel, SentimentResult, SentimentSignal};
use crate::text::{preprocess, round_to};

/// Stress level above which stress overrides every other signal.
pub const DEFAULT_STRESS_OVERRIDE: f32 = 0.6;
/// Stress level above which descriptions mention stress.
pub const DEFAULT_STRESS_NOTE: f32 = 0.4;

const SENTIMENT_WEIGHT: f32 = 0.4;
const EMOTION_WEIGHT: f32 = 0.4;
const INVOLVEMENT_WEIGHT: f32 = 0.2;
/// Divisor for the distinct-pronoun count in the involvement term.
const INVOLVEMENT_SATURATION: f32 = 10.0;

const STRESS_CLAUSE: &str = " There are also signs of stress or pressure.";
const DEFAULT_SUGGESTIONS: &[&str] = &["Take care of yourself and stay positive."];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
    Angry,
    Stressed,
    Excited,
    Surprised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Mood::VeryPositive,
        Mood::Positive,
        Mood::Neutral,
        Mood::Negative,
        Mood::VeryNegative,
        Mood::Angry,
        Mood::Stressed,
        Mood::Excited,
        Mood::Surprised,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "very_positive",
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::VeryNegative => "very_negative",
            Mood::Angry => "angry",
            Mood::Stressed => "stressed",
            Mood::Excited => "excited",
            Mood::Surprised => "surprised",
        }
    }

    /// The fixed, total mood → category table.
    pub fn category(&self) -> MoodCategory {
        match self {
            Mood::VeryPositive | Mood::Positive | Mood::Excited => MoodCategory::Positive,
            Mood::Negative | Mood::VeryNegative | Mood::Angry | Mood::Stressed => MoodCategory::Negative,
            Mood::Neutral | Mood::Surprised => MoodCategory::Neutral,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::VeryPositive => "You seem to be in an excellent mood with high positivity and joy.",
            Mood::Positive => "You appear to be in a good mood with positive emotions.",
            Mood::Neutral => "Your mood appears to be balanced and neutral.",
            Mood::Negative => "You seem to be experiencing some negative emotions.",
            Mood::VeryNegative => {
                "You appear to be in a difficult emotional state with strong negative feelings."
            }
            Mood::Angry => "You seem to be feeling angry or frustrated about something.",
            Mood::Stressed => "You appear to be experiencing stress or feeling overwhelmed.",
            Mood::Excited => "You seem excited or pleasantly surprised about something.",
            Mood::Surprised => "You appear to be surprised or taken aback by something.",
        }
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Mood::VeryPositive => &[
                "Keep up the positive energy!",
                "Share your joy with others.",
                "Use this positive momentum for your goals.",
            ],
            Mood::Positive => &[
                "You're doing well! Keep it up.",
                "Try to maintain this positive outlook.",
                "Consider sharing positivity with others.",
            ],
            Mood::Neutral => &[
                "Consider engaging in activities you enjoy.",
                "Reflect on things you're grateful for.",
                "Maybe try something new today.",
            ],
            Mood::Negative => &[
                "It's okay to feel this way sometimes.",
                "Consider talking to someone you trust.",
                "Try engaging in self-care activities.",
            ],
            Mood::VeryNegative => &[
                "Remember that difficult times are temporary.",
                "Consider seeking support from friends or professionals.",
                "Focus on small, achievable goals.",
            ],
            Mood::Angry => &[
                "Take some deep breaths and try to relax.",
                "Consider physical exercise to release tension.",
                "Talk through your feelings with someone.",
            ],
            Mood::Stressed => &[
                "Try some relaxation techniques or meditation.",
                "Break down overwhelming tasks into smaller steps.",
                "Make sure to take breaks and rest.",
            ],
            Mood::Excited => &[
                "Channel this energy into productive activities!",
                "Share your excitement with others.",
                "Use this motivation to pursue your goals.",
            ],
            Mood::Surprised => &[
                "Take time to process what happened.",
                "Reflect on how this might affect your plans.",
                "Consider the positive aspects of unexpected events.",
            ],
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .iter()
            .find(|m| m.as_str() == needle)
            .copied()
            .ok_or_else(|| format!("unknown mood: {}", s))
    }
}

impl MoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "positive",
            MoodCategory::Negative => "negative",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Unknown => "unknown",
        }
    }
}

/// Tunable cut-offs for the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodThresholds {
    pub stress_override: f32,
    pub stress_note: f32,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            stress_override: DEFAULT_STRESS_OVERRIDE,
            stress_note: DEFAULT_STRESS_NOTE,
        }
    }
}

/// Borrowed view of the three signals a verdict is built from.
#[derive(Debug, Clone, Copy)]
pub struct MoodSignals<'a> {
    pub sentiment: &'a SentimentResult,
    pub emotion: &'a EmotionResult,
    pub indicators: &'a IndicatorSet,
}

pub type RuleFn = fn(&MoodSignals<'_>, &MoodThresholds) -> Option<Mood>;

/// One guard → result step of the priority chain.
pub struct MoodRule {
    pub name: &'static str,
    pub apply: RuleFn,
}

/// Evaluated top to bottom; the first `Some` wins. The last rule always matches.
pub const MOOD_RULES: [MoodRule; 6] = [
    MoodRule {
        name: "stress_override",
        apply: stress_override,
    },
    MoodRule {
        name: "positive_emotion",
        apply: positive_emotion,
    },
    MoodRule {
        name: "negative_emotion",
        apply: negative_emotion,
    },
    MoodRule {
        name: "anger",
        apply: anger,
    },
    MoodRule {
        name: "surprise",
        apply: surprise,
    },
    MoodRule {
        name: "sentiment_only",
        apply: sentiment_only,
    },
];

fn stress_override(signals: &MoodSignals<'_>, thresholds: &MoodThresholds) -> Option<Mood> {
    (signals.indicators.stress_level > thresholds.stress_override).then_some(Mood::Stressed)
}

fn positive_emotion(signals: &MoodSignals<'_>, _: &MoodThresholds) -> Option<Mood> {
    match signals.emotion.primary_emotion {
        Emotion::Joy | Emotion::Trust | Emotion::Anticipation => {
            Some(if signals.sentiment.label == SentimentLabel::Positive {
                Mood::VeryPositive
            } else {
                Mood::Positive
            })
        }
        _ => None,
    }
}

fn negative_emotion(signals: &MoodSignals<'_>, _: &MoodThresholds) -> Option<Mood> {
    match signals.emotion.primary_emotion {
        Emotion::Sadness | Emotion::Fear | Emotion::Disgust => {
            Some(if signals.sentiment.label == SentimentLabel::Negative {
                Mood::VeryNegative
            } else {
                Mood::Negative
            })
        }
        _ => None,
    }
}

fn anger(signals: &MoodSignals<'_>, _: &MoodThresholds) -> Option<Mood> {
    (signals.emotion.primary_emotion == Emotion::Anger).then_some(Mood::Angry)
}

fn surprise(signals: &MoodSignals<'_>, _: &MoodThresholds) -> Option<Mood> {
    (signals.emotion.primary_emotion == Emotion::Surprise).then(|| {
        if signals.sentiment.label == SentimentLabel::Positive {
            Mood::Excited
        } else {
            Mood::Surprised
        }
    })
}

fn sentiment_only(signals: &MoodSignals<'_>, _: &MoodThresholds) -> Option<Mood> {
    Some(match signals.sentiment.label {
        SentimentLabel::Positive => Mood::Positive,
        SentimentLabel::Negative => Mood::Negative,
        SentimentLabel::Neutral => Mood::Neutral,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoodVerdict {
    pub overall_mood: Mood,
    pub mood_category: MoodCategory,
    pub confidence: f32,
    pub description: String,
    pub suggestions: Vec<String>,
}

impl MoodVerdict {
    /// Verdict for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self {
            overall_mood: Mood::Neutral,
            mood_category: MoodCategory::Unknown,
            confidence: 0.0,
            description: "No text provided for analysis.".to_string(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoodResolver {
    thresholds: MoodThresholds,
}

impl MoodResolver {
    pub fn new(thresholds: MoodThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &MoodThresholds {
        &self.thresholds
    }

    /// Runs the rule chain. Returns the mood, its category and the rule that fired.
    pub fn resolve(&self, signals: &MoodSignals<'_>) -> (Mood, MoodCategory, &'static str) {
        for rule in &MOOD_RULES {
            if let Some(mood) = (rule.apply)(signals, &self.thresholds) {
                return (mood, mood.category(), rule.name);
            }
        }
        // sentiment_only always matches; kept for totality.
        (Mood::Neutral, Mood::Neutral.category(), "none")
    }

    pub fn confidence(&self, signals: &MoodSignals<'_>) -> f32 {
        let involvement = (signals.indicators.personal_involvement as f32 / INVOLVEMENT_SATURATION).min(1.0);
        let weighted = signals.sentiment.confidence * SENTIMENT_WEIGHT
            + signals.emotion.confidence * EMOTION_WEIGHT
            + involvement * INVOLVEMENT_WEIGHT;
        round_to(weighted.clamp(0.0, 1.0), 3)
    }

    pub fn describe(&self, mood: Mood, indicators: &IndicatorSet) -> String {
        let mut description = mood.description().to_string();
        if indicators.stress_level > self.thresholds.stress_note {
            description.push_str(STRESS_CLAUSE);
        }
        description
    }

    pub fn verdict(&self, signals: &MoodSignals<'_>) -> MoodVerdict {
        let (mood, category, rule) = self.resolve(signals);
        debug!(mood = mood.as_str(), rule, "mood resolved");
        MoodVerdict {
            overall_mood: mood,
            mood_category: category,
            confidence: self.confidence(signals),
            description: self.describe(mood, signals.indicators),
            suggestions: mood.suggestions().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Verdict plus the raw signals that produced it. The signals are absent when
/// the input was empty and the pipeline short-circuited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoodAnalysis {
    #[serde(flatten)]
    pub verdict: MoodVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<EmotionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorSet>,
}

/// Full pipeline: preprocess, gather signals, resolve.
#[derive(Clone)]
pub struct MoodAnalyzer {
    sentiment: SentimentSignal,
    emotion: EmotionSignal,
    resolver: MoodResolver,
}

impl MoodAnalyzer {
    pub fn new(sentiment: SentimentSignal, emotion: EmotionSignal, resolver: MoodResolver) -> Self {
        Self {
            sentiment,
            emotion,
            resolver,
        }
    }

    /// Lexicon and keyword fallbacks only, default thresholds.
    pub fn offline() -> Self {
        Self::new(
            SentimentSignal::fallback_only(),
            EmotionSignal::fallback_only(),
            MoodResolver::default(),
        )
    }

    pub fn sentiment_signal(&self) -> &SentimentSignal {
        &self.sentiment
    }

    pub fn emotion_signal(&self) -> &EmotionSignal {
        &self.emotion
    }

    pub async fn analyze(&self, text: &str) -> MoodAnalysis {
        if text.trim().is_empty() {
            return MoodAnalysis {
                verdict: MoodVerdict::empty(),
                sentiment: None,
                emotions: None,
                indicators: None,
            };
        }

        let processed = preprocess(text);
        let (sentiment, emotion) = tokio::join!(
            self.sentiment.classify(&processed),
            self.emotion.classify(&processed)
        );
        let indicators = indicators::extract(&processed);

        let verdict = self.resolver.verdict(&MoodSignals {
            sentiment: &sentiment,
            emotion: &emotion,
            indicators: &indicators,
        });

        MoodAnalysis {
            verdict,
            sentiment: Some(sentiment),
            emotions: Some(emotion),
            indicators: Some(indicators),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::indicators::TemporalFocus;
    use crate::sentiment::SignalSource;

    fn sentiment(label: SentimentLabel, confidence: f32) -> SentimentResult {
        SentimentResult {
            label,
            confidence,
            raw_label: None,
            polarity: None,
            subjectivity: None,
            source: SignalSource::Model,
        }
    }

    fn emotion(primary: Emotion, confidence: f32) -> EmotionResult {
        EmotionResult {
            primary_emotion: primary,
            confidence,
            distribution: BTreeMap::new(),
            source: SignalSource::Model,
        }
    }

    fn indicators(stress_level: f32, personal_involvement: usize) -> IndicatorSet {
        IndicatorSet {
            stress_level,
            positive_intensity: 0,
            negative_intensity: 0,
            personal_involvement,
            temporal_focus: TemporalFocus::Present,
            temporal_distribution: BTreeMap::new(),
        }
    }

    fn resolve(label: SentimentLabel, primary: Emotion, stress: f32) -> (Mood, MoodCategory, &'static str) {
        let s = sentiment(label, 0.9);
        let e = emotion(primary, 0.9);
        let i = indicators(stress, 0);
        MoodResolver::default().resolve(&MoodSignals {
            sentiment: &s,
            emotion: &e,
            indicators: &i,
        })
    }

    #[test]
    fn test_stress_overrides_everything() {
        for primary in Emotion::TAXONOMY {
            let (mood, category, rule) = resolve(SentimentLabel::Positive, primary, 0.667);
            assert_eq!(mood, Mood::Stressed);
            assert_eq!(category, MoodCategory::Negative);
            assert_eq!(rule, "stress_override");
        }
        // Exactly at the threshold does not override.
        let (mood, _, _) = resolve(SentimentLabel::Positive, Emotion::Joy, 0.6);
        assert_eq!(mood, Mood::VeryPositive);
    }

    #[test]
    fn test_positive_emotions() {
        assert_eq!(resolve(SentimentLabel::Positive, Emotion::Trust, 0.0).0, Mood::VeryPositive);
        assert_eq!(resolve(SentimentLabel::Neutral, Emotion::Anticipation, 0.0).0, Mood::Positive);
        assert_eq!(resolve(SentimentLabel::Negative, Emotion::Joy, 0.0).0, Mood::Positive);
    }

    #[test]
    fn test_negative_emotions() {
        assert_eq!(resolve(SentimentLabel::Negative, Emotion::Fear, 0.0).0, Mood::VeryNegative);
        assert_eq!(resolve(SentimentLabel::Positive, Emotion::Disgust, 0.0).0, Mood::Negative);
        assert_eq!(resolve(SentimentLabel::Neutral, Emotion::Sadness, 0.0).1, MoodCategory::Negative);
    }

    #[test]
    fn test_anger_and_surprise() {
        assert_eq!(resolve(SentimentLabel::Positive, Emotion::Anger, 0.0).0, Mood::Angry);
        let (mood, category, _) = resolve(SentimentLabel::Positive, Emotion::Surprise, 0.0);
        assert_eq!((mood, category), (Mood::Excited, MoodCategory::Positive));
        let (mood, category, _) = resolve(SentimentLabel::Negative, Emotion::Surprise, 0.0);
        assert_eq!((mood, category), (Mood::Surprised, MoodCategory::Neutral));
    }

    #[test]
    fn test_neutral_emotion_defers_to_sentiment() {
        assert_eq!(resolve(SentimentLabel::Positive, Emotion::Neutral, 0.0).0, Mood::Positive);
        assert_eq!(resolve(SentimentLabel::Negative, Emotion::Neutral, 0.0).0, Mood::Negative);
        let (mood, category, rule) = resolve(SentimentLabel::Neutral, Emotion::Neutral, 0.0);
        assert_eq!((mood, category, rule), (Mood::Neutral, MoodCategory::Neutral, "sentiment_only"));
    }

    #[test]
    fn test_category_always_matches_mood() {
        let labels = [SentimentLabel::Positive, SentimentLabel::Neutral, SentimentLabel::Negative];
        let emotions = Emotion::TAXONOMY.iter().copied().chain([Emotion::Neutral]);
        for primary in emotions {
            for label in labels {
                for stress in [0.0, 0.5, 0.9] {
                    let (mood, category, _) = resolve(label, primary, stress);
                    assert_eq!(category, mood.category());
                }
            }
        }
    }

    #[test]
    fn test_confidence_weights_and_clamp() {
        let s = sentiment(SentimentLabel::Positive, 0.5);
        let e = emotion(Emotion::Joy, 0.5);
        let i = indicators(0.0, 5);
        let signals = MoodSignals {
            sentiment: &s,
            emotion: &e,
            indicators: &i,
        };
        // 0.4*0.5 + 0.4*0.5 + 0.2*0.5
        assert_eq!(MoodResolver::default().confidence(&signals), 0.5);

        let s = sentiment(SentimentLabel::Positive, 1.0);
        let e = emotion(Emotion::Joy, 1.0);
        let i = indicators(0.0, 40);
        let signals = MoodSignals {
            sentiment: &s,
            emotion: &e,
            indicators: &i,
        };
        assert_eq!(MoodResolver::default().confidence(&signals), 1.0);
    }

    #[test]
    fn test_description_notes_stress_even_when_not_deciding() {
        let resolver = MoodResolver::default();
        let described = resolver.describe(Mood::Positive, &indicators(0.5, 0));
        assert!(described.starts_with("You appear to be in a good mood"));
        assert!(described.ends_with("signs of stress or pressure."));
        assert!(!resolver.describe(Mood::Positive, &indicators(0.333, 0)).contains("stress"));
    }

    #[test]
    fn test_custom_thresholds() {
        let resolver = MoodResolver::new(MoodThresholds {
            stress_override: 0.3,
            stress_note: 0.9,
        });
        let s = sentiment(SentimentLabel::Positive, 0.9);
        let e = emotion(Emotion::Joy, 0.9);
        let i = indicators(0.333, 0);
        let verdict = resolver.verdict(&MoodSignals {
            sentiment: &s,
            emotion: &e,
            indicators: &i,
        });
        assert_eq!(verdict.overall_mood, Mood::Stressed);
        assert!(!verdict.description.contains("signs of stress"));
    }

    #[test]
    fn test_mood_parsing() {
        assert_eq!("very_positive".parse::<Mood>(), Ok(Mood::VeryPositive));
        assert_eq!(" Stressed ".parse::<Mood>(), Ok(Mood::Stressed));
        assert!("melancholic".parse::<Mood>().is_err());
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        for text in ["", "   \n\t "] {
            let analysis = MoodAnalyzer::offline().analyze(text).await;
            assert_eq!(analysis.verdict.overall_mood, Mood::Neutral);
            assert_eq!(analysis.verdict.mood_category, MoodCategory::Unknown);
            assert_eq!(analysis.verdict.confidence, 0.0);
            assert!(analysis.sentiment.is_none());
        }
    }

    #[tokio::test]
    async fn test_offline_stress_text_resolves_stressed() {
        let analysis = MoodAnalyzer::offline()
            .analyze("I love my amazing job but I'm stressed overwhelmed burnout exhausted")
            .await;
        assert_eq!(analysis.verdict.overall_mood, Mood::Stressed);
        assert_eq!(analysis.indicators.as_ref().unwrap().stress_level, 1.0);
        assert!(analysis.verdict.description.contains("signs of stress"));
    }

    #[tokio::test]
    async fn test_stress_keywords_inside_inflected_words() {
        let analysis = MoodAnalyzer::offline().analyze("retired pressures burdens").await;
        assert_eq!(analysis.verdict.overall_mood, Mood::Stressed);
    }

    #[tokio::test]
    async fn test_offline_happy_text() {
        let analysis = MoodAnalyzer::offline()
            .analyze("Today I am so happy and grateful, everything is wonderful! https://x.co #win")
            .await;
        assert_eq!(analysis.verdict.overall_mood, Mood::VeryPositive);
        assert_eq!(analysis.verdict.mood_category, MoodCategory::Positive);
        assert!(analysis.verdict.confidence > 0.0 && analysis.verdict.confidence <= 1.0);
    }

    #[test]
    fn test_analysis_serializes_flat() {
        let analysis = MoodAnalysis {
            verdict: MoodVerdict::empty(),
            sentiment: None,
            emotions: None,
            indicators: None,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["overall_mood"], "neutral");
        assert_eq!(json["mood_category"], "unknown");
        assert!(json.get("sentiment").is_none());
    }
}
