//! Summarization: TF-IDF extractive ranking, an abstractive model seam and
//! the auto dispatcher that picks between them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::error::{ModelError, ModelResult};
use crate::ml::SidecarClient;
use crate::text::{round_to, split_sentences, word_count};
use crate::tfidf::TfIdfMatrix;

pub const DEFAULT_SENTENCES: usize = 3;
pub const DEFAULT_KEY_PHRASES: usize = 5;
/// Auto mode prefers abstractive above this many words.
pub const DEFAULT_AUTO_ABSTRACTIVE_MIN_WORDS: usize = 200;
/// Abstractive input is cut to this many words.
pub const DEFAULT_MAX_INPUT_WORDS: usize = 1024;
pub const DEFAULT_SUMMARY_MAX_LENGTH: usize = 150;
pub const DEFAULT_SUMMARY_MIN_LENGTH: usize = 30;

pub const EMPTY_SUMMARY: &str = "No content to summarize.";

static KEY_PHRASE_STOP_WORDS: Lazy<Vec<String>> = Lazy::new(|| get(LANGUAGE::English));

/// Requested summarization strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    #[default]
    Auto,
    Extractive,
    Abstractive,
}

impl FromStr for SummaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SummaryMode::Auto),
            "extractive" => Ok(SummaryMode::Extractive),
            "abstractive" => Ok(SummaryMode::Abstractive),
            other => Err(format!("unknown summary type '{}' (auto, extractive, abstractive)", other)),
        }
    }
}

/// Strategy that actually produced the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    Extractive,
    Abstractive,
    None,
}

impl fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SummaryMethod::Extractive => "extractive",
            SummaryMethod::Abstractive => "abstractive",
            SummaryMethod::None => "none",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResult {
    pub summary: String,
    pub method: SummaryMethod,
    /// Word count of the input.
    pub original_length: usize,
    pub summary_length: usize,
    /// Percentage of words removed, two decimals. Zero for empty input.
    pub compression_ratio: f32,
    pub key_phrases: Vec<String>,
}

impl SummaryResult {
    fn empty() -> Self {
        Self {
            summary: EMPTY_SUMMARY.to_string(),
            method: SummaryMethod::None,
            original_length: 0,
            summary_length: 0,
            compression_ratio: 0.0,
            key_phrases: Vec::new(),
        }
    }
}

/// Sequence-to-sequence summarization model.
#[async_trait]
pub trait AbstractiveModel: Send + Sync {
    async fn summarize(&self, text: &str, max_length: usize, min_length: usize) -> ModelResult<String>;

    fn name(&self) -> &str;
}

pub struct RemoteAbstractive {
    client: SidecarClient,
}

impl RemoteAbstractive {
    pub fn new(client: SidecarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AbstractiveModel for RemoteAbstractive {
    async fn summarize(&self, text: &str, max_length: usize, min_length: usize) -> ModelResult<String> {
        let summary = self.client.summarize(text, max_length, min_length).await?;
        if summary.trim().is_empty() {
            return Err(ModelError::EmptyOutput);
        }
        Ok(summary)
    }

    fn name(&self) -> &str {
        "sidecar-summarizer"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummarizerConfig {
    pub auto_abstractive_min_words: usize,
    pub max_input_words: usize,
    pub max_length: usize,
    pub min_length: usize,
    pub timeout: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            auto_abstractive_min_words: DEFAULT_AUTO_ABSTRACTIVE_MIN_WORDS,
            max_input_words: DEFAULT_MAX_INPUT_WORDS,
            max_length: DEFAULT_SUMMARY_MAX_LENGTH,
            min_length: DEFAULT_SUMMARY_MIN_LENGTH,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct Summarizer {
    model: Option<Arc<dyn AbstractiveModel>>,
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(model: Option<Arc<dyn AbstractiveModel>>, config: SummarizerConfig) -> Self {
        Self { model, config }
    }

    pub fn extractive_only() -> Self {
        Self::new(None, SummarizerConfig::default())
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarizes `text` and attaches [`DEFAULT_KEY_PHRASES`] key phrases.
    ///
    /// `num_sentences` bounds extractive output; the abstractive path uses the
    /// configured length bounds instead.
    pub async fn summarize(&self, text: &str, mode: SummaryMode, num_sentences: usize) -> SummaryResult {
        if text.trim().is_empty() {
            return SummaryResult::empty();
        }

        let original_length = word_count(text);
        let want_abstractive = match mode {
            SummaryMode::Extractive => false,
            SummaryMode::Abstractive => true,
            SummaryMode::Auto => original_length > self.config.auto_abstractive_min_words && self.has_model(),
        };

        let (summary, method) = if want_abstractive {
            self.abstractive(text, num_sentences).await
        } else {
            (extractive_summary(text, num_sentences), SummaryMethod::Extractive)
        };
        debug!(?mode, %method, original_length, "summary produced");

        let summary_length = word_count(&summary);
        SummaryResult {
            compression_ratio: compression_ratio(original_length, summary_length),
            key_phrases: key_phrases(text, DEFAULT_KEY_PHRASES),
            summary,
            method,
            original_length,
            summary_length,
        }
    }

    /// Runs the abstractive model on the truncated text. Falls back to an
    /// extractive summary of the full text when no model is configured or the
    /// call fails; the returned method says which one ran.
    pub async fn abstractive(&self, text: &str, num_sentences: usize) -> (String, SummaryMethod) {
        let Some(model) = &self.model else {
            debug!("no abstractive model, using extractive");
            return (extractive_summary(text, num_sentences), SummaryMethod::Extractive);
        };

        let input = truncate_words(text, self.config.max_input_words);
        let call = model.summarize(&input, self.config.max_length, self.config.min_length);
        let outcome = match tokio::time::timeout(self.config.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ModelError::Timeout(self.config.timeout)),
        };

        match outcome {
            Ok(summary) => (summary, SummaryMethod::Abstractive),
            Err(e) => {
                warn!(model = model.name(), "abstractive summarization failed, using extractive: {}", e);
                (extractive_summary(text, num_sentences), SummaryMethod::Extractive)
            }
        }
    }
}

/// Picks the `num_sentences` highest-scoring sentences and joins them in
/// their original order. Text with no more sentences than requested comes
/// back unchanged.
pub fn extractive_summary(text: &str, num_sentences: usize) -> String {
    if text.trim().is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let sentences = split_sentences(text);
    if sentences.len() <= num_sentences {
        return text.to_string();
    }

    let scores = match TfIdfMatrix::fit_transform(&sentences) {
        Ok(matrix) => matrix.row_sums(),
        Err(e) => {
            debug!("tf-idf failed ({}), taking leading sentences", e);
            return sentences[..num_sentences].join(" ");
        }
    };

    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    // Stable sort: equal scores keep the earlier sentence first.
    ranked.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]));
    let mut chosen: Vec<usize> = ranked.into_iter().take(num_sentences).collect();
    chosen.sort_unstable();

    chosen
        .iter()
        .map(|i| sentences[*i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Top terms by TF-IDF weight, each sentence treated as one document.
/// Looks at the best `2 * num_phrases` terms, drops those of two characters
/// or fewer and keeps `num_phrases`. Empty on empty input or when nothing
/// survives stop-word filtering.
pub fn key_phrases(text: &str, num_phrases: usize) -> Vec<String> {
    if text.trim().is_empty() || num_phrases == 0 {
        return Vec::new();
    }

    let sentences = split_sentences(text);
    let params = TfIdfParams::UnprocessedDocuments(&sentences, KEY_PHRASE_STOP_WORDS.as_slice(), None);
    let mut ranked = TfIdf::new(params).get_ranked_word_scores(word_count(text));
    if ranked.is_empty() {
        debug!("key phrase extraction found no terms");
        return Vec::new();
    }
    // Highest weight first, ties alphabetical.
    ranked.sort_by(|(a, wa), (b, wb)| wb.total_cmp(wa).then_with(|| a.cmp(b)));

    ranked
        .into_iter()
        .take(num_phrases * 2)
        .map(|(term, _)| term)
        .filter(|term| term.chars().count() > 2)
        .take(num_phrases)
        .collect()
}

/// `round((1 - summary / original) * 100, 2)`, or zero for an empty original.
pub fn compression_ratio(original_length: usize, summary_length: usize) -> f32 {
    if original_length == 0 {
        return 0.0;
    }
    round_to((1.0 - summary_length as f32 / original_length as f32) * 100.0, 2)
}

fn truncate_words(text: &str, max_words: usize) -> String {
    if word_count(text) <= max_words {
        return text.to_string();
    }
    text.split_whitespace().take(max_words).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERED: &str = "Compilers translate source programs into efficient machine instructions. \
        Okay. \
        Fine. \
        Engineers design reliable distributed storage clusters with careful replication. \
        Sure.";

    struct EchoWordCount;

    #[async_trait]
    impl AbstractiveModel for EchoWordCount {
        async fn summarize(&self, text: &str, _max: usize, _min: usize) -> ModelResult<String> {
            Ok(format!("saw {} words", word_count(text)))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct FailingModel;

    #[async_trait]
    impl AbstractiveModel for FailingModel {
        async fn summarize(&self, _text: &str, _max: usize, _min: usize) -> ModelResult<String> {
            Err(ModelError::Unavailable("offline".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct SlowModel;

    #[async_trait]
    impl AbstractiveModel for SlowModel {
        async fn summarize(&self, _text: &str, _max: usize, _min: usize) -> ModelResult<String> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok("too late".to_string())
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    fn long_text(words: usize) -> String {
        (0..words)
            .map(|i| if i % 12 == 11 { "gardens." } else { "river" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_extractive_identity_when_few_sentences() {
        let text = "Only two sentences here. This is the second one.";
        assert_eq!(extractive_summary(text, 3), text);
        assert_eq!(extractive_summary(text, 2), text);
    }

    #[test]
    fn test_extractive_keeps_original_order() {
        let summary = extractive_summary(ORDERED, 2);
        assert_eq!(
            summary,
            "Compilers translate source programs into efficient machine instructions. \
             Engineers design reliable distributed storage clusters with careful replication."
        );
    }

    #[test]
    fn test_extractive_never_longer_than_input() {
        let summary = extractive_summary(ORDERED, 3);
        assert!(word_count(&summary) <= word_count(ORDERED));
        assert_eq!(split_sentences(&summary).len(), 3);
    }

    #[test]
    fn test_extractive_falls_back_to_leading_sentences() {
        // Nothing but stop words: the vectorizer has no vocabulary.
        assert_eq!(extractive_summary("Of the. To it. In on.", 1), "Of the.");
    }

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio(100, 25), 75.0);
        assert_eq!(compression_ratio(3, 1), 66.67);
        assert_eq!(compression_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_key_phrases() {
        assert!(key_phrases("", 5).is_empty());
        assert!(key_phrases("Of the. To it.", 5).is_empty());

        let phrases = key_phrases(ORDERED, 4);
        assert!(!phrases.is_empty() && phrases.len() <= 4);
        assert!(phrases.iter().all(|p| p.chars().count() > 2));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Extractive".parse::<SummaryMode>(), Ok(SummaryMode::Extractive));
        assert!("bullet".parse::<SummaryMode>().is_err());
        let mode: SummaryMode = serde_json::from_str("\"abstractive\"").unwrap();
        assert_eq!(mode, SummaryMode::Abstractive);
    }

    #[tokio::test]
    async fn test_empty_text_sentinel() {
        let result = Summarizer::extractive_only().summarize("  \n ", SummaryMode::Auto, 3).await;
        assert_eq!(result.summary, EMPTY_SUMMARY);
        assert_eq!(result.method, SummaryMethod::None);
        assert_eq!(result.compression_ratio, 0.0);
        assert!(result.key_phrases.is_empty());
    }

    #[tokio::test]
    async fn test_auto_uses_abstractive_only_for_long_text_with_model() {
        let summarizer = Summarizer::new(Some(Arc::new(EchoWordCount)), SummarizerConfig::default());

        let long = long_text(240);
        let result = summarizer.summarize(&long, SummaryMode::Auto, 3).await;
        assert_eq!(result.method, SummaryMethod::Abstractive);
        assert_eq!(result.summary, "saw 240 words");
        assert_eq!(result.original_length, 240);

        let short = long_text(120);
        let result = summarizer.summarize(&short, SummaryMode::Auto, 3).await;
        assert_eq!(result.method, SummaryMethod::Extractive);

        let result = Summarizer::extractive_only().summarize(&long, SummaryMode::Auto, 3).await;
        assert_eq!(result.method, SummaryMethod::Extractive);
    }

    #[tokio::test]
    async fn test_abstractive_input_is_truncated() {
        let config = SummarizerConfig {
            max_input_words: 50,
            ..SummarizerConfig::default()
        };
        let summarizer = Summarizer::new(Some(Arc::new(EchoWordCount)), config);
        let result = summarizer.summarize(&long_text(80), SummaryMode::Abstractive, 3).await;
        assert_eq!(result.summary, "saw 50 words");
    }

    #[tokio::test]
    async fn test_abstractive_reports_extractive_when_it_falls_back() {
        let result = Summarizer::extractive_only()
            .summarize(ORDERED, SummaryMode::Abstractive, 2)
            .await;
        assert_eq!(result.method, SummaryMethod::Extractive);

        let failing = Summarizer::new(Some(Arc::new(FailingModel)), SummarizerConfig::default());
        let result = failing.summarize(ORDERED, SummaryMode::Abstractive, 2).await;
        assert_eq!(result.method, SummaryMethod::Extractive);
        assert_eq!(result.summary, extractive_summary(ORDERED, 2));
    }

    #[tokio::test]
    async fn test_abstractive_timeout_falls_back_to_extractive() {
        let config = SummarizerConfig {
            timeout: Duration::from_millis(20),
            ..SummarizerConfig::default()
        };
        let slow = Summarizer::new(Some(Arc::new(SlowModel)), config);
        let result = slow.summarize(ORDERED, SummaryMode::Abstractive, 2).await;
        assert_eq!(result.method, SummaryMethod::Extractive);
        assert_eq!(result.summary, extractive_summary(ORDERED, 2));
    }
}
