//! Combined analysis: summary, mood and motivation in one report.
//!
//! Shared by the HTTP server and the command-line front-end.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Settings;
use crate::motivation::{ContentLibrary, MotivationPackage};
use crate::mood::{MoodAnalysis, MoodAnalyzer};
use crate::registry::ModelRegistry;
use crate::summarizer::{SummaryMode, SummaryResult, Summarizer, DEFAULT_SENTENCES};
use crate::text::round_to;

pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub include_summary: bool,
    pub include_mood: bool,
    pub include_motivation: bool,
    pub summary_type: SummaryMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_summary: true,
            include_mood: true,
            include_motivation: true,
            summary_type: SummaryMode::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub summary: Option<SummaryResult>,
    pub mood: Option<MoodAnalysis>,
    /// Only present when mood analysis ran.
    pub motivation: Option<MotivationPackage>,
    /// Seconds, three decimals.
    pub processing_time: f64,
    pub success: bool,
    pub message: String,
}

/// Everything a request needs, built once and shared.
#[derive(Clone)]
pub struct TextAnalyzer {
    mood: MoodAnalyzer,
    summarizer: Summarizer,
    library: Arc<ContentLibrary>,
}

impl TextAnalyzer {
    pub fn new(mood: MoodAnalyzer, summarizer: Summarizer, library: Arc<ContentLibrary>) -> Self {
        Self {
            mood,
            summarizer,
            library,
        }
    }

    pub fn from_registry(registry: &ModelRegistry, settings: &Settings) -> Self {
        Self::new(
            registry.mood_analyzer(settings.thresholds),
            registry.summarizer(settings.summarizer),
            Arc::new(ContentLibrary::embedded()),
        )
    }

    /// Fallback classifiers only, default settings.
    pub fn offline() -> Self {
        Self::from_registry(&ModelRegistry::offline(), &Settings::default())
    }

    pub fn mood(&self) -> &MoodAnalyzer {
        &self.mood
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Motivation for a mood string, sampled with the thread-local RNG.
    pub fn motivate(&self, mood: &str) -> MotivationPackage {
        self.library.select(mood, &mut rand::thread_rng())
    }

    /// Summary and mood run concurrently; motivation follows the mood.
    pub async fn analyze(&self, text: &str, options: AnalysisOptions) -> AnalysisReport {
        let started = Instant::now();
        let analysis_id = Uuid::new_v4();
        debug!(%analysis_id, chars = text.chars().count(), ?options, "analysis started");

        let summary_task = async {
            if options.include_summary {
                Some(self.summarizer.summarize(text, options.summary_type, DEFAULT_SENTENCES).await)
            } else {
                None
            }
        };
        let mood_task = async {
            if options.include_mood {
                Some(self.mood.analyze(text).await)
            } else {
                None
            }
        };
        let (summary, mood) = tokio::join!(summary_task, mood_task);

        let motivation = match (&mood, options.include_motivation) {
            (Some(analysis), true) => Some(self.motivate(analysis.verdict.overall_mood.as_str())),
            _ => None,
        };

        let processing_time = round_to(started.elapsed().as_secs_f32(), 3) as f64;
        info!(
            %analysis_id,
            mood = ?mood.as_ref().map(|m| m.verdict.overall_mood),
            method = ?summary.as_ref().map(|s| s.method),
            processing_time,
            "✅ Analysis complete"
        );

        AnalysisReport {
            analysis_id,
            analyzed_at: Utc::now(),
            summary,
            mood,
            motivation,
            processing_time,
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    const JOURNAL: &str = "I finally finished the marathon today and I am so happy. \
        My legs were exhausted after the long climb. \
        The crowd near the finish line was wonderful and loud. \
        Tomorrow I will rest and celebrate with friends.";

    #[tokio::test]
    async fn test_full_report() {
        let report = TextAnalyzer::offline().analyze(JOURNAL, AnalysisOptions::default()).await;
        assert!(report.success);
        assert_eq!(report.message, SUCCESS_MESSAGE);

        let summary = report.summary.expect("summary requested");
        assert_eq!(summary.original_length, crate::text::word_count(JOURNAL));
        assert!(summary.key_phrases.len() <= 5);

        let mood = report.mood.expect("mood requested");
        let motivation = report.motivation.expect("motivation follows mood");
        assert_eq!(motivation.mood_addressed, mood.verdict.overall_mood.as_str());
    }

    #[tokio::test]
    async fn test_motivation_requires_mood() {
        let options = AnalysisOptions {
            include_mood: false,
            ..AnalysisOptions::default()
        };
        let report = TextAnalyzer::offline().analyze(JOURNAL, options).await;
        assert!(report.mood.is_none());
        assert!(report.motivation.is_none());
        assert!(report.summary.is_some());
    }

    #[tokio::test]
    async fn test_sections_can_be_skipped() {
        let options = AnalysisOptions {
            include_summary: false,
            include_motivation: false,
            ..AnalysisOptions::default()
        };
        let report = TextAnalyzer::offline().analyze("I am furious and annoyed.", options).await;
        assert!(report.summary.is_none());
        assert!(report.motivation.is_none());
        assert_eq!(report.mood.unwrap().verdict.overall_mood, Mood::Angry);
    }

    #[tokio::test]
    async fn test_reports_get_distinct_ids() {
        let analyzer = TextAnalyzer::offline();
        let a = analyzer.analyze("Fine.", AnalysisOptions::default()).await;
        let b = analyzer.analyze("Fine.", AnalysisOptions::default()).await;
        assert_ne!(a.analysis_id, b.analysis_id);
    }
}
