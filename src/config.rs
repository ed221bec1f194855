//! Environment-driven settings. Every key is optional.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::mood::{MoodThresholds, DEFAULT_STRESS_NOTE, DEFAULT_STRESS_OVERRIDE};
use crate::summarizer::{
    SummarizerConfig, DEFAULT_AUTO_ABSTRACTIVE_MIN_WORDS, DEFAULT_MAX_INPUT_WORDS, DEFAULT_SUMMARY_MAX_LENGTH,
    DEFAULT_SUMMARY_MIN_LENGTH,
};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ML_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub addr: String,
    /// Base URL of the model sidecar. `None` runs on fallbacks only.
    pub sidecar_url: Option<String>,
    pub ml_timeout: Duration,
    pub thresholds: MoodThresholds,
    pub summarizer: SummarizerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ml_timeout = Duration::from_millis(parse_or(&lookup, "ML_TIMEOUT_MS", DEFAULT_ML_TIMEOUT_MS));

        let sidecar_url = lookup("ML_SIDECAR_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            addr: lookup("MOOD_LENS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            sidecar_url,
            ml_timeout,
            thresholds: MoodThresholds {
                stress_override: parse_or(&lookup, "STRESS_OVERRIDE_THRESHOLD", DEFAULT_STRESS_OVERRIDE),
                stress_note: parse_or(&lookup, "STRESS_NOTE_THRESHOLD", DEFAULT_STRESS_NOTE),
            },
            summarizer: SummarizerConfig {
                auto_abstractive_min_words: parse_or(
                    &lookup,
                    "AUTO_ABSTRACTIVE_MIN_WORDS",
                    DEFAULT_AUTO_ABSTRACTIVE_MIN_WORDS,
                ),
                max_input_words: parse_or(&lookup, "ABSTRACTIVE_MAX_INPUT_WORDS", DEFAULT_MAX_INPUT_WORDS),
                max_length: parse_or(&lookup, "SUMMARY_MAX_LENGTH", DEFAULT_SUMMARY_MAX_LENGTH),
                min_length: parse_or(&lookup, "SUMMARY_MIN_LENGTH", DEFAULT_SUMMARY_MIN_LENGTH),
                timeout: ml_timeout,
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ {}={:?} is invalid ({}), using {}", key, raw, e, default);
                default
            }
        },
    }
}
