//! Mood Lens: text summarization, mood detection and mood-conditioned
//! motivation, with deterministic fallbacks when learned models are missing.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod content;
pub mod emotion;
pub mod error;
pub mod indicators;
pub mod ml;
pub mod mood;
pub mod motivation;
pub mod registry;
pub mod sentiment;
pub mod summarizer;
pub mod text;
pub mod tfidf;
