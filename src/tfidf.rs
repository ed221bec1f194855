//! TF-IDF over the sentences of a single document, used to score sentences
//! for extractive summaries.
//!
//! Term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1` and L2-normalised
//! rows. Tokens are lower-cased runs of two or more word characters with
//! English stop words removed. The vocabulary is sorted so column order, and
//! therefore every tie-break downstream, is deterministic.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use stop_words::{get, LANGUAGE};

use crate::error::TfIdfError;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

static STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
});

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| !STOP_WORDS.contains(t))
        .collect()
}

/// Sparse document-term matrix. Each row holds `(column, weight)` pairs.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<(usize, f32)>>,
}

impl TfIdfMatrix {
    /// Fits the vocabulary on `documents` and transforms them in one pass.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Result<Self, TfIdfError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(TfIdfError::EmptyVocabulary);
        }

        let n = documents.len() as f32;
        let vocabulary: Vec<String> = document_frequency.keys().map(|t| t.to_string()).collect();
        let columns: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();
        let idf: Vec<f32> = document_frequency
            .values()
            .map(|df| ((1.0 + n) / (1.0 + *df as f32)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
                for token in tokens {
                    if let Some(&col) = columns.get(token.as_str()) {
                        *counts.entry(col).or_insert(0.0) += 1.0;
                    }
                }
                let mut row: Vec<(usize, f32)> = counts.into_iter().map(|(col, tf)| (col, tf * idf[col])).collect();
                let norm = row.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for (_, w) in row.iter_mut() {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        Ok(Self { vocabulary, rows })
    }

    /// Feature names, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    /// Sum of term weights per document.
    pub fn row_sums(&self) -> Vec<f32> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|(_, w)| w).sum())
            .collect()
    }
}
