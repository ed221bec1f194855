//! Text utilities shared by every signal: cleaning, sentence and word
//! splitting, and keyword-set matching.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+").expect("valid url regex")
});
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").expect("valid mention regex"));
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("valid word regex"));

/// Abbreviations that end with a period but never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "fig", "approx", "dept", "mt", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Strips URLs, @mentions and #hashtags, then collapses whitespace.
pub fn preprocess(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lower-cased word tokens with surrounding punctuation removed.
/// Apostrophes stay inside words so "don't" is one token.
pub fn words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().trim_matches('\'').to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Splits text into sentences on `.`, `!` and `?`.
///
/// A terminator only ends a sentence when it is followed by whitespace (or the
/// end of input) and the word before it is not a known abbreviation or a single
/// initial. Closing quotes and brackets stay with the sentence they close.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if matches!(c, '.' | '!' | '?') {
            // Swallow runs like "?!" or "..." plus closing quotes/brackets.
            let mut end = i + 1;
            while end < chars.len() && matches!(chars[end].1, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                end += 1;
            }
            let at_boundary = end >= chars.len() || chars[end].1.is_whitespace();
            if at_boundary && !(c == '.' && ends_with_abbreviation(&text[start..chars[i].0])) {
                let end_byte = chars.get(end).map(|(b, _)| *b).unwrap_or(text.len());
                push_sentence(&mut sentences, &text[start..end_byte]);
                start = end_byte;
            }
            i = end;
        } else {
            i += 1;
        }
    }
    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

fn ends_with_abbreviation(before: &str) -> bool {
    let last = before
        .rsplit(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if last.is_empty() {
        return false;
    }
    // Single initials ("J. R. R. Tolkien") but not standalone numbers ("in 1999.")
    if last.chars().count() == 1 && last.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&last.as_str())
}

/// A fixed list of lower-case keywords or short phrases.
///
/// Matching is a plain substring test on lower-cased text, so "pressure" also
/// fires inside "pressures" and "mad" inside "made". Each keyword counts at
/// most once per text: `hits` is the number of distinct keywords present,
/// which is what the indicator and emotion heuristics vote with.
pub struct KeywordSet {
    keywords: Vec<&'static str>,
}

impl KeywordSet {
    pub fn new(keywords: &[&'static str]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }

    /// Number of distinct keywords contained in `lowered`.
    pub fn hits(&self, lowered: &str) -> usize {
        self.keywords.iter().filter(|kw| lowered.contains(*kw)).count()
    }
}

/// Rounds to `places` decimal places, half away from zero.
pub fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (value * factor).round() / factor
}
