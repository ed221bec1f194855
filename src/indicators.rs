//! Model-free mood indicators: stress density, intensity words, personal
//! involvement and temporal focus.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::text::{round_to, words, KeywordSet};

static STRESS_KEYWORDS: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&[
        "stressed", "overwhelmed", "burnout", "exhausted", "tired", "drained", "pressure", "burden",
    ])
});

static POSITIVE_INTENSITY: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&[
        "amazing", "wonderful", "fantastic", "excellent", "brilliant", "awesome", "perfect", "love",
    ])
});

static NEGATIVE_INTENSITY: Lazy<KeywordSet> = Lazy::new(|| {
    KeywordSet::new(&[
        "terrible", "awful", "horrible", "worst", "hate", "disgusting", "pathetic", "useless",
    ])
});

static PAST_KEYWORDS: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::new(&["yesterday", "last", "ago", "before", "was", "were"]));
static PRESENT_KEYWORDS: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::new(&["now", "today", "currently", "right now"]));
static FUTURE_KEYWORDS: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::new(&["tomorrow", "will", "going to", "next", "soon"]));

const PERSONAL_PRONOUNS: &[&str] = &["i", "me", "my", "myself", "mine"];

/// Stress keyword hits that saturate the stress level.
const STRESS_SATURATION: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemporalFocus {
    Past,
    Present,
    Future,
}

impl TemporalFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalFocus::Past => "past",
            TemporalFocus::Present => "present",
            TemporalFocus::Future => "future",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IndicatorSet {
    /// `min(stress hits / 3, 1)`, rounded to three places.
    pub stress_level: f32,
    pub positive_intensity: usize,
    pub negative_intensity: usize,
    /// Distinct first-person singular pronouns present, 0 to 5.
    pub personal_involvement: usize,
    pub temporal_focus: TemporalFocus,
    pub temporal_distribution: BTreeMap<String, usize>,
}

/// Extracts indicators from already-preprocessed text.
pub fn extract(text: &str) -> IndicatorSet {
    let lowered = text.to_lowercase();

    let stress_hits = STRESS_KEYWORDS.hits(&lowered) as f32;
    let stress_level = round_to((stress_hits / STRESS_SATURATION).min(1.0), 3);

    let tokens: HashSet<String> = words(&lowered).into_iter().collect();
    let personal_involvement = PERSONAL_PRONOUNS
        .iter()
        .filter(|p| tokens.contains(**p))
        .count();

    let counts = [
        (TemporalFocus::Past, PAST_KEYWORDS.hits(&lowered)),
        (TemporalFocus::Present, PRESENT_KEYWORDS.hits(&lowered)),
        (TemporalFocus::Future, FUTURE_KEYWORDS.hits(&lowered)),
    ];

    IndicatorSet {
        stress_level,
        positive_intensity: POSITIVE_INTENSITY.hits(&lowered),
        negative_intensity: NEGATIVE_INTENSITY.hits(&lowered),
        personal_involvement,
        temporal_focus: dominant_timeframe(&counts),
        temporal_distribution: counts
            .iter()
            .map(|(focus, count)| (focus.as_str().to_string(), *count))
            .collect(),
    }
}

/// The timeframe with a strictly highest count; present on ties or silence.
fn dominant_timeframe(counts: &[(TemporalFocus, usize)]) -> TemporalFocus {
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if max == 0 {
        return TemporalFocus::Present;
    }
    let mut leaders = counts.iter().filter(|(_, c)| *c == max);
    match (leaders.next(), leaders.next()) {
        (Some((focus, _)), None) => *focus,
        _ => TemporalFocus::Present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_saturates_at_three_hits() {
        let set = extract("stressed overwhelmed burnout exhausted");
        assert_eq!(set.stress_level, 1.0);
        let set = extract("so tired and drained");
        assert_eq!(set.stress_level, 0.667);
        let set = extract("a calm afternoon");
        assert_eq!(set.stress_level, 0.0);
    }

    #[test]
    fn test_intensity_counts() {
        let set = extract("An amazing, perfect day. Not the worst.");
        assert_eq!(set.positive_intensity, 2);
        assert_eq!(set.negative_intensity, 1);
    }

    #[test]
    fn test_personal_involvement_counts_distinct_pronouns() {
        let set = extract("I told my friend that I love mine, and me? Myself too.");
        assert_eq!(set.personal_involvement, 5);
        assert_eq!(extract("i i i i i i i i i i").personal_involvement, 1);
        // "mine" inside "determine" is not a pronoun
        assert_eq!(extract("They determine it").personal_involvement, 0);
    }

    #[test]
    fn test_keywords_match_inside_longer_words() {
        let set = extract("retired pressures burdens");
        assert_eq!(set.stress_level, 1.0);
    }

    #[test]
    fn test_temporal_focus() {
        assert_eq!(extract("Tomorrow I will start, soon.").temporal_focus, TemporalFocus::Future);
        assert_eq!(extract("Yesterday was long ago.").temporal_focus, TemporalFocus::Past);
        assert_eq!(extract("Nothing to see.").temporal_focus, TemporalFocus::Present);
    }

    #[test]
    fn test_temporal_tie_defaults_to_present() {
        let set = extract("Yesterday and tomorrow");
        assert_eq!(set.temporal_focus, TemporalFocus::Present);
        assert_eq!(set.temporal_distribution.get("past"), Some(&1));
        assert_eq!(set.temporal_distribution.get("future"), Some(&1));
        assert_eq!(set.temporal_distribution.get("present"), Some(&0));
    }
}
