//! Mood-keyed motivational content.
//!
//! The tables in [`crate::content`] are indexed once into a [`ContentLibrary`];
//! selection then samples from them with a caller-supplied random source.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::content;
use crate::mood::Mood;

/// Affirmations and coping strategies drawn per package.
pub const SAMPLE_SIZE: usize = 3;

type Table = HashMap<Mood, &'static [&'static str]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MotivationPackage {
    #[serde(rename = "motivational_quote")]
    pub quote: String,
    pub affirmations: Vec<String>,
    pub coping_strategies: Vec<String>,
    pub success_tip: String,
    pub encouragement: String,
    /// The mood string exactly as requested.
    pub mood_addressed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMotivation {
    pub daily_quote: String,
    pub daily_affirmation: String,
    pub success_tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmergencySupport {
    pub message: String,
    pub crisis_resources: Vec<String>,
    pub immediate_strategies: Vec<String>,
}

/// Immutable content index, built once at startup and shared.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    quotes: Table,
    affirmations: Table,
    coping_strategies: Table,
    success_tips: &'static [&'static str],
}

fn index(lookup: fn(Mood) -> Option<&'static [&'static str]>) -> Table {
    Mood::ALL
        .iter()
        .filter_map(|mood| lookup(*mood).map(|items| (*mood, items)))
        .collect()
}

impl ContentLibrary {
    /// The library compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            quotes: index(content::quotes),
            affirmations: index(content::affirmations),
            coping_strategies: index(content::coping_strategies),
            success_tips: content::SUCCESS_TIPS,
        }
    }

    /// The list for `mood`, or the neutral list when the mood has none.
    fn bucket(table: &Table, mood: Mood) -> &'static [&'static str] {
        table
            .get(&mood)
            .or_else(|| table.get(&Mood::Neutral))
            .copied()
            .unwrap_or(&[])
    }

    /// Builds a package for a bare mood string. Unknown moods get the neutral
    /// content and the generic encouragement; nothing here fails.
    pub fn select<R: Rng + ?Sized>(&self, mood: &str, rng: &mut R) -> MotivationPackage {
        let parsed = mood.parse::<Mood>().ok();
        if parsed.is_none() {
            debug!(mood, "unrecognised mood, using neutral content");
        }
        let key = parsed.unwrap_or(Mood::Neutral);

        let quote = Self::bucket(&self.quotes, key)
            .choose(rng)
            .copied()
            .unwrap_or(content::FALLBACK_QUOTE);
        let affirmations = sample(Self::bucket(&self.affirmations, key), rng);
        let coping_strategies = sample(Self::bucket(&self.coping_strategies, key), rng);
        let success_tip = self.success_tip(rng);
        let encouragement = parsed
            .map(content::encouragement)
            .unwrap_or(content::GENERIC_ENCOURAGEMENT);

        MotivationPackage {
            quote: quote.to_string(),
            affirmations,
            coping_strategies,
            success_tip,
            encouragement: encouragement.to_string(),
            mood_addressed: mood.to_string(),
        }
    }

    pub fn daily<R: Rng + ?Sized>(&self, rng: &mut R) -> DailyMotivation {
        DailyMotivation {
            daily_quote: pick(content::DAILY_QUOTES, rng),
            daily_affirmation: pick(content::DAILY_AFFIRMATIONS, rng),
            success_tip: self.success_tip(rng),
        }
    }

    pub fn emergency_support(&self) -> EmergencySupport {
        EmergencySupport {
            message: content::CRISIS_MESSAGE.to_string(),
            crisis_resources: content::CRISIS_RESOURCES.iter().map(|s| s.to_string()).collect(),
            immediate_strategies: content::IMMEDIATE_STRATEGIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn success_tip<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(self.success_tips, rng)
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Up to [`SAMPLE_SIZE`] distinct items.
fn sample<R: Rng + ?Sized>(items: &[&str], rng: &mut R) -> Vec<String> {
    items
        .choose_multiple(rng, SAMPLE_SIZE)
        .map(|s| s.to_string())
        .collect()
}

fn pick<R: Rng + ?Sized>(items: &[&str], rng: &mut R) -> String {
    items.choose(rng).map(|s| s.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn contains(list: Option<&'static [&'static str]>, item: &str) -> bool {
        list.unwrap_or(&[]).contains(&item)
    }

    #[test]
    fn test_package_for_known_mood() {
        let library = ContentLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        let package = library.select("stressed", &mut rng);

        assert!(contains(content::quotes(Mood::Stressed), &package.quote));
        assert_eq!(package.affirmations.len(), 3);
        assert_eq!(package.coping_strategies.len(), 3);
        assert!(package
            .affirmations
            .iter()
            .all(|a| contains(content::affirmations(Mood::Stressed), a)));
        assert!(content::SUCCESS_TIPS.contains(&package.success_tip.as_str()));
        assert_eq!(package.encouragement, content::encouragement(Mood::Stressed));
        assert_eq!(package.mood_addressed, "stressed");
    }

    #[test]
    fn test_samples_are_without_replacement() {
        let library = ContentLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let package = library.select("negative", &mut rng);
            let unique: HashSet<&String> = package.affirmations.iter().collect();
            assert_eq!(unique.len(), package.affirmations.len());
            let unique: HashSet<&String> = package.coping_strategies.iter().collect();
            assert_eq!(unique.len(), package.coping_strategies.len());
        }
    }

    #[test]
    fn test_unknown_mood_uses_neutral_bucket() {
        let library = ContentLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(3);
        let package = library.select("melancholic", &mut rng);

        assert!(contains(content::quotes(Mood::Neutral), &package.quote));
        assert!(package
            .coping_strategies
            .iter()
            .all(|s| contains(content::coping_strategies(Mood::Neutral), s)));
        assert_eq!(package.encouragement, content::GENERIC_ENCOURAGEMENT);
        assert_eq!(package.mood_addressed, "melancholic");
    }

    #[test]
    fn test_missing_lists_fall_back_per_kind() {
        // Excited has its own quotes and encouragement but borrows neutral
        // affirmations and strategies.
        let library = ContentLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(11);
        let package = library.select("excited", &mut rng);

        assert!(contains(content::quotes(Mood::Excited), &package.quote));
        assert!(package
            .affirmations
            .iter()
            .all(|a| contains(content::affirmations(Mood::Neutral), a)));
        assert_eq!(package.encouragement, content::encouragement(Mood::Excited));
    }

    #[test]
    fn test_same_seed_same_package() {
        let library = ContentLibrary::embedded();
        let a = library.select("positive", &mut StdRng::seed_from_u64(42));
        let b = library.select("positive", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_daily_and_emergency() {
        let library = ContentLibrary::embedded();
        let daily = library.daily(&mut StdRng::seed_from_u64(5));
        assert!(content::DAILY_QUOTES.contains(&daily.daily_quote.as_str()));
        assert!(content::DAILY_AFFIRMATIONS.contains(&daily.daily_affirmation.as_str()));

        let support = library.emergency_support();
        assert_eq!(support.crisis_resources.len(), content::CRISIS_RESOURCES.len());
        assert!(support.crisis_resources[0].contains("988"));
    }

    #[test]
    fn test_package_serializes_quote_as_motivational_quote() {
        let package = ContentLibrary::embedded().select("neutral", &mut StdRng::seed_from_u64(0));
        let json = serde_json::to_value(&package).unwrap();
        assert!(json.get("motivational_quote").is_some());
        assert!(json.get("quote").is_none());
    }
}
