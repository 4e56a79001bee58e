use serde::{Deserialize, Serialize};

use super::keywords::{LOCATION_KEYWORDS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

/// Main scoring configuration.
///
/// Every field is optional in YAML; missing fields take the defaults below,
/// which reproduce the reference Trust Simulator behavior.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   base_score: 50
///   jitter: 10
///   approval: ">=70"
///   strong_approval: ">80"
///   positive:
///     effect: "+10 per match"
///     keywords: ["farm", "solar"]
///   negative:
///     effect: "-20 per match"
///     keywords: ["casino"]
///   location:
///     effect: "+15"
///     keywords: ["nakuru"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Starting score before any keyword category is applied
    pub base_score: f64,

    /// Amplitude of the random adjustment; draws land in (-jitter, +jitter]
    pub jitter: f64,

    /// Range a final score must fall in to be approved
    pub approval: String,

    /// Range an approved score must fall in to earn the market sentence
    pub strong_approval: String,

    pub positive: KeywordRule,
    pub negative: KeywordRule,
    pub location: KeywordRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            jitter: 10.0,
            approval: ">=70".to_string(),
            strong_approval: ">80".to_string(),
            positive: KeywordRule::new("+10 per match", POSITIVE_KEYWORDS),
            negative: KeywordRule::new("-20 per match", NEGATIVE_KEYWORDS),
            location: KeywordRule::new("+15", LOCATION_KEYWORDS),
        }
    }
}

/// One keyword category: the effect applied when it matches, and its table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule {
    /// Effect string, e.g. "+10 per match", "-20 per match", "+15"
    pub effect: String,

    /// Lowercase substrings, scanned in declaration order
    pub keywords: Vec<String>,
}

impl KeywordRule {
    fn new(effect: &str, keywords: &[&str]) -> Self {
        Self {
            effect: effect.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}
