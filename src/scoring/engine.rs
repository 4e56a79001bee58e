use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::config::{KeywordRule, ScoringConfig};
use super::factors::{Effect, RangeOp};
use super::jitter::{Jitter, RandomJitter};
use super::keywords::KeywordTable;
use super::reason::{Category, ReasonBuilder};
use super::validation::validate_scoring;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Positive", "Negative", "Location", "Jitter"
    pub description: String, // e.g. "2 matches, first 'plant' -> +10 per match"
    pub before: f64,         // Score before this factor
    pub after: f64,          // Score after this factor
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub factors: Vec<FactorContribution>,
    pub jitter: f64,
}

/// Decision returned to callers. Serializes to `{ approved, score, reason }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub approved: bool,
    pub score: u8,
    pub reason: String,
    #[serde(skip)]
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    category: Category,
    effect: Effect,
    table: KeywordTable,
}

impl CompiledRule {
    fn compile(category: Category, rule: &KeywordRule) -> Result<Self> {
        Ok(Self {
            category,
            effect: Effect::parse(&rule.effect)?,
            table: KeywordTable::new(&rule.keywords),
        })
    }
}

/// Heuristic scorer for free-text project descriptions.
///
/// Built once from a validated [`ScoringConfig`] and shared read-only; every
/// call is independent.
#[derive(Debug, Clone)]
pub struct ProjectScorer {
    base_score: f64,
    jitter_amplitude: f64,
    approval: RangeOp,
    strong_approval: RangeOp,
    rules: [CompiledRule; 3],
}

impl Default for ProjectScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
            .unwrap_or_else(|e| panic!("default scoring config must compile: {}", e))
    }
}

impl ProjectScorer {
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        if let Err(errors) = validate_scoring(config) {
            bail!("Invalid scoring config: {}", errors.join("; "));
        }

        Ok(Self {
            base_score: config.base_score,
            jitter_amplitude: config.jitter,
            approval: RangeOp::parse(&config.approval)?,
            strong_approval: RangeOp::parse(&config.strong_approval)?,
            rules: [
                CompiledRule::compile(Category::Positive, &config.positive)?,
                CompiledRule::compile(Category::Negative, &config.negative)?,
                CompiledRule::compile(Category::Location, &config.location)?,
            ],
        })
    }

    pub fn jitter_amplitude(&self) -> f64 {
        self.jitter_amplitude
    }

    /// Score `text` with jitter drawn from the thread-local generator.
    pub fn score(&self, text: &str) -> ScoreResult {
        self.score_with(text, &mut RandomJitter::new(rand::rng()))
    }

    /// Score `text` with an injected jitter source. Total over all strings.
    pub fn score_with<J: Jitter + ?Sized>(&self, text: &str, jitter: &mut J) -> ScoreResult {
        let text = text.to_lowercase();
        let mut score = self.base_score;
        let mut factors = Vec::new();
        let mut reason = ReasonBuilder::new();

        for rule in &self.rules {
            let scan = rule.table.scan(&text);
            let Some(first) = scan.first else {
                continue;
            };

            let before = score;
            score = rule.effect.apply(score, scan.count);
            reason.note(rule.category, first);

            factors.push(FactorContribution {
                label: rule.category.label().to_string(),
                description: format!(
                    "{} match{}, first '{}' -> {}",
                    scan.count,
                    if scan.count == 1 { "" } else { "es" },
                    first,
                    rule.effect
                ),
                before,
                after: score,
            });
        }

        let drawn = jitter.sample(self.jitter_amplitude);
        factors.push(FactorContribution {
            label: "Jitter".to_string(),
            description: format!("{:+.2}", drawn),
            before: score,
            after: score + drawn,
        });
        score += drawn;

        let score = clamp_score(score);
        let approved = self.approval.matches(score as u64);
        let strong = self.strong_approval.matches(score as u64);

        ScoreResult {
            approved,
            score,
            reason: reason.finish(approved, strong),
            breakdown: ScoreBreakdown {
                base_score: self.base_score,
                factors,
                jitter: drawn,
            },
        }
    }
}

/// Round to the nearest integer and clamp into [0, 100].
fn clamp_score(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}
