use anyhow::{bail, Result};

/// Comparison against an integer score, used for the approval thresholds.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeOp {
    LessThan(u64),
    LessEqual(u64),
    GreaterThan(u64),
    GreaterEqual(u64),
    Equal(u64),
    Between(u64, u64), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(val.trim().parse()?))
        } else if let Some((low, high)) = s.split_once('-') {
            if low.trim().is_empty() {
                bail!("Invalid range format: {}", s)
            }
            let low: u64 = low.trim().parse()?;
            let high: u64 = high.trim().parse()?;
            if low > high {
                bail!("Range start {} is greater than end {}", low, high)
            }
            Ok(RangeOp::Between(low, high))
        } else {
            Ok(RangeOp::Equal(s.parse()?))
        }
    }

    pub fn matches(&self, value: u64) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
            RangeOp::Equal(n) => value == *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
        }
    }
}

/// Score adjustment attached to a keyword category.
///
/// Flat effects apply once when the category matched at all; per-match
/// effects scale with the number of keywords found.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Add(f64),
    Multiply(f64),
    AddPerMatch(f64),
    MultiplyPerMatch(f64),
}

impl Effect {
    /// Parse `+N`, `-N`, `xN`, optionally followed by `per match` (or `per 1`).
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((effect_part, per_part)) = s.split_once(" per ") {
            let per_part = per_part.trim();
            if per_part != "match" && per_part != "1" {
                bail!("Unsupported unit '{}', expected 'per match'", per_part);
            }
            Ok(match Self::parse_flat(effect_part)? {
                Effect::Add(n) | Effect::AddPerMatch(n) => Effect::AddPerMatch(n),
                Effect::Multiply(n) | Effect::MultiplyPerMatch(n) => Effect::MultiplyPerMatch(n),
            })
        } else {
            Self::parse_flat(s)
        }
    }

    fn parse_flat(s: &str) -> Result<Self> {
        let s = s.trim();
        let effect = if let Some(val) = s.strip_prefix('+') {
            Effect::Add(val.trim().parse()?)
        } else if let Some(val) = s.strip_prefix('-') {
            Effect::Add(-val.trim().parse::<f64>()?)
        } else if let Some(val) = s.strip_prefix('x') {
            Effect::Multiply(val.trim().parse()?)
        } else {
            bail!("Effect must start with +, - or x: {}", s)
        };

        match effect {
            Effect::Add(n) | Effect::Multiply(n) if !n.is_finite() => {
                bail!("Effect value must be finite: {}", s)
            }
            effect => Ok(effect),
        }
    }

    /// Apply effect to score. `matches` is the number of keywords found.
    pub fn apply(&self, score: f64, matches: usize) -> f64 {
        match self {
            Effect::Add(n) => score + n,
            Effect::Multiply(n) => score * n,
            Effect::AddPerMatch(n) => score + (n * matches as f64),
            Effect::MultiplyPerMatch(n) => score * n.powi(matches as i32),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Add(n) => write!(f, "{:+}", n),
            Effect::Multiply(n) => write!(f, "x{}", n),
            Effect::AddPerMatch(n) => write!(f, "{:+} per match", n),
            Effect::MultiplyPerMatch(n) => write!(f, "x{} per match", n),
        }
    }
}
