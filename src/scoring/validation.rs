use super::config::{KeywordRule, ScoringConfig};
use super::factors::{Effect, RangeOp};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !config.base_score.is_finite() || config.base_score < 0.0 {
        errors.push("scoring.base_score: must be a non-negative number".to_string());
    }

    if !config.jitter.is_finite() || config.jitter < 0.0 {
        errors.push("scoring.jitter: must be a non-negative number".to_string());
    }

    if let Err(e) = RangeOp::parse(&config.approval) {
        errors.push(format!(
            "scoring.approval: invalid '{}' - {}",
            config.approval, e
        ));
    }

    if let Err(e) = RangeOp::parse(&config.strong_approval) {
        errors.push(format!(
            "scoring.strong_approval: invalid '{}' - {}",
            config.strong_approval, e
        ));
    }

    validate_rule("positive", &config.positive, &mut errors);
    validate_rule("negative", &config.negative, &mut errors);
    validate_rule("location", &config.location, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_rule(name: &str, rule: &KeywordRule, errors: &mut Vec<String>) {
    if let Err(e) = Effect::parse(&rule.effect) {
        errors.push(format!(
            "scoring.{}.effect: invalid '{}' - {}",
            name, rule.effect, e
        ));
    }

    // An empty keyword is a substring of every text
    for (i, keyword) in rule.keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            errors.push(format!("scoring.{}.keywords[{}]: must not be empty", name, i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_table_is_valid() {
        let mut config = ScoringConfig::default();
        config.location.keywords.clear();
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_negative_base_score() {
        let config = ScoringConfig {
            base_score: -10.0,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("base_score"));
    }

    #[test]
    fn test_non_finite_jitter() {
        let config = ScoringConfig {
            jitter: f64::NAN,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.jitter"));
    }

    #[test]
    fn test_invalid_approval_range() {
        let config = ScoringConfig {
            approval: "seventy".to_string(),
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.approval"));
    }

    #[test]
    fn test_invalid_effect() {
        let mut config = ScoringConfig::default();
        config.negative.effect = "minus twenty".to_string();
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.negative.effect"));
    }

    #[test]
    fn test_blank_keyword() {
        let mut config = ScoringConfig::default();
        config.positive.keywords.push("   ".to_string());
        let errors = validate_scoring(&config).unwrap_err();
        let last = config.positive.keywords.len() - 1;
        assert_eq!(
            errors,
            vec![format!("scoring.positive.keywords[{}]: must not be empty", last)]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig {
            base_score: -10.0,                 // Error 1
            strong_approval: "bad".to_string(), // Error 2
            ..ScoringConfig::default()
        };
        config.location.effect = "15".to_string(); // Error 3
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
