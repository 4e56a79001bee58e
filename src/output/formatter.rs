use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::ScoreResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a simulation result for the terminal:
///
/// ```text
/// APPROVED  Trust Score: 85%
///   Project involves plant which is a positive indicator. ...
/// ```
///
/// The reason is word-wrapped to `width` when known.
pub fn format_result(result: &ScoreResult, use_colors: bool, width: Option<usize>) -> String {
    let verdict = if result.approved { "APPROVED" } else { "REJECTED" };
    let score = format!("Trust Score: {}%", result.score);

    let headline = if use_colors {
        if result.approved {
            format!("{}  {}", verdict.green().bold(), score.bold())
        } else {
            format!("{}  {}", verdict.red().bold(), score.bold())
        }
    } else {
        format!("{}  {}", verdict, score)
    };

    let indent = "  ";
    let reason = match width {
        Some(w) if w > indent.len() + 20 => wrap_words(&result.reason, w - indent.len()),
        _ => vec![result.reason.clone()],
    };

    let mut lines = vec![headline];
    lines.extend(reason.into_iter().map(|line| format!("{}{}", indent, line)));
    lines.join("\n")
}

/// Format the factor-by-factor breakdown (for verbose mode)
pub fn format_breakdown(result: &ScoreResult) -> String {
    let breakdown = &result.breakdown;
    let mut lines = vec![format!("  Base: {}", trim_float(breakdown.base_score))];

    for factor in &breakdown.factors {
        lines.push(format!(
            "  {}: {} ({} -> {})",
            factor.label,
            factor.description,
            trim_float(factor.before),
            trim_float(factor.after)
        ));
    }

    lines.push(format!("  Final: {} (rounded, clamped to 0-100)", result.score));
    lines.join("\n")
}

/// Format the `{ approved, score, reason }` response body
pub fn format_json(result: &ScoreResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a float without a trailing ".00" for whole numbers
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FixedJitter, ProjectScorer};

    fn sample(text: &str, jitter: f64) -> ScoreResult {
        ProjectScorer::default().score_with(text, &mut FixedJitter(jitter))
    }

    #[test]
    fn test_format_result_approved_plain() {
        let result = sample("Plant corn in Nakuru, Kenya", 0.0);
        let output = format_result(&result, false, None);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("APPROVED  Trust Score: 85%"));
        assert!(lines.next().unwrap().starts_with("  Project involves plant"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_format_result_rejected_plain() {
        let result = sample("", 0.0);
        let output = format_result(&result, false, None);
        assert!(output.starts_with("REJECTED  Trust Score: 50%"));
    }

    #[test]
    fn test_format_result_wraps_reason() {
        let result = sample("Plant corn in Nakuru, Kenya", 0.0);
        let output = format_result(&result, false, Some(40));
        for line in output.lines().skip(1) {
            assert!(line.chars().count() <= 40, "too long: {:?}", line);
            assert!(line.starts_with("  "));
        }
        assert!(output.lines().count() > 3);
    }

    #[test]
    fn test_format_result_narrow_terminal_does_not_wrap() {
        let result = sample("farm", 0.0);
        let output = format_result(&result, false, Some(10));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_format_breakdown() {
        let result = sample("Plant corn in Nakuru, Kenya", -2.5);
        let output = format_breakdown(&result);
        assert!(output.contains("Base: 50"));
        assert!(output.contains("Positive: 2 matches, first 'plant' -> +10 per match (50 -> 70)"));
        assert!(output.contains("Location: 2 matches, first 'kenya' -> +15 (70 -> 85)"));
        assert!(output.contains("Jitter: -2.50 (85 -> 82.50)"));
        assert!(output.contains("Final: 83"));
    }

    #[test]
    fn test_format_json_shape() {
        let result = sample("farm", 0.0);
        let json: serde_json::Value = serde_json::from_str(&format_json(&result).unwrap()).unwrap();
        assert_eq!(json["score"], 60);
        assert_eq!(json["approved"], false);
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_words("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(50.0), "50");
        assert_eq!(trim_float(82.5), "82.50");
    }
}
