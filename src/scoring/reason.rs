//! Assembly of the human-readable justification attached to every score.

const FALLBACK_APPROVED: &str = "Based on satellite imagery analysis and market conditions, this project shows strong viability for success.";
const FALLBACK_REJECTED: &str = "Project requires additional verification and may need more detailed planning before approval.";
const MARKET_VIABILITY: &str = "Market analysis shows strong demand and favorable conditions for this type of project.";

/// Keyword category, in the fixed order its sentence appears in a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Positive,
    Negative,
    Location,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Location => "Location",
        }
    }

    /// Sentence naming the first matching keyword of this category
    pub fn sentence(self, keyword: &str) -> String {
        match self {
            Category::Positive => format!("Project involves {} which is a positive indicator.", keyword),
            Category::Negative => format!("Project involves {} which raises concerns.", keyword),
            Category::Location => format!(
                "Specific location ({}) identified, good for verification.",
                keyword
            ),
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Ordered list of optional fragments. Categories may be filled in any
/// order; output is always positive, negative, then location.
#[derive(Debug, Default)]
pub struct ReasonBuilder {
    fragments: [Option<String>; 3],
}

impl ReasonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, category: Category, keyword: &str) {
        self.fragments[category.slot()] = Some(category.sentence(keyword));
    }

    /// Join fragments, falling back to a generic sentence when no category
    /// matched, and append the market sentence for strong approvals.
    pub fn finish(self, approved: bool, strong: bool) -> String {
        let mut sentences: Vec<String> = self.fragments.into_iter().flatten().collect();

        if sentences.is_empty() {
            let fallback = if approved { FALLBACK_APPROVED } else { FALLBACK_REJECTED };
            sentences.push(fallback.to_string());
        }

        if approved && strong {
            sentences.push(MARKET_VIABILITY.to_string());
        }

        sentences.join(" ").trim().to_string()
    }
}
