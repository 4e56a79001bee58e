/// Terms associated with agriculture, education, health, clean energy and
/// infrastructure.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "plant", "farm", "agriculture", "crop", "corn", "maize", "wheat", "rice",
    "vegetables", "fruits", "organic", "sustainable", "irrigation", "water",
    "education", "school", "training", "skill", "workshop", "community",
    "health", "medical", "clinic", "hospital", "clean water", "sanitation",
    "renewable", "solar", "wind", "energy", "infrastructure", "road", "bridge",
];

/// Terms associated with gambling, weapons, illegal activity and speculation.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "gambling", "casino", "lottery", "speculation", "crypto mining", "mining",
    "weapon", "arms", "military", "defense", "luxury", "jewelry", "diamond",
    "alcohol", "tobacco", "drug", "illegal", "fraud", "scam", "pyramid",
];

/// Country, region and locality terms that make a project verifiable on the ground.
pub const LOCATION_KEYWORDS: &[&str] = &[
    "kenya", "nakuru", "nairobi", "mombasa", "kisumu", "africa", "east africa",
    "rural", "village", "community", "local", "regional",
];

/// Ordered, lowercase set of substrings. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    keywords: Vec<String>,
}

/// Outcome of scanning one table against a normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableScan<'a> {
    pub count: usize,
    /// First keyword in table order that occurs anywhere in the text
    pub first: Option<&'a str>,
}

impl KeywordTable {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Count keywords present as substrings of `text`, which must already be
    /// lowercased. Precedence follows declaration order, not position in text.
    pub fn scan(&self, text: &str) -> TableScan<'_> {
        let mut matched = self
            .keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .map(String::as_str);

        let first = matched.next();
        let count = first.map_or(0, |_| 1 + matched.count());
        TableScan { count, first }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for table in [POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS, LOCATION_KEYWORDS] {
            for keyword in table {
                assert_eq!(*keyword, keyword.to_lowercase());
                assert!(!keyword.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_new_normalizes_keywords() {
        let table = KeywordTable::new(["  Solar ", "WIND"]);
        assert_eq!(table.keywords, ["solar".to_string(), "wind".to_string()]);
    }

    #[test]
    fn test_scan_counts_all_matches() {
        let table = KeywordTable::new(POSITIVE_KEYWORDS);
        let scan = table.scan("plant corn in nakuru, kenya");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.first, Some("plant"));
    }

    #[test]
    fn test_scan_first_match_uses_table_order() {
        // "nakuru" appears first in the text, but "kenya" is declared first
        let table = KeywordTable::new(LOCATION_KEYWORDS);
        let scan = table.scan("nakuru, kenya");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.first, Some("kenya"));
    }

    #[test]
    fn test_scan_matches_substrings() {
        // "farmers" contains "farm", "watering" contains "water"
        let table = KeywordTable::new(POSITIVE_KEYWORDS);
        let scan = table.scan("watering for farmers");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.first, Some("farm"));
    }

    #[test]
    fn test_scan_overlapping_phrases_count_separately() {
        // "clean water" also contains "water"
        let table = KeywordTable::new(POSITIVE_KEYWORDS);
        let scan = table.scan("clean water");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.first, Some("water"));
    }

    #[test]
    fn test_scan_no_match() {
        let table = KeywordTable::new(NEGATIVE_KEYWORDS);
        let scan = table.scan("a bakery downtown");
        assert_eq!(scan.count, 0);
        assert_eq!(scan.first, None);
    }

    #[test]
    fn test_scan_empty_table_and_text() {
        assert_eq!(KeywordTable::new(Vec::<String>::new()).scan("anything").count, 0);
        assert_eq!(KeywordTable::new(POSITIVE_KEYWORDS).scan("").count, 0);
    }
}
