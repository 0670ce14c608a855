//! Locale-dependent token matching used by the layout adapters.

use std::sync::LazyLock;

use regex::Regex;

// Four-digit year starting with 1 or 2, not followed by another digit.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([12]\d{3})(?:\D|$)").expect("valid year pattern"));

/// Recognizes the anchor tokens of a published table.
///
/// Adapters only talk to this trait, so a table published with English month
/// names (or another year convention) needs a new matcher, not new adapters.
pub trait AnchorMatcher: Send + Sync {
    /// Whether `cell` is the header of the first month of the year.
    fn is_first_month(&self, cell: &str) -> bool;

    /// Year in `cell` if it matches the indicator-table year pattern.
    fn year_of(&self, cell: &str) -> Option<i32>;

    /// Year written in a row or column label such as `"2019"` or `"2019 (a)"`.
    fn parse_year(&self, cell: &str) -> Option<i32> {
        let t = cell.trim();
        let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
        t[..end].parse().ok()
    }

    /// Whether `label` names a summary row or column (totals, averages).
    fn is_summary(&self, label: &str) -> bool;
}

/// Prefix matcher for a given first-month token and summary labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMatcher {
    first_month: String,
    summary_prefixes: Vec<String>,
}

impl LocaleMatcher {
    /// Matcher for a custom first-month token, with no summary labels.
    pub fn new(first_month: impl Into<String>) -> Self {
        Self {
            first_month: first_month.into().trim().to_lowercase(),
            summary_prefixes: Vec::new(),
        }
    }

    /// Tables published in Spanish: `Enero`, `Total`, `Promedio`.
    #[must_use]
    pub fn spanish() -> Self {
        Self::new("Enero").with_summary_prefixes(["total", "promedio"])
    }

    /// Tables published in English: `January`, `Total`, `Average`.
    #[must_use]
    pub fn english() -> Self {
        Self::new("January").with_summary_prefixes(["total", "average"])
    }

    /// Replace the summary label prefixes.
    #[must_use]
    pub fn with_summary_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.summary_prefixes = prefixes
            .into_iter()
            .map(|p| p.into().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        self
    }
}

impl Default for LocaleMatcher {
    fn default() -> Self {
        Self::spanish()
    }
}

impl AnchorMatcher for LocaleMatcher {
    fn is_first_month(&self, cell: &str) -> bool {
        !self.first_month.is_empty() && cell.trim().to_lowercase().starts_with(&self.first_month)
    }

    fn year_of(&self, cell: &str) -> Option<i32> {
        YEAR_PATTERN
            .captures(cell.trim())
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    fn is_summary(&self, label: &str) -> bool {
        let l = label.trim().to_lowercase();
        self.summary_prefixes.iter().any(|p| l.starts_with(p))
    }
}
