//! Search modes and keystroke normalisation.

use serde::{Deserialize, Serialize};

/// Maximum number of digits in an organisation number.
pub const ORG_NUMBER_LEN: usize = 9;

/// Which registry filter a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    #[default]
    Name,
    OrgNumber,
    Industry,
}

impl SearchMode {
    /// Normalises raw input for this mode. Name queries pass through untouched.
    #[must_use]
    pub fn format_input(self, raw: &str) -> String {
        match self {
            SearchMode::Name => raw.to_string(),
            SearchMode::OrgNumber => format_org_number(raw),
            SearchMode::Industry => format_industry_code(raw),
        }
    }

    /// Input length cap; `None` for free text.
    #[must_use]
    pub fn max_input_len(self) -> Option<usize> {
        match self {
            SearchMode::Name => None,
            SearchMode::OrgNumber => Some(ORG_NUMBER_LEN),
            SearchMode::Industry => Some(6),
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            SearchMode::Name => "Enter company name",
            SearchMode::OrgNumber => "Enter organization number (9 digits)",
            SearchMode::Industry => "Enter industry code (e.g. 62.010)",
        }
    }

    /// Label of the search button, including the in-flight state.
    #[must_use]
    pub fn search_label(self, searching: bool) -> &'static str {
        if searching {
            return "Searching...";
        }
        match self {
            SearchMode::Name => "Search by name",
            SearchMode::OrgNumber => "Search by organization number",
            SearchMode::Industry => "Search by industry code",
        }
    }

    #[must_use]
    pub fn loading_text(self) -> &'static str {
        match self {
            SearchMode::Name => "Searching for companies...",
            SearchMode::OrgNumber => "Looking up organization...",
            SearchMode::Industry => "Searching for companies by industry...",
        }
    }

    pub const ALL: [SearchMode; 3] = [
        SearchMode::Name,
        SearchMode::OrgNumber,
        SearchMode::Industry,
    ];
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Name => write!(f, "name"),
            SearchMode::OrgNumber => write!(f, "org-number"),
            SearchMode::Industry => write!(f, "industry"),
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchMode::Name),
            "org-number" | "orgnumber" | "org" => Ok(SearchMode::OrgNumber),
            "industry" | "naeringskode" => Ok(SearchMode::Industry),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

/// Strips every non-digit and truncates to nine digits.
#[must_use]
pub fn format_org_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ORG_NUMBER_LEN)
        .collect()
}

/// Masks input into `NN.NNN`: two sector digits, then up to three subsector
/// digits after a dot. The dot only appears once a subsector digit exists.
#[must_use]
pub fn format_industry_code(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(5).collect();
    if digits.len() <= 2 {
        return digits.into_iter().collect();
    }
    let sector: String = digits[..2].iter().collect();
    let subsector: String = digits[2..].iter().collect();
    format!("{sector}.{subsector}")
}

/// Whether `query` can be carried over into `mode` without being cleared.
///
/// Org-number accepts digits only, industry accepts digits and dots. Name
/// mode rejects queries that look like one of the other two (all digits, or
/// digits with a dot) since they were typed for a different filter.
#[must_use]
pub fn is_valid_for_mode(query: &str, mode: SearchMode) -> bool {
    match mode {
        SearchMode::OrgNumber => query.chars().all(|c| c.is_ascii_digit()),
        SearchMode::Industry => query.chars().all(|c| c.is_ascii_digit() || c == '.'),
        SearchMode::Name => {
            let numeric_only = !query.is_empty() && query.chars().all(|c| c.is_ascii_digit());
            let industry_like = query.contains('.')
                && query.chars().all(|c| c.is_ascii_digit() || c == '.');
            !numeric_only && !industry_like
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_industry_shape(s: &str) -> bool {
        let mut parts = s.splitn(2, '.');
        let sector = parts.next().unwrap_or_default();
        let sector_ok = sector.len() <= 2 && sector.chars().all(|c| c.is_ascii_digit());
        match parts.next() {
            None => sector_ok,
            Some(sub) => sector_ok && sub.len() <= 3 && sub.chars().all(|c| c.is_ascii_digit()),
        }
    }

    #[test]
    fn org_number_strips_and_truncates() {
        assert_eq!(format_org_number("923 609 016"), "923609016");
        assert_eq!(format_org_number("9236090161234"), "923609016");
        assert_eq!(format_org_number("abc"), "");
        assert_eq!(format_org_number(""), "");
    }

    #[test]
    fn org_number_output_is_short_and_numeric() {
        for raw in ["12-34-56-78-90-12", "NO 923 609 016 MVA", "٣٤٥ 12", "🦀1🦀2"] {
            let out = format_org_number(raw);
            assert!(out.len() <= 9, "{raw:?} -> {out:?}");
            assert!(out.chars().all(|c| c.is_ascii_digit()), "{raw:?} -> {out:?}");
        }
    }

    #[test]
    fn industry_code_masks_progressively() {
        assert_eq!(format_industry_code(""), "");
        assert_eq!(format_industry_code("6"), "6");
        assert_eq!(format_industry_code("62"), "62");
        assert_eq!(format_industry_code("620"), "62.0");
        assert_eq!(format_industry_code("62010"), "62.010");
        assert_eq!(format_industry_code("62.0101"), "62.010");
        assert_eq!(format_industry_code("6a2-0x1"), "62.01");
    }

    #[test]
    fn industry_code_output_has_expected_shape() {
        for raw in ["", "1", "12.", "123456789", "..1.2.3.4", "x9y8z7w6", "62.010"] {
            let out = format_industry_code(raw);
            assert!(matches_industry_shape(&out), "{raw:?} -> {out:?}");
        }
    }

    #[test]
    fn mode_validation_for_org_number() {
        assert!(is_valid_for_mode("923609016", SearchMode::OrgNumber));
        assert!(is_valid_for_mode("", SearchMode::OrgNumber));
        assert!(!is_valid_for_mode("Equinor", SearchMode::OrgNumber));
        assert!(!is_valid_for_mode("62.010", SearchMode::OrgNumber));
    }

    #[test]
    fn mode_validation_for_industry() {
        assert!(is_valid_for_mode("62.010", SearchMode::Industry));
        assert!(is_valid_for_mode("62", SearchMode::Industry));
        assert!(!is_valid_for_mode("Equinor", SearchMode::Industry));
    }

    #[test]
    fn mode_validation_for_name() {
        assert!(is_valid_for_mode("Equinor", SearchMode::Name));
        assert!(is_valid_for_mode("", SearchMode::Name));
        assert!(is_valid_for_mode("7-Eleven", SearchMode::Name));
        assert!(!is_valid_for_mode("923609016", SearchMode::Name));
        assert!(!is_valid_for_mode("62.010", SearchMode::Name));
    }

    #[test]
    fn format_input_dispatches_on_mode() {
        assert_eq!(SearchMode::Name.format_input("Ole's 1"), "Ole's 1");
        assert_eq!(SearchMode::OrgNumber.format_input("92a3"), "923");
        assert_eq!(SearchMode::Industry.format_input("62010"), "62.010");
    }

    #[test]
    fn search_mode_round_trips_through_display() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.to_string().parse::<SearchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn search_label_reports_in_flight() {
        assert_eq!(SearchMode::Industry.search_label(true), "Searching...");
        assert_eq!(
            SearchMode::OrgNumber.search_label(false),
            "Search by organization number"
        );
    }
}
