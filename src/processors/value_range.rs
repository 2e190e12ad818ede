use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel for descriptions carrying no recognizable monetary band.
pub const UNKNOWN_RANGE: &str = "UNKNOWN RANGE";

/// Ordered alternation of every monetary band phrasing seen in the
/// offense descriptions, legacy variants included. Leftmost match wins;
/// within one position the alternatives are tried in this order.
static BAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(< \$500|\$500 < \$1,000|\$500 < \$10,000|\$1,000 < \$10,000|\$10,000 < \$1,000,000|\$1,000,000 < \$10,000,000|\$10,000,000 OR MORE|> \$500 BUT < \$10,000|> \$10,000 BUT < \$1,000,000)",
    )
    .expect("valid band pattern")
});

/// Legacy phrasings and their modern equivalents.
const LEGACY_BANDS: [(&str, &str); 2] = [
    ("> $500 BUT < $10,000", "$500 < $10,000"),
    ("> $10,000 BUT < $1,000,000", "$10,000 < $1,000,000"),
];

/// Extracts the monetary loss band from free-text offense descriptions.
pub struct ValueRangeExtractor;

impl ValueRangeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Pull the first matching band out of an offense description and
    /// normalize legacy phrasings. Descriptions with no band at all get
    /// the UNKNOWN sentinel, never an empty value.
    pub fn extract(&self, offense_code_name: &str) -> String {
        let band = match BAND_PATTERN.find(offense_code_name) {
            Some(found) => found.as_str(),
            None => return UNKNOWN_RANGE.to_string(),
        };

        for (legacy, modern) in LEGACY_BANDS {
            if band == legacy {
                return modern.to_string();
            }
        }
        band.to_string()
    }
}

impl Default for ValueRangeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
