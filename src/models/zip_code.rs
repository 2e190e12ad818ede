use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static FIVE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid pattern"));

/// Sentinel values that mean "no usable ZIP" in the source extracts.
const NULL_SENTINELS: [&str; 4] = ["99999", "nan", "NaN", ""];

/// A canonical five-digit ZIP code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(pub u32);

impl ZipCode {
    /// Canonicalize a raw ZIP field and parse it if it survives.
    ///
    /// Trims whitespace, drops any ZIP+4 suffix after "-", strips the
    /// trailing ".0" left by numeric-to-text conversion, and maps the
    /// sentinel values (99999, nan, empty) to `None`. Anything that is
    /// not exactly five digits after that is `None` as well.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = Self::canonicalize(raw)?;
        if !FIVE_DIGITS.is_match(&canonical) {
            return None;
        }
        canonical.parse::<u32>().ok().map(ZipCode)
    }

    fn canonicalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        let before_dash = trimmed.split('-').next().unwrap_or("");
        let stripped = before_dash.strip_suffix(".0").unwrap_or(before_dash);
        if NULL_SENTINELS.contains(&stripped) {
            return None;
        }
        Some(stripped.to_string())
    }

    /// Lenient integer coercion used by the ZIP reference filter: any
    /// parseable integer passes, failures become null entries that are
    /// carried through (they can never match the inner join later).
    pub fn coerce(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(zip) = trimmed.parse::<u32>() {
            return Some(ZipCode(zip));
        }
        // Some extracts carry ZIPs as floats ("40202.0").
        match trimmed.parse::<f64>() {
            Ok(value) if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 => {
                Some(ZipCode(value as u32))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
