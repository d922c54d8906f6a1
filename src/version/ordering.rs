//! Ordering of Jenkins release versions
//!
//! Weekly releases are numbered `major.minor`, stable (LTS) releases
//! `major.minor.patch`. A stable release may carry a non-numeric patch
//! qualifier, in which case the patch takes no part in ordering.

use std::cmp::Ordering;

/// Non-negative integer of any length, kept as its digits without leading zeros
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number(String);

impl Number {
    fn parse(component: &str) -> Option<Self> {
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = component.trim_start_matches('0');
        Some(Self(if digits.is_empty() { "0" } else { digits }.to_string()))
    }
}

impl Ord for Number {
    // Without leading zeros, a longer digit string is always the larger number
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric comparison key: `[major, minor]` or `[major, minor, patch]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(Vec<Number>);

impl VersionKey {
    /// Parse a two or three component version into its comparison key.
    ///
    /// Examples:
    /// - "2.401" -> [2, 401]
    /// - "2.390.1" -> [2, 390, 1]
    /// - "2.390.rc" -> [2, 390]
    pub fn parse(version: &str) -> Option<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        match parts.as_slice() {
            [major, minor] => Some(Self(vec![Number::parse(major)?, Number::parse(minor)?])),
            [major, minor, patch] => {
                let mut key = vec![Number::parse(major)?, Number::parse(minor)?];
                key.extend(Number::parse(patch));
                Some(Self(key))
            }
            _ => None,
        }
    }

    /// Key components as decimal strings without leading zeros
    pub fn components(&self) -> Vec<&str> {
        self.0.iter().map(|n| n.0.as_str()).collect()
    }
}

/// Whether the version has the stable `major.minor.patch` shape
pub fn is_stable(version: &str) -> bool {
    version.matches('.').count() == 2 && VersionKey::parse(version).is_some()
}

/// Compare two versions by key, highest first.
///
/// Versions without a key sort after every version with one.
pub fn compare_descending(a: &str, b: &str) -> Ordering {
    match (VersionKey::parse(a), VersionKey::parse(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable versions from `versions`, highest first.
///
/// The sort is stable: versions with equal keys keep their listing order.
pub fn stable_versions_descending(versions: &[String]) -> Vec<&str> {
    let mut stable: Vec<&str> = versions
        .iter()
        .map(String::as_str)
        .filter(|v| is_stable(v))
        .collect();
    stable.sort_by(|a, b| compare_descending(a, b));
    stable
}

/// Highest stable version, or None when no listed version is stable
pub fn find_latest_stable(versions: &[String]) -> Option<&str> {
    stable_versions_descending(versions).into_iter().next()
}
