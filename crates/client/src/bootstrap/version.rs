//! Minimum-supported-version gate.
//!
//! Pure comparison logic over three-component version strings. Malformed
//! input never fails: any missing or non-numeric component counts as 0.

/// Oldest build version the backend still accepts.
pub const MIN_SUPPORTED_VERSION: &str = "1.0.0";

/// Parse a version string into a `(major, minor, patch)` triple.
///
/// Components beyond the third are ignored; missing or non-numeric
/// components are 0.
fn parse_version(version: &str) -> [u64; 3] {
    let mut parts = version.split('.');
    std::array::from_fn(|_| {
        parts
            .next()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(0)
    })
}

/// Whether `current` satisfies the `minimum` version requirement.
///
/// Lexicographic comparison over the zero-padded numeric triples, with
/// equality satisfying the requirement.
#[must_use]
pub fn is_supported(current: &str, minimum: &str) -> bool {
    parse_version(current) >= parse_version(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_versions_are_supported() {
        assert!(is_supported("1.0.0", "1.0.0"));
        assert!(is_supported("2.13.4", "2.13.4"));
    }

    #[test]
    fn test_missing_components_count_as_zero() {
        assert!(is_supported("1.2.0", "1.2"));
        assert!(is_supported("1.2", "1.2.0"));
        assert!(!is_supported("1", "1.0.1"));
    }

    #[test]
    fn test_component_significance_order() {
        assert!(!is_supported("0.9.9", "1.0.0"));
        assert!(is_supported("1.10.0", "1.9.9"));
        assert!(!is_supported("1.9.9", "1.10.0"));
    }

    #[test]
    fn test_non_numeric_components_count_as_zero() {
        assert!(is_supported("1.x.3", "1.0.3"));
        assert!(!is_supported("abc", "0.0.1"));
        assert!(is_supported("", ""));
    }

    #[test]
    fn test_extra_components_are_ignored() {
        assert!(is_supported("1.2.3.9", "1.2.3"));
    }

    #[test]
    fn test_reflexive_for_any_input() {
        for v in ["0.0.0", "1.0.0", "3.2.1", "weird", "1.2"] {
            assert!(is_supported(v, v), "compare({v}, {v}) must hold");
        }
    }
}
