//! Admin API version selection.
//!
//! Every REST path is rooted at `/admin/api/{version}`; [`ApiVersion`]
//! supplies the `{version}` segment.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Shopify ships a stable version every quarter. Known versions have their own
/// variant; any other well-formed `YYYY-MM` release string parses to
/// [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_01);
/// assert_eq!(version.base_path(), "/admin/api/2025-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-10.
    V2024_10,
    /// API version 2025-01.
    V2025_01,
    /// API version 2025-04.
    V2025_04,
    /// API version 2025-07.
    V2025_07,
    /// API version 2025-10.
    V2025_10,
    /// The unstable channel.
    Unstable,
    /// Any other quarterly release, e.g. `2026-01`.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `false` for `Unstable` and `Custom` versions.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the REST base path for this version, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/admin/api/{self}")
    }

    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2024_10 => 1,
            Self::V2025_01 => 2,
            Self::V2025_04 => 3,
            Self::V2025_07 => 4,
            Self::V2025_10 => 5,
            Self::Unstable => 100,
            Self::Custom(_) => 101,
        }
    }

    fn is_release_string(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        })
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            other if Self::is_release_string(other) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_versions() {
        assert_eq!("2024-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2024_10);
        assert_eq!("2025-07".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_07);
        assert_eq!(" Unstable ".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_future_release_parses_as_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
        assert_eq!(version.base_path(), "/admin/api/2026-04");
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for bad in ["", "2025", "2025-1", "2025-02", "25-01", "abcd-01"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_latest_is_stable_and_newest_known() {
        let latest = ApiVersion::latest();
        assert!(latest.is_stable());
        assert!(ApiVersion::V2024_10 < latest);
        assert!(latest < ApiVersion::Unstable);
    }

    #[test]
    fn test_custom_versions_order_lexicographically() {
        assert!(ApiVersion::Custom("2026-01".into()) < ApiVersion::Custom("2026-04".into()));
        assert!(ApiVersion::Unstable < ApiVersion::Custom("2026-01".into()));
    }

    #[test]
    fn test_base_path_uses_display_form() {
        assert_eq!(ApiVersion::V2025_10.base_path(), "/admin/api/2025-10");
        assert_eq!(ApiVersion::Unstable.base_path(), "/admin/api/unstable");
    }
}
