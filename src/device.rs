//! Device profile and the platform emoji-support tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Android major version -> highest Unicode emoji version it renders.
///
/// Majors missing from this table fall back to the configured default
/// (Unicode 7.0 unless overridden).
pub static ANDROID_UNICODE_SUPPORT: &[(u32, f64)] = &[
    (4, 6.0),
    (5, 6.3),
    (6, 7.0),
    (7, 8.0),
    (8, 9.0),
    (9, 10.0),
    (10, 11.0),
    (11, 13.0),
    (12, 13.0),
];

/// Unicode support for an Android major version, if the table knows it
pub fn android_unicode_support(major: u32) -> Option<f64> {
    ANDROID_UNICODE_SUPPORT
        .iter()
        .find(|(m, _)| *m == major)
        .map(|(_, unicode)| *unicode)
}

/// Operating system family of the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    /// Anything else; yields an empty compatible catalog
    #[serde(untagged)]
    Other(String),
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "ios" | "iphoneos" | "ipados" => Platform::Ios,
            "android" => Platform::Android,
            other => Platform::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}

/// What the host reports about the device, queried once at mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub platform: Platform,
    /// Raw OS version string, e.g. "12.0" or "10"
    pub os_version: String,
}

impl DeviceProfile {
    pub fn new(platform: Platform, os_version: impl Into<String>) -> Self {
        Self {
            platform,
            os_version: os_version.into(),
        }
    }

    pub fn ios(os_version: impl Into<String>) -> Self {
        Self::new(Platform::Ios, os_version)
    }

    pub fn android(os_version: impl Into<String>) -> Self {
        Self::new(Platform::Android, os_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_4_through_12() {
        for major in 4..=12 {
            assert!(android_unicode_support(major).is_some(), "major {}", major);
        }
        assert_eq!(android_unicode_support(3), None);
        assert_eq!(android_unicode_support(13), None);
    }

    #[test]
    fn test_table_values() {
        assert_eq!(android_unicode_support(6), Some(7.0));
        assert_eq!(android_unicode_support(9), Some(10.0));
        assert_eq!(android_unicode_support(11), Some(13.0));
    }

    #[test]
    fn test_table_is_monotonic() {
        for pair in ANDROID_UNICODE_SUPPORT.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!(
            "windows".parse::<Platform>().unwrap(),
            Platform::Other("windows".to_string())
        );
    }
}
