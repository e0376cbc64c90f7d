//! Compatibility filter: which catalog entries the device can render.
//!
//! iOS gates on the record's `ios_version`, Android on its `unicode_version`
//! against the table in [`crate::device`]. Unknown platforms get nothing.

use std::fmt;
use std::sync::Arc;

use crate::catalog::EmojiRecord;
use crate::config::CompatConfig;
use crate::device::{android_unicode_support, DeviceProfile, Platform};
use crate::version::{parse_float_prefix, parse_major};

/// The version bound a device resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Keep records whose `ios_version` is at most this
    IosVersion(f64),
    /// Keep records whose `unicode_version` is at most this
    UnicodeVersion(f64),
    /// Platform we know nothing about
    Unsupported,
}

impl Threshold {
    /// Resolve the device profile to a threshold
    pub fn resolve(profile: &DeviceProfile, config: &CompatConfig) -> Self {
        match &profile.platform {
            Platform::Ios => {
                let version = parse_float_prefix(&profile.os_version).unwrap_or_else(|| {
                    tracing::warn!(
                        "Unparseable iOS version {:?}, assuming {}",
                        profile.os_version,
                        config.fallback_ios_version
                    );
                    config.fallback_ios_version
                });
                Threshold::IosVersion(version)
            }
            Platform::Android => {
                let unicode = parse_major(&profile.os_version)
                    .and_then(android_unicode_support)
                    .unwrap_or(config.fallback_unicode_version);
                Threshold::UnicodeVersion(unicode)
            }
            Platform::Other(name) => {
                tracing::warn!("Unsupported platform {:?}, no emoji available", name);
                Threshold::Unsupported
            }
        }
    }

    /// Whether `record` renders under this threshold.
    ///
    /// Records with unparseable version fields never pass.
    pub fn admits(&self, record: &EmojiRecord) -> bool {
        match *self {
            Threshold::IosVersion(max) => record.ios_min_version().is_some_and(|v| v <= max),
            Threshold::UnicodeVersion(max) => record.unicode_version().is_some_and(|v| v <= max),
            Threshold::Unsupported => false,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::IosVersion(v) => write!(f, "iOS <= {}", v),
            Threshold::UnicodeVersion(v) => write!(f, "Unicode <= {}", v),
            Threshold::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Filter `catalog` for a platform and raw OS version, using default fallbacks
pub fn filter(catalog: &[EmojiRecord], platform: &Platform, os_version: &str) -> Vec<EmojiRecord> {
    let profile = DeviceProfile::new(platform.clone(), os_version);
    filter_with(catalog, &profile, &CompatConfig::default())
}

/// Filter `catalog` for a device profile with explicit fallback tiers
pub fn filter_with(
    catalog: &[EmojiRecord],
    profile: &DeviceProfile,
    config: &CompatConfig,
) -> Vec<EmojiRecord> {
    let threshold = Threshold::resolve(profile, config);
    catalog
        .iter()
        .filter(|record| threshold.admits(record))
        .cloned()
        .collect()
}

/// The device-specific catalog, computed once per profile
#[derive(Debug, Clone)]
pub struct CompatibleCatalog {
    records: Arc<[EmojiRecord]>,
    threshold: Threshold,
}

impl CompatibleCatalog {
    pub fn build(catalog: &[EmojiRecord], profile: &DeviceProfile, config: &CompatConfig) -> Self {
        let threshold = Threshold::resolve(profile, config);
        let records: Vec<EmojiRecord> = catalog
            .iter()
            .filter(|record| threshold.admits(record))
            .cloned()
            .collect();

        tracing::debug!(
            platform = %profile.platform,
            os_version = %profile.os_version,
            %threshold,
            kept = records.len(),
            total = catalog.len(),
            "Filtered emoji catalog"
        );

        Self {
            records: records.into(),
            threshold,
        }
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Shared handle for async search passes
    pub fn shared(&self) -> Arc<[EmojiRecord]> {
        Arc::clone(&self.records)
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
