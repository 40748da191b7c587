use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};

use crate::{KmipError, error::result::KmipResult};

/// A KMIP protocol version, plus two sentinels.
///
/// `UnknownVersion` is the ambient default when no version was negotiated.
/// `UnsupportedVersion` supports nothing: it exists to exercise rejection
/// paths and is never produced by a version lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIter)]
pub enum KmipSpec {
    #[default]
    UnknownVersion,
    UnsupportedVersion,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V2_0,
    V2_1,
    V3_0,
}

impl KmipSpec {
    #[must_use]
    pub const fn major(self) -> i32 {
        match self {
            Self::UnknownVersion => -1,
            Self::UnsupportedVersion => -2,
            Self::V1_0 | Self::V1_1 | Self::V1_2 | Self::V1_3 | Self::V1_4 => 1,
            Self::V2_0 | Self::V2_1 => 2,
            Self::V3_0 => 3,
        }
    }

    #[must_use]
    pub const fn minor(self) -> i32 {
        match self {
            Self::UnknownVersion => -1,
            Self::UnsupportedVersion => -2,
            Self::V1_0 | Self::V2_0 | Self::V3_0 => 0,
            Self::V1_1 | Self::V2_1 => 1,
            Self::V1_2 => 2,
            Self::V1_3 => 3,
            Self::V1_4 => 4,
        }
    }

    /// Resolve a `(major, minor)` pair.
    ///
    /// `(-1, -1)` resolves to `UnknownVersion`. Any pair that is not a
    /// registered version fails; `UnsupportedVersion` is never returned.
    pub fn from_version(major: i32, minor: i32) -> KmipResult<Self> {
        Self::iter()
            .filter(|spec| *spec != Self::UnsupportedVersion)
            .find(|spec| spec.major() == major && spec.minor() == minor)
            .ok_or_else(|| {
                KmipError::UnknownIdentifier(format!("no KMIP spec for version {major}.{minor}"))
            })
    }

    /// All versions a peer can actually speak, sentinels excluded.
    pub fn protocol_versions() -> impl Iterator<Item = Self> {
        Self::iter().filter(|spec| !matches!(spec, Self::UnknownVersion | Self::UnsupportedVersion))
    }
}

impl fmt::Display for KmipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}.{}", self.major(), self.minor())
    }
}

impl FromStr for KmipSpec {
    type Err = KmipError;

    /// Accepts `1.2`, `V1.2` and `V1_2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('V')
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);
        let (major, minor) = digits
            .split_once(['.', '_'])
            .ok_or_else(|| KmipError::InvalidArgument(format!("invalid KMIP version: {s}")))?;
        let major = major
            .parse::<i32>()
            .map_err(|e| KmipError::InvalidArgument(format!("invalid major version {major}: {e}")))?;
        let minor = minor
            .parse::<i32>()
            .map_err(|e| KmipError::InvalidArgument(format!("invalid minor version {minor}: {e}")))?;
        Self::from_version(major, minor)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::KmipSpec;

    #[test]
    fn display_follows_version_format() {
        assert_eq!(KmipSpec::V1_2.to_string(), "V1.2");
        assert_eq!(KmipSpec::V3_0.to_string(), "V3.0");
        assert_eq!(KmipSpec::UnknownVersion.to_string(), "V-1.-1");
        assert_eq!(KmipSpec::UnsupportedVersion.to_string(), "V-2.-2");
        assert_eq!(KmipSpec::default(), KmipSpec::UnknownVersion);
    }

    #[test]
    fn version_lookup_is_total_for_registered_pairs() {
        for spec in KmipSpec::iter().filter(|s| *s != KmipSpec::UnsupportedVersion) {
            assert_eq!(
                KmipSpec::from_version(spec.major(), spec.minor()).unwrap(),
                spec
            );
        }
        assert_eq!(KmipSpec::from_version(-1, -1).unwrap(), KmipSpec::UnknownVersion);
    }

    #[test]
    fn version_lookup_rejects_unregistered_pairs() {
        let err = KmipSpec::from_version(99, 99).unwrap_err();
        assert!(err.is_not_found());
        // the negative-testing sentinel is not reachable by lookup
        assert!(KmipSpec::from_version(-2, -2).is_err());
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("1.2".parse::<KmipSpec>().unwrap(), KmipSpec::V1_2);
        assert_eq!("V2.1".parse::<KmipSpec>().unwrap(), KmipSpec::V2_1);
        assert_eq!("V3_0".parse::<KmipSpec>().unwrap(), KmipSpec::V3_0);
        assert!("two.one".parse::<KmipSpec>().is_err());
        assert!("7".parse::<KmipSpec>().is_err());
    }

    #[test]
    fn protocol_versions_exclude_sentinels() {
        assert_eq!(KmipSpec::protocol_versions().count(), 8);
        assert!(KmipSpec::protocol_versions().all(|s| s.major() > 0));
    }
}
