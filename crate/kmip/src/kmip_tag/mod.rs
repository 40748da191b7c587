//! KMIP tags: 24-bit identifiers naming attributes and structure fields,
//! each valid for a set of protocol versions.

use std::{ops::RangeInclusive, sync::LazyLock};

use strum::IntoEnumIterator;

use crate::{
    KmipError, KmipSpec, SpecContext,
    error::result::KmipResult,
    registry::{OpenRegistry, RegistryEntry, StandardEntry},
};

/// Size of a tag on the wire
pub const TAG_SIZE: usize = 3;

/// Tags vendors may register at runtime
pub const TAG_EXTENSION_RANGE: RangeInclusive<u32> = 0x54_0000..=0x54_FFFF;

macro_rules! spec_of {
    (Unknown) => {
        $crate::KmipSpec::UnknownVersion
    };
    ($spec:ident) => {
        $crate::KmipSpec::$spec
    };
}

macro_rules! standard_tags {
    ($($variant:ident = $value:literal, $description:literal, [$($spec:ident),+ $(,)?];)+) => {
        /// The standard KMIP tag catalog
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::strum::EnumIter)]
        #[repr(u32)]
        pub enum Tag {
            $($variant = $value,)+
        }

        impl Tag {
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            #[must_use]
            pub const fn supported_specs(self) -> &'static [$crate::KmipSpec] {
                match self {
                    $(Self::$variant => &[$(spec_of!($spec)),+],)+
                }
            }
        }
    };
}

mod standard;
pub use standard::Tag;

impl Tag {
    #[must_use]
    #[allow(clippy::as_conversions)]
    // This conversion is idiomatic for items marked with #[repr(u32)]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

impl StandardEntry for Tag {
    const EXTENSION_RANGE: RangeInclusive<u32> = TAG_EXTENSION_RANGE;
    const KIND: &'static str = "tag";

    fn value(self) -> u32 {
        Self::value(self)
    }

    fn description(self) -> &'static str {
        Self::description(self)
    }

    fn supported_specs(self) -> &'static [KmipSpec] {
        Self::supported_specs(self)
    }
}

static TAG_REGISTRY: LazyLock<OpenRegistry<Tag>> =
    LazyLock::new(|| OpenRegistry::with_standard(Tag::iter()));

/// A standard or vendor tag.
pub type KmipTag = RegistryEntry<Tag>;

impl RegistryEntry<Tag> {
    pub fn from_value(spec: KmipSpec, value: u32) -> KmipResult<Self> {
        TAG_REGISTRY.resolve_value(spec, value)
    }

    pub fn from_name(spec: KmipSpec, name: &str) -> KmipResult<Self> {
        TAG_REGISTRY.resolve_description(spec, name)
    }

    /// Resolve the 3 wire bytes of a tag.
    pub fn from_bytes(spec: KmipSpec, bytes: &[u8]) -> KmipResult<Self> {
        let tag_bytes = <[u8; TAG_SIZE]>::try_from(bytes).map_err(|_e| {
            KmipError::InvalidArgument(format!(
                "expected a {TAG_SIZE} byte array for a tag, got {} bytes",
                bytes.len()
            ))
        })?;
        Self::from_value(spec, tag_value(tag_bytes))
    }

    /// Resolve a tag value under the current thread's spec.
    pub fn resolve_value(value: u32) -> KmipResult<Self> {
        Self::from_value(SpecContext::get(), value)
    }

    /// Resolve a tag name under the current thread's spec.
    pub fn resolve_name(name: &str) -> KmipResult<Self> {
        Self::from_name(SpecContext::get(), name)
    }

    /// Register a vendor tag in `[0x540000, 0x54FFFF]`.
    ///
    /// The first registration of a value wins; later ones get the existing tag back.
    pub fn register(
        value: u32,
        description: &str,
        supported_specs: impl IntoIterator<Item = KmipSpec>,
    ) -> KmipResult<Self> {
        TAG_REGISTRY.register(value, description, supported_specs)
    }

    #[must_use]
    pub fn registered_extensions() -> Vec<Self> {
        TAG_REGISTRY.extensions()
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; TAG_SIZE] {
        let [_, b0, b1, b2] = self.value().to_be_bytes();
        [b0, b1, b2]
    }

    /// `0x` followed by the 6 upper-case hex digits of the tag
    #[must_use]
    pub fn hex_string(&self) -> String {
        format!("0x{}", hex::encode_upper(self.to_bytes()))
    }
}

impl From<Tag> for KmipTag {
    fn from(tag: Tag) -> Self {
        Self::Standard(tag)
    }
}

/// The numeric value of 3 big-endian tag bytes.
#[must_use]
pub const fn tag_value(bytes: [u8; TAG_SIZE]) -> u32 {
    let [b0, b1, b2] = bytes;
    u32::from_be_bytes([0, b0, b1, b2])
}
