//! Open enumeration attributes: a standard catalog with per-value spec
//! sets, extended by vendors in `[0x80000000, 0x8FFFFFFF]`.

/// Values vendors may register for an open enumeration attribute
pub const ENUMERATION_EXTENSION_RANGE: std::ops::RangeInclusive<u32> = 0x8000_0000..=0x8FFF_FFFF;

/// Declares an open enumeration attribute.
///
/// Generates the standard catalog `$standard`, the entry alias `$entry`
/// and the `$name` attribute wrapper with its registry, lookups, vendor
/// registration and the `KmipAttribute` contract. The attribute tag is
/// `Tag::$name`.
macro_rules! open_enumeration {
    (
        $(#[$meta:meta])*
        $name:ident($standard:ident, $entry:ident) for $specs:ident {
            always_present: $always_present:literal,
            server_initializable: $server_init:literal,
            client_initializable: $client_init:literal,
            server_modifiable: $server_modifiable:ident,
            client_modifiable: $client_modifiable:ident,
            client_deletable: $deletable:literal,
            multi_instance: $multi:literal,
            values: {
                $($variant:ident = $value:literal, $description:literal, [$($spec:ident),+ $(,)?];)+
            } $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::strum::EnumIter)]
        #[repr(u32)]
        pub enum $standard {
            $($variant = $value,)+
        }

        impl $crate::StandardEntry for $standard {
            const EXTENSION_RANGE: ::std::ops::RangeInclusive<u32> =
                $crate::attributes::ENUMERATION_EXTENSION_RANGE;
            const KIND: &'static str = stringify!($name);

            #[allow(clippy::as_conversions)]
            // This conversion is idiomatic for items marked with #[repr(u32)]
            fn value(self) -> u32 {
                self as u32
            }

            fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            fn supported_specs(self) -> &'static [$crate::KmipSpec] {
                match self {
                    $(Self::$variant => &[$($crate::KmipSpec::$spec),+],)+
                }
            }
        }

        #[doc = concat!("A standard or vendor `", stringify!($name), "` value.")]
        pub type $entry = $crate::RegistryEntry<$standard>;

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            value: $entry,
        }

        impl $name {
            fn registry() -> &'static $crate::OpenRegistry<$standard> {
                static REGISTRY: ::std::sync::LazyLock<$crate::OpenRegistry<$standard>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::OpenRegistry::with_standard(
                            <$standard as ::strum::IntoEnumIterator>::iter(),
                        )
                    });
                &REGISTRY
            }

            /// Fails when `value` is not valid under the current spec.
            pub fn new(value: $entry) -> $crate::KmipResult<Self> {
                let spec = $crate::SpecContext::get();
                if !value.is_supported_for(spec) {
                    return Err($crate::KmipError::not_supported(
                        spec,
                        format!("{} value {value}", stringify!($name)),
                    ));
                }
                Ok(Self { value })
            }

            pub fn from_value(value: u32) -> $crate::KmipResult<Self> {
                Self::new(Self::registry().resolve_value($crate::SpecContext::get(), value)?)
            }

            pub fn from_name(name: &str) -> $crate::KmipResult<Self> {
                Self::new(Self::registry().resolve_description($crate::SpecContext::get(), name)?)
            }

            /// Register a vendor value in `[0x80000000, 0x8FFFFFFF]`.
            pub fn register(
                value: u32,
                description: &str,
                supported_specs: impl IntoIterator<Item = $crate::KmipSpec>,
            ) -> $crate::KmipResult<$entry> {
                Self::registry().register(value, description, supported_specs)
            }

            #[must_use]
            pub fn registered_values() -> Vec<$entry> {
                Self::registry().extensions()
            }

            #[must_use]
            pub const fn value(&self) -> &$entry {
                &self.value
            }

            #[must_use]
            pub fn description(&self) -> &str {
                self.value.description()
            }

            #[must_use]
            pub const fn is_custom(&self) -> bool {
                self.value.is_custom()
            }

            #[must_use]
            pub fn is(&self, standard: $standard) -> bool {
                self.value.standard() == Some(standard)
            }
        }

        /// Unchecked: support is decided by `is_supported_for`.
        impl From<$standard> for $name {
            fn from(standard: $standard) -> Self {
                Self {
                    value: $crate::RegistryEntry::Standard(standard),
                }
            }
        }

        impl $crate::kmip_data_type::KmipDataType for $name {
            fn kmip_tag(&self) -> $crate::KmipTag {
                $crate::Tag::$name.into()
            }

            fn encoding_type(&self) -> $crate::EncodingType {
                $crate::EncodingType::Enumeration
            }

            fn is_supported_for(&self, spec: $crate::KmipSpec) -> bool {
                $specs.contains(&spec) && self.value.is_supported_for(spec)
            }
        }

        impl $crate::kmip_data_type::KmipAttribute for $name {
            fn is_always_present(&self) -> bool {
                $always_present
            }

            fn is_server_initializable(&self) -> bool {
                $server_init
            }

            fn is_client_initializable(&self) -> bool {
                $client_init
            }

            fn is_client_deletable(&self) -> bool {
                $deletable
            }

            fn is_multi_instance_allowed(&self) -> bool {
                $multi
            }

            fn is_server_modifiable(&self, state: &$crate::attributes::State) -> bool {
                $crate::attributes::Modifiable::$server_modifiable.allows(state)
            }

            fn is_client_modifiable(&self, state: &$crate::attributes::State) -> bool {
                $crate::attributes::Modifiable::$client_modifiable.allows(state)
            }

            fn attribute_value(&self) -> $crate::AttributeValue {
                $crate::AttributeValue::enumeration(self.value.value())
            }

            fn attribute_name(&self) -> String {
                $crate::attributes::title_case($crate::Tag::$name.description())
            }
        }

        impl $crate::kmip_data_type::FromAttributeValue for $name {
            fn from_attribute_value(value: $crate::AttributeValue) -> $crate::KmipResult<Self> {
                if value.encoding_type() != $crate::EncodingType::Enumeration {
                    return Err($crate::KmipError::TypeMismatch(format!(
                        "{} is an Enumeration, got a {}",
                        stringify!($name),
                        value.encoding_type()
                    )));
                }
                Self::from_value(value.as_u32()?)
            }
        }
    };
}
