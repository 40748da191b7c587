//! Managed object attributes bound to their standard tags.

use time::OffsetDateTime;

use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, Tag,
    error::result::KmipResult,
    kmip_data_type::{
        AttributeDecoder, FromAttributeValue, KmipAttribute, KmipDataType, decoder_of,
    },
};

#[macro_use]
mod enumeration;
mod attribute;
mod cryptographic_algorithm;
mod custom_attribute;
mod name;
mod object_type;
mod state;

pub use attribute::Attribute;
pub use cryptographic_algorithm::{
    CryptographicAlgorithm, CryptographicAlgorithmValue, StandardCryptographicAlgorithm,
};
pub use custom_attribute::CustomAttribute;
pub use enumeration::ENUMERATION_EXTENSION_RANGE;
pub use name::{Name, NameType};
pub use object_type::{ObjectType, ObjectTypeValue, StandardObjectType};
pub use state::{STATE_EXTENSION_RANGE, StandardState, State, StateValue};

/// "ObjectGroup" -> "Object Group"
pub(crate) fn title_case(pascal: &str) -> String {
    let mut out = String::with_capacity(pascal.len() + 4);
    let mut chars = pascal.chars().peekable();
    let mut previous: Option<char> = None;
    while let Some(c) = chars.next() {
        if let Some(p) = previous {
            let next_is_lower = chars.peek().is_some_and(|n| n.is_lowercase());
            if c.is_uppercase()
                && (p.is_lowercase() || p.is_ascii_digit() || (p.is_uppercase() && next_is_lower))
            {
                out.push(' ');
            }
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

/// When a lifecycle state allows changing an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Modifiable {
    Never,
    Always,
    PreActiveOnly,
}

impl Modifiable {
    pub(crate) fn allows(self, state: &State) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::PreActiveOnly => state.is(StandardState::PreActive),
        }
    }
}

/// Native Rust types an attribute can wrap.
trait NativeAttribute: Sized {
    const ENCODING: EncodingType;

    fn to_value(&self) -> AttributeValue;

    fn from_value(value: &AttributeValue) -> KmipResult<Self>;
}

impl NativeAttribute for i32 {
    const ENCODING: EncodingType = EncodingType::Integer;

    fn to_value(&self) -> AttributeValue {
        AttributeValue::integer(*self)
    }

    fn from_value(value: &AttributeValue) -> KmipResult<Self> {
        value.as_i32()
    }
}

/// Intervals, in seconds
impl NativeAttribute for u32 {
    const ENCODING: EncodingType = EncodingType::Interval;

    fn to_value(&self) -> AttributeValue {
        AttributeValue::interval(*self)
    }

    fn from_value(value: &AttributeValue) -> KmipResult<Self> {
        value.as_u32()
    }
}

impl NativeAttribute for String {
    const ENCODING: EncodingType = EncodingType::TextString;

    fn to_value(&self) -> AttributeValue {
        AttributeValue::text_string(self.as_str())
    }

    fn from_value(value: &AttributeValue) -> KmipResult<Self> {
        value.as_text().map(ToOwned::to_owned)
    }
}

impl NativeAttribute for OffsetDateTime {
    const ENCODING: EncodingType = EncodingType::DateTime;

    fn to_value(&self) -> AttributeValue {
        AttributeValue::date_time(*self)
    }

    fn from_value(value: &AttributeValue) -> KmipResult<Self> {
        value.as_date_time()
    }
}

/// Versions the KMIP 1.x attributes below are defined for
const KMIP_1_SPECS: &[KmipSpec] = &[KmipSpec::UnknownVersion, KmipSpec::V1_2];

macro_rules! kmip_attribute {
    (
        $(#[$meta:meta])*
        $name:ident($native:ty) {
            always_present: $always_present:literal,
            server_initializable: $server_init:literal,
            client_initializable: $client_init:literal,
            server_modifiable: $server_modifiable:ident,
            client_modifiable: $client_modifiable:ident,
            client_deletable: $deletable:literal,
            multi_instance: $multi:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name($native);

        impl $name {
            pub const TAG: Tag = Tag::$name;

            pub fn new(value: impl Into<$native>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub const fn value(&self) -> &$native {
                &self.0
            }
        }

        /// Compared through the wire value, so date times match to the second.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.attribute_value() == other.attribute_value()
            }
        }

        impl Eq for $name {}

        impl KmipDataType for $name {
            fn kmip_tag(&self) -> KmipTag {
                Self::TAG.into()
            }

            fn encoding_type(&self) -> EncodingType {
                <$native as NativeAttribute>::ENCODING
            }

            fn is_supported_for(&self, spec: KmipSpec) -> bool {
                KMIP_1_SPECS.contains(&spec)
            }
        }

        impl KmipAttribute for $name {
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

            fn is_server_modifiable(&self, state: &State) -> bool {
                Modifiable::$server_modifiable.allows(state)
            }

            fn is_client_modifiable(&self, state: &State) -> bool {
                Modifiable::$client_modifiable.allows(state)
            }

            fn attribute_value(&self) -> AttributeValue {
                self.0.to_value()
            }

            fn attribute_name(&self) -> String {
                title_case(Self::TAG.description())
            }
        }

        impl FromAttributeValue for $name {
            fn from_attribute_value(value: AttributeValue) -> KmipResult<Self> {
                let expected = <$native as NativeAttribute>::ENCODING;
                if value.encoding_type() != expected {
                    return Err(KmipError::TypeMismatch(format!(
                        "{} is a {expected}, got a {}",
                        stringify!($name),
                        value.encoding_type()
                    )));
                }
                <$native as NativeAttribute>::from_value(&value).map(Self)
            }
        }
    };
}

kmip_attribute! {
    /// When the object becomes usable.
    ActivationDate(OffsetDateTime) {
        always_present: false,
        server_initializable: true,
        client_initializable: true,
        server_modifiable: PreActiveOnly,
        client_modifiable: PreActiveOnly,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    /// Length in bytes of a certificate object.
    CertificateLength(i32) {
        always_present: true,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Never,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    ContactInformation(String) {
        always_present: false,
        server_initializable: true,
        client_initializable: true,
        server_modifiable: Always,
        client_modifiable: Always,
        client_deletable: true,
        multi_instance: false,
    }
}

kmip_attribute! {
    /// Key length in bits.
    CryptographicLength(i32) {
        always_present: false,
        server_initializable: false,
        client_initializable: true,
        server_modifiable: PreActiveOnly,
        client_modifiable: PreActiveOnly,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    DestroyDate(OffsetDateTime) {
        always_present: false,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Never,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    LastChangeDate(OffsetDateTime) {
        always_present: true,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Always,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    /// Seconds the client may use the object before renewing its lease.
    LeaseTime(u32) {
        always_present: false,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Always,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
    }
}

kmip_attribute! {
    ObjectGroup(String) {
        always_present: false,
        server_initializable: true,
        client_initializable: true,
        server_modifiable: Always,
        client_modifiable: Always,
        client_deletable: true,
        multi_instance: true,
    }
}

kmip_attribute! {
    UniqueIdentifier(String) {
        always_present: true,
        server_initializable: true,
        client_initializable: false,
        server_modifiable: Never,
        client_modifiable: Never,
        client_deletable: false,
        multi_instance: false,
    }
}

fn entry<A: FromAttributeValue + 'static>(
    tag: Tag,
    encoding_type: EncodingType,
) -> ((u32, EncodingType), AttributeDecoder) {
    ((tag.value(), encoding_type), decoder_of::<A>)
}

/// Decoders of every attribute defined in this module.
pub(crate) fn standard_decoders() -> Vec<((u32, EncodingType), AttributeDecoder)> {
    vec![
        entry::<ActivationDate>(ActivationDate::TAG, EncodingType::DateTime),
        entry::<CertificateLength>(CertificateLength::TAG, EncodingType::Integer),
        entry::<ContactInformation>(ContactInformation::TAG, EncodingType::TextString),
        entry::<CryptographicLength>(CryptographicLength::TAG, EncodingType::Integer),
        entry::<DestroyDate>(DestroyDate::TAG, EncodingType::DateTime),
        entry::<LastChangeDate>(LastChangeDate::TAG, EncodingType::DateTime),
        entry::<LeaseTime>(LeaseTime::TAG, EncodingType::Interval),
        entry::<ObjectGroup>(ObjectGroup::TAG, EncodingType::TextString),
        entry::<UniqueIdentifier>(UniqueIdentifier::TAG, EncodingType::TextString),
        entry::<State>(Tag::State, EncodingType::Enumeration),
        entry::<ObjectType>(Tag::ObjectType, EncodingType::Enumeration),
        entry::<CryptographicAlgorithm>(Tag::CryptographicAlgorithm, EncodingType::Enumeration),
    ]
}
