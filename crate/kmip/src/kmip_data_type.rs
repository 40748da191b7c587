//! Contracts shared by every value that can travel in a KMIP message.

use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{LazyLock, PoisonError, RwLock},
};

use tracing::debug;

use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, SpecContext,
    attributes::{State, standard_decoders},
    error::result::KmipResult,
    ttlv::TTLV,
};

/// Anything with a wire identity: a tag, an encoding and the specs it
/// is valid for.
pub trait KmipDataType {
    fn kmip_tag(&self) -> KmipTag;

    fn encoding_type(&self) -> EncodingType;

    fn is_supported_for(&self, spec: KmipSpec) -> bool;

    /// Support under the current thread's spec.
    fn is_supported(&self) -> bool {
        self.is_supported_for(SpecContext::get())
    }
}

/// A managed object attribute.
///
/// The flags describe who may set, change or delete the attribute; the
/// modifiability predicates receive the object's current lifecycle state.
pub trait KmipAttribute: KmipDataType + Debug + Send + Sync {
    fn is_always_present(&self) -> bool;

    fn is_server_initializable(&self) -> bool;

    fn is_client_initializable(&self) -> bool;

    fn is_client_deletable(&self) -> bool;

    fn is_multi_instance_allowed(&self) -> bool;

    fn is_server_modifiable(&self, state: &State) -> bool;

    fn is_client_modifiable(&self, state: &State) -> bool;

    fn attribute_value(&self) -> AttributeValue;

    /// Name used in the `Attribute` structure, e.g. "Object Group"
    fn attribute_name(&self) -> String;

    fn canonical_name(&self) -> String {
        self.attribute_name()
    }
}

/// Builds a typed attribute back from its value.
pub trait FromAttributeValue: KmipAttribute + Sized {
    fn from_attribute_value(value: AttributeValue) -> KmipResult<Self>;
}

fn ensure_supported(item: &(impl KmipAttribute + ?Sized)) -> KmipResult<()> {
    let spec = SpecContext::get();
    if item.is_supported_for(spec) {
        Ok(())
    } else {
        Err(KmipError::not_supported(spec, item.attribute_name()))
    }
}

/// Encode an attribute as a primitive TTLV item named after its tag.
pub fn to_ttlv(attribute: &(impl KmipAttribute + ?Sized)) -> KmipResult<TTLV> {
    ensure_supported(attribute)?;
    if attribute.encoding_type() == EncodingType::Structure {
        return Err(KmipError::TypeMismatch(format!(
            "{} is a Structure, not a primitive item",
            attribute.attribute_name()
        )));
    }
    Ok(TTLV::primitive(
        attribute.kmip_tag().description(),
        attribute.attribute_value(),
    ))
}

/// Decode `ttlv` as attribute `A`, failing when `A` is not valid under
/// the current spec.
pub fn from_ttlv<A: FromAttributeValue>(ttlv: &TTLV) -> KmipResult<A> {
    let tag = ttlv.kmip_tag()?;
    let attribute = A::from_attribute_value(ttlv.primitive_value()?.clone())?;
    if attribute.kmip_tag() != tag {
        return Err(KmipError::TypeMismatch(format!(
            "{} cannot be read from a {} item",
            attribute.attribute_name(),
            ttlv.tag
        )));
    }
    ensure_supported(&attribute)?;
    Ok(attribute)
}

/// Turns a value into a boxed attribute.
pub type AttributeDecoder = fn(AttributeValue) -> KmipResult<Box<dyn KmipAttribute>>;

/// Adapter from `FromAttributeValue` to `AttributeDecoder`.
pub fn decoder_of<A: FromAttributeValue + 'static>(
    value: AttributeValue,
) -> KmipResult<Box<dyn KmipAttribute>> {
    Ok(Box::new(A::from_attribute_value(value)?))
}

static DECODERS: LazyLock<RwLock<HashMap<(u32, EncodingType), AttributeDecoder>>> =
    LazyLock::new(|| RwLock::new(standard_decoders().into_iter().collect()));

/// Make `decode_attribute` recognise a (tag, encoding) pair.
///
/// A pair can only be registered once.
pub fn register_attribute_decoder(
    tag: &KmipTag,
    encoding_type: EncodingType,
    decoder: AttributeDecoder,
) -> KmipResult<()> {
    let mut decoders = DECODERS.write().unwrap_or_else(PoisonError::into_inner);
    let key = (tag.value(), encoding_type);
    if decoders.contains_key(&key) {
        return Err(KmipError::InvalidRegistration(format!(
            "a decoder for {tag} as {encoding_type} is already registered"
        )));
    }
    debug!("registering attribute decoder for {tag} ({encoding_type})");
    decoders.insert(key, decoder);
    Ok(())
}

/// Decode whichever registered attribute `ttlv` holds.
pub fn decode_attribute(ttlv: &TTLV) -> KmipResult<Box<dyn KmipAttribute>> {
    let tag = ttlv.kmip_tag()?;
    let value = ttlv.primitive_value()?.clone();
    let decoder = DECODERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&(tag.value(), value.encoding_type()))
        .copied()
        .ok_or_else(|| {
            KmipError::UnknownIdentifier(format!(
                "no attribute decoder for {tag} as {}",
                value.encoding_type()
            ))
        })?;
    let attribute = decoder(value)?;
    ensure_supported(attribute.as_ref())?;
    Ok(attribute)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::{
        AttributeDecoder, FromAttributeValue, KmipAttribute, KmipDataType, decode_attribute,
        decoder_of, from_ttlv, register_attribute_decoder, to_ttlv,
    };
    use crate::{
        AttributeValue, EncodingType, KmipError, KmipResult, KmipSpec, KmipTag, SpecContext,
        attributes::{ObjectGroup, State, UniqueIdentifier},
        ttlv::TTLV,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct VendorScore(i64);

    impl KmipDataType for VendorScore {
        fn kmip_tag(&self) -> KmipTag {
            KmipTag::register(0x54_0201, "VendorScore", [KmipSpec::V2_1]).unwrap()
        }

        fn encoding_type(&self) -> EncodingType {
            EncodingType::LongInteger
        }

        fn is_supported_for(&self, spec: KmipSpec) -> bool {
            spec == KmipSpec::V2_1
        }
    }

    impl KmipAttribute for VendorScore {
        fn is_always_present(&self) -> bool {
            false
        }

        fn is_server_initializable(&self) -> bool {
            true
        }

        fn is_client_initializable(&self) -> bool {
            true
        }

        fn is_client_deletable(&self) -> bool {
            true
        }

        fn is_multi_instance_allowed(&self) -> bool {
            false
        }

        fn is_server_modifiable(&self, _state: &State) -> bool {
            true
        }

        fn is_client_modifiable(&self, _state: &State) -> bool {
            true
        }

        fn attribute_value(&self) -> AttributeValue {
            AttributeValue::long_integer(self.0)
        }

        fn attribute_name(&self) -> String {
            "x-VendorScore".to_owned()
        }
    }

    impl FromAttributeValue for VendorScore {
        fn from_attribute_value(value: AttributeValue) -> KmipResult<Self> {
            value.as_i64().map(Self)
        }
    }

    #[test]
    fn typed_round_trip() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let group = ObjectGroup::new("Group1");
        let ttlv = to_ttlv(&group).unwrap();
        assert_eq!(ttlv.tag, "ObjectGroup");
        assert_eq!(from_ttlv::<ObjectGroup>(&ttlv).unwrap(), group);
        // wrong tag for the type
        assert!(matches!(
            from_ttlv::<UniqueIdentifier>(&ttlv),
            Err(KmipError::TypeMismatch(_))
        ));
    }

    #[test]
    fn gated_both_ways() {
        let group = ObjectGroup::new("Group1");
        let ttlv = SpecContext::with_spec(KmipSpec::V1_2, || to_ttlv(&group)).unwrap();
        SpecContext::with_spec(KmipSpec::V3_0, || {
            assert!(matches!(
                to_ttlv(&group),
                Err(KmipError::NotSupportedForSpec { .. })
            ));
            assert!(from_ttlv::<ObjectGroup>(&ttlv).unwrap_err().is_not_found());
            assert!(decode_attribute(&ttlv).unwrap_err().is_not_found());
        });
    }

    #[test]
    fn encoding_and_decoding_refuse_alike() {
        let group = ObjectGroup::new("Group1");
        let ttlv = SpecContext::with_spec(KmipSpec::V1_2, || to_ttlv(&group)).unwrap();
        let boxed: Box<dyn KmipAttribute> = Box::new(group);
        SpecContext::with_spec(KmipSpec::V2_1, || {
            let encode_error = to_ttlv(boxed.as_ref()).unwrap_err();
            let decode_error = decode_attribute(&ttlv).unwrap_err();
            assert_eq!(encode_error.to_string(), decode_error.to_string());
            assert!(matches!(
                encode_error,
                KmipError::NotSupportedForSpec { .. }
            ));
        });
    }

    #[test]
    fn dispatch_through_the_registry() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let ttlv = TTLV::primitive("UniqueIdentifier", AttributeValue::text_string("uid-1"));
        let attribute = decode_attribute(&ttlv).unwrap();
        assert_eq!(attribute.attribute_name(), "Unique Identifier");
        assert_eq!(attribute.attribute_value(), AttributeValue::text_string("uid-1"));

        // right tag, wrong encoding
        let ttlv = TTLV::primitive("UniqueIdentifier", AttributeValue::integer(1));
        assert!(matches!(
            decode_attribute(&ttlv),
            Err(KmipError::UnknownIdentifier(_))
        ));
        // a structure is never an attribute value
        assert!(decode_attribute(&TTLV::structure("ObjectGroup", vec![])).is_err());
    }

    #[test]
    fn vendor_decoders() {
        let tag = VendorScore(0).kmip_tag();
        let decoder: AttributeDecoder = decoder_of::<VendorScore>;
        register_attribute_decoder(&tag, EncodingType::LongInteger, decoder).unwrap();
        assert!(matches!(
            register_attribute_decoder(&tag, EncodingType::LongInteger, decoder),
            Err(KmipError::InvalidRegistration(_))
        ));

        let _guard = SpecContext::enter(KmipSpec::V2_1);
        let ttlv = to_ttlv(&VendorScore(42)).unwrap();
        assert_eq!(ttlv.tag, "VendorScore");
        let decoded = decode_attribute(&ttlv).unwrap();
        assert_eq!(decoded.attribute_value().as_i64().unwrap(), 42);
        assert_eq!(decoded.canonical_name(), "x-VendorScore");
        assert_eq!(
            TTLV::from_bytes(&ttlv.to_bytes().unwrap()).unwrap(),
            ttlv
        );
    }
}
