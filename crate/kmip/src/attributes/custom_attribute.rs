use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, NativeValue, Tag,
    error::result::KmipResult,
    kmip_data_type::{KmipAttribute, KmipDataType},
    ttlv::TTLV,
};

use super::{Attribute, State};

const CUSTOM_ATTRIBUTE_SPECS: &[KmipSpec] = &[KmipSpec::UnknownVersion, KmipSpec::V1_2];

fn has_prefix(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// A vendor attribute named `x-...` (set by clients) or `y-...` (set by
/// servers), carried in an `Attribute` structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAttribute {
    name: String,
    value: AttributeValue,
}

impl CustomAttribute {
    /// Fails unless `name` starts with `x-` or `y-`, in any case.
    pub fn new(name: impl Into<String>, value: AttributeValue) -> KmipResult<Self> {
        let name = name.into();
        if !Self::is_custom_name(&name) {
            return Err(KmipError::InvalidArgument(format!(
                "custom attribute name {name} must start with x- or y-"
            )));
        }
        Ok(Self { name, value })
    }

    pub fn of(name: impl Into<String>, value: impl Into<NativeValue>) -> KmipResult<Self> {
        Self::new(name, AttributeValue::of(value))
    }

    #[must_use]
    pub fn is_custom_name(name: &str) -> bool {
        Self::is_client_name(name) || Self::is_server_name(name)
    }

    #[must_use]
    pub fn is_client_name(name: &str) -> bool {
        has_prefix(name, "x-")
    }

    #[must_use]
    pub fn is_server_name(name: &str) -> bool {
        has_prefix(name, "y-")
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// The `Attribute` structure, without an index.
    pub fn to_ttlv(&self) -> KmipResult<TTLV> {
        Attribute {
            attribute_name: self.name.clone(),
            attribute_index: None,
            attribute_value: self.value.clone(),
        }
        .to_ttlv()
    }

    pub fn from_ttlv(ttlv: &TTLV) -> KmipResult<Self> {
        let attribute = Attribute::from_ttlv(ttlv)?;
        Self::new(attribute.attribute_name, attribute.attribute_value)
    }
}

impl KmipDataType for CustomAttribute {
    fn kmip_tag(&self) -> KmipTag {
        Tag::Attribute.into()
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Structure
    }

    fn is_supported_for(&self, spec: KmipSpec) -> bool {
        CUSTOM_ATTRIBUTE_SPECS.contains(&spec)
    }
}

impl KmipAttribute for CustomAttribute {
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
        Self::is_client_name(&self.name)
    }

    fn is_multi_instance_allowed(&self) -> bool {
        true
    }

    fn is_server_modifiable(&self, _state: &State) -> bool {
        Self::is_server_name(&self.name)
    }

    fn is_client_modifiable(&self, _state: &State) -> bool {
        Self::is_client_name(&self.name)
    }

    fn attribute_value(&self) -> AttributeValue {
        self.value.clone()
    }

    fn attribute_name(&self) -> String {
        self.name.clone()
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::CustomAttribute;
    use crate::{
        AttributeValue, KmipError, KmipSpec, SpecContext,
        attributes::{Attribute, StandardState, State},
        kmip_data_type::{KmipAttribute, KmipDataType, to_ttlv},
        ttlv::TTLV,
    };

    #[test]
    fn names() {
        assert!(CustomAttribute::is_client_name("x-owner"));
        assert!(CustomAttribute::is_client_name("X-"));
        assert!(CustomAttribute::is_server_name("Y-audit"));
        assert!(!CustomAttribute::is_custom_name("Object Group"));
        assert!(!CustomAttribute::is_custom_name("x"));
        assert!(!CustomAttribute::is_custom_name("é-x"));
        assert!(matches!(
            CustomAttribute::of("owner", "ops"),
            Err(KmipError::InvalidArgument(_))
        ));
    }

    #[test]
    fn structure_layout() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let custom = CustomAttribute::of("x-retention-days", 30_i32).unwrap();
        let ttlv = custom.to_ttlv().unwrap();
        assert_eq!(
            ttlv,
            TTLV::structure(
                "Attribute",
                vec![
                    TTLV::primitive("AttributeName", AttributeValue::text_string("x-retention-days")),
                    TTLV::primitive("AttributeValue", AttributeValue::integer(30)),
                ]
            )
        );
        let back =
            CustomAttribute::from_ttlv(&TTLV::from_bytes(&ttlv.to_bytes().unwrap()).unwrap()).unwrap();
        assert_eq!(back, custom);

        let standard = Attribute::of(&State::from(StandardState::Active)).to_ttlv().unwrap();
        assert!(matches!(
            CustomAttribute::from_ttlv(&standard),
            Err(KmipError::InvalidArgument(_))
        ));
        // a structure attribute never travels as a primitive item
        assert!(matches!(to_ttlv(&custom), Err(KmipError::TypeMismatch(_))));
    }

    #[test]
    fn flags_follow_the_prefix() {
        let active = State::from(StandardState::Active);
        let client = CustomAttribute::of("x-owner", "ops").unwrap();
        assert!(client.is_client_modifiable(&active));
        assert!(client.is_client_deletable());
        assert!(!client.is_server_modifiable(&active));

        let server = CustomAttribute::of("y-audit", true).unwrap();
        assert!(server.is_server_modifiable(&active));
        assert!(!server.is_client_modifiable(&active));
        assert!(!server.is_client_deletable());

        for custom in [&client, &server] {
            assert!(!custom.is_always_present());
            assert!(custom.is_server_initializable());
            assert!(custom.is_client_initializable());
            assert!(custom.is_multi_instance_allowed());
        }
    }

    #[test]
    fn kmip_1_only() {
        let custom = CustomAttribute::of("x-owner", "ops").unwrap();
        assert!(custom.is_supported_for(KmipSpec::UnknownVersion));
        assert!(!custom.is_supported_for(KmipSpec::V3_0));
        let ttlv = SpecContext::with_spec(KmipSpec::V1_2, || custom.to_ttlv()).unwrap();
        SpecContext::with_spec(KmipSpec::V2_1, || {
            assert!(custom.to_ttlv().unwrap_err().is_not_found());
            assert!(CustomAttribute::from_ttlv(&ttlv).unwrap_err().is_not_found());
        });
    }
}
