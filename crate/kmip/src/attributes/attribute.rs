use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, SpecContext, Tag,
    error::result::KmipResult,
    kmip_data_type::{KmipAttribute, KmipDataType, decode_attribute},
    ttlv::{TTLV, TTLValue},
};

use super::CustomAttribute;

const ATTRIBUTE_SPECS: &[KmipSpec] = &[KmipSpec::UnknownVersion, KmipSpec::V1_2];

/// The KMIP 1.x `Attribute` structure: a name, an optional index among
/// instances of a multi-instance attribute, and the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute_name: String,
    pub attribute_index: Option<i32>,
    pub attribute_value: AttributeValue,
}

impl Attribute {
    /// Wrap `attribute` at index 0.
    pub fn of(attribute: &(impl KmipAttribute + ?Sized)) -> Self {
        Self::with_index(attribute, 0)
    }

    pub fn with_index(attribute: &(impl KmipAttribute + ?Sized), index: i32) -> Self {
        Self {
            attribute_name: attribute.attribute_name(),
            attribute_index: Some(index),
            attribute_value: attribute.attribute_value(),
        }
    }

    pub fn to_ttlv(&self) -> KmipResult<TTLV> {
        let spec = SpecContext::get();
        if !self.is_supported_for(spec) {
            return Err(KmipError::not_supported(spec, "Attribute structure"));
        }
        let mut children = vec![TTLV::primitive(
            Tag::AttributeName.description(),
            AttributeValue::text_string(self.attribute_name.as_str()),
        )];
        if let Some(index) = self.attribute_index {
            children.push(TTLV::primitive(
                Tag::AttributeIndex.description(),
                AttributeValue::integer(index),
            ));
        }
        children.push(TTLV::primitive(
            Tag::AttributeValue.description(),
            self.attribute_value.clone(),
        ));
        Ok(TTLV::structure(Tag::Attribute.description(), children))
    }

    pub fn from_ttlv(ttlv: &TTLV) -> KmipResult<Self> {
        let spec = SpecContext::get();
        if !ATTRIBUTE_SPECS.contains(&spec) {
            return Err(KmipError::not_supported(spec, "Attribute structure"));
        }
        if ttlv.tag != Tag::Attribute.description() {
            return Err(KmipError::InvalidArgument(format!(
                "expected an Attribute structure, got {}",
                ttlv.tag
            )));
        }
        let child = |tag: Tag| -> KmipResult<Option<&AttributeValue>> {
            ttlv.child(tag.description())?
                .map(TTLV::primitive_value)
                .transpose()
        };
        let attribute_name = child(Tag::AttributeName)?
            .ok_or_else(|| KmipError::InvalidArgument("Attribute has no AttributeName".to_owned()))?
            .as_text()?
            .to_owned();
        let attribute_index = child(Tag::AttributeIndex)?
            .map(AttributeValue::as_i32)
            .transpose()?;
        let attribute_value = child(Tag::AttributeValue)?
            .ok_or_else(|| {
                KmipError::InvalidArgument(format!("Attribute {attribute_name} has no value"))
            })?
            .clone();
        Ok(Self {
            attribute_name,
            attribute_index,
            attribute_value,
        })
    }

    /// The typed attribute this structure carries.
    ///
    /// `x-`/`y-` names give a `CustomAttribute`. Other names are mapped back
    /// to their tag ("Object Group" -> `ObjectGroup`) and decoded through the
    /// attribute decoder registry.
    pub fn attribute(&self) -> KmipResult<Box<dyn KmipAttribute>> {
        if CustomAttribute::is_custom_name(&self.attribute_name) {
            let custom =
                CustomAttribute::new(self.attribute_name.as_str(), self.attribute_value.clone())?;
            let spec = SpecContext::get();
            if !custom.is_supported_for(spec) {
                return Err(KmipError::not_supported(spec, custom.attribute_name()));
            }
            return Ok(Box::new(custom));
        }
        let tag_name: String = self.attribute_name.split_whitespace().collect();
        let tag = KmipTag::resolve_name(&tag_name)?;
        let decoded = decode_attribute(&TTLV {
            tag: tag.description().to_owned(),
            value: TTLValue::Primitive(self.attribute_value.clone()),
        })?;
        if decoded.attribute_name() != self.attribute_name {
            return Err(KmipError::InvalidArgument(format!(
                "invalid attribute name {}",
                self.attribute_name
            )));
        }
        Ok(decoded)
    }
}

impl KmipDataType for Attribute {
    fn kmip_tag(&self) -> KmipTag {
        Tag::Attribute.into()
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Structure
    }

    fn is_supported_for(&self, spec: KmipSpec) -> bool {
        ATTRIBUTE_SPECS.contains(&spec)
    }
}
