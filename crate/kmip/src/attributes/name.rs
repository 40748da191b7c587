use strum::{EnumIter, IntoEnumIterator};

use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, SpecContext, Tag,
    error::result::KmipResult,
    kmip_data_type::KmipDataType,
    ttlv::TTLV,
};

const NAME_SPECS: &[KmipSpec] = &[KmipSpec::UnknownVersion, KmipSpec::V1_2];

/// How a `Name` value should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u32)]
pub enum NameType {
    UninterpretedTextString = 0x0000_0001,
    Uri = 0x0000_0002,
}

impl NameType {
    #[allow(clippy::as_conversions)]
    // This conversion is idiomatic for items marked with #[repr(u32)]
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    pub fn from_value(value: u32) -> KmipResult<Self> {
        Self::iter()
            .find(|name_type| name_type.value() == value)
            .ok_or_else(|| KmipError::UnknownIdentifier(format!("NameType 0x{value:08X}")))
    }
}

/// The KMIP 1.x `Name` structure: a label a client can locate an object by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub name_value: String,
    pub name_type: NameType,
}

impl Name {
    pub fn new(name_value: impl Into<String>, name_type: NameType) -> Self {
        Self {
            name_value: name_value.into(),
            name_type,
        }
    }

    pub fn to_ttlv(&self) -> KmipResult<TTLV> {
        let spec = SpecContext::get();
        if !self.is_supported_for(spec) {
            return Err(KmipError::not_supported(spec, "Name structure"));
        }
        Ok(TTLV::structure(
            Tag::Name.description(),
            vec![
                TTLV::primitive(
                    Tag::NameValue.description(),
                    AttributeValue::text_string(self.name_value.as_str()),
                ),
                TTLV::primitive(
                    Tag::NameType.description(),
                    AttributeValue::enumeration(self.name_type.value()),
                ),
            ],
        ))
    }

    pub fn from_ttlv(ttlv: &TTLV) -> KmipResult<Self> {
        let spec = SpecContext::get();
        if !NAME_SPECS.contains(&spec) {
            return Err(KmipError::not_supported(spec, "Name structure"));
        }
        if ttlv.tag != Tag::Name.description() {
            return Err(KmipError::InvalidArgument(format!(
                "expected a Name structure, got {}",
                ttlv.tag
            )));
        }
        let required = |tag: Tag| -> KmipResult<&AttributeValue> {
            ttlv.child(tag.description())?
                .ok_or_else(|| {
                    KmipError::InvalidArgument(format!("Name has no {}", tag.description()))
                })?
                .primitive_value()
        };
        let name_value = required(Tag::NameValue)?.as_text()?.to_owned();
        let name_type = required(Tag::NameType)?;
        if name_type.encoding_type() != EncodingType::Enumeration {
            return Err(KmipError::TypeMismatch(format!(
                "NameType is an Enumeration, got a {}",
                name_type.encoding_type()
            )));
        }
        Ok(Self {
            name_value,
            name_type: NameType::from_value(name_type.as_u32()?)?,
        })
    }
}

impl KmipDataType for Name {
    fn kmip_tag(&self) -> KmipTag {
        Tag::Name.into()
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Structure
    }

    fn is_supported_for(&self, spec: KmipSpec) -> bool {
        NAME_SPECS.contains(&spec)
    }
}
