//! XML -> TTLV.
//!
//! Accepts what `TTLVXMLSerializer` writes. An element without a `type`
//! attribute is read as a Structure.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use tracing::trace;

use crate::{
    AttributeValue, EncodingType, KmipError, XmlFormat,
    error::result::KmipResult,
    ttlv::{TTLV, TTLValue},
};

pub struct TTLVXMLDeserializer;

impl TTLVXMLDeserializer {
    pub fn from_xml(xml: &str) -> KmipResult<TTLV> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut buf = Vec::new();
        let mut stack: Vec<TTLV> = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Eof => break,
                Event::Start(e) => {
                    let (tag, typ, _) = Self::element(&e)?;
                    match typ {
                        None | Some(EncodingType::Structure) => {
                            stack.push(TTLV::structure(tag, Vec::new()));
                        }
                        Some(other) => {
                            return Err(KmipError::Xml(format!(
                                "element '{tag}' of type {other} cannot have children"
                            )));
                        }
                    }
                }
                Event::Empty(e) => {
                    let (tag, typ, value) = Self::element(&e)?;
                    let ttlv = match (typ, value) {
                        (None | Some(EncodingType::Structure), None) => {
                            TTLV::structure(tag, Vec::new())
                        }
                        (Some(encoding_type), Some(value)) => {
                            let value = AttributeValue::decode::<XmlFormat>(encoding_type, &value)
                                .map_err(|err| {
                                    KmipError::Xml(format!(
                                        "invalid {encoding_type} value '{value}' for '{tag}': \
                                         {err}"
                                    ))
                                })?;
                            TTLV::primitive(tag, value)
                        }
                        (_, _) => {
                            return Err(KmipError::Xml(format!(
                                "element '{tag}' needs both a type and a value attribute"
                            )));
                        }
                    };
                    if let Some(root) = Self::attach(&mut stack, ttlv)? {
                        return Ok(root);
                    }
                }
                Event::End(e) => {
                    let ttlv = stack
                        .pop()
                        .ok_or_else(|| KmipError::Xml("unbalanced XML".to_owned()))?;
                    if ttlv.tag.as_bytes() != e.name().as_ref() {
                        return Err(KmipError::Xml(format!(
                            "closing '{}' does not match '{}'",
                            String::from_utf8_lossy(e.name().as_ref()),
                            ttlv.tag
                        )));
                    }
                    if let Some(root) = Self::attach(&mut stack, ttlv)? {
                        return Ok(root);
                    }
                }
                Event::Text(_)
                | Event::CData(_)
                | Event::Comment(_)
                | Event::Decl(_)
                | Event::PI(_)
                | Event::DocType(_) => {}
            }
            buf.clear();
        }
        Err(KmipError::Xml("no root element".to_owned()))
    }

    /// Push `ttlv` into its parent, or hand it back when it is the root.
    fn attach(stack: &mut [TTLV], ttlv: TTLV) -> KmipResult<Option<TTLV>> {
        match stack.last_mut() {
            None => Ok(Some(ttlv)),
            Some(TTLV {
                value: TTLValue::Structure(children),
                ..
            }) => {
                children.push(ttlv);
                Ok(None)
            }
            Some(parent) => Err(KmipError::Xml(format!(
                "'{}' is not a Structure",
                parent.tag
            ))),
        }
    }

    /// The tag, `type` and `value` of an element.
    fn element(e: &BytesStart<'_>) -> KmipResult<(String, Option<EncodingType>, Option<String>)> {
        let tag = String::from_utf8(e.name().as_ref().to_vec())?;
        let mut typ = None;
        let mut value = None;
        for attribute in e.attributes() {
            let attribute = attribute?;
            match attribute.key.as_ref() {
                b"type" => {
                    let name = attribute.unescape_value()?;
                    typ = Some(EncodingType::from_description(&name).map_err(|_e| {
                        KmipError::Xml(format!("unknown type '{name}' for '{tag}'"))
                    })?);
                }
                b"value" => value = Some(attribute.unescape_value()?.into_owned()),
                _ => {}
            }
        }
        trace!("xml element {tag} {typ:?}");
        Ok((tag, typ, value))
    }
}
