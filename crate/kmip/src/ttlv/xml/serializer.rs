//! TTLV -> XML.
//!
//! Every item is an element named after its tag. Primitives are empty
//! elements carrying `type` and `value` attributes; structures nest their
//! children and carry `type="Structure"`.

use quick_xml::{
    Writer,
    events::{BytesStart, Event},
};

use crate::{
    EncodingType, XmlFormat,
    error::result::KmipResult,
    ttlv::{TTLV, TTLValue},
};

pub struct TTLVXMLSerializer;

impl TTLVXMLSerializer {
    pub fn to_xml(ttlv: &TTLV) -> KmipResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        Self::write_ttlv(&mut writer, ttlv)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_ttlv(w: &mut Writer<Vec<u8>>, ttlv: &TTLV) -> KmipResult<()> {
        let mut elem = BytesStart::new(ttlv.tag.as_str());
        match &ttlv.value {
            TTLValue::Structure(children) => {
                elem.push_attribute(("type", EncodingType::Structure.description()));
                if children.is_empty() {
                    w.write_event(Event::Empty(elem))?;
                    return Ok(());
                }
                let end = elem.to_end().into_owned();
                w.write_event(Event::Start(elem))?;
                for child in children {
                    Self::write_ttlv(w, child)?;
                }
                w.write_event(Event::End(end))?;
            }
            TTLValue::Primitive(value) => {
                let text = value.encode::<XmlFormat>()?;
                elem.push_attribute(("type", value.encoding_type().description()));
                elem.push_attribute(("value", text.as_str()));
                w.write_event(Event::Empty(elem))?;
            }
        }
        Ok(())
    }
}
