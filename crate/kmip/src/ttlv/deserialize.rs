use core::fmt;

use serde::{
    Deserialize,
    de::{self, MapAccess, Visitor},
};
use serde_json::Value;
use tracing::trace;

use super::{TTLV, TTLValue};
use crate::{AttributeValue, EncodingType, JsonFormat};

impl<'de> Deserialize<'de> for TTLV {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // see https://serde.rs/deserialize-struct.html

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Tag,
            Type,
            Value,
        }

        struct TTLVVisitor;

        impl<'de> Visitor<'de> for TTLVVisitor {
            type Value = TTLV;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct TTLV")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut tag: Option<String> = None;
                let mut typ: Option<String> = None;
                // the type may come after the value: keep it raw until the end
                let mut value: Option<Value> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Tag => {
                            if tag.is_some() {
                                return Err(de::Error::duplicate_field("tag"))
                            }
                            tag = Some(map.next_value()?);
                        }
                        Field::Type => {
                            if typ.is_some() {
                                return Err(de::Error::duplicate_field("type"))
                            }
                            typ = Some(map.next_value()?);
                        }
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"))
                            }
                            value = Some(map.next_value()?);
                        }
                    }
                }
                let tag = tag.ok_or_else(|| de::Error::missing_field("tag"))?;
                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let encoding_type = match typ {
                    Some(typ) => EncodingType::from_description(&typ)
                        .map_err(|_e| de::Error::custom(format!("Unknown type: {typ}")))?,
                    None => EncodingType::Structure,
                };
                trace!("visit_map: {tag} ({encoding_type})");
                let value = if encoding_type == EncodingType::Structure {
                    TTLValue::Structure(Vec::<TTLV>::deserialize(value).map_err(|e| {
                        de::Error::custom(format!("invalid Structure {tag}: {e}"))
                    })?)
                } else {
                    TTLValue::Primitive(AttributeValue::decode::<JsonFormat>(encoding_type, &value).map_err(|e| {
                        de::Error::custom(format!("invalid {encoding_type} for {tag}: {e}"))
                    })?)
                };
                Ok(TTLV { tag, value })
            }
        }

        const FIELDS: &[&str] = &["tag", "type", "value"];
        deserializer.deserialize_struct("TTLV", FIELDS, TTLVVisitor)
    }
}
