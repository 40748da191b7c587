use serde::{
    Serialize,
    ser::{self, SerializeStruct, Serializer},
};
use super::{TTLV, TTLValue};
use crate::{EncodingType, JsonFormat};

impl Serialize for TTLV {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        fn _serialize<S, T>(
            serializer: S,
            tag: &str,
            typ: &str,
            value: &T,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: Serialize + ?Sized,
        {
            let mut ttlv = serializer.serialize_struct("TTLV", 3)?;
            ttlv.serialize_field("tag", tag)?;
            ttlv.serialize_field("type", typ)?;
            ttlv.serialize_field("value", value)?;
            ttlv.end()
        }

        match &self.value {
            TTLValue::Structure(children) => _serialize(
                serializer,
                &self.tag,
                EncodingType::Structure.description(),
                children,
            ),
            TTLValue::Primitive(value) => _serialize(
                serializer,
                &self.tag,
                value.encoding_type().description(),
                &value.encode::<JsonFormat>().map_err(|e| {
                    ser::Error::custom(format!("cannot serialize {} to JSON: {e}", self.tag))
                })?,
            ),
        }
    }
}
