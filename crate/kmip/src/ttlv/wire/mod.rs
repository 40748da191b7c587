mod ttlv_bytes_deserializer;
mod ttlv_bytes_serializer;

pub use ttlv_bytes_deserializer::TTLVBytesDeserializer;
pub use ttlv_bytes_serializer::TTLVBytesSerializer;
