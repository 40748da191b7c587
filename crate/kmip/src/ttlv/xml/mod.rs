mod deserializer;
mod serializer;

pub use deserializer::TTLVXMLDeserializer;
pub use serializer::TTLVXMLSerializer;
