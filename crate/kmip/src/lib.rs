#![allow(clippy::upper_case_acronyms)]
//! KMIP core: the TTLV wire codec, the versioned tag registry, the
//! attribute value model shared by the binary, JSON and XML bindings, and
//! the per-thread protocol version context.

pub use attribute_value::{
    AttributeValue, JsonFormat, NativeValue, TtlvFormat, ValueFormat, XmlFormat,
};
pub use encoding_type::EncodingType;
pub use error::{
    KmipError,
    result::{KmipResult, KmipResultHelper},
};
pub use kmip_spec::KmipSpec;
pub use kmip_tag::{KmipTag, TAG_EXTENSION_RANGE, TAG_SIZE, Tag};
pub use protocol_version::ProtocolVersion;
pub use registry::{ExtensionEntry, OpenRegistry, RegistryEntry, StandardEntry};
pub use spec_context::{SpecContext, SpecGuard};
pub use ttlv::KmipBigInt;

mod attribute_value;
pub mod attributes;
mod encoding_type;
mod error;
pub mod kmip_data_type;
mod kmip_spec;
mod kmip_tag;
mod protocol_version;
mod registry;
mod spec_context;
pub mod ttlv;
