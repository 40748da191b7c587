mod deserialize;
mod kmip_big_int;
mod serialize;
mod ttlv_record;
mod ttlv_struct;
mod wire;
mod xml;

pub use kmip_big_int::KmipBigInt;
pub use ttlv_record::{ALIGNMENT, HEADER_SIZE, TtlvRecord, padded_length};
pub use ttlv_struct::{TTLV, TTLValue};
pub use wire::{TTLVBytesDeserializer, TTLVBytesSerializer};
pub use xml::{TTLVXMLDeserializer, TTLVXMLSerializer};

#[allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]
