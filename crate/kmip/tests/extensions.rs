#![allow(clippy::unwrap_used)]

use cosmian_kmip_core::{
    AttributeValue, KmipError, KmipSpec, KmipTag, SpecContext, TAG_EXTENSION_RANGE,
    attributes::State,
    ttlv::TTLV,
};
use cosmian_logger::log_init;

#[test]
fn register_lowest_vendor_tag() {
    log_init(option_env!("RUST_LOG"));
    let tag = KmipTag::register(0x54_0000, "VendorKeyFamily", [KmipSpec::V2_1]).unwrap();
    assert!(tag.is_custom());
    assert_eq!(tag.value(), *TAG_EXTENSION_RANGE.start());
    assert_eq!(KmipTag::from_value(KmipSpec::V2_1, 0x54_0000).unwrap(), tag);
    assert_eq!(KmipTag::from_name(KmipSpec::V2_1, "VendorKeyFamily").unwrap(), tag);
    assert_eq!(tag.hex_string(), "0x540000");
    assert!(KmipTag::registered_extensions().contains(&tag));

    // re-registering keeps the first description
    let again = KmipTag::register(0x54_0000, "SomethingElse", [KmipSpec::V1_2]).unwrap();
    assert_eq!(again.description(), "VendorKeyFamily");
    assert!(KmipTag::from_name(KmipSpec::V1_2, "SomethingElse").is_err());
}

#[test]
fn invalid_registrations() {
    log_init(option_env!("RUST_LOG"));
    for value in [0x53_FFFF, 0x55_0000, 0x42_0009] {
        assert!(matches!(
            KmipTag::register(value, "OutOfRange", [KmipSpec::V2_1]),
            Err(KmipError::InvalidRegistration(_))
        ));
    }
    assert!(matches!(
        KmipTag::register(0x54_0010, "NoSpecs", Vec::<KmipSpec>::new()),
        Err(KmipError::InvalidRegistration(_))
    ));
    assert!(matches!(
        KmipTag::register(0x54_0011, "", [KmipSpec::V2_1]),
        Err(KmipError::InvalidRegistration(_))
    ));
    // a standard description cannot be taken over
    assert!(matches!(
        KmipTag::register(0x54_0012, "UniqueIdentifier", [KmipSpec::V2_1]),
        Err(KmipError::InvalidRegistration(_))
    ));
    assert!(KmipTag::from_value(KmipSpec::V2_1, 0x54_0010).is_err());
}

#[test]
fn vendor_tag_on_the_wire() {
    log_init(option_env!("RUST_LOG"));
    KmipTag::register(0x54_0020, "VendorRotationCount", [KmipSpec::V2_1]).unwrap();
    let ttlv = TTLV::primitive("VendorRotationCount", AttributeValue::long_integer(12));

    let bytes = SpecContext::with_spec(KmipSpec::V2_1, || ttlv.to_bytes()).unwrap();
    assert_eq!(&bytes[..4], &[0x54, 0x00, 0x20, 0x03]);
    assert_eq!(
        SpecContext::with_spec(KmipSpec::V2_1, || TTLV::from_bytes(&bytes)).unwrap(),
        ttlv
    );

    SpecContext::with_spec(KmipSpec::V1_2, || {
        assert!(matches!(
            ttlv.to_bytes(),
            Err(KmipError::NotSupportedForSpec { .. })
        ));
        assert!(TTLV::from_bytes(&bytes).unwrap_err().is_not_found());
    });
}

#[test]
fn vendor_state_values() {
    log_init(option_env!("RUST_LOG"));
    let value = State::register(0x8000_0001, "Suspended", [KmipSpec::V3_0]).unwrap();
    SpecContext::with_spec(KmipSpec::V3_0, || {
        let state = State::from_value(0x8000_0001).unwrap();
        assert_eq!(state.value(), &value);
        assert_eq!(state.description(), "Suspended");
    });
    assert!(SpecContext::with_spec(KmipSpec::V2_1, || State::from_value(0x8000_0001)).is_err());
    assert!(State::register(0x0000_0007, "NotVendor", [KmipSpec::V3_0]).is_err());
}
