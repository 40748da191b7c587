#![allow(clippy::unwrap_used)]

use cosmian_kmip_core::{
    AttributeValue, KmipError, KmipSpec, SpecContext, Tag,
    attributes::{Attribute, CryptographicLength, LeaseTime, ObjectGroup, StandardState, State},
    kmip_data_type::{KmipAttribute, KmipDataType, decode_attribute, from_ttlv, to_ttlv},
    ttlv::TTLV,
};
use cosmian_logger::log_init;

#[test]
fn kmip_1_attributes_are_rejected_elsewhere() {
    log_init(option_env!("RUST_LOG"));
    let lease = LeaseTime::new(86_400_u32);
    assert!(lease.is_supported_for(KmipSpec::V1_2));
    assert!(lease.is_supported_for(KmipSpec::UnknownVersion));
    for spec in [KmipSpec::V1_0, KmipSpec::V1_4, KmipSpec::V2_1, KmipSpec::V3_0] {
        assert!(!lease.is_supported_for(spec));
    }

    let ttlv = SpecContext::with_spec(KmipSpec::V1_2, || to_ttlv(&lease)).unwrap();
    assert_eq!(ttlv.tag, Tag::LeaseTime.description());
    for spec in [KmipSpec::V2_1, KmipSpec::UnsupportedVersion] {
        SpecContext::with_spec(spec, || {
            assert!(matches!(
                to_ttlv(&lease),
                Err(KmipError::NotSupportedForSpec { .. })
            ));
            assert!(from_ttlv::<LeaseTime>(&ttlv).is_err());
            assert!(decode_attribute(&ttlv).is_err());
        });
    }
}

#[test]
fn attribute_structure_round_trip_on_the_wire() {
    log_init(option_env!("RUST_LOG"));
    let _guard = SpecContext::enter(KmipSpec::V1_2);
    let attributes: Vec<Attribute> = vec![
        Attribute::of(&ObjectGroup::new("payroll")),
        Attribute::of(&State::from(StandardState::Deactivated)),
        Attribute::of(&LeaseTime::new(60_u32)),
    ];
    for attribute in &attributes {
        let bytes = attribute.to_ttlv().unwrap().to_bytes().unwrap();
        let back = Attribute::from_ttlv(&TTLV::from_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(&back, attribute);
        let typed = back.attribute().unwrap();
        assert_eq!(typed.attribute_value(), attribute.attribute_value);
    }
    assert_eq!(attributes[1].attribute_value, AttributeValue::enumeration(3));
}

#[test]
fn state_gates_modifiability() {
    log_init(option_env!("RUST_LOG"));
    let _guard = SpecContext::enter(KmipSpec::V1_2);
    let pre_active = State::from(StandardState::PreActive);
    let active = State::from(StandardState::Active);
    let length = CryptographicLength::new(256);
    assert!(length.is_client_modifiable(&pre_active));
    assert!(!length.is_client_modifiable(&active));
    assert!(length.is_server_modifiable(&pre_active));
    assert!(!length.is_server_modifiable(&active));
}
