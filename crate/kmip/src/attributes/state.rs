use std::{ops::RangeInclusive, sync::LazyLock};

use strum::{EnumIter, IntoEnumIterator};

use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, SpecContext, Tag,
    error::result::KmipResult,
    kmip_data_type::{FromAttributeValue, KmipAttribute, KmipDataType},
    registry::{OpenRegistry, RegistryEntry, StandardEntry},
};

use super::title_case;

/// Values vendors may register for `State`
pub const STATE_EXTENSION_RANGE: RangeInclusive<u32> = 0x8000_0000..=0x8FFF_FFFF;

const STATE_SPECS: &[KmipSpec] = &[
    KmipSpec::UnknownVersion,
    KmipSpec::V1_2,
    KmipSpec::V2_1,
    KmipSpec::V3_0,
];

/// Lifecycle states of a managed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u32)]
pub enum StandardState {
    PreActive = 0x0000_0001,
    Active = 0x0000_0002,
    Deactivated = 0x0000_0003,
    Compromised = 0x0000_0004,
    Destroyed = 0x0000_0005,
    DestroyedCompromised = 0x0000_0006,
}

impl StandardEntry for StandardState {
    const EXTENSION_RANGE: RangeInclusive<u32> = STATE_EXTENSION_RANGE;
    const KIND: &'static str = "State";

    #[allow(clippy::as_conversions)]
    // This conversion is idiomatic for items marked with #[repr(u32)]
    fn value(self) -> u32 {
        self as u32
    }

    fn description(self) -> &'static str {
        match self {
            Self::PreActive => "PreActive",
            Self::Active => "Active",
            Self::Deactivated => "Deactivated",
            Self::Compromised => "Compromised",
            Self::Destroyed => "Destroyed",
            Self::DestroyedCompromised => "DestroyedCompromised",
        }
    }

    fn supported_specs(self) -> &'static [KmipSpec] {
        STATE_SPECS
    }
}

static STATE_REGISTRY: LazyLock<OpenRegistry<StandardState>> =
    LazyLock::new(|| OpenRegistry::with_standard(StandardState::iter()));

/// A standard or vendor `State` value.
pub type StateValue = RegistryEntry<StandardState>;

/// The `State` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    value: StateValue,
}

impl State {
    /// Fails when `value` is not valid under the current spec.
    pub fn new(value: StateValue) -> KmipResult<Self> {
        let spec = SpecContext::get();
        if !value.is_supported_for(spec) {
            return Err(KmipError::not_supported(
                spec,
                format!("State value {value}"),
            ));
        }
        Ok(Self { value })
    }

    /// Look up a value under the current spec.
    pub fn from_value(value: u32) -> KmipResult<Self> {
        Self::new(STATE_REGISTRY.resolve_value(SpecContext::get(), value)?)
    }

    /// Look up a description under the current spec.
    pub fn from_name(name: &str) -> KmipResult<Self> {
        Self::new(STATE_REGISTRY.resolve_description(SpecContext::get(), name)?)
    }

    /// Register a vendor value in `[0x80000000, 0x8FFFFFFF]`.
    pub fn register(
        value: u32,
        description: &str,
        supported_specs: impl IntoIterator<Item = KmipSpec>,
    ) -> KmipResult<StateValue> {
        STATE_REGISTRY.register(value, description, supported_specs)
    }

    #[must_use]
    pub fn registered_values() -> Vec<StateValue> {
        STATE_REGISTRY.extensions()
    }

    #[must_use]
    pub const fn value(&self) -> &StateValue {
        &self.value
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.value.description()
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.value.is_custom()
    }

    #[must_use]
    pub fn is(&self, state: StandardState) -> bool {
        self.value.standard() == Some(state)
    }
}

/// Standard states are valid under every spec `State` itself supports.
impl From<StandardState> for State {
    fn from(state: StandardState) -> Self {
        Self {
            value: RegistryEntry::Standard(state),
        }
    }
}

impl KmipDataType for State {
    fn kmip_tag(&self) -> KmipTag {
        Tag::State.into()
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Enumeration
    }

    fn is_supported_for(&self, spec: KmipSpec) -> bool {
        STATE_SPECS.contains(&spec) && self.value.is_supported_for(spec)
    }
}

impl KmipAttribute for State {
    fn is_always_present(&self) -> bool {
        true
    }

    fn is_server_initializable(&self) -> bool {
        true
    }

    fn is_client_initializable(&self) -> bool {
        false
    }

    fn is_client_deletable(&self) -> bool {
        false
    }

    fn is_multi_instance_allowed(&self) -> bool {
        false
    }

    fn is_server_modifiable(&self, _state: &State) -> bool {
        true
    }

    fn is_client_modifiable(&self, _state: &State) -> bool {
        false
    }

    fn attribute_value(&self) -> AttributeValue {
        AttributeValue::enumeration(self.value.value())
    }

    fn attribute_name(&self) -> String {
        title_case(Tag::State.description())
    }
}

impl FromAttributeValue for State {
    fn from_attribute_value(value: AttributeValue) -> KmipResult<Self> {
        if value.encoding_type() != EncodingType::Enumeration {
            return Err(KmipError::TypeMismatch(format!(
                "State is an Enumeration, got a {}",
                value.encoding_type()
            )));
        }
        Self::from_value(value.as_u32()?)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::{StandardState, State};
    use crate::{
        AttributeValue, KmipError, KmipSpec, SpecContext,
        kmip_data_type::{FromAttributeValue, KmipAttribute, KmipDataType},
    };

    #[test]
    fn standard_values() {
        let _guard = SpecContext::enter(KmipSpec::V2_1);
        let state = State::from_value(2).unwrap();
        assert!(state.is(StandardState::Active));
        assert_eq!(State::from_name("DestroyedCompromised").unwrap().value().value(), 6);
        assert_eq!(state.attribute_value(), AttributeValue::enumeration(2));
        assert_eq!(state.attribute_name(), "State");
        assert!(State::from_value(7).unwrap_err().is_not_found());
        assert!(matches!(
            State::from_attribute_value(AttributeValue::integer(2)),
            Err(KmipError::TypeMismatch(_))
        ));
    }

    #[test]
    fn spec_gating() {
        let state = State::from(StandardState::PreActive);
        assert!(state.is_supported_for(KmipSpec::V1_2));
        assert!(state.is_supported_for(KmipSpec::V3_0));
        assert!(!state.is_supported_for(KmipSpec::V1_4));
        assert!(!state.is_supported_for(KmipSpec::UnsupportedVersion));
        SpecContext::with_spec(KmipSpec::V1_0, || {
            assert!(State::from_value(1).is_err());
        });
    }

    #[test]
    fn flags() {
        let state = State::from(StandardState::Active);
        assert!(state.is_always_present());
        assert!(state.is_server_initializable());
        assert!(!state.is_client_initializable());
        assert!(state.is_server_modifiable(&state));
        assert!(!state.is_client_modifiable(&state));
        assert!(!state.is_client_deletable());
        assert!(!state.is_multi_instance_allowed());
    }

    #[test]
    fn vendor_values() {
        let value = State::register(0x8000_0010, "Archived", [KmipSpec::V2_1]).unwrap();
        assert!(value.is_custom());
        assert!(State::registered_values().contains(&value));
        // first writer wins
        let again = State::register(0x8000_0010, "Archived", [KmipSpec::V1_2]).unwrap();
        assert_eq!(again.description(), "Archived");
        assert!(!again.is_supported_for(KmipSpec::V1_2));

        SpecContext::with_spec(KmipSpec::V2_1, || {
            let state = State::from_name("Archived").unwrap();
            assert!(state.is_custom());
            assert!(state.is_supported());
            assert_eq!(
                State::from_attribute_value(AttributeValue::enumeration(0x8000_0010)).unwrap(),
                state
            );
        });
        SpecContext::with_spec(KmipSpec::V1_2, || {
            assert!(matches!(
                State::new(value.clone()),
                Err(KmipError::NotSupportedForSpec { .. })
            ));
        });

        assert!(matches!(
            State::register(0x9000_0000, "TooHigh", [KmipSpec::V2_1]),
            Err(KmipError::InvalidRegistration(_))
        ));
        assert!(State::register(0x7FFF_FFFF, "TooLow", [KmipSpec::V2_1]).is_err());
        assert!(State::register(0x8000_0011, "  ", [KmipSpec::V2_1]).is_err());
        assert!(State::register(0x8000_0012, "NoSpecs", Vec::<KmipSpec>::new()).is_err());
    }
}
