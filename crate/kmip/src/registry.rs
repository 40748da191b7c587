//! Open-set registries: a compiled-in standard catalog that vendors can
//! extend at runtime inside a reserved value range.
//!
//! Tags and enumerations share the same contract. Lookups are filtered by
//! protocol version; registration is first-writer-wins per value.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    hash::{Hash, Hasher},
    ops::RangeInclusive,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, warn};

use crate::{KmipError, KmipSpec, error::result::KmipResult};

/// A member of a compiled-in standard catalog.
pub trait StandardEntry: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Human readable kind, used in error messages ("tag", "State", ...)
    const KIND: &'static str;
    /// Values vendors may register
    const EXTENSION_RANGE: RangeInclusive<u32>;

    fn value(self) -> u32;
    fn description(self) -> &'static str;
    fn supported_specs(self) -> &'static [KmipSpec];
}

/// A vendor entry registered at runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtensionEntry {
    value: u32,
    description: String,
    supported_specs: BTreeSet<KmipSpec>,
}

/// Either a standard catalog member or a runtime extension.
///
/// Equality and hashing only consider the numeric value.
#[derive(Clone)]
pub enum RegistryEntry<S> {
    Standard(S),
    Extension(Arc<ExtensionEntry>),
}

impl<S: StandardEntry> RegistryEntry<S> {
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::Standard(s) => s.value(),
            Self::Extension(e) => e.value,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Standard(s) => s.description(),
            Self::Extension(e) => &e.description,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Extension(_))
    }

    #[must_use]
    pub fn is_supported_for(&self, spec: KmipSpec) -> bool {
        match self {
            Self::Standard(s) => s.supported_specs().contains(&spec),
            Self::Extension(e) => e.supported_specs.contains(&spec),
        }
    }

    /// The standard catalog member, if this is not an extension.
    #[must_use]
    pub const fn standard(&self) -> Option<S> {
        match self {
            Self::Standard(s) => Some(*s),
            Self::Extension(_) => None,
        }
    }
}

impl<S: StandardEntry> PartialEq for RegistryEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<S: StandardEntry> Eq for RegistryEntry<S> {}

impl<S: StandardEntry> Hash for RegistryEntry<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl<S: StandardEntry> fmt::Debug for RegistryEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(s) => write!(f, "{s:?}"),
            Self::Extension(e) => f
                .debug_struct("Extension")
                .field("value", &format!("0x{:X}", e.value))
                .field("description", &e.description)
                .finish(),
        }
    }
}

impl<S: StandardEntry> fmt::Display for RegistryEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

struct Entries<S> {
    by_value: HashMap<u32, RegistryEntry<S>>,
    by_description: HashMap<String, RegistryEntry<S>>,
}

/// Value and description indexes of a standard catalog plus its extensions.
///
/// Both indexes sit behind one lock so readers never observe an entry
/// present in one map and missing from the other.
pub struct OpenRegistry<S> {
    entries: RwLock<Entries<S>>,
}

impl<S: StandardEntry> OpenRegistry<S> {
    pub fn with_standard(standard: impl IntoIterator<Item = S>) -> Self {
        let mut by_value = HashMap::new();
        let mut by_description = HashMap::new();
        for s in standard {
            by_value.insert(s.value(), RegistryEntry::Standard(s));
            by_description.insert(s.description().to_owned(), RegistryEntry::Standard(s));
        }
        Self {
            entries: RwLock::new(Entries {
                by_value,
                by_description,
            }),
        }
    }

    /// Register a vendor extension.
    ///
    /// When the value is already registered the existing entry is returned
    /// unchanged, whatever description was passed.
    pub fn register(
        &self,
        value: u32,
        description: &str,
        supported_specs: impl IntoIterator<Item = KmipSpec>,
    ) -> KmipResult<RegistryEntry<S>> {
        if !S::EXTENSION_RANGE.contains(&value) {
            warn!("rejected {} extension 0x{value:X}: out of range", S::KIND);
            return Err(KmipError::InvalidRegistration(format!(
                "{} extension value 0x{value:X} must be between 0x{:X} and 0x{:X}",
                S::KIND,
                S::EXTENSION_RANGE.start(),
                S::EXTENSION_RANGE.end()
            )));
        }
        if description.trim().is_empty() {
            return Err(KmipError::InvalidRegistration(format!(
                "{} extension 0x{value:X}: description cannot be empty",
                S::KIND
            )));
        }
        let supported_specs: BTreeSet<KmipSpec> = supported_specs.into_iter().collect();
        if supported_specs.is_empty() {
            return Err(KmipError::InvalidRegistration(format!(
                "{} extension 0x{value:X}: at least one supported version must be specified",
                S::KIND
            )));
        }

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.by_value.get(&value) {
            debug!(
                "{} 0x{value:X} already registered as {existing}, keeping it",
                S::KIND
            );
            return Ok(existing.clone());
        }
        if let Some(other) = entries.by_description.get(description) {
            return Err(KmipError::InvalidRegistration(format!(
                "{} description '{description}' is already used by 0x{:X}",
                S::KIND,
                other.value()
            )));
        }
        let entry = RegistryEntry::Extension(Arc::new(ExtensionEntry {
            value,
            description: description.to_owned(),
            supported_specs,
        }));
        entries.by_value.insert(value, entry.clone());
        entries
            .by_description
            .insert(description.to_owned(), entry.clone());
        debug!("registered {} extension 0x{value:X} '{description}'", S::KIND);
        Ok(entry)
    }

    pub fn resolve_value(&self, spec: KmipSpec, value: u32) -> KmipResult<RegistryEntry<S>> {
        let entry = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_value
            .get(&value)
            .cloned()
            .ok_or_else(|| KmipError::UnknownIdentifier(format!("{} 0x{value:X}", S::KIND)))?;
        Self::gate(spec, entry)
    }

    pub fn resolve_description(
        &self,
        spec: KmipSpec,
        description: &str,
    ) -> KmipResult<RegistryEntry<S>> {
        let entry = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_description
            .get(description)
            .cloned()
            .ok_or_else(|| KmipError::UnknownIdentifier(format!("{} '{description}'", S::KIND)))?;
        Self::gate(spec, entry)
    }

    /// Registered extensions, ordered by value.
    pub fn extensions(&self) -> Vec<RegistryEntry<S>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut extensions: Vec<_> = entries
            .by_value
            .values()
            .filter(|e| e.is_custom())
            .cloned()
            .collect();
        extensions.sort_by_key(RegistryEntry::value);
        extensions
    }

    fn gate(spec: KmipSpec, entry: RegistryEntry<S>) -> KmipResult<RegistryEntry<S>> {
        if entry.is_supported_for(spec) {
            Ok(entry)
        } else {
            Err(KmipError::not_supported(
                spec,
                format!("{} {entry} (0x{:X})", S::KIND, entry.value()),
            ))
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::{
        ops::RangeInclusive,
        sync::{Arc, Barrier},
    };

    use super::{OpenRegistry, RegistryEntry, StandardEntry};
    use crate::{KmipError, KmipSpec};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Blue,
    }

    impl StandardEntry for Color {
        const EXTENSION_RANGE: RangeInclusive<u32> = 0x100..=0x1FF;
        const KIND: &'static str = "Color";

        fn value(self) -> u32 {
            match self {
                Self::Red => 1,
                Self::Blue => 2,
            }
        }

        fn description(self) -> &'static str {
            match self {
                Self::Red => "Red",
                Self::Blue => "Blue",
            }
        }

        fn supported_specs(self) -> &'static [KmipSpec] {
            match self {
                Self::Red => &[KmipSpec::UnknownVersion, KmipSpec::V1_2],
                Self::Blue => &[KmipSpec::UnknownVersion, KmipSpec::V2_1],
            }
        }
    }

    fn registry() -> OpenRegistry<Color> {
        OpenRegistry::with_standard([Color::Red, Color::Blue])
    }

    #[test]
    fn standard_lookup_is_spec_gated() {
        let registry = registry();
        let red = registry.resolve_value(KmipSpec::V1_2, 1).unwrap();
        assert_eq!(red, RegistryEntry::Standard(Color::Red));
        assert!(!red.is_custom());

        let err = registry.resolve_description(KmipSpec::V1_2, "Blue").unwrap_err();
        assert!(matches!(err, KmipError::NotSupportedForSpec { .. }));
        assert!(err.is_not_found());

        let err = registry.resolve_value(KmipSpec::V1_2, 7).unwrap_err();
        assert!(matches!(err, KmipError::UnknownIdentifier(_)));
    }

    #[test]
    fn extension_registration_rules() {
        let registry = registry();
        let green = registry
            .register(0x100, "Green", [KmipSpec::V2_1])
            .unwrap();
        assert!(green.is_custom());
        assert_eq!(
            registry.resolve_description(KmipSpec::V2_1, "Green").unwrap(),
            green
        );

        // first writer wins
        let again = registry.register(0x100, "Emerald", [KmipSpec::V1_2]).unwrap();
        assert_eq!(again.description(), "Green");
        assert!(registry.resolve_description(KmipSpec::V1_2, "Emerald").is_err());

        assert!(matches!(
            registry.register(0x200, "Purple", [KmipSpec::V2_1]),
            Err(KmipError::InvalidRegistration(_))
        ));
        assert!(registry.register(0x101, "  ", [KmipSpec::V2_1]).is_err());
        assert!(registry.register(0x101, "Purple", Vec::<KmipSpec>::new()).is_err());
        // description already taken by another value
        assert!(registry.register(0x102, "Green", [KmipSpec::V2_1]).is_err());
        // standard descriptions are reserved too
        assert!(registry.register(0x103, "Red", [KmipSpec::V2_1]).is_err());

        assert_eq!(registry.extensions(), vec![green]);
    }

    #[test]
    fn concurrent_registration_converges() {
        let registry = Arc::new(registry());
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    registry
                        .register(0x1AB, &format!("Shade{i}"), [KmipSpec::UnknownVersion])
                        .unwrap()
                        .description()
                        .to_owned()
                })
            })
            .collect();
        let winners: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(winners.windows(2).all(|w| w[0] == w[1]));
        let stored = registry
            .resolve_value(KmipSpec::UnknownVersion, 0x1AB)
            .unwrap();
        assert_eq!(stored.description(), winners[0]);
    }
}
