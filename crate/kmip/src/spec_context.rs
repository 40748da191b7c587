//! Per-thread "current KMIP protocol version".
//!
//! Encoders and decoders consult [`SpecContext::get`] to decide which tags
//! and attributes are legal without threading a version argument through
//! every call. The slot is thread-local: a version set on one thread is
//! never observed by another.

use std::{cell::Cell, marker::PhantomData};

use tracing::trace;

use crate::KmipSpec;

thread_local! {
    static CURRENT_SPEC: Cell<Option<KmipSpec>> = const { Cell::new(None) };
}

pub struct SpecContext;

impl SpecContext {
    /// The current thread's spec, `UnknownVersion` when unset.
    #[must_use]
    pub fn get() -> KmipSpec {
        CURRENT_SPEC.with(Cell::get).unwrap_or_default()
    }

    /// Set the current thread's spec; `None` clears it.
    pub fn set(spec: Option<KmipSpec>) {
        trace!("spec context set to {spec:?}");
        CURRENT_SPEC.with(|slot| slot.set(spec));
    }

    pub fn clear() {
        Self::set(None);
    }

    /// Override the current spec until the returned guard is dropped.
    ///
    /// The prior value is restored on drop, including during unwinding.
    pub fn enter(spec: KmipSpec) -> SpecGuard {
        let previous = CURRENT_SPEC.with(|slot| slot.replace(Some(spec)));
        trace!("entering spec scope {spec} (previous: {previous:?})");
        SpecGuard {
            previous,
            _not_send: PhantomData,
        }
    }

    /// Run `body` with `spec` as the current spec, then restore the prior one.
    pub fn with_spec<R>(spec: KmipSpec, body: impl FnOnce() -> R) -> R {
        let _guard = Self::enter(spec);
        body()
    }
}

/// Restores the previous spec of the thread that created it.
///
/// Not `Send`: dropping it on another thread would restore the wrong slot.
#[must_use = "the spec override ends when the guard is dropped"]
pub struct SpecGuard {
    previous: Option<KmipSpec>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for SpecGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        CURRENT_SPEC.with(|slot| slot.set(previous));
    }
}
