use core::{any::Any, fmt};

use crate::fault::Fault;

/// A typed request for a fault value, handed to [`Fault::claim`].
///
/// A slot is created by the search entry points and expects exactly one fault
/// type, the one the caller asked for. A claiming fault cannot see that type
/// directly; it can only probe for it with [`expects`](Slot::expects) and
/// store a value with [`fill`](Slot::fill), which succeeds only when the
/// types line up.
///
/// The same slot is offered to every claim-capable node the search visits, so
/// filling overwrites whatever an earlier node left behind. Nothing that was
/// stored leaks out to the caller unless the storing node also returns `true`
/// from [`Fault::claim`].
///
/// # Examples
///
/// ```
/// use faultcast::{Fault, Slot, find};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Flagged {
///     raw: i32,
/// }
/// # impl core::fmt::Display for Flagged {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "flagged value {}", self.raw)
/// #     }
/// # }
/// impl Fault for Flagged {}
///
/// #[derive(Debug, Clone)]
/// struct Sentinel(i32);
/// # impl core::fmt::Display for Sentinel {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "sentinel {}", self.0)
/// #     }
/// # }
/// impl Fault for Sentinel {
///     fn claim(&self, slot: &mut Slot<'_>) -> bool {
///         if slot.expects::<Flagged>() {
///             slot.fill(Flagged { raw: self.0 })
///         } else {
///             false
///         }
///     }
/// }
///
/// let found: Option<Flagged> = find(Some(&Sentinel(9)));
/// assert_eq!(found, Some(Flagged { raw: 9 }));
/// ```
pub struct Slot<'a> {
    target: &'a mut dyn Any,
}

impl<'a> Slot<'a> {
    pub(crate) fn new<T: Fault>(target: &'a mut Option<T>) -> Self {
        Slot { target }
    }

    /// Stores `value` if `T` is the type this slot expects.
    ///
    /// Returns `true` when the value was stored and `false` when the slot
    /// expects a different type, in which case `value` is dropped. A second
    /// successful fill replaces the first.
    pub fn fill<T: Fault>(&mut self, value: T) -> bool {
        match self.target.downcast_mut::<Option<T>>() {
            Some(target) => {
                *target = Some(value);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `T` is the type this slot expects.
    ///
    /// Useful to bail out of [`Fault::claim`] before constructing a value
    /// that would not be accepted anyway.
    #[must_use]
    pub fn expects<T: Fault>(&self) -> bool {
        self.target.is::<Option<T>>()
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(Slot<'static>: Send, Sync);

    #[derive(Debug, Clone, PartialEq)]
    struct Red(u8);

    impl fmt::Display for Red {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "red {}", self.0)
        }
    }

    impl Fault for Red {}

    #[derive(Debug, Clone, PartialEq)]
    struct Blue(u8);

    impl fmt::Display for Blue {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "blue {}", self.0)
        }
    }

    impl Fault for Blue {}

    #[test]
    fn fill_stores_the_expected_type() {
        let mut target: Option<Red> = None;
        let mut slot = Slot::new(&mut target);

        assert!(slot.expects::<Red>());
        assert!(slot.fill(Red(1)));
        assert_eq!(target, Some(Red(1)));
    }

    #[test]
    fn fill_rejects_any_other_type() {
        let mut target: Option<Red> = None;
        let mut slot = Slot::new(&mut target);

        assert!(!slot.expects::<Blue>());
        assert!(!slot.fill(Blue(1)));
        assert_eq!(target, None);
    }

    #[test]
    fn refilling_replaces_the_stored_value() {
        let mut target: Option<Red> = None;
        let mut slot = Slot::new(&mut target);

        assert!(slot.fill(Red(1)));
        assert!(slot.fill(Red(2)));
        assert_eq!(target, Some(Red(2)));
    }

    #[test]
    fn debug_output_hides_the_target() {
        let mut target: Option<Red> = None;
        let slot = Slot::new(&mut target);
        assert_eq!(format!("{slot:?}"), "Slot { .. }");
    }
}
