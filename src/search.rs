use crate::{
    fault::{Causes, Fault},
    slot::Slot,
};

/// Searches the tree rooted at `fault` for the first node matching `T` and
/// writes the match into `target`.
///
/// Nodes are visited depth-first, each node before its causes, earlier
/// [`Causes::Joined`] members before later ones. A node matches when its
/// concrete type is `T`, or failing that, when its [`Fault::claim`] fills the
/// offered slot and returns `true`.
///
/// On a match, the value is written into `target` exactly once and `assign`
/// returns `true`. Otherwise `target` is left exactly as it was, including
/// when `fault` is absent, and `assign` returns `false`.
///
/// # Panics
///
/// Panics if `fault` is present but `target` is not; an absent target is only
/// tolerated when there is no tree to search. Also panics if a visited
/// fault's [`claim`](Fault::claim) reports a match without ever having filled
/// the slot.
///
/// # Examples
///
/// ```
/// use faultcast::{Causes, Fault, assign};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Throttled {
///     retry_after: u64,
/// }
/// # impl core::fmt::Display for Throttled {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "throttled, retry in {}s", self.retry_after)
/// #     }
/// # }
/// impl Fault for Throttled {}
///
/// #[derive(Debug)]
/// struct Api(Box<dyn Fault>);
/// # impl core::fmt::Display for Api {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "api call failed: {}", self.0)
/// #     }
/// # }
/// impl Fault for Api {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&*self.0)
///     }
/// }
///
/// let fault = Api(Box::new(Throttled { retry_after: 30 }));
///
/// let mut throttled = Throttled { retry_after: 0 };
/// assert!(assign(Some(&fault), Some(&mut throttled)));
/// assert_eq!(throttled, Throttled { retry_after: 30 });
///
/// // Without a fault there is nothing to search, so no target is needed.
/// assert!(!assign::<Throttled>(None, None));
/// ```
#[track_caller]
#[must_use]
pub fn assign<T>(fault: Option<&dyn Fault>, target: Option<&mut T>) -> bool
where
    T: Fault + Clone,
{
    let Some(fault) = fault else {
        return false;
    };
    let Some(target) = target else {
        panic!("assign requires a target slot when the fault is present");
    };
    let mut scratch: Option<T> = None;
    match search(fault, &mut scratch) {
        Some(found) => {
            *target = found;
            true
        }
        None => false,
    }
}

/// Searches the tree rooted at `fault` for the first node matching `T` and
/// returns a copy of the match.
///
/// This is the closure-friendly counterpart of [`assign`]: same traversal,
/// same matching rules, but the result comes back as an [`Option`] instead of
/// being written through an out-parameter. An absent `fault` simply yields
/// [`None`].
///
/// # Panics
///
/// Panics if a visited fault's [`claim`](Fault::claim) reports a match
/// without ever having filled the slot.
///
/// # Examples
///
/// ```
/// use faultcast::{Causes, Fault, find};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Busy {
///     queue_len: usize,
/// }
/// # impl core::fmt::Display for Busy {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "busy with {} queued jobs", self.queue_len)
/// #     }
/// # }
/// impl Fault for Busy {}
///
/// #[derive(Debug)]
/// struct Submit(Box<dyn Fault>);
/// # impl core::fmt::Display for Submit {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "submit failed: {}", self.0)
/// #     }
/// # }
/// impl Fault for Submit {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&*self.0)
///     }
/// }
///
/// let fault = Submit(Box::new(Busy { queue_len: 12 }));
/// assert_eq!(find(Some(&fault)), Some(Busy { queue_len: 12 }));
///
/// assert_eq!(find::<Busy>(None), None);
/// ```
#[must_use]
pub fn find<T>(fault: Option<&dyn Fault>) -> Option<T>
where
    T: Fault + Clone,
{
    let mut scratch: Option<T> = None;
    search(fault?, &mut scratch)
}

/// Searches the tree rooted at `fault` for the first node whose concrete type
/// is `T` and borrows it.
///
/// Unlike [`find`] and [`assign`], this never clones, which makes it the
/// entry point for fault types that do not implement [`Clone`]. The price is
/// that [`Fault::claim`] is not consulted: claimed values are built on
/// demand and have no place in the tree that a returned reference could
/// borrow from.
///
/// # Examples
///
/// ```
/// use faultcast::{Causes, Fault, find_ref};
///
/// // No Clone impl: carries a value that must stay unique.
/// #[derive(Debug)]
/// struct LockPoisoned {
///     holder: String,
/// }
/// # impl core::fmt::Display for LockPoisoned {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "lock poisoned by {}", self.holder)
/// #     }
/// # }
/// impl Fault for LockPoisoned {}
///
/// #[derive(Debug)]
/// struct Shutdown(Box<dyn Fault>);
/// # impl core::fmt::Display for Shutdown {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "shutdown failed: {}", self.0)
/// #     }
/// # }
/// impl Fault for Shutdown {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&*self.0)
///     }
/// }
///
/// let fault = Shutdown(Box::new(LockPoisoned { holder: "worker-3".into() }));
///
/// let poisoned = find_ref::<LockPoisoned>(Some(&fault)).unwrap();
/// assert_eq!(poisoned.holder, "worker-3");
/// ```
#[must_use]
pub fn find_ref<T>(fault: Option<&dyn Fault>) -> Option<&T>
where
    T: Fault,
{
    fault?.iter_tree().find_map(|node| node.downcast_ref::<T>())
}

// The scratch option backs every slot offered along the way. It starts empty
// and only a claim ever populates it, so a search that meets no claim-capable
// node never constructs a T.
fn search<T>(mut fault: &dyn Fault, scratch: &mut Option<T>) -> Option<T>
where
    T: Fault + Clone,
{
    loop {
        if let Some(found) = fault.downcast_ref::<T>() {
            return Some(found.clone());
        }
        let mut slot = Slot::new(&mut *scratch);
        if fault.claim(&mut slot) {
            let Some(found) = scratch.take() else {
                panic!(
                    "claim for {} reported a match but left the slot empty",
                    core::any::type_name::<T>()
                );
            };
            return Some(found);
        }
        match fault.causes() {
            Causes::None => return None,
            Causes::Single(next) => fault = next?,
            Causes::Joined(children) => {
                for child in children.into_iter().flatten() {
                    if let Some(found) = search(child, scratch) {
                        return Some(found);
                    }
                }
                return None;
            }
        }
    }
}
