use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::{any::Any, fmt};

use crate::{iter::FaultIter, slot::Slot};

/// A single node in a fault tree.
///
/// A fault is an inspectable error value. Every fault can describe itself
/// through [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug),
/// and the [`Any`] supertrait makes its concrete type recoverable at runtime,
/// which is what the search entry points [`find`](crate::find) and
/// [`assign`](crate::assign) build on.
///
/// Beyond that, a fault may opt into two capabilities, both with do-nothing
/// defaults:
///
/// - [`causes`](Fault::causes) reveals the underlying faults this one wraps,
///   turning isolated values into a tree that the search walks depth-first.
/// - [`claim`](Fault::claim) lets a fault declare itself equivalent to some
///   other fault type by materializing a value of that type on request. This
///   is the escape hatch for types that masquerade as another type, for
///   example during an incremental migration between error hierarchies, or to
///   offer a widened trait-object handle such as `Arc<dyn SomeTrait>`.
///
/// # Implementing
///
/// A leaf fault needs no method bodies at all:
///
/// ```
/// use faultcast::Fault;
///
/// #[derive(Debug, Clone)]
/// struct Parse {
///     line: u32,
/// }
/// # impl core::fmt::Display for Parse {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "parse failure on line {}", self.line)
/// #     }
/// # }
///
/// impl Fault for Parse {}
/// ```
///
/// A wrapping fault reports its inner value through [`causes`](Fault::causes):
///
/// ```
/// use faultcast::{Causes, Fault};
///
/// #[derive(Debug)]
/// struct WithPath {
///     path: String,
///     inner: Box<dyn Fault>,
/// }
/// # impl core::fmt::Display for WithPath {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "{}: {}", self.path, self.inner)
/// #     }
/// # }
///
/// impl Fault for WithPath {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&*self.inner)
///     }
/// }
/// ```
///
/// # Searching
///
/// The search tests every node in depth-first order, the node itself before
/// its causes, earlier [`Joined`](Causes::Joined) members before later ones.
/// At each node the concrete type is checked first; only if that fails is
/// [`claim`](Fault::claim) consulted. The first success ends the search.
///
/// ```
/// use faultcast::{Causes, Fault, find};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Timeout {
///     millis: u64,
/// }
/// # impl core::fmt::Display for Timeout {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "timed out after {}ms", self.millis)
/// #     }
/// # }
/// impl Fault for Timeout {}
///
/// #[derive(Debug)]
/// struct Outer(Box<dyn Fault>);
/// # impl core::fmt::Display for Outer {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "request failed: {}", self.0)
/// #     }
/// # }
/// impl Fault for Outer {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&*self.0)
///     }
/// }
///
/// let root = Outer(Box::new(Timeout { millis: 250 }));
/// let timeout: Option<Timeout> = find(Some(&root));
/// assert_eq!(timeout, Some(Timeout { millis: 250 }));
/// ```
pub trait Fault: fmt::Debug + fmt::Display + Any {
    /// Returns the faults directly underlying this one.
    ///
    /// The default implementation returns [`Causes::None`], making the fault
    /// a leaf. Implementations must return borrows into `self`; the search
    /// never takes ownership of the tree.
    ///
    /// The three [`Causes`] shapes are mutually exclusive by construction: a
    /// fault either wraps nothing, wraps at most one successor, or wraps an
    /// ordered collection. See [`Causes`] for the absent-member conventions.
    fn causes(&self) -> Causes<'_> {
        Causes::None
    }

    /// Attempts to produce a value of the type the given slot expects.
    ///
    /// The search calls this after the node's own concrete type failed to
    /// match. An implementation that recognizes the requested type builds an
    /// equivalent value, stores it with [`Slot::fill`], and returns `true`;
    /// otherwise it returns `false`. Use [`Slot::expects`] to probe for the
    /// requested type before constructing anything expensive.
    ///
    /// Returning `true` is trusted unconditionally: the search does not
    /// re-verify the stored value. An implementation that returns `true`
    /// without ever having filled the slot will make the search panic,
    /// because no value exists to hand to the caller.
    ///
    /// The default implementation declines every request.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultcast::{Fault, Slot, find};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Modern {
    ///     code: u16,
    /// }
    /// # impl core::fmt::Display for Modern {
    /// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    /// #         write!(f, "error {}", self.code)
    /// #     }
    /// # }
    /// impl Fault for Modern {}
    ///
    /// /// Predates `Modern`, but can stand in for it.
    /// #[derive(Debug, Clone)]
    /// struct Legacy {
    ///     code: u16,
    /// }
    /// # impl core::fmt::Display for Legacy {
    /// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    /// #         write!(f, "legacy error {}", self.code)
    /// #     }
    /// # }
    /// impl Fault for Legacy {
    ///     fn claim(&self, slot: &mut Slot<'_>) -> bool {
    ///         slot.fill(Modern { code: self.code })
    ///     }
    /// }
    ///
    /// let legacy = Legacy { code: 404 };
    /// let found: Option<Modern> = find(Some(&legacy));
    /// assert_eq!(found, Some(Modern { code: 404 }));
    /// ```
    fn claim(&self, slot: &mut Slot<'_>) -> bool {
        let _ = slot;
        false
    }
}

/// The underlying faults reported by [`Fault::causes`].
///
/// The variants encode which unwrap capability a fault has, so a node cannot
/// accidentally offer both the single-successor and the multi-successor form
/// at once.
///
/// Absent successors are legal and are skipped by the search without ending
/// it early among siblings: a wrapper whose inner value has been severed
/// reports `Single(None)`, and an aggregate may contain `None` members, for
/// example when it was built from a batch where only some operations failed.
///
/// # Examples
///
/// An aggregate fault:
///
/// ```
/// use faultcast::{Causes, Fault};
///
/// #[derive(Debug)]
/// struct Batch {
///     failures: Vec<Box<dyn Fault>>,
/// }
/// # impl core::fmt::Display for Batch {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "{} operations failed", self.failures.len())
/// #     }
/// # }
///
/// impl Fault for Batch {
///     fn causes(&self) -> Causes<'_> {
///         Causes::joined(self.failures.iter().map(|f| &**f))
///     }
/// }
/// ```
///
/// A wrapper with an optional inner fault:
///
/// ```
/// use faultcast::{Causes, Fault};
///
/// #[derive(Debug)]
/// struct Context {
///     note: &'static str,
///     inner: Option<Box<dyn Fault>>,
/// }
/// # impl core::fmt::Display for Context {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "{}", self.note)
/// #     }
/// # }
///
/// impl Fault for Context {
///     fn causes(&self) -> Causes<'_> {
///         Causes::Single(self.inner.as_deref())
///     }
/// }
/// ```
#[must_use]
#[derive(Clone, Debug)]
pub enum Causes<'a> {
    /// The fault wraps nothing; it is a leaf of the tree.
    None,
    /// The fault wraps at most one successor. `Single(None)` means the
    /// successor is absent, which ends that branch of the search.
    Single(Option<&'a dyn Fault>),
    /// The fault wraps an ordered collection of successors. `None` members
    /// are skipped; order is significant, because the search visits members
    /// left to right and stops at the first match.
    Joined(Vec<Option<&'a dyn Fault>>),
}

impl<'a> Causes<'a> {
    /// A present single successor. Shorthand for `Single(Some(cause))`.
    #[inline]
    pub fn single(cause: &'a dyn Fault) -> Self {
        Causes::Single(Some(cause))
    }

    /// An ordered collection in which every member is present.
    ///
    /// Aggregates that can contain absent members build the
    /// [`Joined`](Causes::Joined) variant directly instead.
    pub fn joined<I>(causes: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Fault>,
    {
        Causes::Joined(causes.into_iter().map(Some).collect())
    }
}

impl<F: Fault + ?Sized> Fault for Box<F> {
    fn causes(&self) -> Causes<'_> {
        (**self).causes()
    }

    fn claim(&self, slot: &mut Slot<'_>) -> bool {
        (**self).claim(slot)
    }
}

impl<F: Fault + ?Sized> Fault for Arc<F> {
    fn causes(&self) -> Causes<'_> {
        (**self).causes()
    }

    fn claim(&self, slot: &mut Slot<'_>) -> bool {
        (**self).claim(slot)
    }
}

impl dyn Fault {
    /// Returns `true` if the fault's concrete type is `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultcast::Fault;
    ///
    /// #[derive(Debug, Clone)]
    /// struct Denied;
    /// # impl core::fmt::Display for Denied {
    /// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    /// #         write!(f, "permission denied")
    /// #     }
    /// # }
    /// impl Fault for Denied {}
    ///
    /// let fault: &dyn Fault = &Denied;
    /// assert!(fault.is::<Denied>());
    /// ```
    #[inline]
    #[must_use]
    pub fn is<T: Fault>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Returns a reference to the inner value if the fault's concrete type
    /// is `T`.
    ///
    /// This checks this node only. To search a whole tree, use
    /// [`find`](crate::find) or [`find_ref`](crate::find_ref).
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Fault>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the inner value if the fault's concrete
    /// type is `T`.
    #[inline]
    #[must_use]
    pub fn downcast_mut<T: Fault>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }

    /// Iterates over this fault and all faults beneath it in depth-first
    /// order, each node before its causes, earlier
    /// [`Joined`](Causes::Joined) members before later ones.
    ///
    /// This is exactly the order in which the search entry points test
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultcast::{Causes, Fault};
    ///
    /// # #[derive(Debug, Clone)]
    /// # struct Leaf(&'static str);
    /// # impl core::fmt::Display for Leaf {
    /// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    /// #         write!(f, "{}", self.0)
    /// #     }
    /// # }
    /// # impl Fault for Leaf {}
    /// # #[derive(Debug)]
    /// # struct Pair(Leaf, Leaf);
    /// # impl core::fmt::Display for Pair {
    /// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    /// #         write!(f, "pair")
    /// #     }
    /// # }
    /// # impl Fault for Pair {
    /// #     fn causes(&self) -> Causes<'_> {
    /// #         Causes::joined([&self.0 as &dyn Fault, &self.1])
    /// #     }
    /// # }
    /// let root = Pair(Leaf("first"), Leaf("second"));
    /// let fault: &dyn Fault = &root;
    ///
    /// let messages: Vec<String> = fault.iter_tree().map(|f| f.to_string()).collect();
    /// assert_eq!(messages, ["pair", "first", "second"]);
    /// ```
    #[must_use]
    pub fn iter_tree(&self) -> FaultIter<'_> {
        FaultIter::new(self)
    }
}

impl dyn Fault + Send {
    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn is<T: Fault>(&self) -> bool {
        <dyn Fault>::is::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Fault>(&self) -> Option<&T> {
        <dyn Fault>::downcast_ref::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn downcast_mut<T: Fault>(&mut self) -> Option<&mut T> {
        <dyn Fault>::downcast_mut::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[must_use]
    pub fn iter_tree(&self) -> FaultIter<'_> {
        <dyn Fault>::iter_tree(self)
    }
}

impl dyn Fault + Send + Sync {
    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn is<T: Fault>(&self) -> bool {
        <dyn Fault>::is::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Fault>(&self) -> Option<&T> {
        <dyn Fault>::downcast_ref::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[inline]
    #[must_use]
    pub fn downcast_mut<T: Fault>(&mut self) -> Option<&mut T> {
        <dyn Fault>::downcast_mut::<T>(self)
    }

    /// Forwards to the method defined on the type `dyn Fault`.
    #[must_use]
    pub fn iter_tree(&self) -> FaultIter<'_> {
        <dyn Fault>::iter_tree(self)
    }
}
