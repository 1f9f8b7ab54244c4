use alloc::{vec, vec::Vec};
use core::iter::FusedIterator;

use crate::fault::{Causes, Fault};

/// An iterator over a fault and every fault beneath it.
///
/// Nodes come out in depth-first order, each node before its causes, earlier
/// [`Causes::Joined`] members before later ones, with absent members skipped.
/// This is the same order in which the search entry points test nodes.
///
/// Obtained from the `iter_tree` method on [`Fault`] trait objects.
#[must_use]
#[derive(Clone, Debug)]
pub struct FaultIter<'a> {
    stack: Vec<&'a dyn Fault>,
}

impl<'a> FaultIter<'a> {
    /// Creates an iterator rooted at the given fault.
    pub(crate) fn new(root: &'a dyn Fault) -> Self {
        FaultIter { stack: vec![root] }
    }
}

impl<'a> Iterator for FaultIter<'a> {
    type Item = &'a dyn Fault;

    fn next(&mut self) -> Option<Self::Item> {
        let fault = self.stack.pop()?;
        match fault.causes() {
            Causes::None => {}
            Causes::Single(next) => self.stack.extend(next),
            Causes::Joined(children) => {
                // Reversed so that the leftmost member is popped first.
                self.stack.extend(children.into_iter().rev().flatten());
            }
        }
        Some(fault)
    }
}

impl FusedIterator for FaultIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::{
        boxed::Box,
        string::{String, ToString},
    };
    use core::fmt;

    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(FaultIter<'static>: Send, Sync);

    #[derive(Debug)]
    struct Leaf(&'static str);

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Fault for Leaf {}

    #[derive(Debug)]
    struct Chain(&'static str, Box<dyn Fault>);

    impl fmt::Display for Chain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Fault for Chain {
        fn causes(&self) -> Causes<'_> {
            Causes::single(&*self.1)
        }
    }

    #[derive(Debug)]
    struct Severed;

    impl fmt::Display for Severed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "severed")
        }
    }

    impl Fault for Severed {
        fn causes(&self) -> Causes<'_> {
            Causes::Single(None)
        }
    }

    #[derive(Debug)]
    struct Fan(&'static str, Vec<Option<Box<dyn Fault>>>);

    impl fmt::Display for Fan {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Fault for Fan {
        fn causes(&self) -> Causes<'_> {
            Causes::Joined(self.1.iter().map(|child| child.as_deref()).collect())
        }
    }

    fn names(fault: &dyn Fault) -> Vec<String> {
        fault.iter_tree().map(|fault| fault.to_string()).collect()
    }

    #[test]
    fn a_leaf_yields_only_itself() {
        assert_eq!(names(&Leaf("only")), ["only"]);
    }

    #[test]
    fn nodes_come_out_depth_first() {
        let tree = Fan(
            "root",
            vec![
                Some(Box::new(Chain("left", Box::new(Leaf("left-inner"))))),
                None,
                Some(Box::new(Leaf("right"))),
            ],
        );
        assert_eq!(names(&tree), ["root", "left", "left-inner", "right"]);
    }

    #[test]
    fn severed_and_empty_branches_are_passed_over() {
        let tree = Fan(
            "root",
            vec![
                Some(Box::new(Severed)),
                Some(Box::new(Fan("empty", Vec::new()))),
                Some(Box::new(Leaf("tail"))),
            ],
        );
        assert_eq!(names(&tree), ["root", "severed", "empty", "tail"]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let leaf = Leaf("once");
        let fault: &dyn Fault = &leaf;
        let mut iter = fault.iter_tree();

        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
