#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Type-directed search over trees of wrapped and joined faults.
//!
//! ## Overview
//!
//! Errors rarely stay bare. By the time a failure reaches code that can react
//! to it, the original fault has usually been wrapped in layers of context,
//! and sometimes merged with sibling failures from retries or batch
//! operations. This crate recovers the one value the caller cares about from
//! anywhere inside such a structure.
//!
//! The building block is the [`Fault`] trait: an inspectable error value that
//! can reveal the faults beneath it through [`Fault::causes`], and can stand
//! in for a different fault type through [`Fault::claim`]. The entry points
//! [`find`], [`find_ref`], and [`assign`] walk the resulting tree and hand
//! back the first node that matches the requested type.
//!
//! ## Quick Example
//!
//! ```
//! use faultcast::{Causes, Fault, find};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct DnsFailure {
//!     host: String,
//! }
//! # impl core::fmt::Display for DnsFailure {
//! #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//! #         write!(f, "failed to resolve {}", self.host)
//! #     }
//! # }
//! impl Fault for DnsFailure {}
//!
//! #[derive(Debug)]
//! struct RequestFailed {
//!     url: String,
//!     cause: Box<dyn Fault>,
//! }
//! # impl core::fmt::Display for RequestFailed {
//! #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//! #         write!(f, "request to {} failed: {}", self.url, self.cause)
//! #     }
//! # }
//! impl Fault for RequestFailed {
//!     fn causes(&self) -> Causes<'_> {
//!         Causes::single(&*self.cause)
//!     }
//! }
//!
//! fn blamed_host(fault: &dyn Fault) -> Option<String> {
//!     let dns: DnsFailure = find(Some(fault))?;
//!     Some(dns.host)
//! }
//!
//! let fault = RequestFailed {
//!     url: "https://example.com/health".into(),
//!     cause: Box::new(DnsFailure { host: "example.com".into() }),
//! };
//! assert_eq!(blamed_host(&fault).as_deref(), Some("example.com"));
//! ```
//!
//! ## How Matching Works
//!
//! The search visits nodes depth-first: each node before its causes, earlier
//! [`Causes::Joined`] members before later ones. At every node it applies two
//! rules in order:
//!
//! 1. If the node's concrete type is the requested type, the node itself
//!    matches.
//! 2. Otherwise, if the node's [`claim`](Fault::claim) fills the offered
//!    [`Slot`] and returns `true`, the claimed value matches.
//!
//! The first match ends the search. When the tree is exhausted without a
//! match, [`find`] returns [`None`] and [`assign`] returns `false`, leaving
//! its target untouched.
//!
//! ## Fault Trees
//!
//! [`Fault::causes`] reports one of three shapes: [`Causes::None`] for a
//! leaf, [`Causes::Single`] for a wrapper with at most one successor, and
//! [`Causes::Joined`] for an ordered aggregate. Absent members are explicit
//! rather than an error: a severed wrapper reports `Single(None)`, and an
//! aggregate built from a batch where only some operations failed may hold
//! `None` members, which the search skips without abandoning the remaining
//! siblings. The exact visit order over any tree is also available as an
//! iterator through [`FaultIter`].
//!
//! ## Choosing an Entry Point
//!
//! - [`find`] clones the matched value out of the tree and is the right
//!   default.
//! - [`assign`] writes into a caller-provided slot and reports success as a
//!   `bool`, for code structured around out-parameters.
//! - [`find_ref`] borrows the matched node instead of cloning, which also
//!   makes it the only entry point usable with types that do not implement
//!   [`Clone`]. It matches concrete node types only, since claimed values are
//!   built on demand and have nowhere to be borrowed from.
//!
//! ## Interoperability
//!
//! The [`compat`] module adopts foreign error types into fault trees.
//! [`BoxedFault`](compat::boxed_error::BoxedFault) wraps any boxed
//! [`core::error::Error`], and the optional `compat-anyhow1` and
//! `compat-eyre06` features provide the same for [`anyhow`] and [`eyre`]
//! reports.
//!
//! ## Feature Flags
//!
//! - `compat-anyhow1`: conversions from [`anyhow::Error`].
//! - `compat-eyre06`: conversions from [`eyre::Report`].
//!
//! Both are disabled by default. The crate itself is `no_std` and only
//! requires [`alloc`].
//!
//! # Acknowledgements
//!
//! The matching rules are modeled on downcasting as practiced by
//! [`core::error::Error`] and by libraries like [`anyhow`] and [`eyre`],
//! extended here to trees with stand-in claims and aggregate members.
//!
//! [`anyhow`]: https://docs.rs/anyhow
//! [`anyhow::Error`]: https://docs.rs/anyhow/latest/anyhow/struct.Error.html
//! [`eyre`]: https://docs.rs/eyre
//! [`eyre::Report`]: https://docs.rs/eyre/latest/eyre/struct.Report.html

extern crate alloc;

pub mod compat;

mod fault;
mod iter;
mod search;
mod slot;

pub use self::{
    fault::{Causes, Fault},
    iter::FaultIter,
    search::{assign, find, find_ref},
    slot::Slot,
};
