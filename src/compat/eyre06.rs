//! Adoption of [`eyre`] 0.6.x reports into fault trees.
//!
//! This module specifically supports `eyre` version 0.6.x. To enable this
//! integration, add the `compat-eyre06` feature flag to your `Cargo.toml`.
//!
//! # Overview
//!
//! An [`eyre::Report`] adopts into a [`BoxedFault`] leaf by way of eyre's own
//! conversion into `Box<dyn Error + Send + Sync>`. The adopted value displays
//! eyre's outermost message, and the whole chain of wrapped errors stays
//! reachable through [`BoxedFault::find_source`].
//!
//! # Examples
//!
//! ```
//! use eyre::WrapErr as _;
//! use faultcast::compat::{IntoFault, boxed_error::BoxedFault};
//! use std::io;
//!
//! fn sync_state() -> eyre::Result<()> {
//!     Err(io::Error::new(io::ErrorKind::TimedOut, "no heartbeat for 30s"))
//!         .wrap_err("replica fell behind")
//! }
//!
//! fn reconcile() -> Result<(), BoxedFault> {
//!     sync_state().into_fault()?;
//!     Ok(())
//! }
//!
//! let fault = reconcile().unwrap_err();
//! assert_eq!(fault.to_string(), "replica fell behind");
//!
//! // The wrapped chain survives adoption.
//! let io = fault.find_source::<io::Error>().unwrap();
//! assert_eq!(io.kind(), io::ErrorKind::TimedOut);
//! ```
//!
//! [`eyre`]: https://docs.rs/eyre

use super::{IntoFault, boxed_error::BoxedFault};

impl IntoFault for eyre::Report {
    type Output = BoxedFault;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        BoxedFault::from_boxed(self.into())
    }
}

impl<T> IntoFault for eyre::Result<T> {
    type Output = Result<T, BoxedFault>;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        self.map_err(|error| error.into_fault())
    }
}
