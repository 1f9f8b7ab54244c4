//! Adoption of [`anyhow`] 1.x errors into fault trees.
//!
//! This module specifically supports `anyhow` version 1.x. To enable this
//! integration, add the `compat-anyhow1` feature flag to your `Cargo.toml`.
//!
//! # Overview
//!
//! An [`anyhow::Error`] adopts into a [`BoxedFault`] leaf by way of anyhow's
//! own conversion into `Box<dyn Error + Send + Sync>`. The adopted value
//! displays anyhow's outermost message, and the whole context chain stays
//! reachable through [`BoxedFault::find_source`].
//!
//! # Examples
//!
//! ```
//! use anyhow::Context as _;
//! use faultcast::compat::{IntoFault, boxed_error::BoxedFault};
//! use std::io;
//!
//! fn read_config() -> anyhow::Result<String> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "config.toml not found"))
//!         .context("failed to load configuration")
//! }
//!
//! fn startup() -> Result<String, BoxedFault> {
//!     let raw = read_config().into_fault()?;
//!     Ok(raw)
//! }
//!
//! let fault = startup().unwrap_err();
//! assert_eq!(fault.to_string(), "failed to load configuration");
//!
//! // The context chain survives adoption.
//! let io = fault.find_source::<io::Error>().unwrap();
//! assert_eq!(io.kind(), io::ErrorKind::NotFound);
//! ```
//!
//! [`anyhow`]: https://docs.rs/anyhow

use super::{IntoFault, boxed_error::BoxedFault};

impl IntoFault for anyhow::Error {
    type Output = BoxedFault;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        BoxedFault::from_boxed(self.into())
    }
}

impl<T> IntoFault for anyhow::Result<T> {
    type Output = Result<T, BoxedFault>;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        self.map_err(|error| error.into_fault())
    }
}
