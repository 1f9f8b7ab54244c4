//! Compatibility and interoperability with other error handling libraries.
//!
//! # Overview
//!
//! Fault trees are built from [`Fault`](crate::Fault) values, but most of the
//! ecosystem reports failures as [`core::error::Error`] trait objects or as
//! the report types of dedicated error handling libraries. This module adopts
//! those foreign values into fault trees, so that one search can cross
//! library boundaries.
//!
//! Adoption is one-directional: a foreign error becomes a leaf fault
//! wrapping the original value. The original stays reachable, both
//! through [`boxed_error::BoxedFault::as_error`] and because the adopted
//! value's own source chain remains intact and searchable with
//! [`boxed_error::BoxedFault::find_source`].
//!
//! # Available Integrations
//!
//! - [`anyhow1`] - Adoption of `anyhow` 1.x errors (requires the
//!   `compat-anyhow1` feature flag)
//! - [`boxed_error`] - Adoption of boxed error trait objects
//!   (`Box<dyn Error + Send + Sync>`)
//! - [`eyre06`] - Adoption of `eyre` 0.6.x reports (requires the
//!   `compat-eyre06` feature flag)
//!
//! # Example
//!
//! Here's how to use the [`IntoFault`] trait to adopt an external error:
//!
//! ```
//! use faultcast::compat::{IntoFault, boxed_error::BoxedFault};
//! use std::io;
//!
//! fn legacy() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     Err(Box::new(io::Error::new(io::ErrorKind::NotFound, "missing")))
//! }
//!
//! fn adopted() -> Result<(), BoxedFault> {
//!     legacy().into_fault()?;
//!     Ok(())
//! }
//!
//! let fault = adopted().unwrap_err();
//! assert_eq!(fault.to_string(), "missing");
//! ```
//!
//! The [`IntoFault`] trait is available for all supported external error
//! types. See the individual module documentation for details.

/// A trait for adopting external error types into fault trees.
///
/// This trait provides a standardized way to turn errors from other error
/// handling libraries into [`Fault`](crate::Fault) values. It is implemented
/// by the compatibility submodules for the error types they cover.
///
/// The `.into_fault()` method converts both individual error values and
/// `Result` types, so a foreign `Result` can be adopted at the call site
/// where it crosses into fault-based code.
///
/// # Implementations
///
/// - [`boxed_error`] provides implementations for
///   `Box<dyn Error + Send + Sync>` and `Result<T, Box<dyn Error + Send +
///   Sync>>`
/// - [`anyhow1`] provides implementations for [`anyhow::Error`] and
///   [`anyhow::Result<T>`]
/// - [`eyre06`] provides implementations for [`eyre::Report`] and
///   [`eyre::Result<T>`]
///
/// [`anyhow::Error`]: https://docs.rs/anyhow/latest/anyhow/struct.Error.html
/// [`anyhow::Result<T>`]: https://docs.rs/anyhow/latest/anyhow/type.Result.html
/// [`eyre::Report`]: https://docs.rs/eyre/latest/eyre/struct.Report.html
/// [`eyre::Result<T>`]: https://docs.rs/eyre/latest/eyre/type.Result.html
///
/// # Examples
///
/// ```
/// use faultcast::compat::{IntoFault, boxed_error::BoxedFault};
///
/// fn legacy() -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
///     "8080".parse().map_err(Into::into)
/// }
///
/// fn adopted() -> Result<u16, BoxedFault> {
///     let port = legacy().into_fault()?;
///     Ok(port)
/// }
///
/// assert_eq!(adopted().unwrap(), 8080);
/// ```
pub trait IntoFault {
    /// The type produced by the conversion.
    ///
    /// For error types, this is typically
    /// [`BoxedFault`](boxed_error::BoxedFault). For `Result` types, this is
    /// typically `Result<T, BoxedFault>`.
    type Output;

    /// Converts this value into a fault type.
    ///
    /// The specific behavior depends on the type being converted:
    /// - For error types: wraps the error in a leaf fault
    /// - For `Result` types: converts the error variant while preserving the
    ///   success value
    fn into_fault(self) -> Self::Output;
}

pub mod boxed_error;

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;

#[cfg(feature = "compat-eyre06")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-eyre06")))]
pub mod eyre06;
