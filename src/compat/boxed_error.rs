//! Adoption of boxed error trait objects into fault trees.
//!
//! # Overview
//!
//! [`BoxedFault`] wraps a `Box<dyn Error + Send + Sync>` and implements
//! [`Fault`], so errors from the wider ecosystem can appear as leaves in a
//! fault tree. The wrapped error is adopted as-is: its `Display` and `Debug`
//! output become the fault's output, and its source chain stays intact.
//!
//! # Adopting Errors
//!
//! Concrete error types convert through [`BoxedFault::new`] or the blanket
//! [`From`] implementation, which also makes the `?` operator work:
//!
//! ```
//! use faultcast::compat::boxed_error::BoxedFault;
//! use std::net::IpAddr;
//!
//! fn parse_listen_addr(raw: &str) -> Result<IpAddr, BoxedFault> {
//!     let addr = raw.parse::<IpAddr>()?;
//!     Ok(addr)
//! }
//!
//! assert!(parse_listen_addr("127.0.0.1").is_ok());
//! assert!(parse_listen_addr("localhost").is_err());
//! ```
//!
//! Already-boxed trait objects convert through [`BoxedFault::from_boxed`] or
//! [`IntoFault`], both of which reuse the existing box.
//!
//! # Reaching the Original Error
//!
//! Adoption hides nothing. [`BoxedFault::as_error`] borrows the wrapped
//! error, [`BoxedFault::into_inner`] takes it back out, and
//! [`BoxedFault::find_source`] searches the wrapped error and its source
//! chain for a concrete error type, the boxed-error counterpart of
//! [`find_ref`](crate::find_ref).
//!
//! # Cloning
//!
//! A boxed error cannot be cloned, so [`BoxedFault`] does not implement
//! [`Clone`] and cannot be produced by [`find`](crate::find) or
//! [`assign`](crate::assign). Use [`find_ref`](crate::find_ref) to borrow an
//! adopted error out of a tree instead.

use alloc::boxed::Box;
use core::{error::Error, fmt};

use super::IntoFault;
use crate::fault::Fault;

/// A leaf fault wrapping a boxed [`Error`] trait object.
///
/// # Examples
///
/// ```
/// use faultcast::{Causes, Fault, find_ref};
/// use faultcast::compat::boxed_error::BoxedFault;
/// use std::io;
///
/// #[derive(Debug)]
/// struct Startup(BoxedFault);
/// # impl core::fmt::Display for Startup {
/// #     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
/// #         write!(f, "startup failed: {}", self.0)
/// #     }
/// # }
/// impl Fault for Startup {
///     fn causes(&self) -> Causes<'_> {
///         Causes::single(&self.0)
///     }
/// }
///
/// let fault = Startup(BoxedFault::new(io::Error::new(
///     io::ErrorKind::AddrInUse,
///     "port 8080 already bound",
/// )));
///
/// let adopted = find_ref::<BoxedFault>(Some(&fault)).unwrap();
/// assert_eq!(adopted.to_string(), "port 8080 already bound");
/// ```
pub struct BoxedFault {
    inner: Box<dyn Error + Send + Sync>,
}

impl BoxedFault {
    /// Adopts a concrete error as a leaf fault.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        BoxedFault {
            inner: Box::new(error),
        }
    }

    /// Adopts an already-boxed error, reusing its box.
    ///
    /// Prefer this over the blanket [`From`] implementation when the error is
    /// already a trait object; `From` would box the box.
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync>) -> Self {
        BoxedFault { inner: error }
    }

    /// Borrows the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        &*self.inner
    }

    /// Returns the wrapped error, giving up the fault wrapper.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
        self.inner
    }

    /// Searches the wrapped error and its sources for the first error of
    /// type `E`.
    ///
    /// The wrapped error itself is checked first, then the chain reported by
    /// [`Error::source`], outermost to innermost.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultcast::compat::boxed_error::BoxedFault;
    /// use std::{error::Error, fmt, io};
    ///
    /// #[derive(Debug)]
    /// struct TlsHandshake {
    ///     io: io::Error,
    /// }
    /// # impl fmt::Display for TlsHandshake {
    /// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    /// #         write!(f, "tls handshake failed")
    /// #     }
    /// # }
    /// impl Error for TlsHandshake {
    ///     fn source(&self) -> Option<&(dyn Error + 'static)> {
    ///         Some(&self.io)
    ///     }
    /// }
    ///
    /// let fault = BoxedFault::new(TlsHandshake {
    ///     io: io::Error::new(io::ErrorKind::ConnectionReset, "peer hung up"),
    /// });
    ///
    /// let io = fault.find_source::<io::Error>().unwrap();
    /// assert_eq!(io.kind(), io::ErrorKind::ConnectionReset);
    /// ```
    #[must_use]
    pub fn find_source<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        let mut current: Option<&(dyn Error + 'static)> = Some(self.as_error());
        while let Some(error) = current {
            if let Some(found) = error.downcast_ref::<E>() {
                return Some(found);
            }
            current = error.source();
        }
        None
    }
}

impl fmt::Display for BoxedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for BoxedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl Fault for BoxedFault {}

impl<E> From<E> for BoxedFault
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        BoxedFault::new(error)
    }
}

impl IntoFault for Box<dyn Error + Send + Sync> {
    type Output = BoxedFault;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        BoxedFault::from_boxed(self)
    }
}

impl<T> IntoFault for Result<T, Box<dyn Error + Send + Sync>> {
    type Output = Result<T, BoxedFault>;

    #[inline(always)]
    fn into_fault(self) -> Self::Output {
        self.map_err(BoxedFault::from_boxed)
    }
}
