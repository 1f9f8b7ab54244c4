//! Tests for adopting foreign errors: `BoxedFault` construction, source-chain
//! access, the `IntoFault` adapters, and the feature-gated `anyhow`/`eyre`
//! integrations.

use std::{fmt, io};

use derive_more::{Display, Error, From};
use faultcast::{
    Causes, Fault,
    compat::{IntoFault, boxed_error::BoxedFault},
    find_ref,
};

// A three-level source chain built from plain `std::error::Error` types.

#[derive(Debug, Display, Error)]
#[display("device {device} reported a read failure")]
struct ReadFailure {
    device: String,
    source: io::Error,
}

#[derive(Debug, Display, Error, From)]
#[display("snapshot could not be restored")]
struct RestoreFailed {
    source: ReadFailure,
}

fn restore_failure() -> RestoreFailed {
    ReadFailure {
        device: "sda1".to_owned(),
        source: io::Error::new(io::ErrorKind::UnexpectedEof, "short read"),
    }
    .into()
}

// Adoption and display

#[test]
fn test_new_preserves_display() {
    let fault = BoxedFault::new(restore_failure());
    assert_eq!(fault.to_string(), "snapshot could not be restored");
}

#[test]
fn test_the_blanket_from_adopts_any_error() {
    let fault: BoxedFault = restore_failure().into();
    assert_eq!(fault.to_string(), "snapshot could not be restored");
}

#[test]
fn test_from_boxed_keeps_the_original_type_reachable() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(restore_failure());
    let fault = BoxedFault::from_boxed(boxed);

    // A second box around the error would make this downcast fail.
    assert!(fault.find_source::<RestoreFailed>().is_some());
}

// Source-chain access

#[test]
fn test_as_error_walks_the_source_chain() {
    let fault = BoxedFault::new(restore_failure());

    let top = fault.as_error();
    assert_eq!(top.to_string(), "snapshot could not be restored");
    let mid = top.source().expect("the restore failure keeps its cause");
    assert_eq!(mid.to_string(), "device sda1 reported a read failure");
    let bottom = mid.source().expect("the read failure keeps its cause");
    assert_eq!(bottom.to_string(), "short read");
    assert!(bottom.source().is_none());
}

#[test]
fn test_find_source_locates_every_level() {
    let fault = BoxedFault::new(restore_failure());

    assert!(fault.find_source::<RestoreFailed>().is_some());
    let read = fault.find_source::<ReadFailure>().expect("the mid level");
    assert_eq!(read.device, "sda1");
    let cause = fault.find_source::<io::Error>().expect("the root cause");
    assert_eq!(cause.kind(), io::ErrorKind::UnexpectedEof);

    assert!(fault.find_source::<fmt::Error>().is_none());
}

#[test]
fn test_into_inner_returns_the_adopted_error() {
    let fault = BoxedFault::new(restore_failure());
    let inner = fault.into_inner();
    assert!(inner.downcast::<RestoreFailed>().is_ok());
}

// Adopted errors inside fault trees

#[derive(Debug, Display)]
#[display("startup aborted")]
struct StartupAborted {
    cause: BoxedFault,
}

impl Fault for StartupAborted {
    fn causes(&self) -> Causes<'_> {
        Causes::single(&self.cause)
    }
}

#[test]
fn test_adopted_errors_participate_in_fault_trees() {
    let tree = StartupAborted {
        cause: restore_failure().into(),
    };

    let adopted = find_ref::<BoxedFault>(Some(&tree)).expect("the adopted error is in the tree");
    assert_eq!(
        adopted.find_source::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::UnexpectedEof)
    );
}

// The `IntoFault` adapters

#[test]
fn test_into_fault_adapts_a_boxed_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "connection refused".into();
    let fault = boxed.into_fault();
    assert_eq!(fault.to_string(), "connection refused");
}

#[test]
fn test_into_fault_adapts_boxed_results() {
    fn legacy_parse(input: &str) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        input.parse().map_err(Into::into)
    }

    let port = legacy_parse("8080")
        .into_fault()
        .expect("a valid port parses");
    assert_eq!(port, 8080);

    let fault = legacy_parse("eight").into_fault().unwrap_err();
    assert!(fault.find_source::<std::num::ParseIntError>().is_some());
}

#[cfg(feature = "compat-anyhow1")]
mod anyhow1 {
    use std::io;

    use anyhow::Context as _;
    use faultcast::compat::IntoFault;

    fn read_config() -> anyhow::Result<String> {
        Err(io::Error::from(io::ErrorKind::NotFound)).context("cannot open app.toml")
    }

    #[test]
    fn test_adopted_reports_keep_their_context_and_chain() {
        let fault = read_config()
            .context("failed to start")
            .unwrap_err()
            .into_fault();

        assert_eq!(fault.to_string(), "failed to start");
        let cause = fault
            .find_source::<io::Error>()
            .expect("the io failure is retained");
        assert_eq!(cause.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_result_adapter_converts_the_error_branch() {
        let fault = read_config().into_fault().unwrap_err();
        assert_eq!(fault.to_string(), "cannot open app.toml");
    }
}

#[cfg(feature = "compat-eyre06")]
mod eyre06 {
    use std::io;

    use eyre::WrapErr as _;
    use faultcast::compat::IntoFault;

    fn sync_state() -> eyre::Result<()> {
        Err(io::Error::from(io::ErrorKind::TimedOut)).wrap_err("replica fell behind")
    }

    #[test]
    fn test_adopted_reports_keep_their_chain() {
        let fault = sync_state().unwrap_err().into_fault();

        assert_eq!(fault.to_string(), "replica fell behind");
        let cause = fault
            .find_source::<io::Error>()
            .expect("the io failure is retained");
        assert_eq!(cause.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn test_result_adapter_converts_the_error_branch() {
        let outcome = sync_state().into_fault();
        assert!(outcome.is_err());
    }
}
