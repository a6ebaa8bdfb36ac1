//! Registration through the platform registrar
//!
//! Windows hosts register the source; every other host reports that the
//! function is not implemented.

use eventlog_registrar::{platform, register, Error, ReturnCode};

#[cfg(windows)]
#[test]
fn test_register() {
    register("Rroonga").unwrap();
}

#[cfg(windows)]
#[test]
fn test_register_twice() {
    register("Rroonga").unwrap();
    register("Rroonga").unwrap();

    let logger = eventlog_registrar::EventLogger::global().unwrap();
    assert_eq!(logger.active_source().unwrap().as_str(), "Rroonga");
}

#[cfg(windows)]
#[test]
fn test_register_rejects_empty_name() {
    let err = register("").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[cfg(not(windows))]
#[test]
fn test_register() {
    let err = register("Rroonga").unwrap_err();
    assert!(matches!(
        err,
        Error::FunctionNotImplemented { operation: "register" }
    ));
    assert_eq!(err.return_code(), ReturnCode::FunctionNotImplemented);
}

#[cfg(not(windows))]
#[test]
fn test_register_never_installs_logger() {
    for _ in 0..3 {
        assert!(register("Rroonga").unwrap_err().is_not_implemented());
    }
    // The facade still has no logger, so a later backend can take it
    assert_eq!(log::max_level(), log::LevelFilter::Off);
}

#[test]
fn test_platform_selection() {
    assert_eq!(platform().is_supported(), cfg!(windows));
}
