//! A process whose `log` facade already has a backend cannot take it over

use eventlog_registrar::{EventLogger, Error, ReturnCode};
use log::{Log, Metadata, Record};

struct ForeignLogger;

impl Log for ForeignLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

static FOREIGN: ForeignLogger = ForeignLogger;

#[test]
fn test_foreign_logger_blocks_event_logger() {
    log::set_logger(&FOREIGN).unwrap();

    for _ in 0..2 {
        let err = EventLogger::global().err().expect("foreign logger must win");
        assert!(matches!(err, Error::LoggerConflict));
        assert_eq!(err.return_code(), ReturnCode::OperationNotPermitted);
    }
}
