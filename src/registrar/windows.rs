//! Windows Event Log event source

use std::ffi::OsStr;
use std::io;
use std::iter;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use windows_sys::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_NOT_ENOUGH_MEMORY, ERROR_OUTOFMEMORY, HANDLE,
};
use windows_sys::Win32::System::EventLog::{
    DeregisterEventSource, RegisterEventSourceW, ReportEventW,
};

use crate::constants::{EVENT_CATEGORY, EVENT_ID};
use crate::error::{Error, Result};
use crate::logger::EventSink;
use crate::models::{EventType, SourceName};

/// Open handle to a registered event source, deregistered on drop
pub struct EventSource {
    handle: HANDLE,
    name: SourceName,
}

// The handle is only used with ReportEventW and DeregisterEventSource,
// both of which may be called from any thread.
unsafe impl Send for EventSource {}
unsafe impl Sync for EventSource {}

impl EventSource {
    pub fn open(name: SourceName) -> Result<Self> {
        let wide_name = to_wide(name.as_str());
        // SAFETY: wide_name is NUL-terminated and outlives the call
        let handle = unsafe { RegisterEventSourceW(ptr::null(), wide_name.as_ptr()) };
        if handle.is_null() {
            return Err(last_error("RegisterEventSourceW", &name));
        }
        Ok(Self { handle, name })
    }
}

impl EventSink for EventSource {
    fn source(&self) -> &SourceName {
        &self.name
    }

    fn report(&self, event_type: EventType, message: &str) -> Result<()> {
        let wide_message = to_wide(message);
        let strings = [wide_message.as_ptr()];
        // SAFETY: handle is open; strings holds one NUL-terminated string
        let ok = unsafe {
            ReportEventW(
                self.handle,
                event_type.as_raw(),
                EVENT_CATEGORY,
                EVENT_ID,
                ptr::null_mut(),
                strings.len() as u16,
                0,
                strings.as_ptr(),
                ptr::null(),
            )
        };
        if ok == 0 {
            return Err(last_error("ReportEventW", &self.name));
        }
        Ok(())
    }
}

impl Drop for EventSource {
    fn drop(&mut self) {
        // SAFETY: handle came from RegisterEventSourceW and is closed once
        unsafe {
            DeregisterEventSource(self.handle);
        }
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .map(|unit| if unit == 0 { u16::from(b' ') } else { unit })
        .chain(iter::once(0))
        .collect()
}

fn last_error(call: &str, name: &SourceName) -> Error {
    let err = io::Error::last_os_error();
    match err.raw_os_error().map(|code| code as u32) {
        Some(ERROR_ACCESS_DENIED) => Error::PermissionDenied(format!("{} for {}: {}", call, name, err)),
        Some(ERROR_NOT_ENOUGH_MEMORY) | Some(ERROR_OUTOFMEMORY) => Error::NoMemoryAvailable,
        _ => Error::Os(err),
    }
}
