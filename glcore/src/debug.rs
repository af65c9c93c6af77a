//! Forwarding of `KHR_debug` output to `tracing`.

use crate::{
    enums::{Capability, DebugSeverity, DebugSource, DebugType},
    error::Result,
    sys::{self, types::*},
    util::string_from_buffer,
    Gl,
};
use std::{ffi::CStr, fmt, os::raw::c_void, ptr, slice};
use tracing::{debug, error, info, warn, Level};

/// One entry of the context's debug message log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: GLenum,
    pub type_: GLenum,
    pub id: GLuint,
    pub severity: GLenum,
    pub message: String,
}

impl DebugMessage {
    /// The `tracing` level the message is forwarded at.
    pub fn level(&self) -> Level {
        level(self.severity)
    }
}

impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}] {}",
            enum_name::<DebugSource>(self.source),
            enum_name::<DebugType>(self.type_),
            self.id,
            self.message
        )
    }
}

fn enum_name<T>(value: GLenum) -> String
where
    T: TryFrom<GLenum> + fmt::Display,
{
    T::try_from(value).map_or_else(|_| format!("{value:#06x}"), |known| known.to_string())
}

fn level(severity: GLenum) -> Level {
    match DebugSeverity::try_from(severity) {
        Ok(DebugSeverity::High) => Level::ERROR,
        Ok(DebugSeverity::Medium) => Level::WARN,
        Ok(DebugSeverity::Low) => Level::INFO,
        Ok(DebugSeverity::Notification) | Err(_) => Level::DEBUG,
    }
}

/// Reads a callback message. Drivers may pass a negative length for
/// nul-terminated text.
unsafe fn message_text(message: *const GLchar, length: GLsizei) -> String {
    if message.is_null() {
        return String::new();
    }
    match usize::try_from(length) {
        Ok(len) => string_from_buffer(slice::from_raw_parts(message.cast(), len), length),
        Err(_) => CStr::from_ptr(message).to_string_lossy().into_owned(),
    }
}

pub(crate) extern "system" fn log_message(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    let message = DebugMessage {
        source,
        type_,
        id,
        severity,
        message: unsafe { message_text(message, length) },
    };

    match message.level() {
        Level::ERROR => error!(target: "glcore::debug", "{message}"),
        Level::WARN => warn!(target: "glcore::debug", "{message}"),
        Level::INFO => info!(target: "glcore::debug", "{message}"),
        _ => debug!(target: "glcore::debug", "{message}"),
    }
}

impl Gl {
    /// Enables `GL_DEBUG_OUTPUT` and logs every message under the
    /// `glcore::debug` target. High severity messages are errors, medium
    /// ones warnings, low ones info and notifications debug events.
    pub fn install_debug_logger(&self) -> Result<()> {
        self.require("glDebugMessageCallback")?;
        self.enable(Capability::DebugOutput);
        unsafe { self.debug_message_callback(Some(log_message), ptr::null()) };
        debug!("Installed the OpenGL debug message logger");
        Ok(())
    }

    /// Removes up to `count` messages from the context's message log.
    pub fn debug_message_log(&self, count: usize) -> Vec<DebugMessage> {
        if count == 0 {
            return vec![];
        }

        let max_length = usize::try_from(self.get_integer(sys::MAX_DEBUG_MESSAGE_LENGTH))
            .unwrap_or(0)
            .max(1);
        let mut sources = vec![0; count];
        let mut types = vec![0; count];
        let mut ids = vec![0; count];
        let mut severities = vec![0; count];
        let mut lengths = vec![0; count];
        let mut log = vec![0; max_length.saturating_mul(count)];

        let read = self.get_debug_message_log(
            &mut sources,
            &mut types,
            &mut ids,
            &mut severities,
            &mut lengths,
            &mut log,
        );
        let read = usize::try_from(read).unwrap_or(0).min(count);

        let mut offset: usize = 0;
        (0..read)
            .map(|i| {
                // lengths count the terminating nul
                let length = usize::try_from(lengths[i]).unwrap_or(0);
                let end = offset.saturating_add(length).min(log.len());
                let text = string_from_buffer(&log[offset..end], lengths[i]);
                offset = end;

                DebugMessage {
                    source: sources[i],
                    type_: types[i],
                    id: ids[i],
                    severity: severities[i],
                    message: text,
                }
            })
            .collect()
    }
}
