use crate::{
    enums::{DebugSeverity, DebugSource, DebugType},
    sys::types::*,
    util::{chars_mut, count, gl_bool},
    Gl,
};
use std::ffi::c_void;

fn length(text: &str) -> GLsizei {
    GLsizei::try_from(text.len()).unwrap_or(GLsizei::MAX)
}

/// `KHR_debug` entry points. See [`Gl::install_debug_logger`] for a ready
/// made callback.
impl Gl {
    /// # Safety
    ///
    /// `callback` may be invoked from any driver thread until it is replaced,
    /// and `user_param` must stay valid for as long as it can be.
    pub unsafe fn debug_message_callback(&self, callback: GLDEBUGPROC, user_param: *const c_void) {
        self.raw.DebugMessageCallback(callback, user_param)
    }

    /// Enables or disables messages. Pass `DONT_CARE` for any of `source`,
    /// `type_` or `severity` to match every value; `ids` must be empty
    /// unless both `source` and `type_` are given.
    pub fn debug_message_control(
        &self,
        source: GLenum,
        type_: GLenum,
        severity: GLenum,
        ids: &[GLuint],
        enabled: bool,
    ) {
        unsafe {
            self.raw.DebugMessageControl(
                source,
                type_,
                severity,
                count(ids),
                ids.as_ptr(),
                gl_bool(enabled),
            )
        }
    }

    pub fn debug_message_insert(
        &self,
        source: DebugSource,
        type_: DebugType,
        id: GLuint,
        severity: DebugSeverity,
        message: &str,
    ) {
        unsafe {
            self.raw.DebugMessageInsert(
                source.into(),
                type_.into(),
                id,
                severity.into(),
                length(message),
                message.as_ptr().cast(),
            )
        }
    }

    /// Drains up to as many messages as the shortest output slice holds.
    /// Message texts are packed into `message_log`, each with a trailing
    /// nul counted in `lengths`. Returns the number of messages read.
    #[allow(clippy::too_many_arguments)]
    pub fn get_debug_message_log(
        &self,
        sources: &mut [GLenum],
        types: &mut [GLenum],
        ids: &mut [GLuint],
        severities: &mut [GLenum],
        lengths: &mut [GLsizei],
        message_log: &mut [u8],
    ) -> GLuint {
        let len = [
            sources.len(),
            types.len(),
            ids.len(),
            severities.len(),
            lengths.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        unsafe {
            self.raw.GetDebugMessageLog(
                GLuint::try_from(len).unwrap_or(GLuint::MAX),
                count(message_log),
                sources.as_mut_ptr(),
                types.as_mut_ptr(),
                ids.as_mut_ptr(),
                severities.as_mut_ptr(),
                lengths.as_mut_ptr(),
                chars_mut(message_log),
            )
        }
    }

    pub fn get_object_label(&self, identifier: GLenum, name: GLuint, label: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetObjectLabel(
                identifier,
                name,
                count(label),
                &mut length,
                chars_mut(label),
            )
        };
        length
    }

    /// # Safety
    ///
    /// `ptr` must be a live sync object.
    pub unsafe fn get_object_ptr_label(&self, ptr: *const c_void, label: &mut [u8]) -> GLsizei {
        let mut length = 0;
        self.raw
            .GetObjectPtrLabel(ptr, count(label), &mut length, chars_mut(label));
        length
    }

    pub fn object_label(&self, identifier: GLenum, name: GLuint, label: &str) {
        unsafe {
            self.raw
                .ObjectLabel(identifier, name, length(label), label.as_ptr().cast())
        }
    }

    /// # Safety
    ///
    /// `ptr` must be a live sync object.
    pub unsafe fn object_ptr_label(&self, ptr: *const c_void, label: &str) {
        self.raw
            .ObjectPtrLabel(ptr, length(label), label.as_ptr().cast())
    }

    pub fn pop_debug_group(&self) {
        unsafe { self.raw.PopDebugGroup() }
    }

    pub fn push_debug_group(&self, source: DebugSource, id: GLuint, message: &str) {
        unsafe {
            self.raw
                .PushDebugGroup(source.into(), id, length(message), message.as_ptr().cast())
        }
    }
}
