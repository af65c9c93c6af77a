use crate::{
    commands::program::ActiveVariable,
    enums::TransformFeedbackMode,
    error::Result,
    sys::{self, types::*},
    util::{c_string, chars_mut, count, string_from_buffer},
    Gl,
};
use std::ffi::CString;

impl Gl {
    pub fn begin_transform_feedback(&self, primitive_mode: TransformFeedbackMode) {
        unsafe { self.raw.BeginTransformFeedback(primitive_mode.into()) }
    }

    /// `target` must be `TRANSFORM_FEEDBACK`.
    pub fn bind_transform_feedback(&self, target: GLenum, id: GLuint) {
        unsafe { self.raw.BindTransformFeedback(target, id) }
    }

    pub fn create_transform_feedbacks(&self, ids: &mut [GLuint]) {
        unsafe { self.raw.CreateTransformFeedbacks(count(ids), ids.as_mut_ptr()) }
    }

    pub fn delete_transform_feedbacks(&self, ids: &[GLuint]) {
        unsafe { self.raw.DeleteTransformFeedbacks(count(ids), ids.as_ptr()) }
    }

    pub fn end_transform_feedback(&self) {
        unsafe { self.raw.EndTransformFeedback() }
    }

    pub fn gen_transform_feedbacks(&self, ids: &mut [GLuint]) {
        unsafe { self.raw.GenTransformFeedbacks(count(ids), ids.as_mut_ptr()) }
    }

    /// Writes the varying name into `name` and returns
    /// `(length, size, type)`.
    pub fn get_transform_feedback_varying(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8],
    ) -> (GLsizei, GLsizei, GLenum) {
        let (mut length, mut size, mut type_) = (0, 0, 0);
        unsafe {
            self.raw.GetTransformFeedbackVarying(
                program,
                index,
                count(name),
                &mut length,
                &mut size,
                &mut type_,
                chars_mut(name),
            )
        };
        (length, size, type_)
    }

    pub fn transform_feedback_varying(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity = self.get_programiv(program, sys::TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH);
        let mut name = vec![0; usize::try_from(capacity).unwrap_or(0).max(1)];
        let (length, size, type_) = self.get_transform_feedback_varying(program, index, &mut name);
        ActiveVariable {
            name: string_from_buffer(&name, length),
            size,
            type_,
        }
    }

    pub fn get_transform_feedbacki64_v(
        &self,
        xfb: GLuint,
        pname: GLenum,
        index: GLuint,
    ) -> GLint64 {
        let mut value = 0;
        unsafe {
            self.raw
                .GetTransformFeedbacki64_v(xfb, pname, index, &mut value)
        };
        value
    }

    pub fn get_transform_feedbacki_v(&self, xfb: GLuint, pname: GLenum, index: GLuint) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetTransformFeedbacki_v(xfb, pname, index, &mut value) };
        value
    }

    pub fn get_transform_feedbackiv(&self, xfb: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetTransformFeedbackiv(xfb, pname, &mut value) };
        value
    }

    pub fn is_transform_feedback(&self, id: GLuint) -> bool {
        unsafe { self.raw.IsTransformFeedback(id) != 0 }
    }

    pub fn pause_transform_feedback(&self) {
        unsafe { self.raw.PauseTransformFeedback() }
    }

    pub fn resume_transform_feedback(&self) {
        unsafe { self.raw.ResumeTransformFeedback() }
    }

    pub fn transform_feedback_buffer_base(&self, xfb: GLuint, index: GLuint, buffer: GLuint) {
        unsafe { self.raw.TransformFeedbackBufferBase(xfb, index, buffer) }
    }

    pub fn transform_feedback_buffer_range(
        &self,
        xfb: GLuint,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .TransformFeedbackBufferRange(xfb, index, buffer, offset, size)
        }
    }

    /// Selects the outputs captured by `program` on its next link.
    /// `buffer_mode` is `INTERLEAVED_ATTRIBS` or `SEPARATE_ATTRIBS`.
    pub fn transform_feedback_varyings(
        &self,
        program: GLuint,
        varyings: &[&str],
        buffer_mode: GLenum,
    ) -> Result<()> {
        let varyings = varyings
            .iter()
            .map(|varying| c_string(varying))
            .collect::<Result<Vec<CString>>>()?;
        let pointers: Vec<*const GLchar> =
            varyings.iter().map(|varying| varying.as_ptr()).collect();

        unsafe {
            self.raw.TransformFeedbackVaryings(
                program,
                count(&pointers),
                pointers.as_ptr(),
                buffer_mode,
            )
        };
        Ok(())
    }
}
