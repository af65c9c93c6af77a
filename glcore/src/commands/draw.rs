use crate::{
    enums::{IndexType, PrimitiveType, ProvokingVertexMode},
    sys::types::*,
    Gl,
};
use std::os::raw::c_void;

// `indices` and `indirect` arguments are byte offsets into the bound element
// or indirect buffer, or client pointers when no buffer is bound.
impl Gl {
    pub fn begin_conditional_render(&self, id: GLuint, mode: GLenum) {
        unsafe { self.raw.BeginConditionalRender(id, mode) }
    }

    pub fn end_conditional_render(&self) {
        unsafe { self.raw.EndConditionalRender() }
    }

    pub fn dispatch_compute(
        &self,
        num_groups_x: GLuint,
        num_groups_y: GLuint,
        num_groups_z: GLuint,
    ) {
        unsafe {
            self.raw
                .DispatchCompute(num_groups_x, num_groups_y, num_groups_z)
        }
    }

    pub fn dispatch_compute_indirect(&self, indirect: GLintptr) {
        unsafe { self.raw.DispatchComputeIndirect(indirect) }
    }

    pub fn draw_arrays(&self, mode: PrimitiveType, first: GLint, count: GLsizei) {
        unsafe { self.raw.DrawArrays(mode.into(), first, count) }
    }

    /// # Safety
    ///
    /// `indirect` must address a `DrawArraysIndirectCommand`.
    pub unsafe fn draw_arrays_indirect(&self, mode: PrimitiveType, indirect: *const c_void) {
        self.raw.DrawArraysIndirect(mode.into(), indirect)
    }

    pub fn draw_arrays_instanced(
        &self,
        mode: PrimitiveType,
        first: GLint,
        count: GLsizei,
        instancecount: GLsizei,
    ) {
        unsafe {
            self.raw
                .DrawArraysInstanced(mode.into(), first, count, instancecount)
        }
    }

    pub fn draw_arrays_instanced_base_instance(
        &self,
        mode: PrimitiveType,
        first: GLint,
        count: GLsizei,
        instancecount: GLsizei,
        baseinstance: GLuint,
    ) {
        unsafe {
            self.raw.DrawArraysInstancedBaseInstance(
                mode.into(),
                first,
                count,
                instancecount,
                baseinstance,
            )
        }
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_elements(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
    ) {
        self.raw
            .DrawElements(mode.into(), count, type_.into(), indices)
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_elements_base_vertex(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        basevertex: GLint,
    ) {
        self.raw
            .DrawElementsBaseVertex(mode.into(), count, type_.into(), indices, basevertex)
    }

    /// # Safety
    ///
    /// `indirect` must address a `DrawElementsIndirectCommand`.
    pub unsafe fn draw_elements_indirect(
        &self,
        mode: PrimitiveType,
        type_: IndexType,
        indirect: *const c_void,
    ) {
        self.raw
            .DrawElementsIndirect(mode.into(), type_.into(), indirect)
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_elements_instanced(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        instancecount: GLsizei,
    ) {
        self.raw.DrawElementsInstanced(
            mode.into(),
            count,
            type_.into(),
            indices,
            instancecount,
        )
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_elements_instanced_base_instance(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        instancecount: GLsizei,
        baseinstance: GLuint,
    ) {
        self.raw.DrawElementsInstancedBaseInstance(
            mode.into(),
            count,
            type_.into(),
            indices,
            instancecount,
            baseinstance,
        )
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_elements_instanced_base_vertex(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        instancecount: GLsizei,
        basevertex: GLint,
    ) {
        self.raw.DrawElementsInstancedBaseVertex(
            mode.into(),
            count,
            type_.into(),
            indices,
            instancecount,
            basevertex,
        )
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn draw_elements_instanced_base_vertex_base_instance(
        &self,
        mode: PrimitiveType,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        instancecount: GLsizei,
        basevertex: GLint,
        baseinstance: GLuint,
    ) {
        self.raw.DrawElementsInstancedBaseVertexBaseInstance(
            mode.into(),
            count,
            type_.into(),
            indices,
            instancecount,
            basevertex,
            baseinstance,
        )
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    pub unsafe fn draw_range_elements(
        &self,
        mode: PrimitiveType,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
    ) {
        self.raw
            .DrawRangeElements(mode.into(), start, end, count, type_.into(), indices)
    }

    /// # Safety
    ///
    /// `indices` must address `count` indices of `type_`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn draw_range_elements_base_vertex(
        &self,
        mode: PrimitiveType,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: IndexType,
        indices: *const c_void,
        basevertex: GLint,
    ) {
        self.raw.DrawRangeElementsBaseVertex(
            mode.into(),
            start,
            end,
            count,
            type_.into(),
            indices,
            basevertex,
        )
    }

    pub fn draw_transform_feedback(&self, mode: PrimitiveType, id: GLuint) {
        unsafe { self.raw.DrawTransformFeedback(mode.into(), id) }
    }

    pub fn draw_transform_feedback_instanced(
        &self,
        mode: PrimitiveType,
        id: GLuint,
        instancecount: GLsizei,
    ) {
        unsafe {
            self.raw
                .DrawTransformFeedbackInstanced(mode.into(), id, instancecount)
        }
    }

    pub fn draw_transform_feedback_stream(&self, mode: PrimitiveType, id: GLuint, stream: GLuint) {
        unsafe {
            self.raw
                .DrawTransformFeedbackStream(mode.into(), id, stream)
        }
    }

    pub fn draw_transform_feedback_stream_instanced(
        &self,
        mode: PrimitiveType,
        id: GLuint,
        stream: GLuint,
        instancecount: GLsizei,
    ) {
        unsafe {
            self.raw
                .DrawTransformFeedbackStreamInstanced(mode.into(), id, stream, instancecount)
        }
    }

    /// Draws `first[i]`, `count[i]` pairs. Only as many draws as the shorter
    /// slice holds are issued.
    pub fn multi_draw_arrays(&self, mode: PrimitiveType, first: &[GLint], count: &[GLsizei]) {
        let len = first.len().min(count.len());
        unsafe {
            self.raw.MultiDrawArrays(
                mode.into(),
                first.as_ptr(),
                count.as_ptr(),
                crate::util::count(&first[..len]),
            )
        }
    }

    /// # Safety
    ///
    /// `indirect` must address `drawcount` commands spaced `stride` bytes
    /// apart.
    pub unsafe fn multi_draw_arrays_indirect(
        &self,
        mode: PrimitiveType,
        indirect: *const c_void,
        drawcount: GLsizei,
        stride: GLsizei,
    ) {
        self.raw
            .MultiDrawArraysIndirect(mode.into(), indirect, drawcount, stride)
    }

    /// # Safety
    ///
    /// `indirect` must address `maxdrawcount` commands spaced `stride` bytes
    /// apart.
    pub unsafe fn multi_draw_arrays_indirect_count(
        &self,
        mode: PrimitiveType,
        indirect: *const c_void,
        drawcount: GLintptr,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    ) {
        self.raw.MultiDrawArraysIndirectCount(
            mode.into(),
            indirect,
            drawcount,
            maxdrawcount,
            stride,
        )
    }

    /// # Safety
    ///
    /// Every `indices[i]` must address `count[i]` indices of `type_`.
    pub unsafe fn multi_draw_elements(
        &self,
        mode: PrimitiveType,
        count: &[GLsizei],
        type_: IndexType,
        indices: &[*const c_void],
    ) {
        let len = count.len().min(indices.len());
        self.raw.MultiDrawElements(
            mode.into(),
            count.as_ptr(),
            type_.into(),
            indices.as_ptr(),
            crate::util::count(&count[..len]),
        )
    }

    /// # Safety
    ///
    /// Every `indices[i]` must address `count[i]` indices of `type_`.
    pub unsafe fn multi_draw_elements_base_vertex(
        &self,
        mode: PrimitiveType,
        count: &[GLsizei],
        type_: IndexType,
        indices: &[*const c_void],
        basevertex: &[GLint],
    ) {
        let len = count.len().min(indices.len()).min(basevertex.len());
        self.raw.MultiDrawElementsBaseVertex(
            mode.into(),
            count.as_ptr(),
            type_.into(),
            indices.as_ptr(),
            crate::util::count(&count[..len]),
            basevertex.as_ptr(),
        )
    }

    /// # Safety
    ///
    /// `indirect` must address `drawcount` commands spaced `stride` bytes
    /// apart.
    pub unsafe fn multi_draw_elements_indirect(
        &self,
        mode: PrimitiveType,
        type_: IndexType,
        indirect: *const c_void,
        drawcount: GLsizei,
        stride: GLsizei,
    ) {
        self.raw.MultiDrawElementsIndirect(
            mode.into(),
            type_.into(),
            indirect,
            drawcount,
            stride,
        )
    }

    /// # Safety
    ///
    /// `indirect` must address `maxdrawcount` commands spaced `stride` bytes
    /// apart.
    pub unsafe fn multi_draw_elements_indirect_count(
        &self,
        mode: PrimitiveType,
        type_: IndexType,
        indirect: *const c_void,
        drawcount: GLintptr,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    ) {
        self.raw.MultiDrawElementsIndirectCount(
            mode.into(),
            type_.into(),
            indirect,
            drawcount,
            maxdrawcount,
            stride,
        )
    }

    /// `values` holds the four outer levels; the two inner levels are read
    /// from its front.
    pub fn patch_parameterfv(&self, pname: GLenum, values: &[GLfloat; 4]) {
        unsafe { self.raw.PatchParameterfv(pname, values.as_ptr()) }
    }

    pub fn patch_parameteri(&self, pname: GLenum, value: GLint) {
        unsafe { self.raw.PatchParameteri(pname, value) }
    }

    pub fn primitive_restart_index(&self, index: GLuint) {
        unsafe { self.raw.PrimitiveRestartIndex(index) }
    }

    pub fn provoking_vertex(&self, mode: ProvokingVertexMode) {
        unsafe { self.raw.ProvokingVertex(mode.into()) }
    }
}

/// Shorthand for the `indices` argument of the element draws when an
/// element buffer is bound.
pub fn buffer_offset(offset: usize) -> *const c_void {
    offset as *const c_void
}
