use crate::{
    enums::{FramebufferTarget, RenderbufferTarget},
    flags::ClearMask,
    sys::types::*,
    util::count,
    Gl,
};
use std::os::raw::c_void;

/// Framebuffers, renderbuffers and clearing.
///
/// The `clear_buffer*v` family reads four components for color buffers and
/// one for depth or stencil, so the value is always a four-element array.
impl Gl {
    pub fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: GLuint) {
        unsafe { self.raw.BindFramebuffer(target.into(), framebuffer) }
    }

    pub fn bind_renderbuffer(&self, target: RenderbufferTarget, renderbuffer: GLuint) {
        unsafe { self.raw.BindRenderbuffer(target.into(), renderbuffer) }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn blit_framebuffer(
        &self,
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: ClearMask,
        filter: GLenum,
    ) {
        unsafe {
            self.raw.BlitFramebuffer(
                src_x0,
                src_y0,
                src_x1,
                src_y1,
                dst_x0,
                dst_y0,
                dst_x1,
                dst_y1,
                mask.bits(),
                filter,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn blit_named_framebuffer(
        &self,
        read_framebuffer: GLuint,
        draw_framebuffer: GLuint,
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: ClearMask,
        filter: GLenum,
    ) {
        unsafe {
            self.raw.BlitNamedFramebuffer(
                read_framebuffer,
                draw_framebuffer,
                src_x0,
                src_y0,
                src_x1,
                src_y1,
                dst_x0,
                dst_y0,
                dst_x1,
                dst_y1,
                mask.bits(),
                filter,
            )
        }
    }

    /// Returns the raw status; convert with
    /// [`FramebufferStatus::try_from`](crate::enums::FramebufferStatus).
    pub fn check_framebuffer_status(&self, target: FramebufferTarget) -> GLenum {
        unsafe { self.raw.CheckFramebufferStatus(target.into()) }
    }

    pub fn check_named_framebuffer_status(
        &self,
        framebuffer: GLuint,
        target: FramebufferTarget,
    ) -> GLenum {
        unsafe {
            self.raw
                .CheckNamedFramebufferStatus(framebuffer, target.into())
        }
    }

    pub fn clear(&self, mask: ClearMask) {
        unsafe { self.raw.Clear(mask.bits()) }
    }

    pub fn clear_bufferfi(
        &self,
        buffer: GLenum,
        drawbuffer: GLint,
        depth: GLfloat,
        stencil: GLint,
    ) {
        unsafe { self.raw.ClearBufferfi(buffer, drawbuffer, depth, stencil) }
    }

    pub fn clear_bufferfv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat; 4]) {
        unsafe { self.raw.ClearBufferfv(buffer, drawbuffer, value.as_ptr()) }
    }

    pub fn clear_bufferiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLint; 4]) {
        unsafe { self.raw.ClearBufferiv(buffer, drawbuffer, value.as_ptr()) }
    }

    pub fn clear_bufferuiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLuint; 4]) {
        unsafe { self.raw.ClearBufferuiv(buffer, drawbuffer, value.as_ptr()) }
    }

    pub fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.raw.ClearColor(red, green, blue, alpha) }
    }

    pub fn clear_depth(&self, depth: GLdouble) {
        unsafe { self.raw.ClearDepth(depth) }
    }

    pub fn clear_depthf(&self, depth: GLfloat) {
        unsafe { self.raw.ClearDepthf(depth) }
    }

    pub fn clear_named_framebufferfi(
        &self,
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        depth: GLfloat,
        stencil: GLint,
    ) {
        unsafe {
            self.raw
                .ClearNamedFramebufferfi(framebuffer, buffer, drawbuffer, depth, stencil)
        }
    }

    pub fn clear_named_framebufferfv(
        &self,
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: &[GLfloat; 4],
    ) {
        unsafe {
            self.raw
                .ClearNamedFramebufferfv(framebuffer, buffer, drawbuffer, value.as_ptr())
        }
    }

    pub fn clear_named_framebufferiv(
        &self,
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: &[GLint; 4],
    ) {
        unsafe {
            self.raw
                .ClearNamedFramebufferiv(framebuffer, buffer, drawbuffer, value.as_ptr())
        }
    }

    pub fn clear_named_framebufferuiv(
        &self,
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: &[GLuint; 4],
    ) {
        unsafe {
            self.raw
                .ClearNamedFramebufferuiv(framebuffer, buffer, drawbuffer, value.as_ptr())
        }
    }

    pub fn clear_stencil(&self, s: GLint) {
        unsafe { self.raw.ClearStencil(s) }
    }

    pub fn create_framebuffers(&self, framebuffers: &mut [GLuint]) {
        unsafe {
            self.raw
                .CreateFramebuffers(count(framebuffers), framebuffers.as_mut_ptr())
        }
    }

    pub fn create_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        unsafe {
            self.raw
                .CreateRenderbuffers(count(renderbuffers), renderbuffers.as_mut_ptr())
        }
    }

    pub fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        unsafe {
            self.raw
                .DeleteFramebuffers(count(framebuffers), framebuffers.as_ptr())
        }
    }

    pub fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        unsafe {
            self.raw
                .DeleteRenderbuffers(count(renderbuffers), renderbuffers.as_ptr())
        }
    }

    pub fn draw_buffer(&self, buf: GLenum) {
        unsafe { self.raw.DrawBuffer(buf) }
    }

    pub fn draw_buffers(&self, bufs: &[GLenum]) {
        unsafe { self.raw.DrawBuffers(count(bufs), bufs.as_ptr()) }
    }

    pub fn framebuffer_parameteri(&self, target: FramebufferTarget, pname: GLenum, param: GLint) {
        unsafe {
            self.raw
                .FramebufferParameteri(target.into(), pname, param)
        }
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        renderbuffertarget: RenderbufferTarget,
        renderbuffer: GLuint,
    ) {
        unsafe {
            self.raw.FramebufferRenderbuffer(
                target.into(),
                attachment,
                renderbuffertarget.into(),
                renderbuffer,
            )
        }
    }

    pub fn framebuffer_texture(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe {
            self.raw
                .FramebufferTexture(target.into(), attachment, texture, level)
        }
    }

    pub fn framebuffer_texture_1d(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe {
            self.raw
                .FramebufferTexture1D(target.into(), attachment, textarget, texture, level)
        }
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe {
            self.raw
                .FramebufferTexture2D(target.into(), attachment, textarget, texture, level)
        }
    }

    pub fn framebuffer_texture_3d(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
        zoffset: GLint,
    ) {
        unsafe {
            self.raw.FramebufferTexture3D(
                target.into(),
                attachment,
                textarget,
                texture,
                level,
                zoffset,
            )
        }
    }

    pub fn framebuffer_texture_layer(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        unsafe {
            self.raw
                .FramebufferTextureLayer(target.into(), attachment, texture, level, layer)
        }
    }

    pub fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        unsafe {
            self.raw
                .GenFramebuffers(count(framebuffers), framebuffers.as_mut_ptr())
        }
    }

    pub fn gen_framebuffer(&self) -> GLuint {
        let mut framebuffer = 0;
        self.gen_framebuffers(std::slice::from_mut(&mut framebuffer));
        framebuffer
    }

    pub fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        unsafe {
            self.raw
                .GenRenderbuffers(count(renderbuffers), renderbuffers.as_mut_ptr())
        }
    }

    pub fn gen_renderbuffer(&self) -> GLuint {
        let mut renderbuffer = 0;
        self.gen_renderbuffers(std::slice::from_mut(&mut renderbuffer));
        renderbuffer
    }

    pub fn get_framebuffer_attachment_parameteriv(
        &self,
        target: FramebufferTarget,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw.GetFramebufferAttachmentParameteriv(
                target.into(),
                attachment,
                pname,
                &mut value,
            )
        };
        value
    }

    pub fn get_framebuffer_parameteriv(&self, target: FramebufferTarget, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetFramebufferParameteriv(target.into(), pname, &mut value)
        };
        value
    }

    pub fn get_named_framebuffer_attachment_parameteriv(
        &self,
        framebuffer: GLuint,
        attachment: GLenum,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw.GetNamedFramebufferAttachmentParameteriv(
                framebuffer,
                attachment,
                pname,
                &mut value,
            )
        };
        value
    }

    pub fn get_named_framebuffer_parameteriv(&self, framebuffer: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetNamedFramebufferParameteriv(framebuffer, pname, &mut value)
        };
        value
    }

    pub fn get_named_renderbuffer_parameteriv(&self, renderbuffer: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetNamedRenderbufferParameteriv(renderbuffer, pname, &mut value)
        };
        value
    }

    pub fn get_renderbuffer_parameteriv(&self, target: RenderbufferTarget, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetRenderbufferParameteriv(target.into(), pname, &mut value)
        };
        value
    }

    pub fn invalidate_framebuffer(&self, target: FramebufferTarget, attachments: &[GLenum]) {
        unsafe {
            self.raw
                .InvalidateFramebuffer(target.into(), count(attachments), attachments.as_ptr())
        }
    }

    pub fn invalidate_named_framebuffer_data(&self, framebuffer: GLuint, attachments: &[GLenum]) {
        unsafe {
            self.raw.InvalidateNamedFramebufferData(
                framebuffer,
                count(attachments),
                attachments.as_ptr(),
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn invalidate_named_framebuffer_sub_data(
        &self,
        framebuffer: GLuint,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.InvalidateNamedFramebufferSubData(
                framebuffer,
                count(attachments),
                attachments.as_ptr(),
                x,
                y,
                width,
                height,
            )
        }
    }

    pub fn invalidate_sub_framebuffer(
        &self,
        target: FramebufferTarget,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.InvalidateSubFramebuffer(
                target.into(),
                count(attachments),
                attachments.as_ptr(),
                x,
                y,
                width,
                height,
            )
        }
    }

    pub fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        unsafe { self.raw.IsFramebuffer(framebuffer) != 0 }
    }

    pub fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        unsafe { self.raw.IsRenderbuffer(renderbuffer) != 0 }
    }

    pub fn named_framebuffer_draw_buffer(&self, framebuffer: GLuint, buf: GLenum) {
        unsafe { self.raw.NamedFramebufferDrawBuffer(framebuffer, buf) }
    }

    pub fn named_framebuffer_draw_buffers(&self, framebuffer: GLuint, bufs: &[GLenum]) {
        unsafe {
            self.raw
                .NamedFramebufferDrawBuffers(framebuffer, count(bufs), bufs.as_ptr())
        }
    }

    pub fn named_framebuffer_parameteri(&self, framebuffer: GLuint, pname: GLenum, param: GLint) {
        unsafe {
            self.raw
                .NamedFramebufferParameteri(framebuffer, pname, param)
        }
    }

    pub fn named_framebuffer_read_buffer(&self, framebuffer: GLuint, src: GLenum) {
        unsafe { self.raw.NamedFramebufferReadBuffer(framebuffer, src) }
    }

    pub fn named_framebuffer_renderbuffer(
        &self,
        framebuffer: GLuint,
        attachment: GLenum,
        renderbuffertarget: RenderbufferTarget,
        renderbuffer: GLuint,
    ) {
        unsafe {
            self.raw.NamedFramebufferRenderbuffer(
                framebuffer,
                attachment,
                renderbuffertarget.into(),
                renderbuffer,
            )
        }
    }

    pub fn named_framebuffer_texture(
        &self,
        framebuffer: GLuint,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe {
            self.raw
                .NamedFramebufferTexture(framebuffer, attachment, texture, level)
        }
    }

    pub fn named_framebuffer_texture_layer(
        &self,
        framebuffer: GLuint,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        unsafe {
            self.raw
                .NamedFramebufferTextureLayer(framebuffer, attachment, texture, level, layer)
        }
    }

    pub fn named_renderbuffer_storage(
        &self,
        renderbuffer: GLuint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw
                .NamedRenderbufferStorage(renderbuffer, internalformat, width, height)
        }
    }

    pub fn named_renderbuffer_storage_multisample(
        &self,
        renderbuffer: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.NamedRenderbufferStorageMultisample(
                renderbuffer,
                samples,
                internalformat,
                width,
                height,
            )
        }
    }

    pub fn read_buffer(&self, src: GLenum) {
        unsafe { self.raw.ReadBuffer(src) }
    }

    /// # Safety
    ///
    /// `pixels` must have room for the requested rectangle under the current
    /// pack state, or be an offset into the bound `PIXEL_PACK_BUFFER`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *mut c_void,
    ) {
        self.raw
            .ReadPixels(x, y, width, height, format, type_, pixels)
    }

    /// Reads pixels into `data`, which bounds how much the driver may write.
    #[allow(clippy::too_many_arguments)]
    pub fn readn_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        data: &mut [u8],
    ) {
        unsafe {
            self.raw.ReadnPixels(
                x,
                y,
                width,
                height,
                format,
                type_,
                count(data),
                data.as_mut_ptr().cast(),
            )
        }
    }

    pub fn renderbuffer_storage(
        &self,
        target: RenderbufferTarget,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw
                .RenderbufferStorage(target.into(), internalformat, width, height)
        }
    }

    pub fn renderbuffer_storage_multisample(
        &self,
        target: RenderbufferTarget,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.RenderbufferStorageMultisample(
                target.into(),
                samples,
                internalformat,
                width,
                height,
            )
        }
    }
}
