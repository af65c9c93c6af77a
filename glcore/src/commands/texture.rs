use crate::{
    enums::TextureTarget,
    sys::types::*,
    util::{count, gl_bool},
    Gl,
};
use std::ffi::c_void;

/// Texture objects, images and parameters.
///
/// Pixel sources and destinations stay raw pointers: while a buffer is bound
/// to `PIXEL_UNPACK_BUFFER` or `PIXEL_PACK_BUFFER` they are offsets into that
/// buffer. The `bufSize`-bounded readers take byte slices instead.
impl Gl {
    /// `texture` is a unit enumerant such as `TEXTURE0 + n`.
    pub fn active_texture(&self, texture: GLenum) {
        unsafe { self.raw.ActiveTexture(texture) }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn bind_image_texture(
        &self,
        unit: GLuint,
        texture: GLuint,
        level: GLint,
        layered: bool,
        layer: GLint,
        access: GLenum,
        format: GLenum,
    ) {
        unsafe {
            self.raw.BindImageTexture(
                unit,
                texture,
                level,
                gl_bool(layered),
                layer,
                access,
                format,
            )
        }
    }

    pub fn bind_image_textures(&self, first: GLuint, textures: &[GLuint]) {
        unsafe { self.raw.BindImageTextures(first, count(textures), textures.as_ptr()) }
    }

    pub fn bind_texture(&self, target: TextureTarget, texture: GLuint) {
        unsafe { self.raw.BindTexture(target.into(), texture) }
    }

    pub fn bind_texture_unit(&self, unit: GLuint, texture: GLuint) {
        unsafe { self.raw.BindTextureUnit(unit, texture) }
    }

    pub fn bind_textures(&self, first: GLuint, textures: &[GLuint]) {
        unsafe { self.raw.BindTextures(first, count(textures), textures.as_ptr()) }
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel in `format` and `type_`.
    pub unsafe fn clear_tex_image(
        &self,
        texture: GLuint,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw.ClearTexImage(texture, level, format, type_, data)
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel in `format` and `type_`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn clear_tex_sub_image(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw.ClearTexSubImage(
            texture, level, xoffset, yoffset, zoffset, width, height, depth, format, type_, data,
        )
    }

    /// # Safety
    ///
    /// `data` must be readable for `image_size` bytes, or an offset into
    /// the bound unpack buffer.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        border: GLint,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexImage1D(
            target.into(),
            level,
            internalformat,
            width,
            border,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexImage2D(
            target.into(),
            level,
            internalformat,
            width,
            height,
            border,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_image_3d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexImage3D(
            target.into(),
            level,
            internalformat,
            width,
            height,
            depth,
            border,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_sub_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexSubImage1D(
            target.into(),
            level,
            xoffset,
            width,
            format,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_sub_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexSubImage2D(
            target.into(),
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_tex_sub_image_3d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTexSubImage3D(
            target.into(),
            level,
            xoffset,
            yoffset,
            zoffset,
            width,
            height,
            depth,
            format,
            image_size,
            data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_texture_sub_image_1d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw
            .CompressedTextureSubImage1D(texture, level, xoffset, width, format, image_size, data)
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_texture_sub_image_2d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTextureSubImage2D(
            texture, level, xoffset, yoffset, width, height, format, image_size, data,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::compressed_tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn compressed_texture_sub_image_3d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        self.raw.CompressedTextureSubImage3D(
            texture, level, xoffset, yoffset, zoffset, width, height, depth, format, image_size,
            data,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_image_sub_data(
        &self,
        src_name: GLuint,
        src_target: GLenum,
        src_level: GLint,
        src_x: GLint,
        src_y: GLint,
        src_z: GLint,
        dst_name: GLuint,
        dst_target: GLenum,
        dst_level: GLint,
        dst_x: GLint,
        dst_y: GLint,
        dst_z: GLint,
        src_width: GLsizei,
        src_height: GLsizei,
        src_depth: GLsizei,
    ) {
        unsafe {
            self.raw.CopyImageSubData(
                src_name, src_target, src_level, src_x, src_y, src_z, dst_name, dst_target,
                dst_level, dst_x, dst_y, dst_z, src_width, src_height, src_depth,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        border: GLint,
    ) {
        unsafe {
            self.raw
                .CopyTexImage1D(target.into(), level, internalformat, x, y, width, border)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        unsafe {
            self.raw.CopyTexImage2D(
                target.into(),
                level,
                internalformat,
                x,
                y,
                width,
                height,
                border,
            )
        }
    }

    pub fn copy_tex_sub_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
    ) {
        unsafe {
            self.raw
                .CopyTexSubImage1D(target.into(), level, xoffset, x, y, width)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.CopyTexSubImage2D(
                target.into(),
                level,
                xoffset,
                yoffset,
                x,
                y,
                width,
                height,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_tex_sub_image_3d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.CopyTexSubImage3D(
                target.into(),
                level,
                xoffset,
                yoffset,
                zoffset,
                x,
                y,
                width,
                height,
            )
        }
    }

    pub fn copy_texture_sub_image_1d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
    ) {
        unsafe {
            self.raw
                .CopyTextureSubImage1D(texture, level, xoffset, x, y, width)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_texture_sub_image_2d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw
                .CopyTextureSubImage2D(texture, level, xoffset, yoffset, x, y, width, height)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn copy_texture_sub_image_3d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw.CopyTextureSubImage3D(
                texture, level, xoffset, yoffset, zoffset, x, y, width, height,
            )
        }
    }

    pub fn create_textures(&self, target: TextureTarget, textures: &mut [GLuint]) {
        unsafe {
            self.raw
                .CreateTextures(target.into(), count(textures), textures.as_mut_ptr())
        }
    }

    pub fn create_texture(&self, target: TextureTarget) -> GLuint {
        let mut texture = 0;
        self.create_textures(target, std::slice::from_mut(&mut texture));
        texture
    }

    pub fn delete_textures(&self, textures: &[GLuint]) {
        unsafe { self.raw.DeleteTextures(count(textures), textures.as_ptr()) }
    }

    pub fn gen_textures(&self, textures: &mut [GLuint]) {
        unsafe { self.raw.GenTextures(count(textures), textures.as_mut_ptr()) }
    }

    pub fn gen_texture(&self) -> GLuint {
        let mut texture = 0;
        self.gen_textures(std::slice::from_mut(&mut texture));
        texture
    }

    pub fn generate_mipmap(&self, target: TextureTarget) {
        unsafe { self.raw.GenerateMipmap(target.into()) }
    }

    pub fn generate_texture_mipmap(&self, texture: GLuint) {
        unsafe { self.raw.GenerateTextureMipmap(texture) }
    }

    /// # Safety
    ///
    /// `img` must be writable for `TEXTURE_COMPRESSED_IMAGE_SIZE` bytes, or
    /// an offset into the bound pack buffer.
    pub unsafe fn get_compressed_tex_image(
        &self,
        target: TextureTarget,
        level: GLint,
        img: *mut c_void,
    ) {
        self.raw.GetCompressedTexImage(target.into(), level, img)
    }

    pub fn get_compressed_texture_image(&self, texture: GLuint, level: GLint, pixels: &mut [u8]) {
        unsafe {
            self.raw.GetCompressedTextureImage(
                texture,
                level,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn get_compressed_texture_sub_image(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        pixels: &mut [u8],
    ) {
        unsafe {
            self.raw.GetCompressedTextureSubImage(
                texture,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    /// # Safety
    ///
    /// `pixels` must be writable for the whole image in `format` and
    /// `type_`, or an offset into the bound pack buffer.
    pub unsafe fn get_tex_image(
        &self,
        target: TextureTarget,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *mut c_void,
    ) {
        self.raw
            .GetTexImage(target.into(), level, format, type_, pixels)
    }

    pub fn get_tex_level_parameterfv(
        &self,
        target: TextureTarget,
        level: GLint,
        pname: GLenum,
    ) -> GLfloat {
        let mut value = 0.0;
        unsafe {
            self.raw
                .GetTexLevelParameterfv(target.into(), level, pname, &mut value)
        };
        value
    }

    pub fn get_tex_level_parameteriv(
        &self,
        target: TextureTarget,
        level: GLint,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetTexLevelParameteriv(target.into(), level, pname, &mut value)
        };
        value
    }

    /// Four values cover the largest parameters, `TEXTURE_BORDER_COLOR` and
    /// `TEXTURE_SWIZZLE_RGBA`.
    pub fn get_tex_parameter_iiv(
        &self,
        target: TextureTarget,
        pname: GLenum,
        params: &mut [GLint; 4],
    ) {
        unsafe {
            self.raw
                .GetTexParameterIiv(target.into(), pname, params.as_mut_ptr())
        }
    }

    pub fn get_tex_parameter_iuiv(
        &self,
        target: TextureTarget,
        pname: GLenum,
        params: &mut [GLuint; 4],
    ) {
        unsafe {
            self.raw
                .GetTexParameterIuiv(target.into(), pname, params.as_mut_ptr())
        }
    }

    pub fn get_tex_parameterfv(
        &self,
        target: TextureTarget,
        pname: GLenum,
        params: &mut [GLfloat; 4],
    ) {
        unsafe {
            self.raw
                .GetTexParameterfv(target.into(), pname, params.as_mut_ptr())
        }
    }

    pub fn get_tex_parameteriv(
        &self,
        target: TextureTarget,
        pname: GLenum,
        params: &mut [GLint; 4],
    ) {
        unsafe {
            self.raw
                .GetTexParameteriv(target.into(), pname, params.as_mut_ptr())
        }
    }

    pub fn get_texture_image(
        &self,
        texture: GLuint,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    ) {
        unsafe {
            self.raw.GetTextureImage(
                texture,
                level,
                format,
                type_,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    pub fn get_texture_level_parameterfv(
        &self,
        texture: GLuint,
        level: GLint,
        pname: GLenum,
    ) -> GLfloat {
        let mut value = 0.0;
        unsafe {
            self.raw
                .GetTextureLevelParameterfv(texture, level, pname, &mut value)
        };
        value
    }

    pub fn get_texture_level_parameteriv(
        &self,
        texture: GLuint,
        level: GLint,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetTextureLevelParameteriv(texture, level, pname, &mut value)
        };
        value
    }

    pub fn get_texture_parameter_iiv(
        &self,
        texture: GLuint,
        pname: GLenum,
        params: &mut [GLint; 4],
    ) {
        unsafe {
            self.raw
                .GetTextureParameterIiv(texture, pname, params.as_mut_ptr())
        }
    }

    pub fn get_texture_parameter_iuiv(
        &self,
        texture: GLuint,
        pname: GLenum,
        params: &mut [GLuint; 4],
    ) {
        unsafe {
            self.raw
                .GetTextureParameterIuiv(texture, pname, params.as_mut_ptr())
        }
    }

    pub fn get_texture_parameterfv(
        &self,
        texture: GLuint,
        pname: GLenum,
        params: &mut [GLfloat; 4],
    ) {
        unsafe {
            self.raw
                .GetTextureParameterfv(texture, pname, params.as_mut_ptr())
        }
    }

    pub fn get_texture_parameteriv(&self, texture: GLuint, pname: GLenum, params: &mut [GLint; 4]) {
        unsafe {
            self.raw
                .GetTextureParameteriv(texture, pname, params.as_mut_ptr())
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn get_texture_sub_image(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    ) {
        unsafe {
            self.raw.GetTextureSubImage(
                texture,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                type_,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    pub fn getn_compressed_tex_image(&self, target: TextureTarget, lod: GLint, pixels: &mut [u8]) {
        unsafe {
            self.raw.GetnCompressedTexImage(
                target.into(),
                lod,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    pub fn getn_tex_image(
        &self,
        target: TextureTarget,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: &mut [u8],
    ) {
        unsafe {
            self.raw.GetnTexImage(
                target.into(),
                level,
                format,
                type_,
                count(pixels),
                pixels.as_mut_ptr().cast(),
            )
        }
    }

    pub fn invalidate_tex_image(&self, texture: GLuint, level: GLint) {
        unsafe { self.raw.InvalidateTexImage(texture, level) }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn invalidate_tex_sub_image(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        unsafe {
            self.raw.InvalidateTexSubImage(
                texture, level, xoffset, yoffset, zoffset, width, height, depth,
            )
        }
    }

    pub fn is_texture(&self, texture: GLuint) -> bool {
        unsafe { self.raw.IsTexture(texture) != 0 }
    }

    pub fn tex_buffer(&self, target: TextureTarget, internalformat: GLenum, buffer: GLuint) {
        unsafe { self.raw.TexBuffer(target.into(), internalformat, buffer) }
    }

    pub fn tex_buffer_range(
        &self,
        target: TextureTarget,
        internalformat: GLenum,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .TexBufferRange(target.into(), internalformat, buffer, offset, size)
        }
    }

    /// # Safety
    ///
    /// `pixels` must be null, readable for the whole image in `format` and
    /// `type_`, or an offset into the bound unpack buffer.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TexImage1D(
            target.into(),
            level,
            internalformat,
            width,
            border,
            format,
            type_,
            pixels,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TexImage2D(
            target.into(),
            level,
            internalformat,
            width,
            height,
            border,
            format,
            type_,
            pixels,
        )
    }

    pub fn tex_image_2d_multisample(
        &self,
        target: TextureTarget,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TexImage2DMultisample(
                target.into(),
                samples,
                internalformat,
                width,
                height,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_image_3d(
        &self,
        target: TextureTarget,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TexImage3D(
            target.into(),
            level,
            internalformat,
            width,
            height,
            depth,
            border,
            format,
            type_,
            pixels,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_3d_multisample(
        &self,
        target: TextureTarget,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TexImage3DMultisample(
                target.into(),
                samples,
                internalformat,
                width,
                height,
                depth,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    pub fn tex_parameter_iiv(&self, target: TextureTarget, pname: GLenum, params: &[GLint; 4]) {
        unsafe { self.raw.TexParameterIiv(target.into(), pname, params.as_ptr()) }
    }

    pub fn tex_parameter_iuiv(&self, target: TextureTarget, pname: GLenum, params: &[GLuint; 4]) {
        unsafe { self.raw.TexParameterIuiv(target.into(), pname, params.as_ptr()) }
    }

    pub fn tex_parameterf(&self, target: TextureTarget, pname: GLenum, param: GLfloat) {
        unsafe { self.raw.TexParameterf(target.into(), pname, param) }
    }

    pub fn tex_parameterfv(&self, target: TextureTarget, pname: GLenum, params: &[GLfloat; 4]) {
        unsafe { self.raw.TexParameterfv(target.into(), pname, params.as_ptr()) }
    }

    pub fn tex_parameteri(&self, target: TextureTarget, pname: GLenum, param: GLint) {
        unsafe { self.raw.TexParameteri(target.into(), pname, param) }
    }

    pub fn tex_parameteriv(&self, target: TextureTarget, pname: GLenum, params: &[GLint; 4]) {
        unsafe { self.raw.TexParameteriv(target.into(), pname, params.as_ptr()) }
    }

    pub fn tex_storage_1d(
        &self,
        target: TextureTarget,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
    ) {
        unsafe {
            self.raw
                .TexStorage1D(target.into(), levels, internalformat, width)
        }
    }

    pub fn tex_storage_2d(
        &self,
        target: TextureTarget,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw
                .TexStorage2D(target.into(), levels, internalformat, width, height)
        }
    }

    pub fn tex_storage_2d_multisample(
        &self,
        target: TextureTarget,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TexStorage2DMultisample(
                target.into(),
                samples,
                internalformat,
                width,
                height,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    pub fn tex_storage_3d(
        &self,
        target: TextureTarget,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        unsafe {
            self.raw.TexStorage3D(
                target.into(),
                levels,
                internalformat,
                width,
                height,
                depth,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_storage_3d_multisample(
        &self,
        target: TextureTarget,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TexStorage3DMultisample(
                target.into(),
                samples,
                internalformat,
                width,
                height,
                depth,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_sub_image_1d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw
            .TexSubImage1D(target.into(), level, xoffset, width, format, type_, pixels)
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_sub_image_2d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TexSubImage2D(
            target.into(),
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            type_,
            pixels,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn tex_sub_image_3d(
        &self,
        target: TextureTarget,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TexSubImage3D(
            target.into(),
            level,
            xoffset,
            yoffset,
            zoffset,
            width,
            height,
            depth,
            format,
            type_,
            pixels,
        )
    }

    pub fn texture_barrier(&self) {
        unsafe { self.raw.TextureBarrier() }
    }

    pub fn texture_buffer(&self, texture: GLuint, internalformat: GLenum, buffer: GLuint) {
        unsafe { self.raw.TextureBuffer(texture, internalformat, buffer) }
    }

    pub fn texture_buffer_range(
        &self,
        texture: GLuint,
        internalformat: GLenum,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .TextureBufferRange(texture, internalformat, buffer, offset, size)
        }
    }

    pub fn texture_parameter_iiv(&self, texture: GLuint, pname: GLenum, params: &[GLint; 4]) {
        unsafe { self.raw.TextureParameterIiv(texture, pname, params.as_ptr()) }
    }

    pub fn texture_parameter_iuiv(&self, texture: GLuint, pname: GLenum, params: &[GLuint; 4]) {
        unsafe { self.raw.TextureParameterIuiv(texture, pname, params.as_ptr()) }
    }

    pub fn texture_parameterf(&self, texture: GLuint, pname: GLenum, param: GLfloat) {
        unsafe { self.raw.TextureParameterf(texture, pname, param) }
    }

    pub fn texture_parameterfv(&self, texture: GLuint, pname: GLenum, params: &[GLfloat; 4]) {
        unsafe { self.raw.TextureParameterfv(texture, pname, params.as_ptr()) }
    }

    pub fn texture_parameteri(&self, texture: GLuint, pname: GLenum, param: GLint) {
        unsafe { self.raw.TextureParameteri(texture, pname, param) }
    }

    pub fn texture_parameteriv(&self, texture: GLuint, pname: GLenum, params: &[GLint; 4]) {
        unsafe { self.raw.TextureParameteriv(texture, pname, params.as_ptr()) }
    }

    pub fn texture_storage_1d(
        &self,
        texture: GLuint,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
    ) {
        unsafe {
            self.raw
                .TextureStorage1D(texture, levels, internalformat, width)
        }
    }

    pub fn texture_storage_2d(
        &self,
        texture: GLuint,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.raw
                .TextureStorage2D(texture, levels, internalformat, width, height)
        }
    }

    pub fn texture_storage_2d_multisample(
        &self,
        texture: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TextureStorage2DMultisample(
                texture,
                samples,
                internalformat,
                width,
                height,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    pub fn texture_storage_3d(
        &self,
        texture: GLuint,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        unsafe {
            self.raw
                .TextureStorage3D(texture, levels, internalformat, width, height, depth)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn texture_storage_3d_multisample(
        &self,
        texture: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: bool,
    ) {
        unsafe {
            self.raw.TextureStorage3DMultisample(
                texture,
                samples,
                internalformat,
                width,
                height,
                depth,
                gl_bool(fixedsamplelocations),
            )
        }
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_sub_image_1d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw
            .TextureSubImage1D(texture, level, xoffset, width, format, type_, pixels)
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_sub_image_2d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TextureSubImage2D(
            texture, level, xoffset, yoffset, width, height, format, type_, pixels,
        )
    }

    /// # Safety
    ///
    /// See [`Gl::tex_image_1d`].
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_sub_image_3d(
        &self,
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        self.raw.TextureSubImage3D(
            texture, level, xoffset, yoffset, zoffset, width, height, depth, format, type_, pixels,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn texture_view(
        &self,
        texture: GLuint,
        target: TextureTarget,
        origtexture: GLuint,
        internalformat: GLenum,
        minlevel: GLuint,
        numlevels: GLuint,
        minlayer: GLuint,
        numlayers: GLuint,
    ) {
        unsafe {
            self.raw.TextureView(
                texture,
                target.into(),
                origtexture,
                internalformat,
                minlevel,
                numlevels,
                minlayer,
                numlayers,
            )
        }
    }
}
