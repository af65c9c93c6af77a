use crate::{
    enums::{BufferAccess, BufferTarget, BufferUsage},
    flags::{BufferStorageFlags, MapAccess},
    sys::types::*,
    util::{byte_size, count},
    Gl,
};
use std::{os::raw::c_void, ptr};

/// Buffer objects.
///
/// Every buffer parameter is a single value, so the parameter queries return
/// it directly.
impl Gl {
    pub fn bind_buffer(&self, target: BufferTarget, buffer: GLuint) {
        unsafe { self.raw.BindBuffer(target.into(), buffer) }
    }

    pub fn bind_buffer_base(&self, target: BufferTarget, index: GLuint, buffer: GLuint) {
        unsafe { self.raw.BindBufferBase(target.into(), index, buffer) }
    }

    pub fn bind_buffer_range(
        &self,
        target: BufferTarget,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .BindBufferRange(target.into(), index, buffer, offset, size)
        }
    }

    pub fn bind_buffers_base(&self, target: BufferTarget, first: GLuint, buffers: &[GLuint]) {
        unsafe {
            self.raw
                .BindBuffersBase(target.into(), first, count(buffers), buffers.as_ptr())
        }
    }

    /// Binds `buffers[i]` with `offsets[i]` and `sizes[i]`. Only as many
    /// bindings as the shortest slice holds are made.
    pub fn bind_buffers_range(
        &self,
        target: BufferTarget,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[GLintptr],
        sizes: &[GLsizeiptr],
    ) {
        let len = buffers.len().min(offsets.len()).min(sizes.len());
        unsafe {
            self.raw.BindBuffersRange(
                target.into(),
                first,
                count(&buffers[..len]),
                buffers.as_ptr(),
                offsets.as_ptr(),
                sizes.as_ptr(),
            )
        }
    }

    /// # Safety
    ///
    /// `data` must be null or point to `size` readable bytes.
    pub unsafe fn buffer_data(
        &self,
        target: BufferTarget,
        size: GLsizeiptr,
        data: *const c_void,
        usage: BufferUsage,
    ) {
        self.raw.BufferData(target.into(), size, data, usage.into())
    }

    pub fn buffer_data_slice<T: Copy>(&self, target: BufferTarget, data: &[T], usage: BufferUsage) {
        unsafe { self.buffer_data(target, byte_size(data), data.as_ptr().cast(), usage) }
    }

    /// Allocates `size` bytes of uninitialized storage.
    pub fn buffer_data_size(&self, target: BufferTarget, size: GLsizeiptr, usage: BufferUsage) {
        unsafe { self.buffer_data(target, size, ptr::null(), usage) }
    }

    /// # Safety
    ///
    /// `data` must be null or point to `size` readable bytes.
    pub unsafe fn buffer_storage(
        &self,
        target: BufferTarget,
        size: GLsizeiptr,
        data: *const c_void,
        flags: BufferStorageFlags,
    ) {
        self.raw
            .BufferStorage(target.into(), size, data, flags.bits())
    }

    pub fn buffer_storage_slice<T: Copy>(
        &self,
        target: BufferTarget,
        data: &[T],
        flags: BufferStorageFlags,
    ) {
        unsafe { self.buffer_storage(target, byte_size(data), data.as_ptr().cast(), flags) }
    }

    /// # Safety
    ///
    /// `data` must point to `size` readable bytes.
    pub unsafe fn buffer_sub_data(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *const c_void,
    ) {
        self.raw.BufferSubData(target.into(), offset, size, data)
    }

    pub fn buffer_sub_data_slice<T: Copy>(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        data: &[T],
    ) {
        unsafe { self.buffer_sub_data(target, offset, byte_size(data), data.as_ptr().cast()) }
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel of `format` and `type_`.
    pub unsafe fn clear_buffer_data(
        &self,
        target: BufferTarget,
        internalformat: GLenum,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw
            .ClearBufferData(target.into(), internalformat, format, type_, data)
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel of `format` and `type_`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn clear_buffer_sub_data(
        &self,
        target: BufferTarget,
        internalformat: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw.ClearBufferSubData(
            target.into(),
            internalformat,
            offset,
            size,
            format,
            type_,
            data,
        )
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel of `format` and `type_`.
    pub unsafe fn clear_named_buffer_data(
        &self,
        buffer: GLuint,
        internalformat: GLenum,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw
            .ClearNamedBufferData(buffer, internalformat, format, type_, data)
    }

    /// # Safety
    ///
    /// `data` must be null or point to one texel of `format` and `type_`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn clear_named_buffer_sub_data(
        &self,
        buffer: GLuint,
        internalformat: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    ) {
        self.raw.ClearNamedBufferSubData(
            buffer,
            internalformat,
            offset,
            size,
            format,
            type_,
            data,
        )
    }

    pub fn copy_buffer_sub_data(
        &self,
        read_target: BufferTarget,
        write_target: BufferTarget,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw.CopyBufferSubData(
                read_target.into(),
                write_target.into(),
                read_offset,
                write_offset,
                size,
            )
        }
    }

    pub fn copy_named_buffer_sub_data(
        &self,
        read_buffer: GLuint,
        write_buffer: GLuint,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.raw.CopyNamedBufferSubData(
                read_buffer,
                write_buffer,
                read_offset,
                write_offset,
                size,
            )
        }
    }

    pub fn create_buffers(&self, buffers: &mut [GLuint]) {
        unsafe { self.raw.CreateBuffers(count(buffers), buffers.as_mut_ptr()) }
    }

    pub fn create_buffer(&self) -> GLuint {
        let mut buffer = 0;
        self.create_buffers(std::slice::from_mut(&mut buffer));
        buffer
    }

    pub fn delete_buffers(&self, buffers: &[GLuint]) {
        unsafe { self.raw.DeleteBuffers(count(buffers), buffers.as_ptr()) }
    }

    pub fn flush_mapped_buffer_range(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        length: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .FlushMappedBufferRange(target.into(), offset, length)
        }
    }

    pub fn flush_mapped_named_buffer_range(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        length: GLsizeiptr,
    ) {
        unsafe {
            self.raw
                .FlushMappedNamedBufferRange(buffer, offset, length)
        }
    }

    pub fn gen_buffers(&self, buffers: &mut [GLuint]) {
        unsafe { self.raw.GenBuffers(count(buffers), buffers.as_mut_ptr()) }
    }

    pub fn gen_buffer(&self) -> GLuint {
        let mut buffer = 0;
        self.gen_buffers(std::slice::from_mut(&mut buffer));
        buffer
    }

    pub fn get_buffer_parameteri64v(&self, target: BufferTarget, pname: GLenum) -> GLint64 {
        let mut value = 0;
        unsafe {
            self.raw
                .GetBufferParameteri64v(target.into(), pname, &mut value)
        };
        value
    }

    pub fn get_buffer_parameteriv(&self, target: BufferTarget, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetBufferParameteriv(target.into(), pname, &mut value)
        };
        value
    }

    pub fn get_buffer_pointerv(&self, target: BufferTarget, pname: GLenum) -> *mut c_void {
        let mut value: *mut c_void = ptr::null_mut();
        unsafe {
            self.raw
                .GetBufferPointerv(target.into(), pname, &mut value as *mut *mut c_void)
        };
        value
    }

    /// # Safety
    ///
    /// `data` must point to `size` writable bytes.
    pub unsafe fn get_buffer_sub_data(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *mut c_void,
    ) {
        self.raw.GetBufferSubData(target.into(), offset, size, data)
    }

    pub fn get_buffer_sub_data_bytes(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        data: &mut [u8],
    ) {
        unsafe {
            self.get_buffer_sub_data(target, offset, byte_size(data), data.as_mut_ptr().cast())
        }
    }

    pub fn get_named_buffer_parameteri64v(&self, buffer: GLuint, pname: GLenum) -> GLint64 {
        let mut value = 0;
        unsafe {
            self.raw
                .GetNamedBufferParameteri64v(buffer, pname, &mut value)
        };
        value
    }

    pub fn get_named_buffer_parameteriv(&self, buffer: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetNamedBufferParameteriv(buffer, pname, &mut value)
        };
        value
    }

    pub fn get_named_buffer_pointerv(&self, buffer: GLuint, pname: GLenum) -> *mut c_void {
        let mut value: *mut c_void = ptr::null_mut();
        unsafe {
            self.raw
                .GetNamedBufferPointerv(buffer, pname, &mut value as *mut *mut c_void)
        };
        value
    }

    /// # Safety
    ///
    /// `data` must point to `size` writable bytes.
    pub unsafe fn get_named_buffer_sub_data(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *mut c_void,
    ) {
        self.raw
            .GetNamedBufferSubData(buffer, offset, size, data)
    }

    pub fn get_named_buffer_sub_data_bytes(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        data: &mut [u8],
    ) {
        unsafe {
            let size = byte_size(data);
            self.get_named_buffer_sub_data(buffer, offset, size, data.as_mut_ptr().cast())
        }
    }

    pub fn invalidate_buffer_data(&self, buffer: GLuint) {
        unsafe { self.raw.InvalidateBufferData(buffer) }
    }

    pub fn invalidate_buffer_sub_data(&self, buffer: GLuint, offset: GLintptr, length: GLsizeiptr) {
        unsafe {
            self.raw
                .InvalidateBufferSubData(buffer, offset, length)
        }
    }

    pub fn is_buffer(&self, buffer: GLuint) -> bool {
        unsafe { self.raw.IsBuffer(buffer) != 0 }
    }

    pub fn map_buffer(&self, target: BufferTarget, access: BufferAccess) -> *mut c_void {
        unsafe { self.raw.MapBuffer(target.into(), access.into()) }
    }

    pub fn map_buffer_range(
        &self,
        target: BufferTarget,
        offset: GLintptr,
        length: GLsizeiptr,
        access: MapAccess,
    ) -> *mut c_void {
        unsafe {
            self.raw
                .MapBufferRange(target.into(), offset, length, access.bits())
        }
    }

    pub fn map_named_buffer(&self, buffer: GLuint, access: BufferAccess) -> *mut c_void {
        unsafe { self.raw.MapNamedBuffer(buffer, access.into()) }
    }

    pub fn map_named_buffer_range(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        length: GLsizeiptr,
        access: MapAccess,
    ) -> *mut c_void {
        unsafe {
            self.raw
                .MapNamedBufferRange(buffer, offset, length, access.bits())
        }
    }

    /// # Safety
    ///
    /// `data` must be null or point to `size` readable bytes.
    pub unsafe fn named_buffer_data(
        &self,
        buffer: GLuint,
        size: GLsizeiptr,
        data: *const c_void,
        usage: BufferUsage,
    ) {
        self.raw.NamedBufferData(buffer, size, data, usage.into())
    }

    pub fn named_buffer_data_slice<T: Copy>(&self, buffer: GLuint, data: &[T], usage: BufferUsage) {
        unsafe { self.named_buffer_data(buffer, byte_size(data), data.as_ptr().cast(), usage) }
    }

    /// # Safety
    ///
    /// `data` must be null or point to `size` readable bytes.
    pub unsafe fn named_buffer_storage(
        &self,
        buffer: GLuint,
        size: GLsizeiptr,
        data: *const c_void,
        flags: BufferStorageFlags,
    ) {
        self.raw
            .NamedBufferStorage(buffer, size, data, flags.bits())
    }

    pub fn named_buffer_storage_slice<T: Copy>(
        &self,
        buffer: GLuint,
        data: &[T],
        flags: BufferStorageFlags,
    ) {
        unsafe { self.named_buffer_storage(buffer, byte_size(data), data.as_ptr().cast(), flags) }
    }

    /// # Safety
    ///
    /// `data` must point to `size` readable bytes.
    pub unsafe fn named_buffer_sub_data(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *const c_void,
    ) {
        self.raw.NamedBufferSubData(buffer, offset, size, data)
    }

    pub fn named_buffer_sub_data_slice<T: Copy>(
        &self,
        buffer: GLuint,
        offset: GLintptr,
        data: &[T],
    ) {
        unsafe { self.named_buffer_sub_data(buffer, offset, byte_size(data), data.as_ptr().cast()) }
    }

    pub fn unmap_buffer(&self, target: BufferTarget) -> bool {
        unsafe { self.raw.UnmapBuffer(target.into()) != 0 }
    }

    pub fn unmap_named_buffer(&self, buffer: GLuint) -> bool {
        unsafe { self.raw.UnmapNamedBuffer(buffer) != 0 }
    }
}
