//! Vertex arrays and generic vertex attributes.
//!
//! Every entry point addressing a generic attribute by index accepts any
//! [`IntoIndex`] value. Negative or oversized indices fail with
//! [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) before the
//! driver is called.

use crate::{
    enums::VertexAttribType,
    error::Result,
    index::IntoIndex,
    sys::types::*,
    util::{count, gl_bool},
    Gl,
};
use std::{ffi::c_void, ptr};

macro_rules! attrib_values {
    ($($method:ident => $raw:ident($($arg:ident: $ty:ty),+);)*) => {
        impl Gl {
            $(
                pub fn $method(&self, index: impl IntoIndex, $($arg: $ty),+) -> Result<()> {
                    let index = index.into_index(concat!("gl", stringify!($raw)))?;
                    unsafe { self.raw.$raw(index, $($arg),+) };
                    Ok(())
                }
            )*
        }
    };
}

macro_rules! attrib_vectors {
    ($($method:ident => $raw:ident: [$ty:ty; $len:literal];)*) => {
        impl Gl {
            $(
                pub fn $method(&self, index: impl IntoIndex, v: &[$ty; $len]) -> Result<()> {
                    let index = index.into_index(concat!("gl", stringify!($raw)))?;
                    unsafe { self.raw.$raw(index, v.as_ptr()) };
                    Ok(())
                }
            )*
        }
    };
}

macro_rules! attrib_packed {
    ($($method:ident / $vector:ident => $raw:ident / $raw_vector:ident;)*) => {
        impl Gl {
            $(
                /// `type_` is `INT_2_10_10_10_REV`, `UNSIGNED_INT_2_10_10_10_REV`
                /// or `UNSIGNED_INT_10F_11F_11F_REV`.
                pub fn $method(
                    &self,
                    index: impl IntoIndex,
                    type_: VertexAttribType,
                    normalized: bool,
                    value: GLuint,
                ) -> Result<()> {
                    let index = index.into_index(concat!("gl", stringify!($raw)))?;
                    unsafe { self.raw.$raw(index, type_.into(), gl_bool(normalized), value) };
                    Ok(())
                }

                pub fn $vector(
                    &self,
                    index: impl IntoIndex,
                    type_: VertexAttribType,
                    normalized: bool,
                    value: &[GLuint; 1],
                ) -> Result<()> {
                    let index = index.into_index(concat!("gl", stringify!($raw_vector)))?;
                    unsafe {
                        self.raw
                            .$raw_vector(index, type_.into(), gl_bool(normalized), value.as_ptr())
                    };
                    Ok(())
                }
            )*
        }
    };
}

macro_rules! attrib_queries {
    ($($method:ident => $raw:ident: $ty:ty;)*) => {
        impl Gl {
            $(
                /// Four values cover `CURRENT_VERTEX_ATTRIB`; every other
                /// parameter fills only the first.
                pub fn $method(
                    &self,
                    index: impl IntoIndex,
                    pname: GLenum,
                    params: &mut [$ty; 4],
                ) -> Result<()> {
                    let index = index.into_index(concat!("gl", stringify!($raw)))?;
                    unsafe { self.raw.$raw(index, pname, params.as_mut_ptr()) };
                    Ok(())
                }
            )*
        }
    };
}

attrib_values! {
    vertex_attrib_1d => VertexAttrib1d(x: GLdouble);
    vertex_attrib_1f => VertexAttrib1f(x: GLfloat);
    vertex_attrib_1s => VertexAttrib1s(x: GLshort);
    vertex_attrib_2d => VertexAttrib2d(x: GLdouble, y: GLdouble);
    vertex_attrib_2f => VertexAttrib2f(x: GLfloat, y: GLfloat);
    vertex_attrib_2s => VertexAttrib2s(x: GLshort, y: GLshort);
    vertex_attrib_3d => VertexAttrib3d(x: GLdouble, y: GLdouble, z: GLdouble);
    vertex_attrib_3f => VertexAttrib3f(x: GLfloat, y: GLfloat, z: GLfloat);
    vertex_attrib_3s => VertexAttrib3s(x: GLshort, y: GLshort, z: GLshort);
    vertex_attrib_4d => VertexAttrib4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    vertex_attrib_4f => VertexAttrib4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    vertex_attrib_4s => VertexAttrib4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
    vertex_attrib_4nub => VertexAttrib4Nub(x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
    vertex_attrib_i1i => VertexAttribI1i(x: GLint);
    vertex_attrib_i1ui => VertexAttribI1ui(x: GLuint);
    vertex_attrib_i2i => VertexAttribI2i(x: GLint, y: GLint);
    vertex_attrib_i2ui => VertexAttribI2ui(x: GLuint, y: GLuint);
    vertex_attrib_i3i => VertexAttribI3i(x: GLint, y: GLint, z: GLint);
    vertex_attrib_i3ui => VertexAttribI3ui(x: GLuint, y: GLuint, z: GLuint);
    vertex_attrib_i4i => VertexAttribI4i(x: GLint, y: GLint, z: GLint, w: GLint);
    vertex_attrib_i4ui => VertexAttribI4ui(x: GLuint, y: GLuint, z: GLuint, w: GLuint);
    vertex_attrib_l1d => VertexAttribL1d(x: GLdouble);
    vertex_attrib_l2d => VertexAttribL2d(x: GLdouble, y: GLdouble);
    vertex_attrib_l3d => VertexAttribL3d(x: GLdouble, y: GLdouble, z: GLdouble);
    vertex_attrib_l4d => VertexAttribL4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    vertex_attrib_binding => VertexAttribBinding(bindingindex: GLuint);
    vertex_attrib_divisor => VertexAttribDivisor(divisor: GLuint);
}

attrib_vectors! {
    vertex_attrib_1dv => VertexAttrib1dv: [GLdouble; 1];
    vertex_attrib_1fv => VertexAttrib1fv: [GLfloat; 1];
    vertex_attrib_1sv => VertexAttrib1sv: [GLshort; 1];
    vertex_attrib_2dv => VertexAttrib2dv: [GLdouble; 2];
    vertex_attrib_2fv => VertexAttrib2fv: [GLfloat; 2];
    vertex_attrib_2sv => VertexAttrib2sv: [GLshort; 2];
    vertex_attrib_3dv => VertexAttrib3dv: [GLdouble; 3];
    vertex_attrib_3fv => VertexAttrib3fv: [GLfloat; 3];
    vertex_attrib_3sv => VertexAttrib3sv: [GLshort; 3];
    vertex_attrib_4dv => VertexAttrib4dv: [GLdouble; 4];
    vertex_attrib_4fv => VertexAttrib4fv: [GLfloat; 4];
    vertex_attrib_4sv => VertexAttrib4sv: [GLshort; 4];
    vertex_attrib_4bv => VertexAttrib4bv: [GLbyte; 4];
    vertex_attrib_4iv => VertexAttrib4iv: [GLint; 4];
    vertex_attrib_4ubv => VertexAttrib4ubv: [GLubyte; 4];
    vertex_attrib_4uiv => VertexAttrib4uiv: [GLuint; 4];
    vertex_attrib_4usv => VertexAttrib4usv: [GLushort; 4];
    vertex_attrib_4nbv => VertexAttrib4Nbv: [GLbyte; 4];
    vertex_attrib_4niv => VertexAttrib4Niv: [GLint; 4];
    vertex_attrib_4nsv => VertexAttrib4Nsv: [GLshort; 4];
    vertex_attrib_4nubv => VertexAttrib4Nubv: [GLubyte; 4];
    vertex_attrib_4nuiv => VertexAttrib4Nuiv: [GLuint; 4];
    vertex_attrib_4nusv => VertexAttrib4Nusv: [GLushort; 4];
    vertex_attrib_i1iv => VertexAttribI1iv: [GLint; 1];
    vertex_attrib_i1uiv => VertexAttribI1uiv: [GLuint; 1];
    vertex_attrib_i2iv => VertexAttribI2iv: [GLint; 2];
    vertex_attrib_i2uiv => VertexAttribI2uiv: [GLuint; 2];
    vertex_attrib_i3iv => VertexAttribI3iv: [GLint; 3];
    vertex_attrib_i3uiv => VertexAttribI3uiv: [GLuint; 3];
    vertex_attrib_i4iv => VertexAttribI4iv: [GLint; 4];
    vertex_attrib_i4uiv => VertexAttribI4uiv: [GLuint; 4];
    vertex_attrib_i4bv => VertexAttribI4bv: [GLbyte; 4];
    vertex_attrib_i4sv => VertexAttribI4sv: [GLshort; 4];
    vertex_attrib_i4ubv => VertexAttribI4ubv: [GLubyte; 4];
    vertex_attrib_i4usv => VertexAttribI4usv: [GLushort; 4];
    vertex_attrib_l1dv => VertexAttribL1dv: [GLdouble; 1];
    vertex_attrib_l2dv => VertexAttribL2dv: [GLdouble; 2];
    vertex_attrib_l3dv => VertexAttribL3dv: [GLdouble; 3];
    vertex_attrib_l4dv => VertexAttribL4dv: [GLdouble; 4];
}

attrib_packed! {
    vertex_attrib_p1ui / vertex_attrib_p1uiv => VertexAttribP1ui / VertexAttribP1uiv;
    vertex_attrib_p2ui / vertex_attrib_p2uiv => VertexAttribP2ui / VertexAttribP2uiv;
    vertex_attrib_p3ui / vertex_attrib_p3uiv => VertexAttribP3ui / VertexAttribP3uiv;
    vertex_attrib_p4ui / vertex_attrib_p4uiv => VertexAttribP4ui / VertexAttribP4uiv;
}

attrib_queries! {
    get_vertex_attribdv => GetVertexAttribdv: GLdouble;
    get_vertex_attribfv => GetVertexAttribfv: GLfloat;
    get_vertex_attribiv => GetVertexAttribiv: GLint;
    get_vertex_attrib_iiv => GetVertexAttribIiv: GLint;
    get_vertex_attrib_iuiv => GetVertexAttribIuiv: GLuint;
    get_vertex_attrib_ldv => GetVertexAttribLdv: GLdouble;
}

impl Gl {
    pub fn bind_vertex_array(&self, array: GLuint) {
        unsafe { self.raw.BindVertexArray(array) }
    }

    pub fn bind_vertex_buffer(
        &self,
        bindingindex: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        stride: GLsizei,
    ) {
        unsafe { self.raw.BindVertexBuffer(bindingindex, buffer, offset, stride) }
    }

    /// Binds consecutive buffers starting at `first`. The three slices are
    /// taken pairwise; only as many bindings as the shortest slice are made.
    pub fn bind_vertex_buffers(
        &self,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[GLintptr],
        strides: &[GLsizei],
    ) {
        let len = buffers.len().min(offsets.len()).min(strides.len());
        unsafe {
            self.raw.BindVertexBuffers(
                first,
                count(&buffers[..len]),
                buffers.as_ptr(),
                offsets.as_ptr(),
                strides.as_ptr(),
            )
        }
    }

    pub fn create_vertex_arrays(&self, arrays: &mut [GLuint]) {
        unsafe { self.raw.CreateVertexArrays(count(arrays), arrays.as_mut_ptr()) }
    }

    pub fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        unsafe { self.raw.DeleteVertexArrays(count(arrays), arrays.as_ptr()) }
    }

    pub fn disable_vertex_array_attrib(&self, vaobj: GLuint, index: impl IntoIndex) -> Result<()> {
        let index = index.into_index("glDisableVertexArrayAttrib")?;
        unsafe { self.raw.DisableVertexArrayAttrib(vaobj, index) };
        Ok(())
    }

    pub fn disable_vertex_attrib_array(&self, index: impl IntoIndex) -> Result<()> {
        let index = index.into_index("glDisableVertexAttribArray")?;
        unsafe { self.raw.DisableVertexAttribArray(index) };
        Ok(())
    }

    pub fn enable_vertex_array_attrib(&self, vaobj: GLuint, index: impl IntoIndex) -> Result<()> {
        let index = index.into_index("glEnableVertexArrayAttrib")?;
        unsafe { self.raw.EnableVertexArrayAttrib(vaobj, index) };
        Ok(())
    }

    pub fn enable_vertex_attrib_array(&self, index: impl IntoIndex) -> Result<()> {
        let index = index.into_index("glEnableVertexAttribArray")?;
        unsafe { self.raw.EnableVertexAttribArray(index) };
        Ok(())
    }

    pub fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) {
        unsafe { self.raw.GenVertexArrays(count(arrays), arrays.as_mut_ptr()) }
    }

    pub fn gen_vertex_array(&self) -> GLuint {
        let mut array = 0;
        self.gen_vertex_arrays(std::slice::from_mut(&mut array));
        array
    }

    pub fn get_vertex_array_indexed64iv(
        &self,
        vaobj: GLuint,
        index: GLuint,
        pname: GLenum,
    ) -> GLint64 {
        let mut value = 0;
        unsafe {
            self.raw
                .GetVertexArrayIndexed64iv(vaobj, index, pname, &mut value)
        };
        value
    }

    pub fn get_vertex_array_indexediv(&self, vaobj: GLuint, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetVertexArrayIndexediv(vaobj, index, pname, &mut value)
        };
        value
    }

    pub fn get_vertex_arrayiv(&self, vaobj: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetVertexArrayiv(vaobj, pname, &mut value) };
        value
    }

    pub fn get_vertex_attrib_pointerv(
        &self,
        index: impl IntoIndex,
        pname: GLenum,
    ) -> Result<*mut c_void> {
        let index = index.into_index("glGetVertexAttribPointerv")?;
        let mut pointer = ptr::null_mut();
        unsafe { self.raw.GetVertexAttribPointerv(index, pname, &mut pointer) };
        Ok(pointer)
    }

    pub fn is_vertex_array(&self, array: GLuint) -> bool {
        unsafe { self.raw.IsVertexArray(array) != 0 }
    }

    pub fn vertex_array_attrib_binding(
        &self,
        vaobj: GLuint,
        attribindex: GLuint,
        bindingindex: GLuint,
    ) {
        unsafe {
            self.raw
                .VertexArrayAttribBinding(vaobj, attribindex, bindingindex)
        }
    }

    pub fn vertex_array_attrib_format(
        &self,
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: VertexAttribType,
        normalized: bool,
        relativeoffset: GLuint,
    ) {
        unsafe {
            self.raw.VertexArrayAttribFormat(
                vaobj,
                attribindex,
                size,
                type_.into(),
                gl_bool(normalized),
                relativeoffset,
            )
        }
    }

    pub fn vertex_array_attrib_iformat(
        &self,
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: VertexAttribType,
        relativeoffset: GLuint,
    ) {
        unsafe {
            self.raw
                .VertexArrayAttribIFormat(vaobj, attribindex, size, type_.into(), relativeoffset)
        }
    }

    pub fn vertex_array_attrib_lformat(
        &self,
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: VertexAttribType,
        relativeoffset: GLuint,
    ) {
        unsafe {
            self.raw
                .VertexArrayAttribLFormat(vaobj, attribindex, size, type_.into(), relativeoffset)
        }
    }

    pub fn vertex_array_binding_divisor(
        &self,
        vaobj: GLuint,
        bindingindex: GLuint,
        divisor: GLuint,
    ) {
        unsafe { self.raw.VertexArrayBindingDivisor(vaobj, bindingindex, divisor) }
    }

    pub fn vertex_array_element_buffer(&self, vaobj: GLuint, buffer: GLuint) {
        unsafe { self.raw.VertexArrayElementBuffer(vaobj, buffer) }
    }

    pub fn vertex_array_vertex_buffer(
        &self,
        vaobj: GLuint,
        bindingindex: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        stride: GLsizei,
    ) {
        unsafe {
            self.raw
                .VertexArrayVertexBuffer(vaobj, bindingindex, buffer, offset, stride)
        }
    }

    /// See [`Gl::bind_vertex_buffers`].
    pub fn vertex_array_vertex_buffers(
        &self,
        vaobj: GLuint,
        first: GLuint,
        buffers: &[GLuint],
        offsets: &[GLintptr],
        strides: &[GLsizei],
    ) {
        let len = buffers.len().min(offsets.len()).min(strides.len());
        unsafe {
            self.raw.VertexArrayVertexBuffers(
                vaobj,
                first,
                count(&buffers[..len]),
                buffers.as_ptr(),
                offsets.as_ptr(),
                strides.as_ptr(),
            )
        }
    }

    pub fn vertex_attrib_format(
        &self,
        attribindex: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        normalized: bool,
        relativeoffset: GLuint,
    ) -> Result<()> {
        let attribindex = attribindex.into_index("glVertexAttribFormat")?;
        unsafe {
            self.raw.VertexAttribFormat(
                attribindex,
                size,
                type_.into(),
                gl_bool(normalized),
                relativeoffset,
            )
        };
        Ok(())
    }

    pub fn vertex_attrib_iformat(
        &self,
        attribindex: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        relativeoffset: GLuint,
    ) -> Result<()> {
        let attribindex = attribindex.into_index("glVertexAttribIFormat")?;
        unsafe {
            self.raw
                .VertexAttribIFormat(attribindex, size, type_.into(), relativeoffset)
        };
        Ok(())
    }

    pub fn vertex_attrib_lformat(
        &self,
        attribindex: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        relativeoffset: GLuint,
    ) -> Result<()> {
        let attribindex = attribindex.into_index("glVertexAttribLFormat")?;
        unsafe {
            self.raw
                .VertexAttribLFormat(attribindex, size, type_.into(), relativeoffset)
        };
        Ok(())
    }

    /// # Safety
    ///
    /// With a buffer bound to `ARRAY_BUFFER`, `pointer` is an offset into
    /// it. Otherwise it must stay valid for every draw that reads the
    /// attribute.
    pub unsafe fn vertex_attrib_pointer(
        &self,
        index: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        normalized: bool,
        stride: GLsizei,
        pointer: *const c_void,
    ) -> Result<()> {
        let index = index.into_index("glVertexAttribPointer")?;
        self.raw.VertexAttribPointer(
            index,
            size,
            type_.into(),
            gl_bool(normalized),
            stride,
            pointer,
        );
        Ok(())
    }

    /// # Safety
    ///
    /// See [`Gl::vertex_attrib_pointer`].
    pub unsafe fn vertex_attrib_ipointer(
        &self,
        index: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        stride: GLsizei,
        pointer: *const c_void,
    ) -> Result<()> {
        let index = index.into_index("glVertexAttribIPointer")?;
        self.raw
            .VertexAttribIPointer(index, size, type_.into(), stride, pointer);
        Ok(())
    }

    /// # Safety
    ///
    /// See [`Gl::vertex_attrib_pointer`].
    pub unsafe fn vertex_attrib_lpointer(
        &self,
        index: impl IntoIndex,
        size: GLint,
        type_: VertexAttribType,
        stride: GLsizei,
        pointer: *const c_void,
    ) -> Result<()> {
        let index = index.into_index("glVertexAttribLPointer")?;
        self.raw
            .VertexAttribLPointer(index, size, type_.into(), stride, pointer);
        Ok(())
    }

    pub fn vertex_binding_divisor(&self, bindingindex: GLuint, divisor: GLuint) {
        unsafe { self.raw.VertexBindingDivisor(bindingindex, divisor) }
    }
}
