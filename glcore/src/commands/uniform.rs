//! Uniform uploads and readbacks.
//!
//! Array setters take a flat slice. The element count passed to the driver
//! is the number of whole vectors or matrices in the slice; a trailing
//! partial element is not uploaded.

use crate::{
    sys::types::*,
    util::gl_bool,
    Gl,
};
use std::mem;

fn elements<T>(value: &[T], width: usize) -> GLsizei {
    GLsizei::try_from(value.len() / width).unwrap_or(GLsizei::MAX)
}

fn buf_size<T>(params: &[T]) -> GLsizei {
    GLsizei::try_from(mem::size_of_val(params)).unwrap_or(GLsizei::MAX)
}

macro_rules! uniform_values {
    ($(
        $method:ident / $program_method:ident
            => $raw:ident / $program_raw:ident($($arg:ident: $ty:ty),+);
    )*) => {
        impl Gl {
            $(
                pub fn $method(&self, location: GLint, $($arg: $ty),+) {
                    unsafe { self.raw.$raw(location, $($arg),+) }
                }

                pub fn $program_method(&self, program: GLuint, location: GLint, $($arg: $ty),+) {
                    unsafe { self.raw.$program_raw(program, location, $($arg),+) }
                }
            )*
        }
    };
}

macro_rules! uniform_arrays {
    ($(
        $method:ident / $program_method:ident
            => $raw:ident / $program_raw:ident: [$ty:ty; $width:expr];
    )*) => {
        impl Gl {
            $(
                pub fn $method(&self, location: GLint, value: &[$ty]) {
                    unsafe { self.raw.$raw(location, elements(value, $width), value.as_ptr()) }
                }

                pub fn $program_method(&self, program: GLuint, location: GLint, value: &[$ty]) {
                    unsafe {
                        self.raw.$program_raw(
                            program,
                            location,
                            elements(value, $width),
                            value.as_ptr(),
                        )
                    }
                }
            )*
        }
    };
}

macro_rules! uniform_matrices {
    ($(
        $method:ident / $program_method:ident
            => $raw:ident / $program_raw:ident: [$ty:ty; $width:expr];
    )*) => {
        impl Gl {
            $(
                pub fn $method(&self, location: GLint, transpose: bool, value: &[$ty]) {
                    unsafe {
                        self.raw.$raw(
                            location,
                            elements(value, $width),
                            gl_bool(transpose),
                            value.as_ptr(),
                        )
                    }
                }

                pub fn $program_method(
                    &self,
                    program: GLuint,
                    location: GLint,
                    transpose: bool,
                    value: &[$ty],
                ) {
                    unsafe {
                        self.raw.$program_raw(
                            program,
                            location,
                            elements(value, $width),
                            gl_bool(transpose),
                            value.as_ptr(),
                        )
                    }
                }
            )*
        }
    };
}

macro_rules! uniform_getters {
    ($($method:ident / $robust_method:ident => $raw:ident / $robust_raw:ident: $ty:ty;)*) => {
        impl Gl {
            $(
                /// # Safety
                ///
                /// `params` must have room for every component of the
                /// uniform at `location`.
                pub unsafe fn $method(&self, program: GLuint, location: GLint, params: &mut [$ty]) {
                    self.raw.$raw(program, location, params.as_mut_ptr())
                }

                /// Reads the uniform into `params`. The driver writes at most
                /// `params.len()` components.
                pub fn $robust_method(&self, program: GLuint, location: GLint, params: &mut [$ty]) {
                    unsafe {
                        self.raw
                            .$robust_raw(program, location, buf_size(params), params.as_mut_ptr())
                    }
                }
            )*
        }
    };
}

uniform_values! {
    uniform_1f / program_uniform_1f => Uniform1f / ProgramUniform1f(v0: GLfloat);
    uniform_2f / program_uniform_2f => Uniform2f / ProgramUniform2f(v0: GLfloat, v1: GLfloat);
    uniform_3f / program_uniform_3f
        => Uniform3f / ProgramUniform3f(v0: GLfloat, v1: GLfloat, v2: GLfloat);
    uniform_4f / program_uniform_4f
        => Uniform4f / ProgramUniform4f(v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    uniform_1d / program_uniform_1d => Uniform1d / ProgramUniform1d(v0: GLdouble);
    uniform_2d / program_uniform_2d => Uniform2d / ProgramUniform2d(v0: GLdouble, v1: GLdouble);
    uniform_3d / program_uniform_3d
        => Uniform3d / ProgramUniform3d(v0: GLdouble, v1: GLdouble, v2: GLdouble);
    uniform_4d / program_uniform_4d
        => Uniform4d / ProgramUniform4d(v0: GLdouble, v1: GLdouble, v2: GLdouble, v3: GLdouble);
    uniform_1i / program_uniform_1i => Uniform1i / ProgramUniform1i(v0: GLint);
    uniform_2i / program_uniform_2i => Uniform2i / ProgramUniform2i(v0: GLint, v1: GLint);
    uniform_3i / program_uniform_3i
        => Uniform3i / ProgramUniform3i(v0: GLint, v1: GLint, v2: GLint);
    uniform_4i / program_uniform_4i
        => Uniform4i / ProgramUniform4i(v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    uniform_1ui / program_uniform_1ui => Uniform1ui / ProgramUniform1ui(v0: GLuint);
    uniform_2ui / program_uniform_2ui => Uniform2ui / ProgramUniform2ui(v0: GLuint, v1: GLuint);
    uniform_3ui / program_uniform_3ui
        => Uniform3ui / ProgramUniform3ui(v0: GLuint, v1: GLuint, v2: GLuint);
    uniform_4ui / program_uniform_4ui
        => Uniform4ui / ProgramUniform4ui(v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
}

uniform_arrays! {
    uniform_1fv / program_uniform_1fv => Uniform1fv / ProgramUniform1fv: [GLfloat; 1];
    uniform_2fv / program_uniform_2fv => Uniform2fv / ProgramUniform2fv: [GLfloat; 2];
    uniform_3fv / program_uniform_3fv => Uniform3fv / ProgramUniform3fv: [GLfloat; 3];
    uniform_4fv / program_uniform_4fv => Uniform4fv / ProgramUniform4fv: [GLfloat; 4];
    uniform_1dv / program_uniform_1dv => Uniform1dv / ProgramUniform1dv: [GLdouble; 1];
    uniform_2dv / program_uniform_2dv => Uniform2dv / ProgramUniform2dv: [GLdouble; 2];
    uniform_3dv / program_uniform_3dv => Uniform3dv / ProgramUniform3dv: [GLdouble; 3];
    uniform_4dv / program_uniform_4dv => Uniform4dv / ProgramUniform4dv: [GLdouble; 4];
    uniform_1iv / program_uniform_1iv => Uniform1iv / ProgramUniform1iv: [GLint; 1];
    uniform_2iv / program_uniform_2iv => Uniform2iv / ProgramUniform2iv: [GLint; 2];
    uniform_3iv / program_uniform_3iv => Uniform3iv / ProgramUniform3iv: [GLint; 3];
    uniform_4iv / program_uniform_4iv => Uniform4iv / ProgramUniform4iv: [GLint; 4];
    uniform_1uiv / program_uniform_1uiv => Uniform1uiv / ProgramUniform1uiv: [GLuint; 1];
    uniform_2uiv / program_uniform_2uiv => Uniform2uiv / ProgramUniform2uiv: [GLuint; 2];
    uniform_3uiv / program_uniform_3uiv => Uniform3uiv / ProgramUniform3uiv: [GLuint; 3];
    uniform_4uiv / program_uniform_4uiv => Uniform4uiv / ProgramUniform4uiv: [GLuint; 4];
}

uniform_matrices! {
    uniform_matrix_2fv / program_uniform_matrix_2fv
        => UniformMatrix2fv / ProgramUniformMatrix2fv: [GLfloat; 4];
    uniform_matrix_3fv / program_uniform_matrix_3fv
        => UniformMatrix3fv / ProgramUniformMatrix3fv: [GLfloat; 9];
    uniform_matrix_4fv / program_uniform_matrix_4fv
        => UniformMatrix4fv / ProgramUniformMatrix4fv: [GLfloat; 16];
    uniform_matrix_2x3fv / program_uniform_matrix_2x3fv
        => UniformMatrix2x3fv / ProgramUniformMatrix2x3fv: [GLfloat; 6];
    uniform_matrix_3x2fv / program_uniform_matrix_3x2fv
        => UniformMatrix3x2fv / ProgramUniformMatrix3x2fv: [GLfloat; 6];
    uniform_matrix_2x4fv / program_uniform_matrix_2x4fv
        => UniformMatrix2x4fv / ProgramUniformMatrix2x4fv: [GLfloat; 8];
    uniform_matrix_4x2fv / program_uniform_matrix_4x2fv
        => UniformMatrix4x2fv / ProgramUniformMatrix4x2fv: [GLfloat; 8];
    uniform_matrix_3x4fv / program_uniform_matrix_3x4fv
        => UniformMatrix3x4fv / ProgramUniformMatrix3x4fv: [GLfloat; 12];
    uniform_matrix_4x3fv / program_uniform_matrix_4x3fv
        => UniformMatrix4x3fv / ProgramUniformMatrix4x3fv: [GLfloat; 12];
    uniform_matrix_2dv / program_uniform_matrix_2dv
        => UniformMatrix2dv / ProgramUniformMatrix2dv: [GLdouble; 4];
    uniform_matrix_3dv / program_uniform_matrix_3dv
        => UniformMatrix3dv / ProgramUniformMatrix3dv: [GLdouble; 9];
    uniform_matrix_4dv / program_uniform_matrix_4dv
        => UniformMatrix4dv / ProgramUniformMatrix4dv: [GLdouble; 16];
    uniform_matrix_2x3dv / program_uniform_matrix_2x3dv
        => UniformMatrix2x3dv / ProgramUniformMatrix2x3dv: [GLdouble; 6];
    uniform_matrix_3x2dv / program_uniform_matrix_3x2dv
        => UniformMatrix3x2dv / ProgramUniformMatrix3x2dv: [GLdouble; 6];
    uniform_matrix_2x4dv / program_uniform_matrix_2x4dv
        => UniformMatrix2x4dv / ProgramUniformMatrix2x4dv: [GLdouble; 8];
    uniform_matrix_4x2dv / program_uniform_matrix_4x2dv
        => UniformMatrix4x2dv / ProgramUniformMatrix4x2dv: [GLdouble; 8];
    uniform_matrix_3x4dv / program_uniform_matrix_3x4dv
        => UniformMatrix3x4dv / ProgramUniformMatrix3x4dv: [GLdouble; 12];
    uniform_matrix_4x3dv / program_uniform_matrix_4x3dv
        => UniformMatrix4x3dv / ProgramUniformMatrix4x3dv: [GLdouble; 12];
}

uniform_getters! {
    get_uniformfv / getn_uniformfv => GetUniformfv / GetnUniformfv: GLfloat;
    get_uniformdv / getn_uniformdv => GetUniformdv / GetnUniformdv: GLdouble;
    get_uniformiv / getn_uniformiv => GetUniformiv / GetnUniformiv: GLint;
    get_uniformuiv / getn_uniformuiv => GetUniformuiv / GetnUniformuiv: GLuint;
}
