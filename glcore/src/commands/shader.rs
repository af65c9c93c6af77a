use crate::{
    enums::ShaderType,
    error::Result,
    sys::{self, types::*},
    util::{c_string, chars_mut, count, read_string},
    Gl,
};

impl Gl {
    pub fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.raw.AttachShader(program, shader) }
    }

    pub fn compile_shader(&self, shader: GLuint) {
        unsafe { self.raw.CompileShader(shader) }
    }

    pub fn create_shader(&self, type_: ShaderType) -> GLuint {
        unsafe { self.raw.CreateShader(type_.into()) }
    }

    pub fn delete_shader(&self, shader: GLuint) {
        unsafe { self.raw.DeleteShader(shader) }
    }

    pub fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.raw.DetachShader(program, shader) }
    }

    /// Copies the info log into `buffer` and returns the number of bytes
    /// written, excluding the terminating nul.
    pub fn get_shader_info_log(&self, shader: GLuint, buffer: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw
                .GetShaderInfoLog(shader, count(buffer), &mut length, chars_mut(buffer))
        };
        length
    }

    pub fn shader_info_log(&self, shader: GLuint) -> String {
        let capacity = self.get_shaderiv(shader, sys::INFO_LOG_LENGTH);
        read_string(capacity, |buffer| self.get_shader_info_log(shader, buffer))
    }

    /// Returns the `(range, precision)` of a precision qualifier.
    pub fn get_shader_precision_format(
        &self,
        shadertype: ShaderType,
        precisiontype: GLenum) -> ([GLint; 2], GLint,
    ) {
        let mut range = [0; 2];
        let mut precision = 0;
        unsafe {
            self.raw.GetShaderPrecisionFormat(
                shadertype.into(),
                precisiontype,
                range.as_mut_ptr(),
                &mut precision,
            )
        };
        (range, precision)
    }

    pub fn get_shader_source(&self, shader: GLuint, buffer: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw
                .GetShaderSource(shader, count(buffer), &mut length, chars_mut(buffer))
        };
        length
    }

    pub fn shader_source_string(&self, shader: GLuint) -> String {
        let capacity = self.get_shaderiv(shader, sys::SHADER_SOURCE_LENGTH);
        read_string(capacity, |buffer| self.get_shader_source(shader, buffer))
    }

    /// Every shader parameter is a single value.
    pub fn get_shaderiv(&self, shader: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetShaderiv(shader, pname, &mut value) };
        value
    }

    pub fn is_shader(&self, shader: GLuint) -> bool {
        unsafe { self.raw.IsShader(shader) != 0 }
    }

    pub fn release_shader_compiler(&self) {
        unsafe { self.raw.ReleaseShaderCompiler() }
    }

    pub fn shader_binary(&self, shaders: &[GLuint], binaryformat: GLenum, binary: &[u8]) {
        unsafe {
            self.raw.ShaderBinary(
                count(shaders),
                shaders.as_ptr(),
                binaryformat,
                binary.as_ptr().cast(),
                count(binary),
            )
        }
    }

    /// Replaces the source of `shader` with the concatenation of `sources`.
    ///
    /// Lengths are passed explicitly, so the strings need no terminator.
    pub fn shader_source(&self, shader: GLuint, sources: &[&str]) {
        let pointers: Vec<*const GLchar> = sources
            .iter()
            .map(|source| source.as_ptr() as *const GLchar)
            .collect();
        let lengths: Vec<GLint> = sources
            .iter()
            .map(|source| GLint::try_from(source.len()).unwrap_or(GLint::MAX))
            .collect();

        unsafe {
            self.raw.ShaderSource(
                shader,
                count(sources),
                pointers.as_ptr(),
                lengths.as_ptr(),
            )
        }
    }

    /// Specializes a SPIR-V shader. Constants are taken pairwise from
    /// `constant_index` and `constant_value`.
    pub fn specialize_shader(
        &self,
        shader: GLuint,
        entry_point: &str,
        constant_index: &[GLuint],
        constant_value: &[GLuint],
    ) -> Result<()> {
        let entry_point = c_string(entry_point)?;
        let len = constant_index.len().min(constant_value.len());
        unsafe {
            self.raw.SpecializeShader(
                shader,
                entry_point.as_ptr(),
                GLuint::try_from(len).unwrap_or(GLuint::MAX),
                constant_index.as_ptr(),
                constant_value.as_ptr(),
            )
        };
        Ok(())
    }
}
