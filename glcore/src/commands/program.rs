use crate::{
    enums::ShaderType,
    error::Result,
    flags::ProgramStages,
    index::IntoIndex,
    sys::{self, types::*},
    util::{c_string, chars_mut, count, read_string, string_from_buffer},
    Gl,
};
use std::ffi::CString;

/// An active attribute or uniform of a linked program.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActiveVariable {
    pub name: String,
    /// Array length, `1` for non-arrays.
    pub size: GLint,
    /// Data type such as `FLOAT_VEC4`.
    pub type_: GLenum,
}

/// Programs, program pipelines and their interface queries.
impl Gl {
    pub fn active_shader_program(&self, pipeline: GLuint, program: GLuint) {
        unsafe { self.raw.ActiveShaderProgram(pipeline, program) }
    }

    pub fn bind_attrib_location(
        &self,
        program: GLuint,
        index: impl IntoIndex,
        name: &str,
    ) -> Result<()> {
        let index = index.into_index("glBindAttribLocation")?;
        let name = c_string(name)?;
        unsafe { self.raw.BindAttribLocation(program, index, name.as_ptr()) };
        Ok(())
    }

    pub fn bind_frag_data_location(
        &self,
        program: GLuint,
        color: GLuint,
        name: &str,
    ) -> Result<()> {
        let name = c_string(name)?;
        unsafe { self.raw.BindFragDataLocation(program, color, name.as_ptr()) };
        Ok(())
    }

    pub fn bind_frag_data_location_indexed(
        &self,
        program: GLuint,
        color_number: GLuint,
        index: GLuint,
        name: &str,
    ) -> Result<()> {
        let name = c_string(name)?;
        unsafe {
            self.raw
                .BindFragDataLocationIndexed(program, color_number, index, name.as_ptr())
        };
        Ok(())
    }

    pub fn bind_program_pipeline(&self, pipeline: GLuint) {
        unsafe { self.raw.BindProgramPipeline(pipeline) }
    }

    pub fn create_program(&self) -> GLuint {
        unsafe { self.raw.CreateProgram() }
    }

    pub fn create_program_pipelines(&self, pipelines: &mut [GLuint]) {
        unsafe {
            self.raw
                .CreateProgramPipelines(count(pipelines), pipelines.as_mut_ptr())
        }
    }

    /// Compiles and links a separable single-stage program from `sources`.
    pub fn create_shader_programv(&self, type_: ShaderType, sources: &[&str]) -> Result<GLuint> {
        let sources = sources
            .iter()
            .map(|source| c_string(source))
            .collect::<Result<Vec<CString>>>()?;
        let pointers: Vec<*const GLchar> = sources.iter().map(|source| source.as_ptr()).collect();

        Ok(unsafe {
            self.raw
                .CreateShaderProgramv(type_.into(), count(&pointers), pointers.as_ptr())
        })
    }

    pub fn delete_program(&self, program: GLuint) {
        unsafe { self.raw.DeleteProgram(program) }
    }

    pub fn delete_program_pipelines(&self, pipelines: &[GLuint]) {
        unsafe {
            self.raw
                .DeleteProgramPipelines(count(pipelines), pipelines.as_ptr())
        }
    }

    pub fn gen_program_pipelines(&self, pipelines: &mut [GLuint]) {
        unsafe {
            self.raw
                .GenProgramPipelines(count(pipelines), pipelines.as_mut_ptr())
        }
    }

    /// # Safety
    ///
    /// `params` must hold every value `pname` produces, e.g. one index per
    /// active atomic counter for
    /// `ACTIVE_ATOMIC_COUNTER_BUFFER_ACTIVE_ATOMIC_COUNTER_INDICES`.
    pub unsafe fn get_active_atomic_counter_bufferiv(
        &self,
        program: GLuint,
        buffer_index: GLuint,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        self.raw
            .GetActiveAtomicCounterBufferiv(program, buffer_index, pname, params.as_mut_ptr())
    }

    /// Writes the attribute name into `name` and returns
    /// `(length, size, type)`.
    pub fn get_active_attrib(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8]) -> (GLsizei, GLint, GLenum,
    ) {
        let (mut length, mut size, mut type_) = (0, 0, 0);
        unsafe {
            self.raw.GetActiveAttrib(
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

    pub fn active_attrib(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity = self.get_programiv(program, sys::ACTIVE_ATTRIBUTE_MAX_LENGTH);
        let mut name = vec![0; usize::try_from(capacity).unwrap_or(0).max(1)];
        let (length, size, type_) = self.get_active_attrib(program, index, &mut name);
        ActiveVariable {
            name: string_from_buffer(&name, length),
            size,
            type_,
        }
    }

    pub fn get_active_subroutine_name(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetActiveSubroutineName(
                program,
                shadertype.into(),
                index,
                count(name),
                &mut length,
                chars_mut(name),
            )
        };
        length
    }

    pub fn get_active_subroutine_uniform_name(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetActiveSubroutineUniformName(
                program,
                shadertype.into(),
                index,
                count(name),
                &mut length,
                chars_mut(name),
            )
        };
        length
    }

    /// # Safety
    ///
    /// `values` must hold every value `pname` produces, e.g. all compatible
    /// subroutines for `COMPATIBLE_SUBROUTINES`.
    pub unsafe fn get_active_subroutine_uniformiv(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        index: GLuint,
        pname: GLenum,
        values: &mut [GLint],
    ) {
        self.raw.GetActiveSubroutineUniformiv(
            program,
            shadertype.into(),
            index,
            pname,
            values.as_mut_ptr(),
        )
    }

    pub fn get_active_uniform(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8]) -> (GLsizei, GLint, GLenum,
    ) {
        let (mut length, mut size, mut type_) = (0, 0, 0);
        unsafe {
            self.raw.GetActiveUniform(
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

    pub fn active_uniform(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity = self.get_programiv(program, sys::ACTIVE_UNIFORM_MAX_LENGTH);
        let mut name = vec![0; usize::try_from(capacity).unwrap_or(0).max(1)];
        let (length, size, type_) = self.get_active_uniform(program, index, &mut name);
        ActiveVariable {
            name: string_from_buffer(&name, length),
            size,
            type_,
        }
    }

    pub fn get_active_uniform_block_name(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetActiveUniformBlockName(
                program,
                uniform_block_index,
                count(name),
                &mut length,
                chars_mut(name),
            )
        };
        length
    }

    /// # Safety
    ///
    /// `params` must hold every value `pname` produces, e.g. one index per
    /// active uniform for `UNIFORM_BLOCK_ACTIVE_UNIFORM_INDICES`.
    pub unsafe fn get_active_uniform_blockiv(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        self.raw
            .GetActiveUniformBlockiv(program, uniform_block_index, pname, params.as_mut_ptr())
    }

    pub fn get_active_uniform_name(
        &self,
        program: GLuint,
        uniform_index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetActiveUniformName(
                program,
                uniform_index,
                count(name),
                &mut length,
                chars_mut(name),
            )
        };
        length
    }

    /// Queries `pname` for every uniform in `uniform_indices`, one value
    /// each. Only as many uniforms as `params` has room for are queried.
    pub fn get_active_uniformsiv(
        &self,
        program: GLuint,
        uniform_indices: &[GLuint],
        pname: GLenum,
        params: &mut [GLint],
    ) {
        let len = uniform_indices.len().min(params.len());
        unsafe {
            self.raw.GetActiveUniformsiv(
                program,
                count(&uniform_indices[..len]),
                uniform_indices.as_ptr(),
                pname,
                params.as_mut_ptr(),
            )
        }
    }

    /// Returns the number of names written to `shaders`.
    pub fn get_attached_shaders(&self, program: GLuint, shaders: &mut [GLuint]) -> GLsizei {
        let mut written = 0;
        unsafe {
            self.raw.GetAttachedShaders(
                program,
                count(shaders),
                &mut written,
                shaders.as_mut_ptr(),
            )
        };
        written
    }

    pub fn get_attrib_location(&self, program: GLuint, name: &str) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe { self.raw.GetAttribLocation(program, name.as_ptr()) })
    }

    pub fn get_frag_data_index(&self, program: GLuint, name: &str) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe { self.raw.GetFragDataIndex(program, name.as_ptr()) })
    }

    pub fn get_frag_data_location(&self, program: GLuint, name: &str) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe { self.raw.GetFragDataLocation(program, name.as_ptr()) })
    }

    /// Writes the program binary into `binary` and returns
    /// `(length, binary_format)`.
    pub fn get_program_binary(&self, program: GLuint, binary: &mut [u8]) -> (GLsizei, GLenum) {
        let (mut length, mut format) = (0, 0);
        unsafe {
            self.raw.GetProgramBinary(
                program,
                count(binary),
                &mut length,
                &mut format,
                binary.as_mut_ptr().cast(),
            )
        };
        (length, format)
    }

    /// The binary of a linked program and its format, ready for
    /// [`Gl::program_binary`].
    pub fn program_binary_bytes(&self, program: GLuint) -> (Vec<u8>, GLenum) {
        let capacity = self.get_programiv(program, sys::PROGRAM_BINARY_LENGTH);
        let mut binary = vec![0; usize::try_from(capacity).unwrap_or(0)];
        let (length, format) = self.get_program_binary(program, &mut binary);
        binary.truncate(usize::try_from(length).unwrap_or(0));
        (binary, format)
    }

    pub fn get_program_info_log(&self, program: GLuint, buffer: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw
                .GetProgramInfoLog(program, count(buffer), &mut length, chars_mut(buffer))
        };
        length
    }

    pub fn program_info_log(&self, program: GLuint) -> String {
        let capacity = self.get_programiv(program, sys::INFO_LOG_LENGTH);
        read_string(capacity, |buffer| self.get_program_info_log(program, buffer))
    }

    pub fn get_program_interfaceiv(
        &self,
        program: GLuint,
        program_interface: GLenum,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetProgramInterfaceiv(program, program_interface, pname, &mut value)
        };
        value
    }

    pub fn get_program_pipeline_info_log(&self, pipeline: GLuint, buffer: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetProgramPipelineInfoLog(
                pipeline,
                count(buffer),
                &mut length,
                chars_mut(buffer),
            )
        };
        length
    }

    pub fn program_pipeline_info_log(&self, pipeline: GLuint) -> String {
        let capacity = self.get_program_pipelineiv(pipeline, sys::INFO_LOG_LENGTH);
        read_string(capacity, |buffer| {
            self.get_program_pipeline_info_log(pipeline, buffer)
        })
    }

    pub fn get_program_pipelineiv(&self, pipeline: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetProgramPipelineiv(pipeline, pname, &mut value) };
        value
    }

    pub fn get_program_resource_index(
        &self,
        program: GLuint,
        program_interface: GLenum,
        name: &str,
    ) -> Result<GLuint> {
        let name = c_string(name)?;
        Ok(unsafe {
            self.raw
                .GetProgramResourceIndex(program, program_interface, name.as_ptr())
        })
    }

    pub fn get_program_resource_location(
        &self,
        program: GLuint,
        program_interface: GLenum,
        name: &str,
    ) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe {
            self.raw
                .GetProgramResourceLocation(program, program_interface, name.as_ptr())
        })
    }

    pub fn get_program_resource_location_index(
        &self,
        program: GLuint,
        program_interface: GLenum,
        name: &str,
    ) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe {
            self.raw
                .GetProgramResourceLocationIndex(program, program_interface, name.as_ptr())
        })
    }

    pub fn get_program_resource_name(
        &self,
        program: GLuint,
        program_interface: GLenum,
        index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetProgramResourceName(
                program,
                program_interface,
                index,
                count(name),
                &mut length,
                chars_mut(name),
            )
        };
        length
    }

    /// Queries `props` of one resource. Returns the number of values written
    /// to `params`, which bounds the write.
    pub fn get_program_resourceiv(
        &self,
        program: GLuint,
        program_interface: GLenum,
        index: GLuint,
        props: &[GLenum],
        params: &mut [GLint],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.raw.GetProgramResourceiv(
                program,
                program_interface,
                index,
                count(props),
                props.as_ptr(),
                count(params),
                &mut length,
                params.as_mut_ptr(),
            )
        };
        length
    }

    pub fn get_program_stageiv(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        pname: GLenum,
    ) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetProgramStageiv(program, shadertype.into(), pname, &mut value)
        };
        value
    }

    /// Returns the first value of `pname`. Use
    /// [`Gl::compute_work_group_size`] for the one three-valued parameter.
    pub fn get_programiv(&self, program: GLuint, pname: GLenum) -> GLint {
        let mut values = [0; 3];
        unsafe { self.raw.GetProgramiv(program, pname, values.as_mut_ptr()) };
        values[0]
    }

    pub fn compute_work_group_size(&self, program: GLuint) -> [GLint; 3] {
        let mut values = [0; 3];
        unsafe {
            self.raw
                .GetProgramiv(program, sys::COMPUTE_WORK_GROUP_SIZE, values.as_mut_ptr())
        };
        values
    }

    pub fn get_subroutine_index(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        name: &str,
    ) -> Result<GLuint> {
        let name = c_string(name)?;
        Ok(unsafe {
            self.raw
                .GetSubroutineIndex(program, shadertype.into(), name.as_ptr())
        })
    }

    pub fn get_subroutine_uniform_location(
        &self,
        program: GLuint,
        shadertype: ShaderType,
        name: &str,
    ) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe {
            self.raw
                .GetSubroutineUniformLocation(program, shadertype.into(), name.as_ptr())
        })
    }

    pub fn get_uniform_block_index(
        &self,
        program: GLuint,
        uniform_block_name: &str,
    ) -> Result<GLuint> {
        let name = c_string(uniform_block_name)?;
        Ok(unsafe { self.raw.GetUniformBlockIndex(program, name.as_ptr()) })
    }

    /// Looks up the index of each name in `uniform_names`. Only as many
    /// names as `uniform_indices` has room for are looked up.
    pub fn get_uniform_indices(
        &self,
        program: GLuint,
        uniform_names: &[&str],
        uniform_indices: &mut [GLuint],
    ) -> Result<()> {
        let len = uniform_names.len().min(uniform_indices.len());
        let names = uniform_names[..len]
            .iter()
            .map(|name| c_string(name))
            .collect::<Result<Vec<CString>>>()?;
        let pointers: Vec<*const GLchar> = names.iter().map(|name| name.as_ptr()).collect();

        unsafe {
            self.raw.GetUniformIndices(
                program,
                count(&pointers),
                pointers.as_ptr(),
                uniform_indices.as_mut_ptr(),
            )
        };
        Ok(())
    }

    pub fn get_uniform_location(&self, program: GLuint, name: &str) -> Result<GLint> {
        let name = c_string(name)?;
        Ok(unsafe { self.raw.GetUniformLocation(program, name.as_ptr()) })
    }

    pub fn get_uniform_subroutineuiv(&self, shadertype: ShaderType, location: GLint) -> GLuint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetUniformSubroutineuiv(shadertype.into(), location, &mut value)
        };
        value
    }

    pub fn is_program(&self, program: GLuint) -> bool {
        unsafe { self.raw.IsProgram(program) != 0 }
    }

    pub fn is_program_pipeline(&self, pipeline: GLuint) -> bool {
        unsafe { self.raw.IsProgramPipeline(pipeline) != 0 }
    }

    pub fn link_program(&self, program: GLuint) {
        unsafe { self.raw.LinkProgram(program) }
    }

    pub fn program_binary(&self, program: GLuint, binary_format: GLenum, binary: &[u8]) {
        unsafe {
            self.raw.ProgramBinary(
                program,
                binary_format,
                binary.as_ptr().cast(),
                count(binary),
            )
        }
    }

    pub fn program_parameteri(&self, program: GLuint, pname: GLenum, value: GLint) {
        unsafe { self.raw.ProgramParameteri(program, pname, value) }
    }

    pub fn shader_storage_block_binding(
        &self,
        program: GLuint,
        storage_block_index: GLuint,
        storage_block_binding: GLuint,
    ) {
        unsafe {
            self.raw.ShaderStorageBlockBinding(
                program,
                storage_block_index,
                storage_block_binding,
            )
        }
    }

    pub fn uniform_block_binding(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        uniform_block_binding: GLuint,
    ) {
        unsafe {
            self.raw
                .UniformBlockBinding(program, uniform_block_index, uniform_block_binding)
        }
    }

    pub fn uniform_subroutinesuiv(&self, shadertype: ShaderType, indices: &[GLuint]) {
        unsafe {
            self.raw
                .UniformSubroutinesuiv(shadertype.into(), count(indices), indices.as_ptr())
        }
    }

    pub fn use_program(&self, program: GLuint) {
        unsafe { self.raw.UseProgram(program) }
    }

    pub fn use_program_stages(&self, pipeline: GLuint, stages: ProgramStages, program: GLuint) {
        unsafe { self.raw.UseProgramStages(pipeline, stages.bits(), program) }
    }

    pub fn validate_program(&self, program: GLuint) {
        unsafe { self.raw.ValidateProgram(program) }
    }

    pub fn validate_program_pipeline(&self, pipeline: GLuint) {
        unsafe { self.raw.ValidateProgramPipeline(pipeline) }
    }
}
