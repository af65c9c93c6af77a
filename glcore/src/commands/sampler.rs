use crate::{sys::types::*, util::count, Gl};

/// Sampler objects.
impl Gl {
    pub fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        unsafe { self.raw.BindSampler(unit, sampler) }
    }

    pub fn bind_samplers(&self, first: GLuint, samplers: &[GLuint]) {
        unsafe { self.raw.BindSamplers(first, count(samplers), samplers.as_ptr()) }
    }

    pub fn create_samplers(&self, samplers: &mut [GLuint]) {
        unsafe { self.raw.CreateSamplers(count(samplers), samplers.as_mut_ptr()) }
    }

    pub fn delete_samplers(&self, samplers: &[GLuint]) {
        unsafe { self.raw.DeleteSamplers(count(samplers), samplers.as_ptr()) }
    }

    pub fn gen_samplers(&self, samplers: &mut [GLuint]) {
        unsafe { self.raw.GenSamplers(count(samplers), samplers.as_mut_ptr()) }
    }

    pub fn gen_sampler(&self) -> GLuint {
        let mut sampler = 0;
        self.gen_samplers(std::slice::from_mut(&mut sampler));
        sampler
    }

    /// `params` must have room for every value of `pname`; four covers
    /// `TEXTURE_BORDER_COLOR`, the largest.
    pub fn get_sampler_parameter_iiv(
        &self,
        sampler: GLuint,
        pname: GLenum,
        params: &mut [GLint; 4],
    ) {
        unsafe { self.raw.GetSamplerParameterIiv(sampler, pname, params.as_mut_ptr()) }
    }

    pub fn get_sampler_parameter_iuiv(
        &self,
        sampler: GLuint,
        pname: GLenum,
        params: &mut [GLuint; 4],
    ) {
        unsafe { self.raw.GetSamplerParameterIuiv(sampler, pname, params.as_mut_ptr()) }
    }

    pub fn get_sampler_parameterfv(
        &self,
        sampler: GLuint,
        pname: GLenum,
        params: &mut [GLfloat; 4],
    ) {
        unsafe { self.raw.GetSamplerParameterfv(sampler, pname, params.as_mut_ptr()) }
    }

    pub fn get_sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &mut [GLint; 4]) {
        unsafe { self.raw.GetSamplerParameteriv(sampler, pname, params.as_mut_ptr()) }
    }

    pub fn is_sampler(&self, sampler: GLuint) -> bool {
        unsafe { self.raw.IsSampler(sampler) != 0 }
    }

    pub fn sampler_parameter_iiv(&self, sampler: GLuint, pname: GLenum, param: &[GLint; 4]) {
        unsafe { self.raw.SamplerParameterIiv(sampler, pname, param.as_ptr()) }
    }

    pub fn sampler_parameter_iuiv(&self, sampler: GLuint, pname: GLenum, param: &[GLuint; 4]) {
        unsafe { self.raw.SamplerParameterIuiv(sampler, pname, param.as_ptr()) }
    }

    pub fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat) {
        unsafe { self.raw.SamplerParameterf(sampler, pname, param) }
    }

    pub fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, param: &[GLfloat; 4]) {
        unsafe { self.raw.SamplerParameterfv(sampler, pname, param.as_ptr()) }
    }

    pub fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint) {
        unsafe { self.raw.SamplerParameteri(sampler, pname, param) }
    }

    pub fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, param: &[GLint; 4]) {
        unsafe { self.raw.SamplerParameteriv(sampler, pname, param.as_ptr()) }
    }
}
