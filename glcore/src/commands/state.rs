use crate::{
    enums::{
        BlendEquation, BlendFactor, Capability, CompareFunc, ErrorCode, Face, FrontFaceDirection,
        LogicOp, PolygonMode, StencilOp, StringName,
    },
    error::{Error, Result},
    flags::MemoryBarrier,
    sys::{self, types::*},
    util::{count, gl_bool},
    Gl,
};
use std::{
    ffi::{c_void, CStr},
    ptr,
};

/// Largest number of values any fixed-size `glGet*` parameter produces.
const SCRATCH: usize = 16;

/// The parameter holding the length of the format list `pname`.
fn format_count(pname: GLenum) -> Option<GLenum> {
    match pname {
        sys::COMPRESSED_TEXTURE_FORMATS => Some(sys::NUM_COMPRESSED_TEXTURE_FORMATS),
        sys::PROGRAM_BINARY_FORMATS => Some(sys::NUM_PROGRAM_BINARY_FORMATS),
        sys::SHADER_BINARY_FORMATS => Some(sys::NUM_SHADER_BINARY_FORMATS),
        _ => None,
    }
}

fn driver_string(string: *const GLubyte) -> Option<String> {
    match string.is_null() {
        true => None,
        false => Some(
            unsafe { CStr::from_ptr(string.cast()) }
                .to_string_lossy()
                .into_owned(),
        ),
    }
}

/// Fixed-function state, capabilities and context queries.
impl Gl {
    pub fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.raw.BlendColor(red, green, blue, alpha) }
    }

    pub fn blend_equation(&self, mode: BlendEquation) {
        unsafe { self.raw.BlendEquation(mode.into()) }
    }

    pub fn blend_equation_separate(&self, mode_rgb: BlendEquation, mode_alpha: BlendEquation) {
        unsafe { self.raw.BlendEquationSeparate(mode_rgb.into(), mode_alpha.into()) }
    }

    pub fn blend_equation_separatei(
        &self,
        buf: GLuint,
        mode_rgb: BlendEquation,
        mode_alpha: BlendEquation,
    ) {
        unsafe {
            self.raw
                .BlendEquationSeparatei(buf, mode_rgb.into(), mode_alpha.into())
        }
    }

    pub fn blend_equationi(&self, buf: GLuint, mode: BlendEquation) {
        unsafe { self.raw.BlendEquationi(buf, mode.into()) }
    }

    pub fn blend_func(&self, sfactor: BlendFactor, dfactor: BlendFactor) {
        unsafe { self.raw.BlendFunc(sfactor.into(), dfactor.into()) }
    }

    pub fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        unsafe {
            self.raw.BlendFuncSeparate(
                src_rgb.into(),
                dst_rgb.into(),
                src_alpha.into(),
                dst_alpha.into(),
            )
        }
    }

    pub fn blend_func_separatei(
        &self,
        buf: GLuint,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        unsafe {
            self.raw.BlendFuncSeparatei(
                buf,
                src_rgb.into(),
                dst_rgb.into(),
                src_alpha.into(),
                dst_alpha.into(),
            )
        }
    }

    pub fn blend_funci(&self, buf: GLuint, src: BlendFactor, dst: BlendFactor) {
        unsafe { self.raw.BlendFunci(buf, src.into(), dst.into()) }
    }

    pub fn clamp_color(&self, target: GLenum, clamp: GLenum) {
        unsafe { self.raw.ClampColor(target, clamp) }
    }

    pub fn clip_control(&self, origin: GLenum, depth: GLenum) {
        unsafe { self.raw.ClipControl(origin, depth) }
    }

    pub fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe {
            self.raw.ColorMask(
                gl_bool(red),
                gl_bool(green),
                gl_bool(blue),
                gl_bool(alpha),
            )
        }
    }

    pub fn color_maski(&self, index: GLuint, r: bool, g: bool, b: bool, a: bool) {
        unsafe {
            self.raw
                .ColorMaski(index, gl_bool(r), gl_bool(g), gl_bool(b), gl_bool(a))
        }
    }

    pub fn cull_face(&self, mode: Face) {
        unsafe { self.raw.CullFace(mode.into()) }
    }

    pub fn depth_func(&self, func: CompareFunc) {
        unsafe { self.raw.DepthFunc(func.into()) }
    }

    pub fn depth_mask(&self, flag: bool) {
        unsafe { self.raw.DepthMask(gl_bool(flag)) }
    }

    pub fn depth_range(&self, n: GLdouble, f: GLdouble) {
        unsafe { self.raw.DepthRange(n, f) }
    }

    /// Sets `[near, far]` for consecutive viewports starting at `first`.
    pub fn depth_range_arrayv(&self, first: GLuint, v: &[[GLdouble; 2]]) {
        unsafe { self.raw.DepthRangeArrayv(first, count(v), v.as_ptr().cast()) }
    }

    pub fn depth_range_indexed(&self, index: GLuint, n: GLdouble, f: GLdouble) {
        unsafe { self.raw.DepthRangeIndexed(index, n, f) }
    }

    pub fn depth_rangef(&self, n: GLfloat, f: GLfloat) {
        unsafe { self.raw.DepthRangef(n, f) }
    }

    pub fn disable(&self, cap: Capability) {
        unsafe { self.raw.Disable(cap.into()) }
    }

    pub fn disablei(&self, target: Capability, index: GLuint) {
        unsafe { self.raw.Disablei(target.into(), index) }
    }

    pub fn enable(&self, cap: Capability) {
        unsafe { self.raw.Enable(cap.into()) }
    }

    pub fn enablei(&self, target: Capability, index: GLuint) {
        unsafe { self.raw.Enablei(target.into(), index) }
    }

    pub fn finish(&self) {
        unsafe { self.raw.Finish() }
    }

    pub fn flush(&self) {
        unsafe { self.raw.Flush() }
    }

    pub fn front_face(&self, mode: FrontFaceDirection) {
        unsafe { self.raw.FrontFace(mode.into()) }
    }

    /// # Safety
    ///
    /// `data` must have room for every value `target` produces.
    pub unsafe fn get_booleani_v(&self, target: GLenum, index: GLuint, data: &mut [GLboolean]) {
        self.raw.GetBooleani_v(target, index, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `pname` produces.
    pub unsafe fn get_booleanv(&self, pname: GLenum, data: &mut [GLboolean]) {
        self.raw.GetBooleanv(pname, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `target` produces.
    pub unsafe fn get_doublei_v(&self, target: GLenum, index: GLuint, data: &mut [GLdouble]) {
        self.raw.GetDoublei_v(target, index, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `pname` produces.
    pub unsafe fn get_doublev(&self, pname: GLenum, data: &mut [GLdouble]) {
        self.raw.GetDoublev(pname, data.as_mut_ptr())
    }

    /// The raw error flag. See [`Gl::check_error`] for the typed form.
    pub fn get_error(&self) -> GLenum {
        unsafe { self.raw.GetError() }
    }

    /// Pops one error flag and turns it into a `Result`.
    pub fn check_error(&self) -> Result<()> {
        match ErrorCode::try_from(self.get_error())? {
            ErrorCode::NoError => Ok(()),
            code => Err(Error::Gl(code)),
        }
    }

    /// # Safety
    ///
    /// `data` must have room for every value `target` produces.
    pub unsafe fn get_floati_v(&self, target: GLenum, index: GLuint, data: &mut [GLfloat]) {
        self.raw.GetFloati_v(target, index, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `pname` produces.
    pub unsafe fn get_floatv(&self, pname: GLenum, data: &mut [GLfloat]) {
        self.raw.GetFloatv(pname, data.as_mut_ptr())
    }

    pub fn get_graphics_reset_status(&self) -> GLenum {
        unsafe { self.raw.GetGraphicsResetStatus() }
    }

    /// # Safety
    ///
    /// `data` must have room for every value `target` produces.
    pub unsafe fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]) {
        self.raw.GetInteger64i_v(target, index, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `pname` produces.
    pub unsafe fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]) {
        self.raw.GetInteger64v(pname, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `target` produces.
    pub unsafe fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]) {
        self.raw.GetIntegeri_v(target, index, data.as_mut_ptr())
    }

    /// # Safety
    ///
    /// `data` must have room for every value `pname` produces.
    pub unsafe fn get_integerv(&self, pname: GLenum, data: &mut [GLint]) {
        self.raw.GetIntegerv(pname, data.as_mut_ptr())
    }

    /// Room needed for every value of `pname`. Format lists are as long as
    /// their `NUM_*` counterpart says.
    fn scratch_len(&self, pname: GLenum) -> usize {
        let Some(count) = format_count(pname) else {
            return SCRATCH;
        };
        usize::try_from(self.get_integer(count)).unwrap_or(0).max(SCRATCH)
    }

    /// The first value of `pname`.
    pub fn get_integer(&self, pname: GLenum) -> GLint {
        let mut data = vec![0; self.scratch_len(pname)];
        unsafe { self.get_integerv(pname, &mut data) };
        data[0]
    }

    /// The first value of the indexed parameter `target`.
    pub fn get_integer_indexed(&self, target: GLenum, index: GLuint) -> GLint {
        let mut data = vec![0; self.scratch_len(target)];
        unsafe { self.get_integeri_v(target, index, &mut data) };
        data[0]
    }

    pub fn get_integer64(&self, pname: GLenum) -> GLint64 {
        let mut data = vec![0; self.scratch_len(pname)];
        unsafe { self.get_integer64v(pname, &mut data) };
        data[0]
    }

    pub fn get_float(&self, pname: GLenum) -> GLfloat {
        let mut data = vec![0.0; self.scratch_len(pname)];
        unsafe { self.get_floatv(pname, &mut data) };
        data[0]
    }

    pub fn get_boolean(&self, pname: GLenum) -> bool {
        let mut data = vec![0; self.scratch_len(pname)];
        unsafe { self.get_booleanv(pname, &mut data) };
        data[0] != 0
    }

    /// Every format of a format list: `COMPRESSED_TEXTURE_FORMATS`,
    /// `PROGRAM_BINARY_FORMATS` or `SHADER_BINARY_FORMATS`.
    pub fn get_formats(&self, pname: GLenum) -> Vec<GLenum> {
        let Some(count) = format_count(pname) else {
            return vec![];
        };
        let count = usize::try_from(self.get_integer(count)).unwrap_or(0);
        if count == 0 {
            return vec![];
        }

        let mut data = vec![0; count];
        unsafe { self.get_integerv(pname, &mut data) };
        data.into_iter().map(|format| format as GLenum).collect()
    }

    pub fn get_internalformati64v(
        &self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [GLint64],
    ) {
        unsafe {
            self.raw.GetInternalformati64v(
                target,
                internalformat,
                pname,
                count(params),
                params.as_mut_ptr(),
            )
        }
    }

    pub fn get_internalformativ(
        &self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            self.raw.GetInternalformativ(
                target,
                internalformat,
                pname,
                count(params),
                params.as_mut_ptr(),
            )
        }
    }

    /// Returns the `[x, y]` location of sample `index`.
    pub fn get_multisamplefv(&self, pname: GLenum, index: GLuint) -> [GLfloat; 2] {
        let mut val = [0.0; 2];
        unsafe { self.raw.GetMultisamplefv(pname, index, val.as_mut_ptr()) };
        val
    }

    pub fn get_pointerv(&self, pname: GLenum) -> *mut c_void {
        let mut pointer = ptr::null_mut();
        unsafe { self.raw.GetPointerv(pname, &mut pointer) };
        pointer
    }

    /// Returns `None` when the driver returns a null string, which happens
    /// for unsupported names or when no context is current.
    pub fn get_string(&self, name: StringName) -> Option<String> {
        driver_string(unsafe { self.raw.GetString(name.into()) })
    }

    pub fn get_stringi(&self, name: StringName, index: GLuint) -> Option<String> {
        driver_string(unsafe { self.raw.GetStringi(name.into(), index) })
    }

    pub fn hint(&self, target: GLenum, mode: GLenum) {
        unsafe { self.raw.Hint(target, mode) }
    }

    pub fn is_enabled(&self, cap: Capability) -> bool {
        unsafe { self.raw.IsEnabled(cap.into()) != 0 }
    }

    pub fn is_enabledi(&self, target: Capability, index: GLuint) -> bool {
        unsafe { self.raw.IsEnabledi(target.into(), index) != 0 }
    }

    pub fn line_width(&self, width: GLfloat) {
        unsafe { self.raw.LineWidth(width) }
    }

    pub fn logic_op(&self, opcode: LogicOp) {
        unsafe { self.raw.LogicOp(opcode.into()) }
    }

    pub fn memory_barrier(&self, barriers: MemoryBarrier) {
        unsafe { self.raw.MemoryBarrier(barriers.bits()) }
    }

    pub fn memory_barrier_by_region(&self, barriers: MemoryBarrier) {
        unsafe { self.raw.MemoryBarrierByRegion(barriers.bits()) }
    }

    pub fn min_sample_shading(&self, value: GLfloat) {
        unsafe { self.raw.MinSampleShading(value) }
    }

    pub fn pixel_storef(&self, pname: GLenum, param: GLfloat) {
        unsafe { self.raw.PixelStoref(pname, param) }
    }

    pub fn pixel_storei(&self, pname: GLenum, param: GLint) {
        unsafe { self.raw.PixelStorei(pname, param) }
    }

    pub fn point_parameterf(&self, pname: GLenum, param: GLfloat) {
        unsafe { self.raw.PointParameterf(pname, param) }
    }

    pub fn point_parameterfv(&self, pname: GLenum, params: &[GLfloat; 1]) {
        unsafe { self.raw.PointParameterfv(pname, params.as_ptr()) }
    }

    pub fn point_parameteri(&self, pname: GLenum, param: GLint) {
        unsafe { self.raw.PointParameteri(pname, param) }
    }

    pub fn point_parameteriv(&self, pname: GLenum, params: &[GLint; 1]) {
        unsafe { self.raw.PointParameteriv(pname, params.as_ptr()) }
    }

    pub fn point_size(&self, size: GLfloat) {
        unsafe { self.raw.PointSize(size) }
    }

    pub fn polygon_mode(&self, face: Face, mode: PolygonMode) {
        unsafe { self.raw.PolygonMode(face.into(), mode.into()) }
    }

    pub fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        unsafe { self.raw.PolygonOffset(factor, units) }
    }

    pub fn polygon_offset_clamp(&self, factor: GLfloat, units: GLfloat, clamp: GLfloat) {
        unsafe { self.raw.PolygonOffsetClamp(factor, units, clamp) }
    }

    pub fn sample_coverage(&self, value: GLfloat, invert: bool) {
        unsafe { self.raw.SampleCoverage(value, gl_bool(invert)) }
    }

    pub fn sample_maski(&self, mask_number: GLuint, mask: GLbitfield) {
        unsafe { self.raw.SampleMaski(mask_number, mask) }
    }

    pub fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.raw.Scissor(x, y, width, height) }
    }

    /// Sets `[left, bottom, width, height]` for consecutive viewports
    /// starting at `first`.
    pub fn scissor_arrayv(&self, first: GLuint, v: &[[GLint; 4]]) {
        unsafe { self.raw.ScissorArrayv(first, count(v), v.as_ptr().cast()) }
    }

    pub fn scissor_indexed(
        &self,
        index: GLuint,
        left: GLint,
        bottom: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { self.raw.ScissorIndexed(index, left, bottom, width, height) }
    }

    pub fn scissor_indexedv(&self, index: GLuint, v: &[GLint; 4]) {
        unsafe { self.raw.ScissorIndexedv(index, v.as_ptr()) }
    }

    pub fn stencil_func(&self, func: CompareFunc, reference: GLint, mask: GLuint) {
        unsafe { self.raw.StencilFunc(func.into(), reference, mask) }
    }

    pub fn stencil_func_separate(
        &self,
        face: Face,
        func: CompareFunc,
        reference: GLint,
        mask: GLuint,
    ) {
        unsafe {
            self.raw
                .StencilFuncSeparate(face.into(), func.into(), reference, mask)
        }
    }

    pub fn stencil_mask(&self, mask: GLuint) {
        unsafe { self.raw.StencilMask(mask) }
    }

    pub fn stencil_mask_separate(&self, face: Face, mask: GLuint) {
        unsafe { self.raw.StencilMaskSeparate(face.into(), mask) }
    }

    pub fn stencil_op(&self, fail: StencilOp, zfail: StencilOp, zpass: StencilOp) {
        unsafe { self.raw.StencilOp(fail.into(), zfail.into(), zpass.into()) }
    }

    pub fn stencil_op_separate(
        &self,
        face: Face,
        sfail: StencilOp,
        dpfail: StencilOp,
        dppass: StencilOp,
    ) {
        unsafe {
            self.raw.StencilOpSeparate(
                face.into(),
                sfail.into(),
                dpfail.into(),
                dppass.into(),
            )
        }
    }

    pub fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.raw.Viewport(x, y, width, height) }
    }

    /// Sets `[x, y, width, height]` for consecutive viewports starting at
    /// `first`.
    pub fn viewport_arrayv(&self, first: GLuint, v: &[[GLfloat; 4]]) {
        unsafe { self.raw.ViewportArrayv(first, count(v), v.as_ptr().cast()) }
    }

    pub fn viewport_indexedf(&self, index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat) {
        unsafe { self.raw.ViewportIndexedf(index, x, y, w, h) }
    }

    pub fn viewport_indexedfv(&self, index: GLuint, v: &[GLfloat; 4]) {
        unsafe { self.raw.ViewportIndexedfv(index, v.as_ptr()) }
    }
}
