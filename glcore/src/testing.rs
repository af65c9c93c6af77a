//! A recording mock driver.
//!
//! Every mock entry point appends `glName(arg, ..)` to a thread-local call
//! log. The hand-written mocks below fill outputs and capture strings, and
//! format their arguments with `Debug`, writing `..` for arguments not worth
//! comparing. Every other core command is a generated recorder that only
//! logs its arguments.
#![allow(non_snake_case)]

use crate::{
    sys::{self, types::*},
    Gl,
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    ffi::{CStr, CString},
    fmt,
    os::raw::c_void,
    ptr, slice,
    sync::{Arc, Mutex},
};
use tracing::{
    field::{Field, Visit},
    span, Event, Level, Metadata, Subscriber,
};

pub const MAPPED_POINTER: *mut c_void = 0x1000 as *mut c_void;
pub const PROGRAM_BINARY: &[u8] = b"\x7fGLB\x01mock program";
pub const PROGRAM_BINARY_FORMAT: GLenum = 0x8E21;
pub const QUERY_RESULT: GLuint64 = 16_666_667;
/// Length of the `COMPRESSED_TEXTURE_FORMATS` list, far past any fixed buffer.
pub const COMPRESSED_FORMATS: GLenum = 4096;
pub const FIRST_COMPRESSED_FORMAT: GLenum = 0x9270;

const DEFAULT_VERSION: &str = "4.6.0 Mock";
const SYNC: usize = 0x2000;

struct DebugEntry {
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    text: String,
}

thread_local! {
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static BYTES: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
    static STRINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static INFO_LOG: RefCell<String> = const { RefCell::new(String::new()) };
    static VERSION: RefCell<String> = RefCell::new(DEFAULT_VERSION.to_owned());
    static ERROR: Cell<GLenum> = const { Cell::new(sys::NO_ERROR) };
    static EXTENSIONS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static DEBUG_CALLBACK: Cell<GLDEBUGPROC> = const { Cell::new(None) };
    static DEBUG_LOG: RefCell<VecDeque<DebugEntry>> = const { RefCell::new(VecDeque::new()) };
}

/// A table loaded entirely from the mocks.
pub fn gl() -> Gl {
    unsafe { Gl::load_with(lookup) }
}

/// Drains the call log.
pub fn calls() -> Vec<String> {
    CALLS.with(|calls| calls.take())
}

/// Drains the bytes uploaded by the last data call.
pub fn take_bytes() -> Vec<u8> {
    BYTES.with(|bytes| bytes.take())
}

/// Drains the strings passed to `glShaderSource`.
pub fn take_strings() -> Vec<String> {
    STRINGS.with(|strings| strings.take())
}

pub fn set_info_log(log: &str) {
    INFO_LOG.with(|info_log| *info_log.borrow_mut() = log.to_owned());
}

/// Sets the `GL_VERSION` string. `GL_SHADING_LANGUAGE_VERSION` is fixed.
pub fn set_version(version: &str) {
    VERSION.with(|current| *current.borrow_mut() = version.to_owned());
}

/// Raises the error flag returned by the next `glGetError`.
pub fn set_error(error: GLenum) {
    ERROR.with(|flag| flag.set(error));
}

pub fn set_extensions(extensions: &[&str]) {
    EXTENSIONS.with(|current| {
        *current.borrow_mut() = extensions.iter().map(|name| (*name).to_owned()).collect()
    });
}

/// The callback installed through `glDebugMessageCallback`.
pub fn debug_callback() -> GLDEBUGPROC {
    DEBUG_CALLBACK.with(Cell::get)
}

pub fn push_debug_message(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, text: &str) {
    DEBUG_LOG.with(|log| {
        log.borrow_mut().push_back(DebugEntry {
            source,
            type_,
            id,
            severity,
            text: text.to_owned(),
        })
    });
}

/// A `tracing` event seen by [`capture_events`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: String,
}

#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct MessageField(String);

impl Visit for MessageField {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut message = MessageField(String::new());
        event.record(&mut message);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: message.0,
        });
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

/// Runs `f` with a subscriber that records every event it emits.
pub fn capture_events(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let capture = Capture::default();
    tracing::subscriber::with_default(capture.clone(), f);
    let events = capture.events.lock().unwrap().clone();
    events
}

struct Elided;

impl fmt::Debug for Elided {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("..")
    }
}

fn record(name: &str, args: Vec<String>) {
    CALLS.with(|calls| calls.borrow_mut().push(format!("{name}({})", args.join(", "))));
}

/// Recorder argument formatting. Addresses below 64 KiB are buffer
/// offsets or null and print as hex; real pointers print as `..`.
trait Shown {
    fn shown(&self) -> String;
}

macro_rules! shown_with_debug {
    ($($ty:ty),*) => {
        $(impl Shown for $ty {
            fn shown(&self) -> String {
                format!("{self:?}")
            }
        })*
    };
}

shown_with_debug!(u8, i8, u16, i16, u32, i32, u64, i64, isize, usize, f32, f64);

fn address(address: usize) -> String {
    match address {
        0..=0xFFFF => format!("{address:#x}"),
        _ => "..".to_owned(),
    }
}

impl<T> Shown for *const T {
    fn shown(&self) -> String {
        address(*self as usize)
    }
}

impl<T> Shown for *mut T {
    fn shown(&self) -> String {
        address(*self as usize)
    }
}

macro_rules! record {
    ($name:literal $(, $arg:expr)* $(,)?) => {
        record($name, vec![$(format!("{:?}", $arg)),*])
    };
}

unsafe fn c_str<'a>(text: *const GLchar) -> &'a CStr {
    CStr::from_ptr(text)
}

unsafe fn text<'a>(text: *const GLchar, length: GLsizei) -> &'a str {
    match usize::try_from(length) {
        Ok(length) => std::str::from_utf8(slice::from_raw_parts(text.cast(), length)).unwrap(),
        Err(_) => c_str(text).to_str().unwrap(),
    }
}

fn leak(text: &str) -> *const GLubyte {
    CString::new(text).unwrap().into_raw().cast_const().cast()
}

unsafe fn generate(n: GLsizei, names: *mut GLuint) {
    for i in 0..n {
        *names.add(i as usize) = i as GLuint + 1;
    }
}

/// Copies `value` and a nul into `buffer`, truncating to `buf_size`.
unsafe fn write_string(value: &str, buf_size: GLsizei, length: *mut GLsizei, buffer: *mut GLchar) {
    let copied = value.len().min((buf_size as usize).saturating_sub(1));
    ptr::copy_nonoverlapping(value.as_ptr(), buffer.cast(), copied);
    *buffer.add(copied) = 0;
    if !length.is_null() {
        *length = copied as GLsizei;
    }
}

fn info_log_length() -> GLint {
    INFO_LOG.with(|log| match log.borrow().len() {
        0 => 0,
        len => len as GLint + 1,
    })
}

// context

extern "system" fn glActiveTexture(texture: GLenum) {
    record!("glActiveTexture", texture);
}

extern "system" fn glClear(mask: GLbitfield) {
    record!("glClear", mask);
}

extern "system" fn glFinish() {
    record!("glFinish");
}

extern "system" fn glFlush() {
    record!("glFlush");
}

// buffers

extern "system" fn glBindBuffer(target: GLenum, buffer: GLuint) {
    record!("glBindBuffer", target, buffer);
}

extern "system" fn glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint) {
    record!("glBindBufferBase", target, index, buffer);
}

extern "system" fn glBindBuffersRange(
    target: GLenum,
    first: GLuint,
    count: GLsizei,
    buffers: *const GLuint,
    offsets: *const GLintptr,
    sizes: *const GLsizeiptr,
) {
    record!("glBindBuffersRange", target, first, count, buffers, offsets, sizes);
}

extern "system" fn glBufferData(
    target: GLenum,
    size: GLsizeiptr,
    data: *const c_void,
    usage: GLenum,
) {
    record!("glBufferData", target, size, data, usage);
    if !data.is_null() {
        let data = unsafe { slice::from_raw_parts(data.cast::<u8>(), size as usize) };
        BYTES.with(|bytes| *bytes.borrow_mut() = data.to_vec());
    }
}

extern "system" fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint) {
    record!("glDeleteBuffers", n, buffers);
}

extern "system" fn glGenBuffers(n: GLsizei, buffers: *mut GLuint) {
    record!("glGenBuffers", n, Elided);
    unsafe { generate(n, buffers) };
}

extern "system" fn glMapBufferRange(
    target: GLenum,
    offset: GLintptr,
    length: GLsizeiptr,
    access: GLbitfield,
) -> *mut c_void {
    record!("glMapBufferRange", target, offset, length, access);
    MAPPED_POINTER
}

extern "system" fn glUnmapBuffer(target: GLenum) -> GLboolean {
    record!("glUnmapBuffer", target);
    sys::TRUE
}

// drawing

extern "system" fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei) {
    record!("glDrawArrays", mode, first, count);
}

extern "system" fn glDrawArraysInstanced(
    mode: GLenum,
    first: GLint,
    count: GLsizei,
    instancecount: GLsizei,
) {
    record!("glDrawArraysInstanced", mode, first, count, instancecount);
}

extern "system" fn glDrawElements(
    mode: GLenum,
    count: GLsizei,
    type_: GLenum,
    indices: *const c_void,
) {
    record!("glDrawElements", mode, count, type_, indices);
}

extern "system" fn glMultiDrawArrays(
    mode: GLenum,
    first: *const GLint,
    count: *const GLsizei,
    drawcount: GLsizei,
) {
    record!("glMultiDrawArrays", mode, first, count, drawcount);
}

// framebuffers

extern "system" fn glCheckFramebufferStatus(target: GLenum) -> GLenum {
    record!("glCheckFramebufferStatus", target);
    sys::FRAMEBUFFER_COMPLETE
}

extern "system" fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    record!("glClearColor", red, green, blue, alpha);
}

extern "system" fn glDrawBuffers(n: GLsizei, bufs: *const GLenum) {
    record!("glDrawBuffers", n, bufs);
}

// shaders and programs

extern "system" fn glCreateShader(type_: GLenum) -> GLuint {
    record!("glCreateShader", type_);
    11
}

extern "system" fn glShaderSource(
    shader: GLuint,
    count: GLsizei,
    string: *const *const GLchar,
    length: *const GLint,
) {
    record!("glShaderSource", shader, count, Elided);
    let sources = (0..count as usize)
        .map(|i| unsafe {
            let source = *string.add(i);
            let length = if length.is_null() { -1 } else { *length.add(i) };
            text(source, length).to_owned()
        })
        .collect();
    STRINGS.with(|strings| *strings.borrow_mut() = sources);
}

extern "system" fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
    record!("glGetShaderiv", shader, pname, Elided);
    let value = match pname {
        sys::INFO_LOG_LENGTH => info_log_length(),
        sys::COMPILE_STATUS => GLint::from(sys::TRUE),
        _ => 0,
    };
    unsafe { *params = value };
}

extern "system" fn glGetShaderInfoLog(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    record!("glGetShaderInfoLog", shader, buf_size, Elided);
    INFO_LOG.with(|log| unsafe { write_string(&log.borrow(), buf_size, length, info_log) });
}

extern "system" fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) {
    record!("glBindAttribLocation", program, index, unsafe { c_str(name) });
}

extern "system" fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint {
    record!("glGetUniformLocation", program, unsafe { c_str(name) });
    5
}

extern "system" fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) {
    record!("glGetProgramiv", program, pname, Elided);
    let value = match pname {
        sys::PROGRAM_BINARY_LENGTH => PROGRAM_BINARY.len() as GLint,
        sys::ACTIVE_ATTRIBUTE_MAX_LENGTH
        | sys::ACTIVE_UNIFORM_MAX_LENGTH
        | sys::TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH => 32,
        sys::INFO_LOG_LENGTH => info_log_length(),
        sys::LINK_STATUS => GLint::from(sys::TRUE),
        _ => 0,
    };
    unsafe { *params = value };
}

extern "system" fn glGetProgramInfoLog(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    record!("glGetProgramInfoLog", program, buf_size, Elided);
    INFO_LOG.with(|log| unsafe { write_string(&log.borrow(), buf_size, length, info_log) });
}

extern "system" fn glGetProgramBinary(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    binary_format: *mut GLenum,
    binary: *mut c_void,
) {
    record!("glGetProgramBinary", program, buf_size, Elided);
    let copied = PROGRAM_BINARY.len().min(buf_size as usize);
    unsafe {
        ptr::copy_nonoverlapping(PROGRAM_BINARY.as_ptr(), binary.cast(), copied);
        *length = copied as GLsizei;
        *binary_format = PROGRAM_BINARY_FORMAT;
    }
}

extern "system" fn glProgramBinary(
    program: GLuint,
    binary_format: GLenum,
    binary: *const c_void,
    length: GLsizei,
) {
    record!("glProgramBinary", program, binary_format, Elided, length);
    let binary = unsafe { slice::from_raw_parts(binary.cast::<u8>(), length as usize) };
    BYTES.with(|bytes| *bytes.borrow_mut() = binary.to_vec());
}

extern "system" fn glGetActiveUniform(
    program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    type_: *mut GLenum,
    name: *mut GLchar,
) {
    record!("glGetActiveUniform", program, index, buf_size, Elided);
    unsafe {
        write_string("u_lights", buf_size, length, name);
        *size = 4;
        *type_ = sys::FLOAT_VEC4;
    }
}

extern "system" fn glUseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint) {
    record!("glUseProgramStages", pipeline, stages, program);
}

// uniforms

extern "system" fn glUniform4f(
    location: GLint,
    v0: GLfloat,
    v1: GLfloat,
    v2: GLfloat,
    v3: GLfloat,
) {
    record!("glUniform4f", location, v0, v1, v2, v3);
}

extern "system" fn glProgramUniform1i(program: GLuint, location: GLint, v0: GLint) {
    record!("glProgramUniform1i", program, location, v0);
}

extern "system" fn glUniform3fv(location: GLint, count: GLsizei, _value: *const GLfloat) {
    record!("glUniform3fv", location, count, Elided);
}

extern "system" fn glUniformMatrix4fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    _value: *const GLfloat,
) {
    record!("glUniformMatrix4fv", location, count, transpose, Elided);
}

extern "system" fn glGetnUniformfv(
    program: GLuint,
    location: GLint,
    buf_size: GLsizei,
    _params: *mut GLfloat,
) {
    record!("glGetnUniformfv", program, location, buf_size, Elided);
}

// queries and samplers

extern "system" fn glGenQueries(n: GLsizei, ids: *mut GLuint) {
    record!("glGenQueries", n, Elided);
    unsafe { generate(n, ids) };
}

extern "system" fn glBeginQuery(target: GLenum, id: GLuint) {
    record!("glBeginQuery", target, id);
}

extern "system" fn glEndQuery(target: GLenum) {
    record!("glEndQuery", target);
}

extern "system" fn glGetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64) {
    record!("glGetQueryObjectui64v", id, pname, Elided);
    unsafe { *params = QUERY_RESULT };
}

extern "system" fn glSamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint) {
    record!("glSamplerParameteri", sampler, pname, param);
}

extern "system" fn glGetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat) {
    record!("glGetSamplerParameterfv", sampler, pname, Elided);
    let values = match pname {
        sys::TEXTURE_BORDER_COLOR => [0.25, 0.5, 0.75, 1.0],
        _ => [0.0; 4],
    };
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), params, values.len()) };
}

extern "system" fn glBindSampler(unit: GLuint, sampler: GLuint) {
    record!("glBindSampler", unit, sampler);
}

// state

extern "system" fn glEnable(cap: GLenum) {
    record!("glEnable", cap);
}

extern "system" fn glBlendFunc(sfactor: GLenum, dfactor: GLenum) {
    record!("glBlendFunc", sfactor, dfactor);
}

extern "system" fn glColorMask(
    red: GLboolean,
    green: GLboolean,
    blue: GLboolean,
    alpha: GLboolean,
) {
    record!("glColorMask", red, green, blue, alpha);
}

/// The value of an integer parameter, or every value of a format list.
fn integer_values(pname: GLenum) -> Vec<GLint64> {
    match pname {
        sys::MAX_VERTEX_ATTRIBS => vec![16],
        sys::MAX_DEBUG_MESSAGE_LENGTH => vec![256],
        sys::NUM_EXTENSIONS => {
            vec![EXTENSIONS.with(|extensions| extensions.borrow().len() as GLint64)]
        }
        sys::NUM_COMPRESSED_TEXTURE_FORMATS => vec![COMPRESSED_FORMATS as GLint64],
        sys::COMPRESSED_TEXTURE_FORMATS => {
            (0..COMPRESSED_FORMATS).map(|i| (FIRST_COMPRESSED_FORMAT + i) as GLint64).collect()
        }
        _ => vec![0],
    }
}

extern "system" fn glGetIntegerv(pname: GLenum, data: *mut GLint) {
    record!("glGetIntegerv", pname, Elided);
    for (i, value) in integer_values(pname).into_iter().enumerate() {
        unsafe { *data.add(i) = value as GLint };
    }
}

extern "system" fn glGetInteger64v(pname: GLenum, data: *mut GLint64) {
    record!("glGetInteger64v", pname, Elided);
    for (i, value) in integer_values(pname).into_iter().enumerate() {
        unsafe { *data.add(i) = value };
    }
}

extern "system" fn glGetFloatv(pname: GLenum, data: *mut GLfloat) {
    record!("glGetFloatv", pname, Elided);
    for (i, value) in integer_values(pname).into_iter().enumerate() {
        unsafe { *data.add(i) = value as GLfloat };
    }
}

extern "system" fn glGetError() -> GLenum {
    record!("glGetError");
    ERROR.with(|flag| flag.replace(sys::NO_ERROR))
}

extern "system" fn glGetString(name: GLenum) -> *const GLubyte {
    record!("glGetString", name);
    match name {
        sys::VENDOR => leak("Mock"),
        sys::RENDERER => leak("Mock Renderer"),
        sys::VERSION => VERSION.with(|version| leak(&version.borrow())),
        sys::SHADING_LANGUAGE_VERSION => leak("4.60 Mock"),
        sys::EXTENSIONS => EXTENSIONS.with(|extensions| leak(&extensions.borrow().join(" "))),
        _ => ptr::null(),
    }
}

extern "system" fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte {
    record!("glGetStringi", name, index);
    match name {
        sys::EXTENSIONS => EXTENSIONS.with(|extensions| {
            extensions
                .borrow()
                .get(index as usize)
                .map_or(ptr::null(), |extension| leak(extension))
        }),
        _ => ptr::null(),
    }
}

// sync objects

extern "system" fn glFenceSync(condition: GLenum, flags: GLbitfield) -> GLsync {
    record!("glFenceSync", condition, flags);
    SYNC as GLsync
}

extern "system" fn glClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
    record!("glClientWaitSync", sync, flags, timeout);
    sys::ALREADY_SIGNALED
}

extern "system" fn glGetSynciv(
    sync: GLsync,
    pname: GLenum,
    count: GLsizei,
    length: *mut GLsizei,
    values: *mut GLint,
) {
    record!("glGetSynciv", sync, pname, count, Elided);
    unsafe {
        *values = sys::SIGNALED as GLint;
        if !length.is_null() {
            *length = 1;
        }
    }
}

// textures

extern "system" fn glGenTextures(n: GLsizei, textures: *mut GLuint) {
    record!("glGenTextures", n, Elided);
    unsafe { generate(n, textures) };
}

extern "system" fn glCreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint) {
    record!("glCreateTextures", target, n, Elided);
    unsafe { generate(n, textures) };
}

extern "system" fn glBindTexture(target: GLenum, texture: GLuint) {
    record!("glBindTexture", target, texture);
}

#[allow(clippy::too_many_arguments)]
extern "system" fn glTexImage2D(
    target: GLenum,
    level: GLint,
    internalformat: GLint,
    width: GLsizei,
    height: GLsizei,
    border: GLint,
    format: GLenum,
    type_: GLenum,
    pixels: *const c_void,
) {
    record!(
        "glTexImage2D",
        target,
        level,
        internalformat,
        width,
        height,
        border,
        format,
        type_,
        pixels
    );
}

extern "system" fn glTextureParameterfv(texture: GLuint, pname: GLenum, param: *const GLfloat) {
    let param = unsafe { *param.cast::<[GLfloat; 4]>() };
    record!("glTextureParameterfv", texture, pname, param);
}

// transform feedback

extern "system" fn glTransformFeedbackVaryings(
    program: GLuint,
    count: GLsizei,
    varyings: *const *const GLchar,
    buffer_mode: GLenum,
) {
    let names: Vec<&str> = (0..count as usize)
        .map(|i| unsafe { c_str(*varyings.add(i)).to_str().unwrap() })
        .collect();
    record!("glTransformFeedbackVaryings", program, count, names, buffer_mode);
}

extern "system" fn glGetTransformFeedbackVarying(
    program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLsizei,
    type_: *mut GLenum,
    name: *mut GLchar,
) {
    record!("glGetTransformFeedbackVarying", program, index, buf_size, Elided);
    unsafe {
        write_string("v_velocity", buf_size, length, name);
        *size = 1;
        *type_ = sys::FLOAT_VEC3;
    }
}

extern "system" fn glBeginTransformFeedback(primitive_mode: GLenum) {
    record!("glBeginTransformFeedback", primitive_mode);
}

extern "system" fn glEndTransformFeedback() {
    record!("glEndTransformFeedback");
}

// vertex attributes

extern "system" fn glEnableVertexAttribArray(index: GLuint) {
    record!("glEnableVertexAttribArray", index);
}

extern "system" fn glDisableVertexAttribArray(index: GLuint) {
    record!("glDisableVertexAttribArray", index);
}

extern "system" fn glVertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
    record!("glVertexAttrib4f", index, x, y, z, w);
}

extern "system" fn glVertexAttrib4fv(index: GLuint, v: *const GLfloat) {
    let v = unsafe { *v.cast::<[GLfloat; 4]>() };
    record!("glVertexAttrib4fv", index, v);
}

extern "system" fn glVertexAttribPointer(
    index: GLuint,
    size: GLint,
    type_: GLenum,
    normalized: GLboolean,
    stride: GLsizei,
    pointer: *const c_void,
) {
    record!("glVertexAttribPointer", index, size, type_, normalized, stride, pointer);
}

// debug output

extern "system" fn glDebugMessageCallback(callback: GLDEBUGPROC, _user_param: *const c_void) {
    record!("glDebugMessageCallback", Elided);
    DEBUG_CALLBACK.with(|current| current.set(callback));
}

extern "system" fn glDebugMessageInsert(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    buf: *const GLchar,
) {
    let message = unsafe { text(buf, length) };
    record!("glDebugMessageInsert", source, type_, id, severity, length, message);
}

#[allow(clippy::too_many_arguments)]
extern "system" fn glGetDebugMessageLog(
    count: GLuint,
    buf_size: GLsizei,
    sources: *mut GLenum,
    types: *mut GLenum,
    ids: *mut GLuint,
    severities: *mut GLenum,
    lengths: *mut GLsizei,
    message_log: *mut GLchar,
) -> GLuint {
    record!("glGetDebugMessageLog", count, buf_size, Elided);
    DEBUG_LOG.with(|log| {
        let mut log = log.borrow_mut();
        let (mut written, mut offset) = (0usize, 0usize);

        while written < count as usize {
            let Some(entry) = log.front() else { break };
            let size = entry.text.len() + 1;
            if offset + size > buf_size as usize {
                break;
            }

            unsafe {
                *sources.add(written) = entry.source;
                *types.add(written) = entry.type_;
                *ids.add(written) = entry.id;
                *severities.add(written) = entry.severity;
                *lengths.add(written) = size as GLsizei;
                let text = message_log.add(offset);
                write_string(&entry.text, size as GLsizei, ptr::null_mut(), text);
            }

            log.pop_front();
            offset += size;
            written += 1;
        }

        written as GLuint
    })
}

extern "system" fn glObjectLabel(
    identifier: GLenum,
    name: GLuint,
    length: GLsizei,
    label: *const GLchar,
) {
    record!("glObjectLabel", identifier, name, length, unsafe { text(label, length) });
}

extern "system" fn glPushDebugGroup(
    source: GLenum,
    id: GLuint,
    length: GLsizei,
    message: *const GLchar,
) {
    record!("glPushDebugGroup", source, id, length, unsafe { text(message, length) });
}

extern "system" fn glPopDebugGroup() {
    record!("glPopDebugGroup");
}

macro_rules! mocks {
    ($($name:ident),* $(,)?) => {
        /// Resolves the mocked entry points. Everything else, including
        /// `glBufferStorage` and `glSpecializeShader`, is missing.
        pub fn lookup(symbol: &str) -> *const c_void {
            match symbol {
                $(stringify!($name) => $name as *const c_void,)*
                _ => recorder(symbol),
            }
        }
    };
}

/// Entry points that only log their arguments, returning the given value.
macro_rules! recorders {
    ($($name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty = $value:expr)?;)*) => {
        $(
            #[allow(clippy::too_many_arguments)]
            extern "system" fn $name($($arg: $ty),*) $(-> $ret)? {
                record(stringify!($name), vec![$(Shown::shown(&$arg)),*]);
                $($value)?
            }
        )*

        fn recorder(symbol: &str) -> *const c_void {
            match symbol {
                $(stringify!($name) => $name as *const c_void,)*
                _ => ptr::null(),
            }
        }
    };
}

mocks! {
    glActiveTexture,
    glClear,
    glFinish,
    glFlush,
    glBindBuffer,
    glBindBufferBase,
    glBindBuffersRange,
    glBufferData,
    glDeleteBuffers,
    glGenBuffers,
    glMapBufferRange,
    glUnmapBuffer,
    glDrawArrays,
    glDrawArraysInstanced,
    glDrawElements,
    glMultiDrawArrays,
    glCheckFramebufferStatus,
    glClearColor,
    glDrawBuffers,
    glCreateShader,
    glShaderSource,
    glGetShaderiv,
    glGetShaderInfoLog,
    glBindAttribLocation,
    glGetUniformLocation,
    glGetProgramiv,
    glGetProgramInfoLog,
    glGetProgramBinary,
    glProgramBinary,
    glGetActiveUniform,
    glUseProgramStages,
    glUniform4f,
    glProgramUniform1i,
    glUniform3fv,
    glUniformMatrix4fv,
    glGetnUniformfv,
    glGenQueries,
    glBeginQuery,
    glEndQuery,
    glGetQueryObjectui64v,
    glSamplerParameteri,
    glGetSamplerParameterfv,
    glBindSampler,
    glEnable,
    glBlendFunc,
    glColorMask,
    glGetIntegerv,
    glGetInteger64v,
    glGetFloatv,
    glGetError,
    glGetString,
    glGetStringi,
    glFenceSync,
    glClientWaitSync,
    glGetSynciv,
    glGenTextures,
    glCreateTextures,
    glBindTexture,
    glTexImage2D,
    glTextureParameterfv,
    glTransformFeedbackVaryings,
    glGetTransformFeedbackVarying,
    glBeginTransformFeedback,
    glEndTransformFeedback,
    glEnableVertexAttribArray,
    glDisableVertexAttribArray,
    glVertexAttrib4f,
    glVertexAttrib4fv,
    glVertexAttribPointer,
    glDebugMessageCallback,
    glDebugMessageInsert,
    glGetDebugMessageLog,
    glObjectLabel,
    glPushDebugGroup,
    glPopDebugGroup,
}

// everything else only logs its arguments

recorders! {
    glActiveShaderProgram(pipeline: GLuint, program: GLuint);
    glAttachShader(program: GLuint, shader: GLuint);
    glBeginConditionalRender(id: GLuint, mode: GLenum);
    glBeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
    glBindBufferRange(
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    );
    glBindBuffersBase(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
    glBindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
    glBindFragDataLocationIndexed(
        program: GLuint,
        colorNumber: GLuint,
        index: GLuint,
        name: *const GLchar,
    );
    glBindFramebuffer(target: GLenum, framebuffer: GLuint);
    glBindImageTexture(
        unit: GLuint,
        texture: GLuint,
        level: GLint,
        layered: GLboolean,
        layer: GLint,
        access: GLenum,
        format: GLenum,
    );
    glBindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
    glBindProgramPipeline(pipeline: GLuint);
    glBindRenderbuffer(target: GLenum, renderbuffer: GLuint);
    glBindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
    glBindTextureUnit(unit: GLuint, texture: GLuint);
    glBindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
    glBindTransformFeedback(target: GLenum, id: GLuint);
    glBindVertexArray(array: GLuint);
    glBindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    glBindVertexBuffers(
        first: GLuint,
        count: GLsizei,
        buffers: *const GLuint,
        offsets: *const GLintptr,
        strides: *const GLsizei,
    );
    glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    glBlendEquation(mode: GLenum);
    glBlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum);
    glBlendEquationSeparatei(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum);
    glBlendEquationi(buf: GLuint, mode: GLenum);
    glBlendFuncSeparate(
        sfactorRGB: GLenum,
        dfactorRGB: GLenum,
        sfactorAlpha: GLenum,
        dfactorAlpha: GLenum,
    );
    glBlendFuncSeparatei(
        buf: GLuint,
        srcRGB: GLenum,
        dstRGB: GLenum,
        srcAlpha: GLenum,
        dstAlpha: GLenum,
    );
    glBlendFunci(buf: GLuint, src: GLenum, dst: GLenum);
    glBlitFramebuffer(
        srcX0: GLint,
        srcY0: GLint,
        srcX1: GLint,
        srcY1: GLint,
        dstX0: GLint,
        dstY0: GLint,
        dstX1: GLint,
        dstY1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    );
    glBlitNamedFramebuffer(
        readFramebuffer: GLuint,
        drawFramebuffer: GLuint,
        srcX0: GLint,
        srcY0: GLint,
        srcX1: GLint,
        srcY1: GLint,
        dstX0: GLint,
        dstY0: GLint,
        dstX1: GLint,
        dstY1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    );
    glBufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    glCheckNamedFramebufferStatus(
        framebuffer: GLuint,
        target: GLenum,
    ) -> GLenum = sys::FRAMEBUFFER_COMPLETE;
    glClampColor(target: GLenum, clamp: GLenum);
    glClearBufferData(
        target: GLenum,
        internalformat: GLenum,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    );
    glClearBufferSubData(
        target: GLenum,
        internalformat: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    );
    glClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    glClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
    glClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
    glClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
    glClearDepth(depth: GLdouble);
    glClearDepthf(d: GLfloat);
    glClearNamedBufferData(
        buffer: GLuint,
        internalformat: GLenum,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    );
    glClearNamedBufferSubData(
        buffer: GLuint,
        internalformat: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    );
    glClearNamedFramebufferfi(
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        depth: GLfloat,
        stencil: GLint,
    );
    glClearNamedFramebufferfv(
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: *const GLfloat,
    );
    glClearNamedFramebufferiv(
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: *const GLint,
    );
    glClearNamedFramebufferuiv(
        framebuffer: GLuint,
        buffer: GLenum,
        drawbuffer: GLint,
        value: *const GLuint,
    );
    glClearStencil(s: GLint);
    glClearTexImage(
        texture: GLuint,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        data: *const c_void,
    );
    glClearTexSubImage(
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
    );
    glClipControl(origin: GLenum, depth: GLenum);
    glColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
    glCompileShader(shader: GLuint);
    glCompressedTexImage1D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        border: GLint,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTexImage3D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTexSubImage1D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTexSubImage3D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTextureSubImage1D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTextureSubImage2D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCompressedTextureSubImage3D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        imageSize: GLsizei,
        data: *const c_void,
    );
    glCopyBufferSubData(
        readTarget: GLenum,
        writeTarget: GLenum,
        readOffset: GLintptr,
        writeOffset: GLintptr,
        size: GLsizeiptr,
    );
    glCopyImageSubData(
        srcName: GLuint,
        srcTarget: GLenum,
        srcLevel: GLint,
        srcX: GLint,
        srcY: GLint,
        srcZ: GLint,
        dstName: GLuint,
        dstTarget: GLenum,
        dstLevel: GLint,
        dstX: GLint,
        dstY: GLint,
        dstZ: GLint,
        srcWidth: GLsizei,
        srcHeight: GLsizei,
        srcDepth: GLsizei,
    );
    glCopyNamedBufferSubData(
        readBuffer: GLuint,
        writeBuffer: GLuint,
        readOffset: GLintptr,
        writeOffset: GLintptr,
        size: GLsizeiptr,
    );
    glCopyTexImage1D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        border: GLint,
    );
    glCopyTexImage2D(
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    );
    glCopyTexSubImage1D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
    );
    glCopyTexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glCopyTexSubImage3D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glCopyTextureSubImage1D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
    );
    glCopyTextureSubImage2D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glCopyTextureSubImage3D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glCreateBuffers(n: GLsizei, buffers: *mut GLuint);
    glCreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    glCreateProgram() -> GLuint = 1;
    glCreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
    glCreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
    glCreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
    glCreateSamplers(n: GLsizei, samplers: *mut GLuint);
    glCreateShaderProgramv(
        type_: GLenum,
        count: GLsizei,
        strings: *const *const GLchar,
    ) -> GLuint = 9;
    glCreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
    glCreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
    glCullFace(mode: GLenum);
    glDebugMessageControl(
        source: GLenum,
        type_: GLenum,
        severity: GLenum,
        count: GLsizei,
        ids: *const GLuint,
        enabled: GLboolean,
    );
    glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
    glDeleteProgram(program: GLuint);
    glDeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
    glDeleteQueries(n: GLsizei, ids: *const GLuint);
    glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
    glDeleteSamplers(count: GLsizei, samplers: *const GLuint);
    glDeleteShader(shader: GLuint);
    glDeleteSync(sync: GLsync);
    glDeleteTextures(n: GLsizei, textures: *const GLuint);
    glDeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
    glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
    glDepthFunc(func: GLenum);
    glDepthMask(flag: GLboolean);
    glDepthRange(n: GLdouble, f: GLdouble);
    glDepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
    glDepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
    glDepthRangef(n: GLfloat, f: GLfloat);
    glDetachShader(program: GLuint, shader: GLuint);
    glDisable(cap: GLenum);
    glDisableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
    glDisablei(target: GLenum, index: GLuint);
    glDispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
    glDispatchComputeIndirect(indirect: GLintptr);
    glDrawArraysIndirect(mode: GLenum, indirect: *const c_void);
    glDrawArraysInstancedBaseInstance(
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instancecount: GLsizei,
        baseinstance: GLuint,
    );
    glDrawBuffer(buf: GLenum);
    glDrawElementsBaseVertex(
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        basevertex: GLint,
    );
    glDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void);
    glDrawElementsInstanced(
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instancecount: GLsizei,
    );
    glDrawElementsInstancedBaseInstance(
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instancecount: GLsizei,
        baseinstance: GLuint,
    );
    glDrawElementsInstancedBaseVertex(
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instancecount: GLsizei,
        basevertex: GLint,
    );
    glDrawElementsInstancedBaseVertexBaseInstance(
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        instancecount: GLsizei,
        basevertex: GLint,
        baseinstance: GLuint,
    );
    glDrawRangeElements(
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    );
    glDrawRangeElementsBaseVertex(
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
        basevertex: GLint,
    );
    glDrawTransformFeedback(mode: GLenum, id: GLuint);
    glDrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
    glDrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
    glDrawTransformFeedbackStreamInstanced(
        mode: GLenum,
        id: GLuint,
        stream: GLuint,
        instancecount: GLsizei,
    );
    glEnableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
    glEnablei(target: GLenum, index: GLuint);
    glEndConditionalRender();
    glEndQueryIndexed(target: GLenum, index: GLuint);
    glFlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
    glFlushMappedNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
    glFramebufferParameteri(target: GLenum, pname: GLenum, param: GLint);
    glFramebufferRenderbuffer(
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    );
    glFramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
    glFramebufferTexture1D(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    glFramebufferTexture2D(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    glFramebufferTexture3D(
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
        zoffset: GLint,
    );
    glFramebufferTextureLayer(
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    );
    glFrontFace(mode: GLenum);
    glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    glGenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
    glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
    glGenSamplers(count: GLsizei, samplers: *mut GLuint);
    glGenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
    glGenVertexArrays(n: GLsizei, arrays: *mut GLuint);
    glGenerateMipmap(target: GLenum);
    glGenerateTextureMipmap(texture: GLuint);
    glGetActiveAtomicCounterBufferiv(
        program: GLuint,
        bufferIndex: GLuint,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetActiveAttrib(
        program: GLuint,
        index: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    );
    glGetActiveSubroutineName(
        program: GLuint,
        shadertype: GLenum,
        index: GLuint,
        bufsize: GLsizei,
        length: *mut GLsizei,
        name: *mut GLchar,
    );
    glGetActiveSubroutineUniformName(
        program: GLuint,
        shadertype: GLenum,
        index: GLuint,
        bufsize: GLsizei,
        length: *mut GLsizei,
        name: *mut GLchar,
    );
    glGetActiveSubroutineUniformiv(
        program: GLuint,
        shadertype: GLenum,
        index: GLuint,
        pname: GLenum,
        values: *mut GLint,
    );
    glGetActiveUniformBlockName(
        program: GLuint,
        uniformBlockIndex: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        uniformBlockName: *mut GLchar,
    );
    glGetActiveUniformBlockiv(
        program: GLuint,
        uniformBlockIndex: GLuint,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetActiveUniformName(
        program: GLuint,
        uniformIndex: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        uniformName: *mut GLchar,
    );
    glGetActiveUniformsiv(
        program: GLuint,
        uniformCount: GLsizei,
        uniformIndices: *const GLuint,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetAttachedShaders(
        program: GLuint,
        maxCount: GLsizei,
        count: *mut GLsizei,
        shaders: *mut GLuint,
    );
    glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint = -1;
    glGetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
    glGetBooleanv(pname: GLenum, data: *mut GLboolean);
    glGetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
    glGetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    glGetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
    glGetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);
    glGetCompressedTextureImage(
        texture: GLuint,
        level: GLint,
        bufSize: GLsizei,
        pixels: *mut c_void,
    );
    glGetCompressedTextureSubImage(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        bufSize: GLsizei,
        pixels: *mut c_void,
    );
    glGetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);
    glGetDoublev(pname: GLenum, data: *mut GLdouble);
    glGetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
    glGetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint = -1;
    glGetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint = -1;
    glGetFramebufferAttachmentParameteriv(
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetGraphicsResetStatus() -> GLenum = sys::NO_ERROR;
    glGetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
    glGetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
    glGetInternalformati64v(
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        bufSize: GLsizei,
        params: *mut GLint64,
    );
    glGetInternalformativ(
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        bufSize: GLsizei,
        params: *mut GLint,
    );
    glGetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
    glGetNamedBufferParameteri64v(buffer: GLuint, pname: GLenum, params: *mut GLint64);
    glGetNamedBufferParameteriv(buffer: GLuint, pname: GLenum, params: *mut GLint);
    glGetNamedBufferPointerv(buffer: GLuint, pname: GLenum, params: *mut *mut c_void);
    glGetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
    glGetNamedFramebufferAttachmentParameteriv(
        framebuffer: GLuint,
        attachment: GLenum,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetNamedFramebufferParameteriv(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
    glGetNamedRenderbufferParameteriv(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
    glGetObjectLabel(
        identifier: GLenum,
        name: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        label: *mut GLchar,
    );
    glGetObjectPtrLabel(
        ptr: *const c_void,
        bufSize: GLsizei,
        length: *mut GLsizei,
        label: *mut GLchar,
    );
    glGetPointerv(pname: GLenum, params: *mut *mut c_void);
    glGetProgramInterfaceiv(
        program: GLuint,
        programInterface: GLenum,
        pname: GLenum,
        params: *mut GLint,
    );
    glGetProgramPipelineInfoLog(
        pipeline: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        infoLog: *mut GLchar,
    );
    glGetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
    glGetProgramResourceIndex(
        program: GLuint,
        programInterface: GLenum,
        name: *const GLchar,
    ) -> GLuint = 0;
    glGetProgramResourceLocation(
        program: GLuint,
        programInterface: GLenum,
        name: *const GLchar,
    ) -> GLint = -1;
    glGetProgramResourceLocationIndex(
        program: GLuint,
        programInterface: GLenum,
        name: *const GLchar,
    ) -> GLint = -1;
    glGetProgramResourceName(
        program: GLuint,
        programInterface: GLenum,
        index: GLuint,
        bufSize: GLsizei,
        length: *mut GLsizei,
        name: *mut GLchar,
    );
    glGetProgramResourceiv(
        program: GLuint,
        programInterface: GLenum,
        index: GLuint,
        propCount: GLsizei,
        props: *const GLenum,
        bufSize: GLsizei,
        length: *mut GLsizei,
        params: *mut GLint,
    );
    glGetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
    glGetQueryBufferObjecti64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    glGetQueryBufferObjectiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    glGetQueryBufferObjectui64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    glGetQueryBufferObjectuiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
    glGetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    glGetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
    glGetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
    glGetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
    glGetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    glGetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
    glGetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
    glGetShaderPrecisionFormat(
        shadertype: GLenum,
        precisiontype: GLenum,
        range: *mut GLint,
        precision: *mut GLint,
    );
    glGetShaderSource(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, source: *mut GLchar);
    glGetSubroutineIndex(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint = 0;
    glGetSubroutineUniformLocation(
        program: GLuint,
        shadertype: GLenum,
        name: *const GLchar,
    ) -> GLint = -1;
    glGetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
    glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
    glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    glGetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
    glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    glGetTextureImage(
        texture: GLuint,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        bufSize: GLsizei,
        pixels: *mut c_void,
    );
    glGetTextureLevelParameterfv(
        texture: GLuint,
        level: GLint,
        pname: GLenum,
        params: *mut GLfloat,
    );
    glGetTextureLevelParameteriv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
    glGetTextureParameterIiv(texture: GLuint, pname: GLenum, params: *mut GLint);
    glGetTextureParameterIuiv(texture: GLuint, pname: GLenum, params: *mut GLuint);
    glGetTextureParameterfv(texture: GLuint, pname: GLenum, params: *mut GLfloat);
    glGetTextureParameteriv(texture: GLuint, pname: GLenum, params: *mut GLint);
    glGetTextureSubImage(
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
        bufSize: GLsizei,
        pixels: *mut c_void,
    );
    glGetTransformFeedbacki64_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
    glGetTransformFeedbacki_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
    glGetTransformFeedbackiv(xfb: GLuint, pname: GLenum, param: *mut GLint);
    glGetUniformBlockIndex(program: GLuint, uniformBlockName: *const GLchar) -> GLuint = 0;
    glGetUniformIndices(
        program: GLuint,
        uniformCount: GLsizei,
        uniformNames: *const *const GLchar,
        uniformIndices: *mut GLuint,
    );
    glGetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
    glGetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
    glGetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
    glGetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
    glGetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
    glGetVertexArrayIndexed64iv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
    glGetVertexArrayIndexediv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
    glGetVertexArrayiv(vaobj: GLuint, pname: GLenum, param: *mut GLint);
    glGetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
    glGetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
    glGetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
    glGetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
    glGetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
    glGetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
    glGetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
    glGetnCompressedTexImage(target: GLenum, lod: GLint, bufSize: GLsizei, pixels: *mut c_void);
    glGetnTexImage(
        target: GLenum,
        level: GLint,
        format: GLenum,
        type_: GLenum,
        bufSize: GLsizei,
        pixels: *mut c_void,
    );
    glGetnUniformdv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLdouble);
    glGetnUniformiv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLint);
    glGetnUniformuiv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLuint);
    glHint(target: GLenum, mode: GLenum);
    glInvalidateBufferData(buffer: GLuint);
    glInvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
    glInvalidateFramebuffer(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum);
    glInvalidateNamedFramebufferData(
        framebuffer: GLuint,
        numAttachments: GLsizei,
        attachments: *const GLenum,
    );
    glInvalidateNamedFramebufferSubData(
        framebuffer: GLuint,
        numAttachments: GLsizei,
        attachments: *const GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glInvalidateSubFramebuffer(
        target: GLenum,
        numAttachments: GLsizei,
        attachments: *const GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    );
    glInvalidateTexImage(texture: GLuint, level: GLint);
    glInvalidateTexSubImage(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );
    glIsBuffer(buffer: GLuint) -> GLboolean = sys::TRUE;
    glIsEnabled(cap: GLenum) -> GLboolean = sys::TRUE;
    glIsEnabledi(target: GLenum, index: GLuint) -> GLboolean = sys::TRUE;
    glIsFramebuffer(framebuffer: GLuint) -> GLboolean = sys::TRUE;
    glIsProgram(program: GLuint) -> GLboolean = sys::TRUE;
    glIsProgramPipeline(pipeline: GLuint) -> GLboolean = sys::TRUE;
    glIsQuery(id: GLuint) -> GLboolean = sys::TRUE;
    glIsRenderbuffer(renderbuffer: GLuint) -> GLboolean = sys::TRUE;
    glIsSampler(sampler: GLuint) -> GLboolean = sys::TRUE;
    glIsShader(shader: GLuint) -> GLboolean = sys::TRUE;
    glIsSync(sync: GLsync) -> GLboolean = sys::TRUE;
    glIsTexture(texture: GLuint) -> GLboolean = sys::TRUE;
    glIsTransformFeedback(id: GLuint) -> GLboolean = sys::TRUE;
    glIsVertexArray(array: GLuint) -> GLboolean = sys::TRUE;
    glLineWidth(width: GLfloat);
    glLinkProgram(program: GLuint);
    glLogicOp(opcode: GLenum);
    glMapBuffer(target: GLenum, access: GLenum) -> *mut c_void = MAPPED_POINTER;
    glMapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void = MAPPED_POINTER;
    glMapNamedBufferRange(
        buffer: GLuint,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void = MAPPED_POINTER;
    glMemoryBarrier(barriers: GLbitfield);
    glMemoryBarrierByRegion(barriers: GLbitfield);
    glMinSampleShading(value: GLfloat);
    glMultiDrawArraysIndirect(
        mode: GLenum,
        indirect: *const c_void,
        drawcount: GLsizei,
        stride: GLsizei,
    );
    glMultiDrawArraysIndirectCount(
        mode: GLenum,
        indirect: *const c_void,
        drawcount: GLintptr,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    );
    glMultiDrawElements(
        mode: GLenum,
        count: *const GLsizei,
        type_: GLenum,
        indices: *const *const c_void,
        drawcount: GLsizei,
    );
    glMultiDrawElementsBaseVertex(
        mode: GLenum,
        count: *const GLsizei,
        type_: GLenum,
        indices: *const *const c_void,
        drawcount: GLsizei,
        basevertex: *const GLint,
    );
    glMultiDrawElementsIndirect(
        mode: GLenum,
        type_: GLenum,
        indirect: *const c_void,
        drawcount: GLsizei,
        stride: GLsizei,
    );
    glMultiDrawElementsIndirectCount(
        mode: GLenum,
        type_: GLenum,
        indirect: *const c_void,
        drawcount: GLintptr,
        maxdrawcount: GLsizei,
        stride: GLsizei,
    );
    glNamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    glNamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    glNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    glNamedFramebufferDrawBuffer(framebuffer: GLuint, buf: GLenum);
    glNamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
    glNamedFramebufferParameteri(framebuffer: GLuint, pname: GLenum, param: GLint);
    glNamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum);
    glNamedFramebufferRenderbuffer(
        framebuffer: GLuint,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    );
    glNamedFramebufferTexture(
        framebuffer: GLuint,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
    );
    glNamedFramebufferTextureLayer(
        framebuffer: GLuint,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    );
    glNamedRenderbufferStorage(
        renderbuffer: GLuint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    glNamedRenderbufferStorageMultisample(
        renderbuffer: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    glObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar);
    glPatchParameterfv(pname: GLenum, values: *const GLfloat);
    glPatchParameteri(pname: GLenum, value: GLint);
    glPauseTransformFeedback();
    glPixelStoref(pname: GLenum, param: GLfloat);
    glPixelStorei(pname: GLenum, param: GLint);
    glPointParameterf(pname: GLenum, param: GLfloat);
    glPointParameterfv(pname: GLenum, params: *const GLfloat);
    glPointParameteri(pname: GLenum, param: GLint);
    glPointParameteriv(pname: GLenum, params: *const GLint);
    glPointSize(size: GLfloat);
    glPolygonMode(face: GLenum, mode: GLenum);
    glPolygonOffset(factor: GLfloat, units: GLfloat);
    glPolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);
    glPrimitiveRestartIndex(index: GLuint);
    glProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
    glProgramUniform1d(program: GLuint, location: GLint, v0: GLdouble);
    glProgramUniform1dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    glProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
    glProgramUniform1fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    glProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    glProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint);
    glProgramUniform1uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    glProgramUniform2d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
    glProgramUniform2dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    glProgramUniform2f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
    glProgramUniform2fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    glProgramUniform2i(program: GLuint, location: GLint, v0: GLint, v1: GLint);
    glProgramUniform2iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    glProgramUniform2ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
    glProgramUniform2uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    glProgramUniform3d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
    glProgramUniform3dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    glProgramUniform3f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    glProgramUniform3fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    glProgramUniform3i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
    glProgramUniform3iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    glProgramUniform3ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    glProgramUniform3uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    glProgramUniform4d(
        program: GLuint,
        location: GLint,
        v0: GLdouble,
        v1: GLdouble,
        v2: GLdouble,
        v3: GLdouble,
    );
    glProgramUniform4dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
    glProgramUniform4f(
        program: GLuint,
        location: GLint,
        v0: GLfloat,
        v1: GLfloat,
        v2: GLfloat,
        v3: GLfloat,
    );
    glProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
    glProgramUniform4i(
        program: GLuint,
        location: GLint,
        v0: GLint,
        v1: GLint,
        v2: GLint,
        v3: GLint,
    );
    glProgramUniform4iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
    glProgramUniform4ui(
        program: GLuint,
        location: GLint,
        v0: GLuint,
        v1: GLuint,
        v2: GLuint,
        v3: GLuint,
    );
    glProgramUniform4uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
    glProgramUniformMatrix2dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix2fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix2x3dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix2x3fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix2x4dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix2x4fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix3dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix3fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix3x2dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix3x2fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix3x4dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix3x4fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix4dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix4fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix4x2dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix4x2fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProgramUniformMatrix4x3dv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glProgramUniformMatrix4x3fv(
        program: GLuint,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glProvokingVertex(mode: GLenum);
    glQueryCounter(id: GLuint, target: GLenum);
    glReadBuffer(src: GLenum);
    glReadPixels(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *mut c_void,
    );
    glReadnPixels(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        bufSize: GLsizei,
        data: *mut c_void,
    );
    glReleaseShaderCompiler();
    glRenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
    glRenderbufferStorageMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    glResumeTransformFeedback();
    glSampleCoverage(value: GLfloat, invert: GLboolean);
    glSampleMaski(maskNumber: GLuint, mask: GLbitfield);
    glSamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
    glSamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
    glSamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
    glSamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
    glSamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
    glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    glScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint);
    glScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
    glScissorIndexedv(index: GLuint, v: *const GLint);
    glShaderBinary(
        count: GLsizei,
        shaders: *const GLuint,
        binaryformat: GLenum,
        binary: *const c_void,
        length: GLsizei,
    );
    glShaderStorageBlockBinding(
        program: GLuint,
        storageBlockIndex: GLuint,
        storageBlockBinding: GLuint,
    );
    glSpecializeShader(
        shader: GLuint,
        pEntryPoint: *const GLchar,
        numSpecializationConstants: GLuint,
        pConstantIndex: *const GLuint,
        pConstantValue: *const GLuint,
    );
    glStencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
    glStencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
    glStencilMask(mask: GLuint);
    glStencilMaskSeparate(face: GLenum, mask: GLuint);
    glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    glStencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    glTexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
    glTexBufferRange(
        target: GLenum,
        internalformat: GLenum,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    );
    glTexImage1D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTexImage2DMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTexImage3D(
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTexImage3DMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
    glTexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
    glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
    glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
    glTexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
    glTexStorage2D(
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    glTexStorage2DMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTexStorage3D(
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );
    glTexStorage3DMultisample(
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTexSubImage1D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTexSubImage2D(
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTexSubImage3D(
        target: GLenum,
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
    );
    glTextureBarrier();
    glTextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint);
    glTextureBufferRange(
        texture: GLuint,
        internalformat: GLenum,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    );
    glTextureParameterIiv(texture: GLuint, pname: GLenum, params: *const GLint);
    glTextureParameterIuiv(texture: GLuint, pname: GLenum, params: *const GLuint);
    glTextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
    glTextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
    glTextureParameteriv(texture: GLuint, pname: GLenum, param: *const GLint);
    glTextureStorage1D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
    glTextureStorage2D(
        texture: GLuint,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    glTextureStorage2DMultisample(
        texture: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTextureStorage3D(
        texture: GLuint,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    );
    glTextureStorage3DMultisample(
        texture: GLuint,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        fixedsamplelocations: GLboolean,
    );
    glTextureSubImage1D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTextureSubImage2D(
        texture: GLuint,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    );
    glTextureSubImage3D(
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
    );
    glTextureView(
        texture: GLuint,
        target: GLenum,
        origtexture: GLuint,
        internalformat: GLenum,
        minlevel: GLuint,
        numlevels: GLuint,
        minlayer: GLuint,
        numlayers: GLuint,
    );
    glTransformFeedbackBufferBase(xfb: GLuint, index: GLuint, buffer: GLuint);
    glTransformFeedbackBufferRange(
        xfb: GLuint,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    );
    glUniform1d(location: GLint, x: GLdouble);
    glUniform1dv(location: GLint, count: GLsizei, value: *const GLdouble);
    glUniform1f(location: GLint, v0: GLfloat);
    glUniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
    glUniform1i(location: GLint, v0: GLint);
    glUniform1iv(location: GLint, count: GLsizei, value: *const GLint);
    glUniform1ui(location: GLint, v0: GLuint);
    glUniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
    glUniform2d(location: GLint, x: GLdouble, y: GLdouble);
    glUniform2dv(location: GLint, count: GLsizei, value: *const GLdouble);
    glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
    glUniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
    glUniform2i(location: GLint, v0: GLint, v1: GLint);
    glUniform2iv(location: GLint, count: GLsizei, value: *const GLint);
    glUniform2ui(location: GLint, v0: GLuint, v1: GLuint);
    glUniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
    glUniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
    glUniform3dv(location: GLint, count: GLsizei, value: *const GLdouble);
    glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    glUniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    glUniform3iv(location: GLint, count: GLsizei, value: *const GLint);
    glUniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
    glUniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
    glUniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    glUniform4dv(location: GLint, count: GLsizei, value: *const GLdouble);
    glUniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
    glUniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    glUniform4iv(location: GLint, count: GLsizei, value: *const GLint);
    glUniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
    glUniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
    glUniformBlockBinding(program: GLuint, uniformBlockIndex: GLuint, uniformBlockBinding: GLuint);
    glUniformMatrix2dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix2fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix2x3dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix2x3fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix2x4dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix2x4fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix3dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix3fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix3x2dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix3x2fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix3x4dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix3x4fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix4dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix4x2dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix4x2fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformMatrix4x3dv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLdouble,
    );
    glUniformMatrix4x3fv(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    glUniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
    glUnmapNamedBuffer(buffer: GLuint) -> GLboolean = sys::TRUE;
    glUseProgram(program: GLuint);
    glValidateProgram(program: GLuint);
    glValidateProgramPipeline(pipeline: GLuint);
    glVertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
    glVertexArrayAttribFormat(
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        relativeoffset: GLuint,
    );
    glVertexArrayAttribIFormat(
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: GLenum,
        relativeoffset: GLuint,
    );
    glVertexArrayAttribLFormat(
        vaobj: GLuint,
        attribindex: GLuint,
        size: GLint,
        type_: GLenum,
        relativeoffset: GLuint,
    );
    glVertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
    glVertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
    glVertexArrayVertexBuffer(
        vaobj: GLuint,
        bindingindex: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        stride: GLsizei,
    );
    glVertexArrayVertexBuffers(
        vaobj: GLuint,
        first: GLuint,
        count: GLsizei,
        buffers: *const GLuint,
        offsets: *const GLintptr,
        strides: *const GLsizei,
    );
    glVertexAttrib1d(index: GLuint, x: GLdouble);
    glVertexAttrib1dv(index: GLuint, v: *const GLdouble);
    glVertexAttrib1f(index: GLuint, x: GLfloat);
    glVertexAttrib1fv(index: GLuint, v: *const GLfloat);
    glVertexAttrib1s(index: GLuint, x: GLshort);
    glVertexAttrib1sv(index: GLuint, v: *const GLshort);
    glVertexAttrib2d(index: GLuint, x: GLdouble, y: GLdouble);
    glVertexAttrib2dv(index: GLuint, v: *const GLdouble);
    glVertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
    glVertexAttrib2fv(index: GLuint, v: *const GLfloat);
    glVertexAttrib2s(index: GLuint, x: GLshort, y: GLshort);
    glVertexAttrib2sv(index: GLuint, v: *const GLshort);
    glVertexAttrib3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
    glVertexAttrib3dv(index: GLuint, v: *const GLdouble);
    glVertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    glVertexAttrib3fv(index: GLuint, v: *const GLfloat);
    glVertexAttrib3s(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
    glVertexAttrib3sv(index: GLuint, v: *const GLshort);
    glVertexAttrib4Nbv(index: GLuint, v: *const GLbyte);
    glVertexAttrib4Niv(index: GLuint, v: *const GLint);
    glVertexAttrib4Nsv(index: GLuint, v: *const GLshort);
    glVertexAttrib4Nub(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
    glVertexAttrib4Nubv(index: GLuint, v: *const GLubyte);
    glVertexAttrib4Nuiv(index: GLuint, v: *const GLuint);
    glVertexAttrib4Nusv(index: GLuint, v: *const GLushort);
    glVertexAttrib4bv(index: GLuint, v: *const GLbyte);
    glVertexAttrib4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    glVertexAttrib4dv(index: GLuint, v: *const GLdouble);
    glVertexAttrib4iv(index: GLuint, v: *const GLint);
    glVertexAttrib4s(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
    glVertexAttrib4sv(index: GLuint, v: *const GLshort);
    glVertexAttrib4ubv(index: GLuint, v: *const GLubyte);
    glVertexAttrib4uiv(index: GLuint, v: *const GLuint);
    glVertexAttrib4usv(index: GLuint, v: *const GLushort);
    glVertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
    glVertexAttribDivisor(index: GLuint, divisor: GLuint);
    glVertexAttribFormat(
        attribindex: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        relativeoffset: GLuint,
    );
    glVertexAttribI1i(index: GLuint, x: GLint);
    glVertexAttribI1iv(index: GLuint, v: *const GLint);
    glVertexAttribI1ui(index: GLuint, x: GLuint);
    glVertexAttribI1uiv(index: GLuint, v: *const GLuint);
    glVertexAttribI2i(index: GLuint, x: GLint, y: GLint);
    glVertexAttribI2iv(index: GLuint, v: *const GLint);
    glVertexAttribI2ui(index: GLuint, x: GLuint, y: GLuint);
    glVertexAttribI2uiv(index: GLuint, v: *const GLuint);
    glVertexAttribI3i(index: GLuint, x: GLint, y: GLint, z: GLint);
    glVertexAttribI3iv(index: GLuint, v: *const GLint);
    glVertexAttribI3ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
    glVertexAttribI3uiv(index: GLuint, v: *const GLuint);
    glVertexAttribI4bv(index: GLuint, v: *const GLbyte);
    glVertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
    glVertexAttribI4iv(index: GLuint, v: *const GLint);
    glVertexAttribI4sv(index: GLuint, v: *const GLshort);
    glVertexAttribI4ubv(index: GLuint, v: *const GLubyte);
    glVertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
    glVertexAttribI4uiv(index: GLuint, v: *const GLuint);
    glVertexAttribI4usv(index: GLuint, v: *const GLushort);
    glVertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    glVertexAttribIPointer(
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    glVertexAttribL1d(index: GLuint, x: GLdouble);
    glVertexAttribL1dv(index: GLuint, v: *const GLdouble);
    glVertexAttribL2d(index: GLuint, x: GLdouble, y: GLdouble);
    glVertexAttribL2dv(index: GLuint, v: *const GLdouble);
    glVertexAttribL3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
    glVertexAttribL3dv(index: GLuint, v: *const GLdouble);
    glVertexAttribL4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    glVertexAttribL4dv(index: GLuint, v: *const GLdouble);
    glVertexAttribLFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    glVertexAttribLPointer(
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const c_void,
    );
    glVertexAttribP1ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    glVertexAttribP1uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    glVertexAttribP2ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    glVertexAttribP2uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    glVertexAttribP3ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    glVertexAttribP3uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    glVertexAttribP4ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
    glVertexAttribP4uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    glVertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
    glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    glViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat);
    glViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
    glViewportIndexedfv(index: GLuint, v: *const GLfloat);
    glWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_typed_command_has_a_mock() {
        let unmocked: Vec<_> = crate::typed_commands()
            .filter(|name| lookup(name).is_null())
            .collect();

        assert!(unmocked.is_empty(), "{unmocked:?}");
    }

    #[test]
    fn recorders_show_offsets_and_hide_addresses() {
        let gl = gl();
        let raw = gl.raw();
        let indices = [0u16, 1, 2];
        unsafe {
            raw.DrawRangeElements(sys::TRIANGLES, 0, 2, 3, sys::UNSIGNED_SHORT, ptr::null());
            raw.DrawRangeElements(sys::TRIANGLES, 0, 2, 3, sys::UNSIGNED_SHORT, 12 as *const _);
            let pointer = indices.as_ptr().cast();
            raw.DrawRangeElements(sys::TRIANGLES, 0, 2, 3, sys::UNSIGNED_SHORT, pointer);
        }

        assert_eq!(
            calls(),
            [
                "glDrawRangeElements(4, 0, 2, 3, 5123, 0x0)",
                "glDrawRangeElements(4, 0, 2, 3, 5123, 0xc)",
                "glDrawRangeElements(4, 0, 2, 3, 5123, ..)",
            ]
        );
    }
}
