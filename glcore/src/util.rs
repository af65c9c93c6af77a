use crate::sys::types::{GLboolean, GLchar, GLint, GLsizei, GLsizeiptr};
use std::{ffi::CString, mem};

use crate::error::Result;

/// Element count of a slice as a `GLsizei`, clamped to `GLsizei::MAX`.
#[inline]
pub(crate) fn count<T>(slice: &[T]) -> GLsizei {
    GLsizei::try_from(slice.len()).unwrap_or(GLsizei::MAX)
}

/// Size in bytes of a slice as a `GLsizeiptr`.
#[inline]
pub(crate) fn byte_size<T>(slice: &[T]) -> GLsizeiptr {
    GLsizeiptr::try_from(mem::size_of_val(slice)).unwrap_or(GLsizeiptr::MAX)
}

#[inline]
pub(crate) fn gl_bool(value: bool) -> GLboolean {
    value as GLboolean
}

pub(crate) fn c_string(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}

/// Decodes the first `length` bytes written by the driver, stopping early at
/// a nul byte.
pub(crate) fn string_from_buffer(buffer: &[u8], length: GLsizei) -> String {
    let length = usize::try_from(length).unwrap_or(0).min(buffer.len());
    let bytes = &buffer[..length];
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Allocates `capacity` bytes, lets `fetch` fill them and returns the text
/// up to the reported length.
pub(crate) fn read_string(capacity: GLint, fetch: impl FnOnce(&mut [u8]) -> GLsizei) -> String {
    let Ok(capacity) = usize::try_from(capacity) else {
        return String::new();
    };
    if capacity == 0 {
        return String::new();
    }

    let mut buffer = vec![0; capacity];
    let length = fetch(&mut buffer);
    string_from_buffer(&buffer, length)
}

#[inline]
pub(crate) fn chars_mut(buffer: &mut [u8]) -> *mut GLchar {
    buffer.as_mut_ptr().cast()
}
