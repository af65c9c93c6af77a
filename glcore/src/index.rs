use crate::{
    error::{Error, Result},
    sys::types::GLuint,
};

/// An argument usable as a GL index.
///
/// Signed and wide integers are accepted for convenience and checked
/// before any call reaches the driver.
pub trait IntoIndex: Copy {
    fn into_index(self, function: &'static str) -> Result<GLuint>;
}

macro_rules! lossless_index {
    ($($ty:ty),*) => {
        $(impl IntoIndex for $ty {
            #[inline]
            fn into_index(self, _function: &'static str) -> Result<GLuint> {
                Ok(GLuint::from(self))
            }
        })*
    };
}

macro_rules! checked_index {
    ($($ty:ty),*) => {
        $(impl IntoIndex for $ty {
            #[inline]
            fn into_index(self, function: &'static str) -> Result<GLuint> {
                GLuint::try_from(self).map_err(|_| Error::IndexOutOfRange {
                    function,
                    value: i64::try_from(self).unwrap_or(i64::MAX),
                })
            }
        })*
    };
}

lossless_index!(u8, u16, u32);
checked_index!(i32, i64, usize);
