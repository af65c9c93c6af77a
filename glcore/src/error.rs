use crate::{enums::ErrorCode, sys::types::GLenum, version::Version};
use std::ffi::NulError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// An index argument was negative or does not fit in a `GLuint`. No GL
    /// call was made.
    #[error("index {value} passed to {function} is out of range")]
    IndexOutOfRange { function: &'static str, value: i64 },

    #[error("{0} is not available in the current context")]
    FunctionNotLoaded(&'static str),

    #[error("required functions could not be loaded: {}", .0.join(", "))]
    MissingFunctions(Vec<&'static str>),

    #[error("unrecognized version string {0:?}")]
    InvalidVersion(String),

    #[error("OpenGL {required} is required but the context provides {actual}")]
    UnsupportedVersion { required: Version, actual: Version },

    #[error(transparent)]
    Nul(#[from] NulError),

    #[error("{value:#06x} is not a valid {group}")]
    UnknownEnum { value: GLenum, group: &'static str },

    #[error("the driver reported {0}")]
    Gl(ErrorCode),

    #[cfg(feature = "system-loader")]
    #[error(transparent)]
    Library(#[from] libloading::Error),

    #[error("no OpenGL library could be opened")]
    NoLibrary,
}
