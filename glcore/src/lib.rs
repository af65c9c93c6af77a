//! Typed bindings for the OpenGL 4.6 core profile.
//!
//! A [`Gl`] is loaded once per context from a [`GetProcAddress`] loader and
//! exposes every core command as a method. Enumerant groups and bitfields
//! are typed where the registry defines them, names are passed as `&str`
//! and vertex attribute indices are checked before they reach the driver.
//!
//! ```no_run
//! # fn loader(_: &str) -> *const std::os::raw::c_void { std::ptr::null() }
//! use glcore::{enums::Capability, GlBuilder};
//!
//! let gl = unsafe {
//!     GlBuilder::new()
//!         .with_minimum_version(4, 5)
//!         .with_required_function("glBufferStorage")
//!         .build(loader)
//! }?;
//! gl.enable(Capability::DepthTest);
//! # Ok::<(), glcore::Error>(())
//! ```

pub use glcore_sys as sys;

pub mod builder;
mod commands;
mod context;
pub mod debug;
pub mod enums;
pub mod error;
pub mod extensions;
pub mod flags;
pub mod index;
pub mod loader;
mod util;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::GlBuilder;
pub use commands::{buffer_offset, typed_commands, ActiveVariable, COMPATIBILITY_ONLY};
pub use context::Gl;
pub use debug::DebugMessage;
pub use error::{Error, Result};
pub use extensions::{ExtensionSet, KnownExtension};
pub use index::IntoIndex;
pub use loader::GetProcAddress;
#[cfg(feature = "system-loader")]
pub use loader::SystemLoader;
pub use sys::types;
pub use version::Version;
