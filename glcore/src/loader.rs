//! Resolution of GL entry points.

use std::os::raw::c_void;

/// Maps a GL symbol name such as `"glBindBuffer"` to the driver's address for
/// it, returning null when the symbol is unavailable.
pub trait GetProcAddress {
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void;
}

impl<F> GetProcAddress for F
where
    F: FnMut(&str) -> *const c_void,
{
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self(symbol)
    }
}

/// Some drivers report unsupported entry points as small integers or `-1`
/// instead of null.
pub(crate) fn is_sentinel(address: *const c_void) -> bool {
    matches!(address as usize, 1 | 2 | 3 | usize::MAX)
}

#[cfg(feature = "glutin")]
pub mod glutin {
    use ::glutin::display::{Display, GlDisplay};
    use std::{ffi::CString, os::raw::c_void, ptr};

    /// Resolves symbols through the display's `get_proc_address`.
    pub fn proc_loader(display: &Display) -> impl FnMut(&str) -> *const c_void + '_ {
        move |symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(&symbol),
            Err(_) => ptr::null(),
        }
    }
}

#[cfg(feature = "system-loader")]
pub use system::SystemLoader;

#[cfg(feature = "system-loader")]
mod system {
    use super::GetProcAddress;
    use crate::error::{Error, Result};
    use libloading::Library;
    use std::{ffi::CString, os::raw::c_char, os::raw::c_void, ptr};
    use tracing::debug;

    type GetProcAddressFn = unsafe extern "system" fn(*const c_char) -> *const c_void;

    #[cfg(target_os = "windows")]
    const LIBRARIES: &[&str] = &["opengl32.dll"];
    #[cfg(target_os = "macos")]
    const LIBRARIES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    const LIBRARIES: &[&str] = &["libGL.so.1", "libGL.so"];

    #[cfg(target_os = "windows")]
    const PROC_ADDRESS_FUNCTIONS: &[&[u8]] = &[b"wglGetProcAddress\0"];
    #[cfg(target_os = "macos")]
    const PROC_ADDRESS_FUNCTIONS: &[&[u8]] = &[];
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    const PROC_ADDRESS_FUNCTIONS: &[&[u8]] = &[b"glXGetProcAddressARB\0", b"glXGetProcAddress\0"];

    /// Loads entry points from the platform's OpenGL library.
    ///
    /// Symbols are first looked up through the window-system loader
    /// (`wglGetProcAddress`, `glXGetProcAddressARB`). Entry points it does not
    /// know, such as the OpenGL 1.1 functions on Windows, are then resolved
    /// as plain exports of the library.
    pub struct SystemLoader {
        library: Library,
        get_proc_address: Option<GetProcAddressFn>,
    }

    impl SystemLoader {
        pub fn open() -> Result<Self> {
            for name in LIBRARIES {
                match unsafe { Library::new(name) } {
                    Ok(library) => {
                        debug!("Opened OpenGL library {name}");
                        return Ok(Self::with_library(library));
                    }
                    Err(err) => debug!("Could not open {name}: {err}"),
                }
            }

            Err(Error::NoLibrary)
        }

        pub fn with_library(library: Library) -> Self {
            let get_proc_address = PROC_ADDRESS_FUNCTIONS.iter().find_map(|symbol| unsafe {
                library.get::<GetProcAddressFn>(symbol).ok().map(|f| *f)
            });

            Self {
                library,
                get_proc_address,
            }
        }

        fn lookup(&self, symbol: &str) -> *const c_void {
            let Ok(symbol) = CString::new(symbol) else {
                return ptr::null();
            };

            if let Some(get_proc_address) = self.get_proc_address {
                let address = unsafe { get_proc_address(symbol.as_ptr()) };
                if !address.is_null() && !super::is_sentinel(address) {
                    return address;
                }
            }

            unsafe {
                self.library
                    .get::<*const c_void>(symbol.as_bytes_with_nul())
                    .map(|address| *address)
                    .unwrap_or(ptr::null())
            }
        }
    }

    impl GetProcAddress for SystemLoader {
        fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
            self.lookup(symbol)
        }
    }
}
