use crate::{
    error::{Error, Result},
    extensions::ExtensionSet,
    loader::{self, GetProcAddress},
    sys,
    version::Version,
};
use std::{
    cell::{OnceCell, RefCell},
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt,
    os::raw::c_void,
    ptr::{self, NonNull},
};
use tracing::{debug, trace};

/// The OpenGL 4.6 core entry points of one context.
///
/// Every method forwards to the driver function resolved when the table was
/// loaded. Calling a method whose entry point is missing panics; use
/// [`Gl::is_loaded`] or [`GlBuilder`](crate::GlBuilder) to check beforehand.
///
/// `Gl` is `Send` but not `Sync`. It may be moved to the thread that makes
/// its context current, but must not be used from two threads at once.
pub struct Gl {
    pub(crate) raw: sys::Gl,
    addresses: BTreeMap<&'static str, *const c_void>,
    missing: BTreeSet<&'static str>,
    filter_sentinels: bool,
    pub(crate) version: OnceCell<Version>,
    pub(crate) extensions: RefCell<Option<ExtensionSet>>,
}

// The table only stores code addresses of the driver.
unsafe impl Send for Gl {}

impl Gl {
    /// Resolves every entry point through `loader`.
    ///
    /// # Safety
    ///
    /// The loader must return addresses of functions matching the OpenGL
    /// signatures for the context they were queried for. Methods of the
    /// returned table may only be called while that context is current on
    /// the calling thread.
    pub unsafe fn load_with<L: GetProcAddress>(loader: L) -> Self {
        Self::load(loader, true)
    }

    pub(crate) unsafe fn load<L: GetProcAddress>(mut loader: L, filter_sentinels: bool) -> Self {
        let (raw, addresses) = resolve_all(&mut loader, filter_sentinels);
        let mut gl = Self {
            raw,
            addresses,
            missing: BTreeSet::new(),
            filter_sentinels,
            version: OnceCell::new(),
            extensions: RefCell::new(None),
        };
        gl.update_missing();
        gl
    }

    /// Resolves every entry point again and clears the cached version and
    /// extension list.
    ///
    /// # Safety
    ///
    /// See [`Gl::load_with`].
    pub unsafe fn reload_with<L: GetProcAddress>(&mut self, mut loader: L) {
        let (raw, addresses) = resolve_all(&mut loader, self.filter_sentinels);
        self.raw = raw;
        self.addresses = addresses;
        self.version = OnceCell::new();
        self.extensions.replace(None);
        self.update_missing();
    }

    /// Resolves a single entry point again, leaving the others untouched.
    ///
    /// Returns whether `symbol` is available afterwards. Symbols that are not
    /// part of the table are ignored and report `false`.
    ///
    /// # Safety
    ///
    /// See [`Gl::load_with`].
    pub unsafe fn load_function<L: GetProcAddress>(&mut self, symbol: &str, mut loader: L) -> bool {
        let Some(symbol) = command(symbol) else {
            let (major, minor) = sys::PROFILE_VERSION;
            debug!("{symbol} is not an OpenGL {major}.{minor} core command");
            return false;
        };

        let address = filter(loader.get_proc_address(symbol), self.filter_sentinels);
        if address.is_null() {
            self.addresses.remove(symbol);
        } else {
            self.addresses.insert(symbol, address);
        }

        let addresses = &self.addresses;
        self.raw = sys::Gl::load_with(|name| addresses.get(name).copied().unwrap_or(ptr::null()));
        self.update_missing();

        !address.is_null()
    }

    /// Whether the driver provided `symbol`, e.g. `"glBufferStorage"`.
    pub fn is_loaded(&self, symbol: &str) -> bool {
        self.addresses.contains_key(symbol)
    }

    pub fn loaded_functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.addresses.keys().copied()
    }

    pub fn missing_functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.missing.iter().copied()
    }

    /// The driver address resolved for `symbol`.
    pub fn function_address(&self, symbol: &str) -> Option<NonNull<c_void>> {
        self.addresses
            .get(symbol)
            .and_then(|address| NonNull::new(address.cast_mut()))
    }

    /// The underlying function table.
    pub fn raw(&self) -> &sys::Gl {
        &self.raw
    }

    pub(crate) fn require(&self, symbol: &'static str) -> Result<()> {
        match self.is_loaded(symbol) {
            true => Ok(()),
            false => Err(Error::FunctionNotLoaded(symbol)),
        }
    }

    fn update_missing(&mut self) {
        self.missing = sys::COMMANDS
            .iter()
            .copied()
            .filter(|name| !self.addresses.contains_key(name))
            .collect();

        for name in &self.missing {
            trace!("{name} is not provided by the driver");
        }
        debug!(
            "Loaded {} OpenGL entry points, {} missing",
            self.addresses.len(),
            self.missing.len()
        );
    }
}

impl fmt::Debug for Gl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gl")
            .field("loaded", &self.addresses.len())
            .field("missing", &self.missing.len())
            .field("version", &self.version.get())
            .finish_non_exhaustive()
    }
}

fn command(symbol: &str) -> Option<&'static str> {
    sys::COMMANDS.iter().copied().find(|name| *name == symbol)
}

fn filter(address: *const c_void, filter_sentinels: bool) -> *const c_void {
    if filter_sentinels && loader::is_sentinel(address) {
        ptr::null()
    } else {
        address
    }
}

/// Loads the raw table, recording the address every command resolved to.
///
/// The generated loader asks for a command's aliases right after the command
/// itself when the primary symbol is missing, so an alias hit is attributed
/// to the last primary symbol requested.
fn resolve_all<L: GetProcAddress>(
    loader: &mut L,
    filter_sentinels: bool,
) -> (sys::Gl, BTreeMap<&'static str, *const c_void>) {
    let commands: HashSet<&'static str> = sys::COMMANDS.iter().copied().collect();
    let mut addresses = BTreeMap::new();
    let mut current = None;

    let raw = sys::Gl::load_with(|symbol| {
        let address = filter(loader.get_proc_address(symbol), filter_sentinels);

        if commands.contains(symbol) {
            current = Some(symbol);
            if !address.is_null() {
                addresses.insert(symbol, address);
            }
        } else if let Some(primary) = current {
            if !address.is_null() {
                trace!("{primary} resolved through {symbol}");
                addresses.entry(primary).or_insert(address);
            }
        }

        address
    });

    (raw, addresses)
}
