use crate::{
    error::{Error, Result},
    loader::GetProcAddress,
    version::Version,
    Gl,
};
use tracing::{debug, warn};

/// Loads a [`Gl`] and validates it against the caller's requirements.
pub struct GlBuilder {
    pub(crate) required: Vec<&'static str>,
    pub(crate) minimum_version: Option<Version>,
    pub(crate) filter_sentinels: bool,
}

impl GlBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            required: vec![],
            minimum_version: None,
            filter_sentinels: true,
        }
    }

    /// Fails the build if `symbol`, e.g. `"glBufferStorage"`, cannot be
    /// loaded.
    pub fn with_required_function(mut self, symbol: &'static str) -> Self {
        self.required.push(symbol);
        self
    }

    pub fn with_required_functions<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.required.extend(symbols);
        self
    }

    /// Fails the build unless `GL_VERSION` reports desktop OpenGL
    /// `major.minor` or later. ES contexts are rejected.
    pub fn with_minimum_version(mut self, major: u32, minor: u32) -> Self {
        self.minimum_version = Some(Version::new(major, minor));
        self
    }

    /// Fails the build unless `GL_VERSION` reports OpenGL ES `major.minor`
    /// or later.
    pub fn with_minimum_es_version(mut self, major: u32, minor: u32) -> Self {
        self.minimum_version = Some(Version::embedded(major, minor));
        self
    }

    /// Treat the addresses `1`, `2`, `3` and `-1` as missing. On by default.
    pub fn with_sentinel_filtering(mut self, filter: bool) -> Self {
        self.filter_sentinels = filter;
        self
    }

    /// # Safety
    ///
    /// See [`Gl::load_with`]. With a minimum version set, the context must
    /// also be current on the calling thread, since `GL_VERSION` is queried.
    pub unsafe fn build<L: GetProcAddress>(self, loader: L) -> Result<Gl> {
        let gl = Gl::load(loader, self.filter_sentinels);

        let missing: Vec<&'static str> = self
            .required
            .iter()
            .copied()
            .filter(|symbol| !gl.is_loaded(symbol))
            .collect();
        if !missing.is_empty() {
            warn!("Required OpenGL functions are missing: {}", missing.join(", "));
            return Err(Error::MissingFunctions(missing));
        }

        if let Some(required) = self.minimum_version {
            let actual = gl.version()?;
            if !actual.satisfies(required) {
                return Err(Error::UnsupportedVersion { required, actual });
            }
            debug!("OpenGL {actual} satisfies the minimum of {required}");
        }

        Ok(gl)
    }
}
