//! Extension discovery.

use crate::{
    enums::StringName,
    error::Result,
    sys::{self, types::GLuint},
    Gl,
};
use std::{collections::BTreeMap, fmt};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

macro_rules! known_extensions {
    ($($variant:ident = $name:literal,)*) => {
        /// Every extension the Khronos registry lists for desktop OpenGL,
        /// displayed and parsed by its registry name.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
            IntoStaticStr,
        )]
        pub enum KnownExtension {
            $(
                #[strum(serialize = $name)]
                $variant,
            )*
        }
    };
}

sys::for_each_extension!(known_extensions);

impl KnownExtension {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Extension names reported by a context. Lookups ignore ASCII case.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    // lowercase name -> name as reported
    names: BTreeMap<String, String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits the space separated list returned by `glGetString(GL_EXTENSIONS)`.
    pub fn parse(list: &str) -> Self {
        list.split_ascii_whitespace().collect()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names
            .insert(name.to_ascii_lowercase(), name.to_owned())
            .is_none()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_ascii_lowercase())
    }

    pub fn contains_known(&self, extension: KnownExtension) -> bool {
        self.contains(extension.name())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names as the driver spelled them, sorted case-insensitively.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.values().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl fmt::Debug for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Gl {
    /// Queries the extension list again and replaces the cached one.
    ///
    /// OpenGL 3.0 and later contexts are enumerated with `glGetStringi`, older
    /// ones through the space separated `GL_EXTENSIONS` string.
    pub fn reload_extensions(&self) -> Result<ExtensionSet> {
        let version = self.version()?;

        let extensions = if version.at_least(3, 0) && self.is_loaded("glGetStringi") {
            let count = GLuint::try_from(self.get_integer(sys::NUM_EXTENSIONS)).unwrap_or(0);
            (0..count)
                .filter_map(|index| self.get_stringi(StringName::Extensions, index))
                .collect()
        } else {
            ExtensionSet::parse(&self.get_string(StringName::Extensions).unwrap_or_default())
        };

        debug!("OpenGL {version} reports {} extensions", extensions.len());
        self.extensions.replace(Some(extensions.clone()));
        Ok(extensions)
    }

    /// The cached extension list, loading it on first use.
    pub fn extensions(&self) -> Result<ExtensionSet> {
        let cached = self.extensions.borrow().clone();
        match cached {
            Some(extensions) => Ok(extensions),
            None => self.reload_extensions(),
        }
    }

    /// Whether the context reports `name`, e.g. `"GL_KHR_debug"`. Contexts
    /// whose extensions cannot be queried report nothing.
    pub fn is_extension_supported(&self, name: &str) -> bool {
        let loaded = self.extensions.borrow().is_some();
        if !loaded && self.reload_extensions().is_err() {
            return false;
        }

        self.extensions
            .borrow()
            .as_ref()
            .is_some_and(|extensions| extensions.contains(name))
    }
}
