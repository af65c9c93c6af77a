use gl_generator::{Api, Binding, Fallbacks, Profile, Registry};
use serde::Serialize;
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid version {0:?}, expected MAJOR.MINOR")]
    InvalidVersion(String),

    #[error("{api} {major}.{minor} is not a published version")]
    UnknownVersion { api: ApiName, major: u8, minor: u8 },

    #[error("{0} registry commands are not bound")]
    IncompleteCoverage(usize),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

const GL_VERSIONS: &[(u8, u8)] = &[
    (1, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 0),
    (2, 1),
    (3, 0),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 0),
    (4, 1),
    (4, 2),
    (4, 3),
    (4, 4),
    (4, 5),
    (4, 6),
];
const GLES2_VERSIONS: &[(u8, u8)] = &[(2, 0), (3, 0), (3, 1), (3, 2)];

/// Parses `MAJOR.MINOR`, e.g. `4.6`.
pub fn parse_version(value: &str) -> Result<(u8, u8)> {
    let invalid = || Error::InvalidVersion(value.to_owned());

    let (major, minor) = value.trim().split_once('.').ok_or_else(invalid)?;
    let major = major.parse().map_err(|_| invalid())?;
    let minor = minor.parse().map_err(|_| invalid())?;
    Ok((major, minor))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiName {
    Gl,
    Gles2,
}

impl ApiName {
    fn versions(self) -> &'static [(u8, u8)] {
        match self {
            ApiName::Gl => GL_VERSIONS,
            ApiName::Gles2 => GLES2_VERSIONS,
        }
    }
}

impl From<ApiName> for Api {
    fn from(value: ApiName) -> Self {
        match value {
            ApiName::Gl => Api::Gl,
            ApiName::Gles2 => Api::Gles2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    Core,
    Compatibility,
}

impl From<ProfileName> for Profile {
    fn from(value: ProfileName) -> Self {
        match value {
            ProfileName::Core => Profile::Core,
            ProfileName::Compatibility => Profile::Compatibility,
        }
    }
}

/// Selects a slice of the Khronos registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrySpec {
    pub api: ApiName,
    pub version: (u8, u8),
    pub profile: ProfileName,
}

impl RegistrySpec {
    pub fn new(api: ApiName, version: (u8, u8), profile: ProfileName) -> Result<Self> {
        if !api.versions().contains(&version) {
            return Err(Error::UnknownVersion {
                api,
                major: version.0,
                minor: version.1,
            });
        }

        Ok(Self {
            api,
            version,
            profile,
        })
    }

    /// The slice `glcore-sys` is generated from.
    pub fn bound() -> Self {
        Self {
            api: ApiName::Gl,
            version: glcore_sys::PROFILE_VERSION,
            profile: ProfileName::Core,
        }
    }

    pub fn with_version(self, version: (u8, u8)) -> Result<Self> {
        Self::new(self.api, version, self.profile)
    }

    fn registry(&self) -> Registry {
        debug!(
            "Loading the {} {}.{} {} registry",
            self.api, self.version.0, self.version.1, self.profile
        );
        let extensions: [&str; 0] = [];
        Registry::new(
            self.api.into(),
            self.version,
            self.profile.into(),
            Fallbacks::None,
            extensions,
        )
    }

    /// Every command of the slice, sorted by name.
    pub fn commands(&self) -> Vec<CommandInfo> {
        let mut commands: Vec<_> = self
            .registry()
            .cmds
            .iter()
            .map(|cmd| CommandInfo {
                name: format!("gl{}", cmd.proto.ident),
                params: cmd.params.iter().map(ParamInfo::from).collect(),
                returns: type_name(&cmd.proto.ty),
            })
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    pub fn command_names(&self) -> BTreeSet<String> {
        self.commands().into_iter().map(|command| command.name).collect()
    }
}

// gl_generator spells types as Rust paths, e.g. `*const types::GLchar`.
fn type_name(ty: &str) -> String {
    ty.replace("types::", "")
        .replace("__gl_imports::raw::", "")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl From<&Binding> for ParamInfo {
    fn from(binding: &Binding) -> Self {
        Self {
            name: binding.ident.clone(),
            ty: type_name(&binding.ty),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub name: String,
    pub params: Vec<ParamInfo>,
    pub returns: String,
}

impl CommandInfo {
    /// `name: type` pairs joined with commas.
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(|param| format!("{}: {}", param.name, param.ty))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which command list a coverage report is taken against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Commands with a typed `glcore::Gl` method.
    Typed,
    /// Every entry of the `glcore-sys` function table.
    Raw,
}

/// How a set of bound commands compares to a registry slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub registry: usize,
    pub bound: usize,
    /// In the registry but not bound.
    pub missing: Vec<String>,
    /// In the registry and deliberately not bound.
    pub excluded: Vec<String>,
    /// Bound but beyond the registry slice.
    pub extra: Vec<String>,
}

impl Coverage {
    pub fn compute<I, S>(registry: &BTreeSet<String>, bound: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bound: BTreeSet<String> = bound.into_iter().map(Into::into).collect();

        Self {
            registry: registry.len(),
            bound: bound.len(),
            missing: registry.difference(&bound).cloned().collect(),
            excluded: vec![],
            extra: bound.difference(registry).cloned().collect(),
        }
    }

    /// Moves the missing commands named in `excluded` out of `missing`.
    pub fn with_exclusions(mut self, names: &[&str]) -> Self {
        let (excluded, missing): (Vec<String>, Vec<String>) = self
            .missing
            .into_iter()
            .partition(|name| names.contains(&name.as_str()));
        self.missing = missing;
        self.excluded = excluded;
        self
    }

    /// Compares `glcore_sys::COMMANDS` with `spec`.
    pub fn of_bindings(spec: &RegistrySpec) -> Self {
        Self::compute(&spec.command_names(), glcore_sys::COMMANDS.iter().copied())
    }

    /// Compares the commands with a `glcore::Gl` method with `spec`. The
    /// compatibility-only commands of the core slice count as excluded.
    pub fn of_typed_surface(spec: &RegistrySpec) -> Self {
        Self::compute(&spec.command_names(), glcore::typed_commands())
            .with_exclusions(glcore::COMPATIBILITY_ONLY)
    }

    pub fn of_surface(surface: Surface, spec: &RegistrySpec) -> Self {
        match surface {
            Surface::Typed => Self::of_typed_surface(spec),
            Surface::Raw => Self::of_bindings(spec),
        }
    }

    /// Registry commands that are expected to be bound.
    pub fn expected(&self) -> usize {
        self.registry - self.excluded.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of the expected commands that is bound, in percent.
    pub fn percent(&self) -> f64 {
        match self.expected() {
            0 => 100.0,
            total => (total - self.missing.len()) as f64 * 100.0 / total as f64,
        }
    }
}

/// Commands present in `to` but not in `from`, and the reverse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl Diff {
    pub fn compute(from: &BTreeSet<String>, to: &BTreeSet<String>) -> Self {
        Self {
            added: to.difference(from).cloned().collect(),
            removed: from.difference(to).cloned().collect(),
        }
    }
}
