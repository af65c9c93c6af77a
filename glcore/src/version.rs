use crate::{
    enums::StringName,
    error::{Error, Result},
    Gl,
};
use std::{fmt, str::FromStr};
use tracing::warn;

const EMBEDDED_PREFIXES: &[&str] = &["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

/// A context or shading language version as reported by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    /// Whether the string came from an OpenGL ES context.
    pub embedded: bool,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            embedded: false,
        }
    }

    pub const fn embedded(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            embedded: true,
        }
    }

    /// Whether this version is at least `major.minor`, ignoring the API.
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }

    /// Whether a context of this version meets `required`. Desktop and ES
    /// versions never satisfy each other.
    pub fn satisfies(&self, required: Version) -> bool {
        self.embedded == required.embedded && self.at_least(required.major, required.minor)
    }

    /// Parses strings of the form
    /// `<major>.<minor>[.<release>] [vendor-specific information]`,
    /// optionally prefixed by `OpenGL ES`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidVersion(value.to_owned());

        let trimmed = value.trim();
        let (embedded, rest) = EMBEDDED_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .map_or((false, trimmed), |rest| (true, rest));
        // GLSL ES reports "OpenGL ES GLSL ES 3.20"
        let rest = rest.strip_prefix("GLSL ES ").unwrap_or(rest);

        let number = rest.split_whitespace().next().ok_or_else(invalid)?;
        let mut parts = number.split('.');
        let major = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(leading_digits)
            .ok_or_else(invalid)?;

        Ok(Self {
            major,
            minor,
            embedded,
        })
    }
}

// GLSL versions such as "4.60" are reported with two minor digits.
fn leading_digits(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    let digits = &part[..end];
    let digits = match digits.len() {
        2 if digits.ends_with('0') => &digits[..1],
        _ => digits,
    };
    digits.parse().ok()
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.embedded {
            write!(f, "ES {}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

impl Gl {
    /// The context version, parsed from `GL_VERSION` on first use.
    pub fn version(&self) -> Result<Version> {
        if let Some(version) = self.version.get() {
            return Ok(*version);
        }

        let version = self.query_version(StringName::Version)?;
        Ok(*self.version.get_or_init(|| version))
    }

    /// Parses `GL_SHADING_LANGUAGE_VERSION`. Not cached.
    pub fn shading_language_version(&self) -> Result<Version> {
        self.query_version(StringName::ShadingLanguageVersion)
    }

    fn query_version(&self, name: StringName) -> Result<Version> {
        self.require("glGetString")?;
        let value = self.get_string(name).unwrap_or_default();
        Version::parse(&value).map_err(|err| {
            warn!("Could not parse {name}: {err}");
            err
        })
    }
}
