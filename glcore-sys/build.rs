use gl_generator::{Api, DebugStructGenerator, Fallbacks, Profile, Registry, StructGenerator};
use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;
use xml::reader::{EventReader, XmlEvent};

const GL_VERSION: (u8, u8) = (4, 6);

fn main() -> Result<(), BuildError> {
    Cargo::print_instructions();

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let registry = Registry::new(Api::Gl, GL_VERSION, Profile::Core, Fallbacks::All, []);

    BindingsWriter::new(&registry).write(&out_dir)?;
    ExtensionsWriter::from_registry(khronos_api::GL_XML)?.write(&out_dir)?;

    Ok(())
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("OUT_DIR is not set: {0}")]
    OutDir(#[from] env::VarError),

    #[error("failed to read the extension list: {0}")]
    Xml(#[from] xml::reader::Error),
}

struct Cargo {}

impl Cargo {
    fn print_instructions() {
        println!("cargo::rerun-if-changed=build.rs");
        println!("cargo::rerun-if-changed=src/lib.rs");
    }

    fn debug_calls() -> bool {
        env::var_os("CARGO_FEATURE_DEBUG_CALLS").is_some()
    }
}

struct BindingsWriter<'a> {
    registry: &'a Registry,
}

impl<'a> BindingsWriter<'a> {
    fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    fn write(&self, out_dir: &Path) -> Result<(), BuildError> {
        let mut bindings = BufWriter::new(File::create(out_dir.join("gl_bindings.rs"))?);
        if Cargo::debug_calls() {
            self.registry
                .write_bindings(DebugStructGenerator, &mut bindings)?;
        } else {
            self.registry.write_bindings(StructGenerator, &mut bindings)?;
        }
        bindings.flush()?;

        let mut commands = BufWriter::new(File::create(out_dir.join("gl_commands.rs"))?);
        self.write_commands(&mut commands)?;
        commands.flush()?;

        Ok(())
    }

    fn write_commands<W: Write>(&self, out: &mut W) -> Result<(), BuildError> {
        let (major, minor) = GL_VERSION;

        writeln!(out, "/// Version of the core profile the table was generated for.")?;
        writeln!(out, "pub const PROFILE_VERSION: (u8, u8) = ({major}, {minor});")?;
        writeln!(out)?;
        writeln!(out, "/// Every command symbol present in [`Gl`].")?;
        writeln!(out, "pub const COMMANDS: &[&str] = &[")?;
        for cmd in &self.registry.cmds {
            writeln!(out, "    \"gl{}\",", cmd.proto.ident)?;
        }
        writeln!(out, "];")?;

        Ok(())
    }
}

/// Lists every extension the registry marks as supported by desktop GL.
struct ExtensionsWriter {
    names: Vec<String>,
}

impl ExtensionsWriter {
    fn from_registry(xml: &[u8]) -> Result<Self, BuildError> {
        let mut names = Vec::new();
        for event in EventReader::new(xml) {
            let XmlEvent::StartElement {
                name, attributes, ..
            } = event?
            else {
                continue;
            };
            if name.local_name != "extension" {
                continue;
            }

            let attribute = |key: &str| {
                attributes
                    .iter()
                    .find(|attribute| attribute.name.local_name == key)
                    .map(|attribute| attribute.value.as_str())
            };
            let desktop = attribute("supported")
                .is_some_and(|supported| supported.split('|').any(|api| api == "gl"));
            if let (true, Some(extension)) = (desktop, attribute("name")) {
                names.push(extension.to_owned());
            }
        }
        names.sort();
        names.dedup();

        Ok(Self { names })
    }

    fn write(&self, out_dir: &Path) -> Result<(), BuildError> {
        let mut out = BufWriter::new(File::create(out_dir.join("gl_extensions.rs"))?);

        writeln!(out, "/// Every extension the registry lists for desktop OpenGL.")?;
        writeln!(out, "pub const EXTENSION_NAMES: &[&str] = &[")?;
        for name in &self.names {
            writeln!(out, "    \"{name}\",")?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(out, "/// Invokes `$callback! {{ Variant = \"GL_name\", .. }}` with every entry")?;
        writeln!(out, "/// of [`EXTENSION_NAMES`].")?;
        writeln!(out, "#[macro_export]")?;
        writeln!(out, "macro_rules! for_each_extension {{")?;
        writeln!(out, "    ($callback:ident) => {{")?;
        writeln!(out, "        $callback! {{")?;
        for name in &self.names {
            writeln!(out, "            {} = \"{name}\",", variant(name))?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }};")?;
        writeln!(out, "}}")?;

        out.flush()?;
        Ok(())
    }
}

/// `GL_ARB_gl_spirv` becomes `ArbGlSpirv`. Vendors starting with a digit,
/// such as `3DFX`, keep the `Gl` prefix.
fn variant(name: &str) -> String {
    let stem = name.strip_prefix("GL_").unwrap_or(name);
    let mut variant: String = stem
        .split('_')
        .flat_map(|word| {
            let mut chars = word.chars();
            let first = chars.next().map(|first| first.to_ascii_uppercase());
            first.into_iter().chain(chars.map(|c| c.to_ascii_lowercase()))
        })
        .collect();
    if variant.starts_with(|c: char| c.is_ascii_digit()) {
        variant.insert_str(0, "Gl");
    }
    variant
}
