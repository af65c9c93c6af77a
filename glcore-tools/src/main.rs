use clap::{Args, Parser, Subcommand};
use glcore_tools::{
    parse_version, ApiName, Coverage, Diff, Error, ProfileName, RegistrySpec, Surface,
};
use serde::Serialize;
use strum::{Display, EnumString};
use tabled::{builder::Builder, settings::Style};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List registry commands with their parameter and return types.
    Commands {
        #[command(flatten)]
        registry: RegistryArgs,

        /// Only list commands starting with this prefix, e.g. `glUniform`
        #[arg(long)]
        filter: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare the bound commands with a registry version.
    Coverage {
        #[command(flatten)]
        registry: RegistryArgs,

        /// Commands to count: typed (glcore methods) or raw (glcore-sys table)
        #[arg(long, default_value = "typed")]
        surface: Surface,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the commands added and removed between two versions.
    Diff {
        /// Version to compare from, as MAJOR.MINOR
        #[arg(long, value_parser = parse_version)]
        from: (u8, u8),

        /// Version to compare to, as MAJOR.MINOR
        #[arg(long, value_parser = parse_version)]
        to: (u8, u8),

        /// Registry API: gl or gles2
        #[arg(long, default_value = "gl")]
        api: ApiName,

        /// Registry profile: core or compatibility
        #[arg(long, default_value = "core")]
        profile: ProfileName,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct RegistryArgs {
    /// Registry API: gl or gles2
    #[arg(long, default_value = "gl")]
    api: ApiName,

    /// Registry version, as MAJOR.MINOR
    #[arg(long, default_value = "4.6", value_parser = parse_version)]
    version: (u8, u8),

    /// Registry profile: core or compatibility
    #[arg(long, default_value = "core")]
    profile: ProfileName,
}

impl RegistryArgs {
    fn spec(&self) -> Result<RegistrySpec, Error> {
        RegistrySpec::new(self.api, self.version, self.profile)
    }
}

#[derive(Clone, Copy, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Format {
    Table,
    Json,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    format: Format,
}

impl OutputArgs {
    fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        return Ok(());
    };

    match command {
        Command::Commands {
            registry,
            filter,
            output,
        } => {
            let commands: Vec<_> = registry
                .spec()?
                .commands()
                .into_iter()
                .filter(|command| {
                    filter
                        .as_deref()
                        .map_or(true, |prefix| command.name.starts_with(prefix))
                })
                .collect();

            if output.is_json() {
                return print_json(&commands);
            }

            let mut builder = Builder::default();
            builder.push_record(["command", "parameters", "returns"]);
            for command in &commands {
                builder.push_record([
                    command.name.as_str(),
                    command.signature().as_str(),
                    command.returns.as_str(),
                ]);
            }
            print_table(builder);

            Ok(())
        }
        Command::Coverage {
            registry,
            surface,
            output,
        } => {
            let spec = registry.spec()?;
            let coverage = Coverage::of_surface(*surface, &spec);

            if output.is_json() {
                print_json(&coverage)?;
            } else {
                let (major, minor) = spec.version;
                println!(
                    "{} of {} {} {major}.{minor} {} commands bound by the {surface} surface \
                     ({:.1}%), {} excluded",
                    coverage.expected() - coverage.missing.len(),
                    coverage.expected(),
                    spec.api,
                    spec.profile,
                    coverage.percent(),
                    coverage.excluded.len()
                );

                let mut builder = Builder::default();
                for name in &coverage.missing {
                    builder.push_record(["missing", name.as_str()]);
                }
                for name in &coverage.excluded {
                    builder.push_record(["compatibility only", name.as_str()]);
                }
                for name in &coverage.extra {
                    builder.push_record(["beyond version", name.as_str()]);
                }
                if builder.count_records() > 0 {
                    print_table(builder);
                }
            }

            match coverage.is_complete() {
                true => Ok(()),
                false => Err(Error::IncompleteCoverage(coverage.missing.len())),
            }
        }
        Command::Diff {
            from,
            to,
            api,
            profile,
            output,
        } => {
            let from = RegistrySpec::new(*api, *from, *profile)?;
            let to = from.with_version(*to)?;
            let diff = Diff::compute(&from.command_names(), &to.command_names());

            if output.is_json() {
                return print_json(&diff);
            }

            let mut builder = Builder::default();
            for name in &diff.added {
                builder.push_record(["+", name.as_str()]);
            }
            for name in &diff.removed {
                builder.push_record(["-", name.as_str()]);
            }
            print_table(builder);

            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(builder: Builder) {
    let mut table = builder.build();
    table.with(Style::blank());
    println!("{}", table);
}
