//! CLI helpers.

pub(crate) mod error;
mod output;
mod stderr_logger;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use arrayvec::ArrayVec;

pub use self::error::{error_context, LineCol};
pub use self::output::{Output, OutputKind};
use crate::input::{FromInput, IStr};
use crate::scenario::{Config, Variant};
use crate::{Margin, Point};

static LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input options.
#[derive(Debug)]
pub struct Opts {
    /// Only run the given variant.
    pub part: Option<Variant>,
    /// Simulation configuration.
    pub config: Config,
    /// Render the final frame.
    pub render: bool,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Input file.
    pub path: PathBuf,
}

impl Opts {
    /// Parse CLI options and set up logging.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut it = args.into_iter();

        let mut part = None;
        let mut config = Config::default();
        let mut render = true;
        let mut verbose = false;
        let mut json = false;
        let mut path = None;

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--part" => {
                    if part.is_some() {
                        bail!("duplicate `--part` arguments");
                    }

                    part = Some(match value::<u32>(&mut it, "--part")? {
                        1 => Variant::Void,
                        2 => Variant::Floor,
                        n => bail!("no such part `{n}`"),
                    });
                }
                "--source" => {
                    config.source = value::<Point>(&mut it, "--source")?;
                }
                "--max-drops" => {
                    config.max_drops = Some(value(&mut it, "--max-drops")?);
                }
                "--margin" => {
                    let n = value::<u16>(&mut it, "--margin")?;
                    config.margin = Some(Margin::uniform(i32::from(n)));
                }
                "--no-render" => {
                    render = false;
                }
                "--verbose" => {
                    verbose = true;
                }
                "--json" => {
                    json = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    set_path(&mut path, other.into())?;
                }
            }
        }

        for arg in it {
            set_path(&mut path, arg.into())?;
        }

        let path = path.context("missing input path")?;

        Ok(Self {
            part,
            config,
            render,
            verbose,
            json,
            path,
        })
    }

    /// Variants to run, in order.
    pub fn variants(&self) -> ArrayVec<Variant, 2> {
        match self.part {
            Some(variant) => [variant].into_iter().collect(),
            None => Variant::ALL.into(),
        }
    }

    /// Construct an output writer matching the options.
    pub fn output<O>(&self, out: O) -> Output<O>
    where
        O: Write,
    {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(out, kind)
    }
}

fn set_path(path: &mut Option<PathBuf>, value: PathBuf) -> Result<()> {
    if let Some(existing) = path {
        bail!(
            "unexpected argument `{}`, input is already `{}`",
            value.display(),
            existing.display()
        );
    }

    *path = Some(value);
    Ok(())
}

/// Parse the value following an option.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: FromInput,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;
    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;

    IStr::new(value.as_bytes())
        .next::<T>()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}
