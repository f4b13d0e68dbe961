//! Flags shared by both binaries. Neither needs any to do its job.

use anyhow::{bail, Context};

use crate::color::Rgb;

pub const USAGE: &str = "options: [-v] [--manifest] [--color #rrggbb (generate-icons only)]";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// `-v`: log at info instead of error.
    pub verbose: bool,
    /// `--manifest`: print the manifest `icons` fragment when done.
    pub manifest: bool,
    /// `--color #rrggbb`: fill for the generated solid icons.
    pub color: Option<Rgb>,
}
impl Options {
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-v" => options.verbose = true,
                "--manifest" => options.manifest = true,
                "--color" => {
                    let value = args.next().context("--color needs a value")?;
                    options.color = Some(value.as_ref().parse()?);
                }
                other => bail!("unexpected argument {other:?}"),
            }
        }
        Ok(options)
    }

    pub fn init_logger(&self) {
        let verbosity = if self.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Error
        };
        pretty_env_logger::formatted_builder()
            .filter_level(verbosity)
            .init();
    }
}
