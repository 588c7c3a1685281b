use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use reservoir::cli::{self, Opts};
use reservoir::scenario::Simulation;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("{0}: failed to read input")]
    Read(Box<Path>),
    #[error("part {0}: simulation failed")]
    Simulation(u32),
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let data = std::fs::read(&opts.path).with_context(|| Error::Read(opts.path.as_path().into()))?;
    let paths = reservoir::input::parse_paths(&data)
        .map_err(|error| cli::error_context(&opts.path, &data, error))?;

    log::debug!("{}: {} paths", opts.path.display(), paths.len());

    // Everything is simulated up front so that a failing run prints nothing.
    let mut runs = Vec::new();

    for variant in opts.variants() {
        let part = variant.part();

        let mut sim = Simulation::new(variant, &opts.config, &paths)
            .with_context(|| Error::Simulation(part))?;

        let start = Instant::now();

        let report = match sim.run() {
            Ok(report) => report,
            Err(error) => {
                log::error!("part {part}: {error}");
                return Err(error).with_context(|| Error::Simulation(part));
            }
        };

        log::debug!("part {part}: {} drops in {:?}", report.drops, start.elapsed());
        runs.push((sim, report));
    }

    let stdout = std::io::stdout();
    let mut output = opts.output(stdout.lock());

    for (sim, report) in &runs {
        if opts.render {
            match sim.render() {
                Some(render) => output.frame(report.variant, render)?,
                None => log::info!("part {}: nothing to render", report.variant.part()),
            }
        }

        output.report(report)?;
    }

    Ok(())
}
