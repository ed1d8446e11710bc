#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use stridecalc::{cli, packages, run, utils};

#[macro_use]
extern crate stridecalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let batch = match cli.cmd {
        Some(cli::Cmd::Calc { code, fields }) => {
            dlog!("mode=calc code={code} fields={fields:?}");
            vec![packages::Package { code, fields }]
        }
        None => cli.packages.as_deref().map_or_else(
            || {
                dlog!("mode=demo");
                Ok(packages::demo_packages())
            },
            |path| {
                dlog!("mode=batch packages={}", path.display());
                packages::load_packages(path)
            },
        )?,
    };

    let opts = run::RunOptions {
        json: cli.json,
        keep_going: cli.keep_going,
    };
    let report = run::run_packages(&batch, opts, &mut std::io::stdout().lock())?;
    tracing::info!(computed = report.computed, "done");

    Ok(())
}
