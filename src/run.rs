use crate::dispatch::create_workout;
use crate::packages::Package;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// One JSON object per line instead of the text summary.
    pub json: bool,
    /// Warn about invalid packages instead of stopping at the first one.
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub computed: usize,
    pub skipped: usize,
}

/// Compute every package in order and write one summary line per workout to `out`.
pub fn run_packages<W: Write>(
    batch: &[Package],
    opts: RunOptions,
    out: &mut W,
) -> Result<RunReport> {
    let mut report = RunReport {
        computed: 0,
        skipped: 0,
    };

    for (i, p) in batch.iter().enumerate() {
        let workout = match create_workout(&p.code, &p.fields) {
            Ok(w) => w,
            Err(e) if opts.keep_going => {
                tracing::warn!(package = i + 1, code = %p.code, err = %e, "skipping package");
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("package #{} ({})", i + 1, p.code));
            }
        };

        let info = workout.summary();
        if opts.json {
            let line = serde_json::to_string(&info).context("serializing summary")?;
            writeln!(out, "{line}").context("writing summary")?;
        } else {
            writeln!(out, "{}", info.render_text()).context("writing summary")?;
        }
        report.computed += 1;
    }

    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            total = batch.len(),
            "some packages were invalid"
        );
    }

    Ok(report)
}
