use anyhow::Result;
use log::debug;

use crate::assembler::{Assembler, AssemblyReport, BuildConfig};
use crate::runtime::Runtime;

/// Assemble the npm package described by `config`.
#[tracing::instrument(skip(runtime))]
pub fn build<R: Runtime>(runtime: R, config: &BuildConfig) -> Result<()> {
    debug!("Building npm package with {:?}", config);

    let report = Assembler::new(&runtime, config).assemble()?;
    print!("{}", format_report(&report));
    Ok(())
}

pub(crate) fn format_report(report: &AssemblyReport) -> String {
    let targets: Vec<String> = report.targets.iter().map(ToString::to_string).collect();
    let mut out = format!(
        "Packaged version {} into {}\n",
        report.version,
        report.root.display()
    );
    out.push_str(&format!("Platforms: {}\n", targets.join(", ")));
    for file in &report.files {
        out.push_str(&format!("  {}\n", file.display()));
    }
    out
}
