//! `ticc13x0 packages` implementation

use anyhow::Result;

use crate::cli::commands::CommandContext;
use crate::core::package::PackageRegistry;
use crate::core::platform::BuildVariables;
use serde::Serialize;

#[derive(Serialize)]
struct PackagesReport<'a> {
    packages: &'a PackageRegistry,
    required: Vec<String>,
}

/// Run package selection and print what remains
pub fn execute(
    ctx: &CommandContext,
    board: Option<String>,
    upload_protocol: Option<String>,
    frameworks: Vec<String>,
    targets: &[String],
) -> Result<()> {
    let mut platform = ctx.load_platform()?;
    let variables = BuildVariables {
        board,
        upload_protocol: upload_protocol.or_else(|| ctx.default_upload_protocol.clone()),
        frameworks,
    };

    let required = platform.configure_default_packages(&variables, targets)?;

    if ctx.output.json {
        return ctx.output.json(&PackagesReport {
            packages: platform.packages(),
            required,
        });
    }

    ctx.output.line("Packages:");
    for (name, opts) in platform.packages().iter() {
        let kind = opts.package_type.as_deref().unwrap_or("-");
        let version = opts.version.as_deref().unwrap_or("*");
        let state = if opts.optional { "optional" } else { "required" };
        ctx.output.line(format!("  {name} {version} [{kind}, {state}]"));
    }
    ctx.output.line("");
    ctx.output
        .success(format!("{} package(s) required", required.len()));

    Ok(())
}
