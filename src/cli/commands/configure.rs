//! `ticc13x0 configure` implementation

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::commands::CommandContext;
use crate::core::framework::{configure_for_board, FrameworkPackage};
use crate::infra::package_store::PackageStore;

/// Build the Energia environment for a board and print it
pub fn execute(
    ctx: &CommandContext,
    board: &str,
    framework: Option<(PathBuf, String)>,
    build_dir: &Path,
) -> Result<()> {
    let platform = ctx.load_platform()?;
    let store = PackageStore::new(&ctx.packages_dir);
    let framework = framework.map(|(dir, version)| FrameworkPackage::new(dir, &version));

    let env = configure_for_board(&platform, &store, board, framework, build_dir)?;

    if ctx.output.json {
        return ctx.output.json(&env);
    }

    ctx.output.info(format!("Energia build environment for '{board}'"));
    ctx.output.line("Compile:");
    for arg in env.compile_args() {
        ctx.output.line(format!("  {arg}"));
    }
    ctx.output.line("Link:");
    for arg in env.link_args() {
        ctx.output.line(format!("  {arg}"));
    }
    if !env.libsource_dirs.is_empty() {
        ctx.output.line("Library sources:");
        for dir in &env.libsource_dirs {
            ctx.output.line(format!("  {}", dir.display()));
        }
    }

    Ok(())
}
