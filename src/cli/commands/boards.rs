//! `ticc13x0 boards` implementation

use anyhow::Result;

use crate::cli::commands::CommandContext;
use crate::core::board::BoardConfig;

/// List every board, or show one board, with its debug tools
pub fn execute(ctx: &CommandContext, id: Option<&str>) -> Result<()> {
    let platform = ctx.load_platform()?;
    let boards = platform.get_boards(id)?.into_vec();

    if ctx.output.json {
        return ctx.output.json(&boards);
    }

    if boards.is_empty() {
        ctx.output.line("No boards defined for this platform.");
        return Ok(());
    }

    for board in &boards {
        print_board(ctx, board);
    }
    if id.is_none() {
        ctx.output.line(format!("{} board(s) available.", boards.len()));
    }

    Ok(())
}

fn print_board(ctx: &CommandContext, board: &BoardConfig) {
    let manifest = &board.manifest;
    let vendor = manifest.vendor.as_deref().unwrap_or("unknown vendor");
    ctx.output.line(format!("  [board] {} - {} ({vendor})", board.id, manifest.name));

    if let Some(mcu) = &manifest.build.mcu {
        ctx.output.line(format!("    MCU: {mcu}"));
    }
    if !manifest.upload.protocols.is_empty() {
        let default = manifest.upload.protocol.as_deref().unwrap_or("none");
        ctx.output.line(format!(
            "    Upload: {} (default: {default})",
            manifest.upload.protocols.join(", ")
        ));
    }
    for (name, tool) in &manifest.debug.tools {
        let onboard = if tool.is_onboard() { " [on-board]" } else { "" };
        match &tool.server {
            Some(server) => ctx.output.line(format!(
                "    Debug: {name}{onboard} -> {} ({})",
                server.executable, server.package
            )),
            None => ctx.output.line(format!("    Debug: {name}{onboard}")),
        }
    }
    ctx.output.line("");
}
