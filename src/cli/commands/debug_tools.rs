//! `ticc13x0 debug-tools` implementation

use anyhow::Result;

use crate::cli::commands::CommandContext;
use crate::cli::output::print_json;

/// Print the `debug.tools` mapping of one board
pub fn execute(ctx: &CommandContext, board_id: &str) -> Result<()> {
    let platform = ctx.load_platform()?;
    let board = platform.add_default_debug_tools(platform.board_config(board_id)?)?;

    if !ctx.output.quiet {
        print_json(&board.manifest.debug.tools)?;
    }

    Ok(())
}
