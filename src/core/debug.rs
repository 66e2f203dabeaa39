//! Default debug tool synthesis
//!
//! Fills `debug.tools` for the probes a board can be flashed with, so IDE
//! front-ends find a ready GDB server description for J-Link and XDS110.

use tracing::debug;

use super::board::{BoardConfig, DebugServer, DebugTool};
use crate::config::defaults::{JLINK_GDB_PORT, TOOL_JLINK, TOOL_OPENOCD};
use crate::error::BoardError;

/// Debug links that get a default server description
pub const DEFAULT_DEBUG_LINKS: [&str; 2] = ["jlink", "xds110"];

/// Host operating system, which decides the J-Link executable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Other,
}

impl HostOs {
    /// The OS this binary was compiled for
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }

    fn jlink_gdb_server(self) -> &'static str {
        match self {
            Self::Windows => "JLinkGDBServerCL.exe",
            Self::Other => "JLinkGDBServer",
        }
    }
}

/// Add a `debug.tools` entry for every default link the board supports.
///
/// Existing entries are never replaced, which makes the operation
/// idempotent. Fails when a supported link lacks the field its server needs.
pub fn add_default_debug_tools(
    mut board: BoardConfig,
    host: HostOs,
) -> Result<BoardConfig, BoardError> {
    let protocols = board.manifest.upload.protocols.clone();
    let debug_section = &mut board.manifest.debug;

    for link in DEFAULT_DEBUG_LINKS {
        if !protocols.iter().any(|p| p == link) || debug_section.tools.contains_key(link) {
            continue;
        }

        let server = if link == "jlink" {
            let device = debug_section
                .jlink_device
                .as_deref()
                .filter(|d| !d.is_empty())
                .ok_or_else(|| BoardError::MissingJlinkDevice {
                    board: board.id.clone(),
                })?;
            jlink_server(device, host)
        } else {
            let chipname = debug_section
                .openocd_chipname
                .as_deref()
                .filter(|c| !c.is_empty())
                .ok_or_else(|| BoardError::MissingOpenocdChipname {
                    board: board.id.clone(),
                })?;
            openocd_server(link, chipname, debug_section.openocd_target.as_deref())
        };

        let onboard = debug_section.onboard_tools.iter().any(|t| t == link);
        debug!(board = %board.id, link, onboard, "adding default debug tool");

        debug_section.tools.insert(
            link.to_string(),
            DebugTool {
                server: Some(server),
                onboard: Some(onboard),
                ..DebugTool::default()
            },
        );
    }

    Ok(board)
}

fn jlink_server(device: &str, host: HostOs) -> DebugServer {
    let arguments = [
        "-singlerun",
        "-if",
        "JTAG",
        "-select",
        "USB",
        "-device",
        device,
        "-port",
        JLINK_GDB_PORT,
    ];

    DebugServer {
        package: TOOL_JLINK.to_string(),
        executable: host.jlink_gdb_server().to_string(),
        arguments: arguments.iter().map(ToString::to_string).collect(),
        ..DebugServer::default()
    }
}

fn openocd_server(link: &str, chipname: &str, target: Option<&str>) -> DebugServer {
    let commands = [format!("set CHIPNAME {chipname}")];

    let mut arguments = vec![
        "-s".to_string(),
        "$PACKAGE_DIR/scripts".to_string(),
        "-f".to_string(),
        format!("interface/{link}.cfg"),
        "-c".to_string(),
        commands.join("; "),
    ];
    // No target config means OpenOCD relies on the interface script alone
    if let Some(target) = target.filter(|t| !t.is_empty()) {
        arguments.push("-f".to_string());
        arguments.push(format!("target/{target}.cfg"));
    }

    DebugServer {
        package: TOOL_OPENOCD.to_string(),
        executable: "bin/openocd".to_string(),
        arguments,
        ..DebugServer::default()
    }
}
