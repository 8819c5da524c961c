//! Power-off through an external command

use std::process::Command;

use log::{error, info, warn};
use pisugar_core::traits::HostPower;

/// Runs the configured shutdown command the first time it is asked to
pub struct CommandPower {
    command: Vec<String>,
    dry_run: bool,
    requested: bool,
}

impl CommandPower {
    pub fn new(command: Vec<String>, dry_run: bool) -> Self {
        Self {
            command,
            dry_run,
            requested: false,
        }
    }

    /// A shutdown has been requested
    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

impl HostPower for CommandPower {
    fn shutdown(&mut self) {
        if self.requested {
            return;
        }
        self.requested = true;

        let Some((program, args)) = self.command.split_first() else {
            error!("No shutdown command configured");
            return;
        };

        if self.dry_run {
            info!("Dry run, not running {:?}", self.command);
            return;
        }

        info!("Running {:?}", self.command);
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("Shutdown command exited with {}", status),
            Err(e) => error!("Failed to run shutdown command: {}", e),
        }
    }
}
