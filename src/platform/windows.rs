//! Windows has no exec; start a fresh copy and exit this one

use super::{RestartCommand, RestartError};
use std::convert::Infallible;
use std::process::Command;

pub fn respawn(command: &RestartCommand) -> Result<Infallible, RestartError> {
    Command::new(&command.program)
        .args(command.args.iter().skip(1))
        .spawn()
        .map_err(|e| RestartError::Exec {
            path: command.program.clone(),
            message: e.to_string(),
        })?;

    std::process::exit(0)
}
