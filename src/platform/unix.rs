//! Unix restart via execv

use super::{RestartCommand, RestartError};
use nix::unistd::execv;
use std::convert::Infallible;
use std::ffi::{CString, OsStr};
use std::os::unix::ffi::OsStrExt;

fn to_cstring(value: &OsStr) -> Result<CString, RestartError> {
    CString::new(value.as_bytes()).map_err(|_| RestartError::InvalidArgument(value.to_owned()))
}

pub(super) fn exec_args(command: &RestartCommand) -> Result<(CString, Vec<CString>), RestartError> {
    let path = to_cstring(command.program.as_os_str())?;
    let argv = command
        .args
        .iter()
        .map(|arg| to_cstring(arg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((path, argv))
}

pub fn exec(command: &RestartCommand) -> Result<Infallible, RestartError> {
    let (path, argv) = exec_args(command)?;

    execv(&path, &argv).map_err(|e| RestartError::Exec {
        path: command.program.clone(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    use std::path::PathBuf;

    #[test]
    fn test_exec_args_preserves_argv() {
        let command = RestartCommand {
            program: PathBuf::from("/usr/local/bin/pebcaw"),
            args: vec![
                OsString::from("pebcaw"),
                OsString::from("--interval=60"),
                OsString::from("--countries-whitelist=CH,IS"),
            ],
        };

        let (path, argv) = exec_args(&command).unwrap();
        assert_eq!(path.to_str().unwrap(), "/usr/local/bin/pebcaw");
        let argv: Vec<&str> = argv.iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(argv, vec!["pebcaw", "--interval=60", "--countries-whitelist=CH,IS"]);
    }

    #[test]
    fn test_exec_args_rejects_nul() {
        let command = RestartCommand {
            program: PathBuf::from("/usr/local/bin/pebcaw"),
            args: vec![OsString::from_vec(b"bad\0arg".to_vec())],
        };
        assert!(matches!(
            exec_args(&command),
            Err(RestartError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_exec_missing_program_fails() {
        let command = RestartCommand {
            program: PathBuf::from("/nonexistent/pebcaw"),
            args: vec![OsString::from("pebcaw")],
        };
        assert!(matches!(exec(&command), Err(RestartError::Exec { .. })));
    }
}
