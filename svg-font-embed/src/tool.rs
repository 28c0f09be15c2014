//! Running external font tools.

use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Stdio},
};

use crate::EmbedError;

/// Runs `program` with `args`, blocking until it exits.
///
/// Standard output is discarded. Standard error is logged, and returned as
/// part of the error if the program does not exit successfully.
pub(crate) fn run<I, S>(program: &Path, args: I) -> Result<(), EmbedError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    log::debug!("running {command:?}");

    let output = command.output().map_err(|source| EmbedError::ToolSpawn {
        program: program.to_owned(),
        source,
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        log::debug!("{}: {}", program.display(), stderr.trim_end());
    }

    if !output.status.success() {
        return Err(EmbedError::ToolFailed {
            program: program.to_owned(),
            status: output.status,
            stderr: stderr.into_owned(),
        });
    }
    Ok(())
}
