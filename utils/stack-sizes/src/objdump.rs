use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "objdump";

/// Linear disassembly, one instruction per line, each prefixed with its address and the closest
/// preceding symbol, e.g. `0000000000001139 <main+0x4> sub    $0x10,%rsp`.
const ARGS: &[&str] = &["--disassemble", "--prefix-addresses", "--demangle"];

/// The external disassembler.
#[derive(Clone, Debug)]
pub struct Objdump {
    program: String,
}

impl Default for Objdump {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Objdump {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, executable: &OsStr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(ARGS)
            .arg(executable)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Runs the disassembler on `executable` and returns its complete standard output.
    ///
    /// The call blocks until the disassembler exits.  A non-zero exit status is an error, no
    /// partial output is returned in that case.
    pub fn disassemble(&self, executable: impl AsRef<Path>) -> Result<String> {
        let executable = executable.as_ref();
        let mut cmd = self.command(executable.as_os_str());
        debug!("Running {cmd:?}");

        let output = cmd.output().map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(Error::Disassembler {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "Disassembled {} ({} bytes of output)",
            executable.display(),
            text.len()
        );
        Ok(text)
    }
}
