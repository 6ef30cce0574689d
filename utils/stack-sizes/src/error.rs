use std::{io, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` failed: {status}")]
    Disassembler { program: String, status: ExitStatus },
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
