// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageNameError {
    #[error("names must have at least one character")]
    TooShort,
}

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("pip exited with {status}")]
    Failed { status: ExitStatus },

    #[error("pip could not be started: {source}")]
    Spawn { source: std::io::Error },
}
