// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use std::ffi::OsString;
use std::process::Command;

use log::debug;

use crate::errors::InstallError;
use crate::types::PackageName;

const LOGNAME: &str = "audeps::pip";

type Result<T, E = InstallError> = core::result::Result<T, E>;

pub(crate) trait Backend {
    fn install(&mut self, package: &PackageName) -> Result<()>;
}

pub(crate) struct Pip {
    python: OsString,
}

impl Pip {
    pub(crate) fn new() -> Pip {
        // pip is driven through the interpreter, so installs land in
        // whatever environment that interpreter resolves to.
        let python = if cfg!(windows) { "python" } else { "python3" };

        Pip {
            python: python.into(),
        }
    }
}

impl Backend for Pip {
    fn install(&mut self, package: &PackageName) -> Result<()> {
        debug!(target: LOGNAME, "{:?} -m pip install {}", self.python, package);

        // stdio is inherited, pip narrates its own work.
        let status = Command::new(&self.python)
            .args(["-m", "pip", "install"])
            .arg(package.as_str())
            .status()
            .map_err(|source| InstallError::Spawn { source })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::Failed { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> PackageName {
        raw.parse().unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_status_is_success() {
        let mut pip = Pip {
            python: "true".into(),
        };

        assert!(pip.install(&name("librosa")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_status_is_a_failure() {
        let mut pip = Pip {
            python: "false".into(),
        };

        let result = pip.install(&name("librosa"));
        assert!(matches!(result, Err(InstallError::Failed { .. })));
    }

    #[test]
    fn missing_interpreter_is_a_spawn_failure() {
        let mut pip = Pip {
            python: "an-interpreter-that-does-not-exist".into(),
        };

        let result = pip.install(&name("librosa"));
        assert!(matches!(result, Err(InstallError::Spawn { .. })));
    }
}
