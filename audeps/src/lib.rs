// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use log::info;

pub use crate::errors::{InstallError, PackageNameError};
pub use crate::types::PackageName;

mod errors;
mod pip;
mod types;

const LOGNAME: &str = "audeps::installer";

struct Report<'r> {
    success: Option<Box<dyn FnMut(&PackageName) + 'r>>,
    failure: Option<Box<dyn FnMut(&PackageName, &InstallError) + 'r>>,
    finish: Option<Box<dyn FnMut() + 'r>>,
}

impl<'r> Report<'r> {
    fn success(&mut self, package: &PackageName) {
        if let Some(cb) = &mut self.success {
            (cb)(package);
        }
    }

    fn failure(&mut self, package: &PackageName, error: &InstallError) {
        if let Some(cb) = &mut self.failure {
            (cb)(package, error);
        }
    }

    fn finish(&mut self) {
        if let Some(cb) = &mut self.finish {
            (cb)();
        }
    }
}

pub struct Installer<'r> {
    backend: Box<dyn pip::Backend>,
    report: Report<'r>,
}

impl<'r> Installer<'r> {
    pub fn new() -> Installer<'r> {
        Installer::with_backend(Box::new(pip::Pip::new()))
    }

    fn with_backend(backend: Box<dyn pip::Backend>) -> Installer<'r> {
        Installer {
            backend,
            report: Report {
                success: None,
                failure: None,
                finish: None,
            },
        }
    }

    pub fn with_report_success(&mut self, cb: impl FnMut(&PackageName) + 'r) {
        self.report.success = Some(Box::new(cb))
    }

    pub fn with_report_failure(&mut self, cb: impl FnMut(&PackageName, &InstallError) + 'r) {
        self.report.failure = Some(Box::new(cb))
    }

    pub fn with_report_finish(&mut self, cb: impl FnMut() + 'r) {
        self.report.finish = Some(Box::new(cb))
    }
}

impl<'r> Installer<'r> {
    // Best effort: a failed package is reported and skipped rather than
    // ending the run.
    pub fn install(&mut self, packages: &[PackageName]) {
        for package in packages {
            info!(target: LOGNAME, "installing {}", package);

            match self.backend.install(package) {
                Ok(()) => self.report.success(package),
                Err(error) => self.report.failure(package, &error),
            }
        }

        self.report.finish();
    }
}
