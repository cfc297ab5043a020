// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use std::fmt;
use std::str::FromStr;

use crate::errors::PackageNameError;

#[derive(Clone, Eq, Debug, Hash, PartialEq)]
pub struct PackageName(String);

impl PackageName {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // The installer decides what a valid name is, we only rule out
        // the empty string.
        if value.is_empty() {
            return Err(PackageNameError::TooShort);
        }

        Ok(PackageName(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_nonempty_name() {
        let name: PackageName = "librosa".parse().unwrap();
        assert_eq!(name.as_str(), "librosa");
        assert_eq!(name.to_string(), "librosa");
    }

    #[test]
    fn preserves_the_name_exactly() {
        let name: PackageName = "SoundFile".parse().unwrap();
        assert_eq!(name.as_str(), "SoundFile");
    }

    #[test]
    fn rejects_the_empty_string() {
        let result = "".parse::<PackageName>();
        assert!(matches!(result, Err(PackageNameError::TooShort)));
    }
}
