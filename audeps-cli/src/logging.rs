// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use log::LevelFilter;

pub(crate) fn setup(level: LevelFilter) {
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .init();
}
