// This file is dual licensed under the terms of the Apache License, Version
// 2.0, and the BSD License. See the LICENSE file in the root of this repository
// for complete details.

use anyhow::Result;
use clap::Parser;
use console::style;

use audeps::{Installer, PackageName};

mod logging;

// Python libraries the audio analysis pipeline leans on, installed in
// this order.
const PACKAGES: &[&str] = &[
    "librosa",    // audio analysis
    "soundfile",  // audio file I/O
    "numpy",      // numerical operations
    "matplotlib", // server side charts
    "scipy",      // scientific computing
];

#[derive(Parser, Debug)]
#[clap(version)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup(cli.verbose.log_level_filter());

    let packages = PACKAGES
        .iter()
        .map(|name| name.parse())
        .collect::<Result<Vec<PackageName>, _>>()?;

    println!("Installing audio processing dependencies...");

    let mut installer = Installer::new();
    installer.with_report_success(|package| {
        println!("{} Installed {}", style("✓").green(), package);
    });
    installer.with_report_failure(|package, error| {
        println!(
            "{} Failed to install {}: {}",
            style("✗").red(),
            package,
            error
        );
    });
    installer.with_report_finish(|| println!("Setup complete!"));

    // Failed installs were already reported one line at a time, they don't
    // change the exit status.
    installer.install(&packages);

    Ok(())
}
