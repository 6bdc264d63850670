//! Environment readiness check.

use crate::browser::chromium::find_chromium;
use anyhow::Result;

/// Check Chromium availability and report the environment.
pub async fn run() -> Result<()> {
    println!("Alza Tools Doctor");
    println!("=================");
    println!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    let chromium_path = find_chromium();
    match &chromium_path {
        Some(path) => println!("[OK] Chromium found: {}", path.display()),
        None => println!(
            "[!!] Chromium NOT found. Install Chrome/Chromium or set ALZA_CHROMIUM_PATH."
        ),
    }

    println!();
    if chromium_path.is_some() {
        println!("Ready: `alza scrape` can drive a browser on this machine.");
    } else {
        println!("Not ready: `alza scrape` needs a Chromium binary. `alza catalogue` works without one.");
    }

    Ok(())
}
