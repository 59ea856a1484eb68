//! `slipway platforms` command

use anyhow::Result;

use slipway::core::platform::Platform;

pub fn execute() -> Result<()> {
    for platform in Platform::ALL {
        println!(
            "{:<20} {:<8} {:<6} {}",
            platform.id(),
            platform.os_family().as_str(),
            platform.arch().as_str(),
            platform.generator().as_str()
        );
    }
    Ok(())
}
