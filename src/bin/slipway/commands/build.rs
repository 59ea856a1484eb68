//! `slipway build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use slipway::core::config::{BuildConfig, BuildType, LinkMode};
use slipway::core::platform::Platform;
use slipway::ops::build::{build, BuildOptions};

pub fn execute(args: BuildArgs) -> Result<()> {
    let platform = args
        .platform
        .parse::<Platform>()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let config = BuildConfig {
        link_mode: if args.static_lib {
            LinkMode::Static
        } else {
            LinkMode::Shared
        },
        build_type: BuildType::from_release(args.release),
        jni: args.jni,
        out_dir: args.out_dir,
        platform_suffix: args.platform_suffix,
    };

    let opts = BuildOptions {
        platform,
        config,
        source_dir: args.source_dir,
    };

    match build(&opts)? {
        Some(staged) => eprintln!("    Finished {} -> {}", platform, staged.display()),
        None => eprintln!("    Finished {}", platform),
    }

    Ok(())
}
