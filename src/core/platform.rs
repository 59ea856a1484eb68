//! Target platform catalog.
//!
//! Every platform the orchestrator can build for, together with the
//! properties the rest of the pipeline dispatches on. The enum is closed:
//! adding a platform means extending every match below, and the compiler
//! enforces that each dispatch table stays exhaustive.

use std::fmt;
use std::str::FromStr;

/// Operating-system family of a target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    Macos,
    Ios,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Ios => "ios",
        }
    }
}

/// CPU architecture of a target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

/// Build-file generator a platform requires at configure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Fast parallel builds; all desktop platforms.
    Ninja,
    /// Project-file builds via xcodebuild; the iOS family.
    Xcode,
}

impl Generator {
    /// The generator name as cmake's `-G` flag expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::Ninja => "Ninja",
            Generator::Xcode => "Xcode",
        }
    }
}

/// A supported target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    WindowsX64,
    LinuxX64,
    LinuxArm64,
    MacosX64,
    MacosArm64,
    IosDevice,
    IosSimulatorX64,
    IosSimulatorArm64,
}

impl Platform {
    /// All supported platforms, in catalog order.
    pub const ALL: [Platform; 8] = [
        Platform::WindowsX64,
        Platform::LinuxX64,
        Platform::LinuxArm64,
        Platform::MacosX64,
        Platform::MacosArm64,
        Platform::IosDevice,
        Platform::IosSimulatorX64,
        Platform::IosSimulatorArm64,
    ];

    /// Stable identity string, used for build-directory scoping, the
    /// `TARGET_PLATFORM` define, and staged artifact suffixes.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::WindowsX64 => "windows_x64",
            Platform::LinuxX64 => "linux_x64",
            Platform::LinuxArm64 => "linux_arm64",
            Platform::MacosX64 => "macos_x64",
            Platform::MacosArm64 => "macos_arm64",
            Platform::IosDevice => "ios_device",
            Platform::IosSimulatorX64 => "ios_simulator_x64",
            Platform::IosSimulatorArm64 => "ios_simulator_arm64",
        }
    }

    pub fn os_family(&self) -> OsFamily {
        match self {
            Platform::WindowsX64 => OsFamily::Windows,
            Platform::LinuxX64 | Platform::LinuxArm64 => OsFamily::Linux,
            Platform::MacosX64 | Platform::MacosArm64 => OsFamily::Macos,
            Platform::IosDevice | Platform::IosSimulatorX64 | Platform::IosSimulatorArm64 => {
                OsFamily::Ios
            }
        }
    }

    pub fn arch(&self) -> Arch {
        match self {
            Platform::WindowsX64
            | Platform::LinuxX64
            | Platform::MacosX64
            | Platform::IosSimulatorX64 => Arch::X64,
            Platform::LinuxArm64
            | Platform::MacosArm64
            | Platform::IosDevice
            | Platform::IosSimulatorArm64 => Arch::Arm64,
        }
    }

    /// Which generator the configure step must select for this platform.
    pub fn generator(&self) -> Generator {
        match self.os_family() {
            OsFamily::Ios => Generator::Xcode,
            OsFamily::Windows | OsFamily::Linux | OsFamily::Macos => Generator::Ninja,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Platform::ALL.iter().map(|p| p.id()).collect();
                format!("unknown platform `{}` (expected one of: {})", s, known.join(", "))
            })
    }
}
