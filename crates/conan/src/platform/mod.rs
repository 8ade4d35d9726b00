//! # Host Platform
//!
//! Maps the operating system and machine architecture reported by the host
//! onto the profile names and profile folders published for TheAtlasEngine.
#[cfg(test)]
mod tests;

use std::fmt;

/// The operating system family of the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Os {
    Windows,
    Linux,
    Mac,
    /// Anything else, lower-cased.
    Other(String),
}

impl From<&str> for Os {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "windows" => Os::Windows,
            "linux" => Os::Linux,
            "darwin" | "macos" => Os::Mac,
            other => Os::Other(other.to_owned()),
        }
    }
}

/// The architecture families profiles are published for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Armv8,
}

impl Arch {
    fn folder(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Armv8 => "armv8",
        }
    }
}

impl From<&str> for Arch {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "arm64" | "aarch64" | "armv8" => Arch::Armv8,
            _ => Arch::X86_64,
        }
    }
}

/// A build profile shipped in the Atlas configuration repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    WindowsX86_64,
    MacArmv8,
    MacX86_64,
    LinuxX86_64,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Profile::WindowsX86_64 => "windows_x86_64",
            Profile::MacArmv8 => "mac_armv8",
            Profile::MacX86_64 => "mac_x86_64",
            Profile::LinuxX86_64 => "linux_x86_64",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `-c key=value` configuration override passed to the host tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conf {
    pub key: &'static str,
    pub value: &'static str,
}

impl Conf {
    pub fn args(&self) -> [String; 2] {
        ["-c".into(), self.to_string()]
    }
}

impl fmt::Display for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Lets recipes install missing system packages with elevated privileges.
pub const SYSTEM_PACKAGE_CONFS: [Conf; 2] = [
    Conf {
        key: "tools.system.package_manager:sudo",
        value: "True",
    },
    Conf {
        key: "tools.system.package_manager:mode",
        value: "install",
    },
];

/// The host platform, as reported by the operating system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Platform {
    os: Os,
    machine: String,
}

impl Platform {
    pub fn new(os: &str, machine: &str) -> Self {
        Platform {
            os: Os::from(os),
            machine: machine.trim().to_lowercase(),
        }
    }

    /// The platform this binary is running on.
    pub fn detect() -> Self {
        Platform::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn os(&self) -> &Os {
        &self.os
    }

    /// The lower-cased machine string the platform was built from.
    pub fn machine(&self) -> &str {
        &self.machine
    }

    pub fn arch(&self) -> Arch {
        Arch::from(self.machine.as_str())
    }

    fn is_arm(&self) -> bool {
        self.machine.contains("arm") || self.machine.contains("aarch64")
    }

    /// The build profile for this platform, `None` for an unsupported OS.
    pub fn profile(&self) -> Option<Profile> {
        match self.os {
            Os::Windows => Some(Profile::WindowsX86_64),
            Os::Mac if self.is_arm() => Some(Profile::MacArmv8),
            Os::Mac => Some(Profile::MacX86_64),
            Os::Linux => Some(Profile::LinuxX86_64),
            Os::Other(_) => None,
        }
    }

    /// Configuration overrides every build on this platform needs.
    pub fn confs(&self) -> &'static [Conf] {
        match self.os {
            Os::Linux => &SYSTEM_PACKAGE_CONFS,
            _ => &[],
        }
    }

    /// The OS folder of the configuration repository; unknown systems share the mac folder.
    pub fn os_folder(&self) -> &'static str {
        match self.os {
            Os::Windows => "Windows",
            Os::Linux => "linux",
            Os::Mac | Os::Other(_) => "mac",
        }
    }

    pub fn arch_folder(&self) -> &'static str {
        self.arch().folder()
    }

    /// `profiles/<arch>/<os>/`
    pub fn profile_source(&self) -> String {
        format!("profiles/{}/{}/", self.arch_folder(), self.os_folder())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os_folder(), self.arch_folder())
    }
}
