/// Platforms the library repository knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibPlatform {
    Darwin,
    Windows,
    /// Linux and any other OS. No precompiled libraries are published.
    Linux,
}

impl LibPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            LibPlatform::Darwin
        } else if cfg!(windows) {
            LibPlatform::Windows
        } else {
            LibPlatform::Linux
        }
    }

    /// Name of the precompiled library directory, if there is one.
    pub fn library_dir_name(self) -> Option<&'static str> {
        match self {
            LibPlatform::Darwin => Some("darwin"),
            LibPlatform::Windows => Some("win64_vc14"),
            LibPlatform::Linux => None,
        }
    }
}
