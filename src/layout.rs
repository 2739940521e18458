use clap::Args;
use log::info;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Where problems, shared library sources and build artifacts live.
#[derive(Args, Debug, Clone)]
pub struct Layout {
    #[arg(
        long = "problems-dir",
        env = "CFU_PROBLEMS_DIR",
        default_value = "./problems",
        global = true
    )]
    pub problems_dir: PathBuf,
    #[arg(
        long = "lib-dir",
        env = "CFU_LIB_DIR",
        default_value = "./lib",
        global = true
    )]
    pub lib_dir: PathBuf,
    /// Defaults to `<lib-dir>/include`
    #[arg(long = "include-dir", env = "CFU_INCLUDE_DIR", global = true)]
    pub include_dir: Option<PathBuf>,
    #[arg(
        long = "build-dir",
        env = "CFU_BUILD_DIR",
        default_value = "./build",
        global = true
    )]
    pub build_dir: PathBuf,
}

impl Layout {
    /// Layout with every directory placed under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Layout {
            problems_dir: root.join("problems"),
            lib_dir: root.join("lib"),
            include_dir: None,
            build_dir: root.join("build"),
        }
    }

    pub fn include_dir(&self) -> PathBuf {
        self.include_dir
            .clone()
            .unwrap_or_else(|| self.lib_dir.join("include"))
    }
}

/// Creates `path` if it does not exist yet, logging the creation.
pub fn ensure_dir(path: &Path, label: &str) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    info!("Created {} directory: {}", label, path.display());
    Ok(())
}
