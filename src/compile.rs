use anyhow::{bail, Context, Result};
use clap::Args;
use log::{debug, info};
use std::{
    env::consts::EXE_SUFFIX,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    layout::{self, Layout},
    merge,
};

#[derive(Args, Debug, Clone)]
pub struct CompilerArgs {
    #[arg(long = "compiler", env = "CFU_COMPILER", default_value = "gcc")]
    pub compiler: String,
    /// Extra flags passed to the compiler, whitespace separated
    #[arg(
        long = "compiler-flags",
        env = "CFU_COMPILER_FLAGS",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub compiler_flags: String,
}

impl Default for CompilerArgs {
    fn default() -> Self {
        CompilerArgs {
            compiler: "gcc".to_string(),
            compiler_flags: String::new(),
        }
    }
}

/// Paths produced for a single problem file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub merged_source: PathBuf,
    pub executable: PathBuf,
}

impl Artifacts {
    pub fn for_problem(problem_path: &Path, build_dir: &Path) -> Result<Self> {
        let problem_name = problem_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("No file name in {}", problem_path.display()))?;

        Ok(Artifacts {
            merged_source: build_dir.join(format!("{}_merged.c", problem_name)),
            executable: build_dir.join(format!("{}{}", problem_name, EXE_SUFFIX)),
        })
    }
}

/// Merges local includes into `problem_file_path` and compiles the result.
///
/// Returns the path of the produced executable.
pub fn build_problem(
    problem_file_path: &Path,
    layout: &Layout,
    compiler: &CompilerArgs,
) -> Result<PathBuf> {
    let problem_path = std::path::absolute(problem_file_path)
        .with_context(|| format!("Failed to resolve {}", problem_file_path.display()))?;

    if !problem_path.is_file() {
        bail!("The file {} does not exist.", problem_path.display());
    }

    layout::ensure_dir(&layout.lib_dir, "library")?;
    layout::ensure_dir(&layout.build_dir, "build")?;

    let artifacts = Artifacts::for_problem(&problem_path, &layout.build_dir)?;

    info!("Building file: {}", problem_path.display());
    merge::merge_include_files(&problem_path, &artifacts.merged_source, layout)
        .with_context(|| format!("Failed to merge {}", problem_path.display()))?;

    let mut command = Command::new(&compiler.compiler);
    command
        .arg(&artifacts.merged_source)
        .arg("-o")
        .arg(&artifacts.executable)
        .arg("-I")
        .arg(layout.include_dir())
        .args(compiler.compiler_flags.split_whitespace());
    debug!("Running {:?}", command);

    let output = command
        .output()
        .with_context(|| format!("Failed to run compiler {}", compiler.compiler))?;

    if !output.status.success() {
        bail!(
            "Build failed with error:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    info!("Build successful: {}", artifacts.executable.display());
    Ok(artifacts.executable)
}
