use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::{fs, path::PathBuf};

use crate::layout::{self, Layout};

pub const PROBLEM_MAIN: &str = "main.c";

/// Starting point written into a fresh problem folder.
pub const MAIN_TEMPLATE: &str = "#include <stdio.h>\n\nint main(void)\n{\n    return 0;\n}\n";

/// Creates `<problems>/<problem_name>` and seeds it with a `main.c` skeleton.
///
/// Existing folders and solutions are left untouched.
pub fn new_problem(layout: &Layout, problem_name: &str) -> Result<PathBuf> {
    if problem_name.is_empty()
        || problem_name.contains(['/', '\\'])
        || problem_name == "."
        || problem_name == ".."
    {
        bail!("Invalid problem name: {:?}", problem_name);
    }

    layout::ensure_dir(&layout.problems_dir, "problems")
        .with_context(|| format!("Failed to create {}", layout.problems_dir.display()))?;

    let problem_dir = layout.problems_dir.join(problem_name);
    fs::create_dir_all(&problem_dir)
        .with_context(|| format!("Failed to create {}", problem_dir.display()))?;

    let main_path = problem_dir.join(PROBLEM_MAIN);
    if main_path.exists() {
        debug!("Keeping existing {}", main_path.display());
    } else {
        fs::write(&main_path, MAIN_TEMPLATE)
            .with_context(|| format!("Failed to write {}", main_path.display()))?;
    }

    info!("Created new problem folder: {}", problem_name);
    Ok(problem_dir)
}
