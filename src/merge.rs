use log::{info, warn};
use regex::Regex;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::layout::Layout;

/// Matches `#include "` at column 0 and captures the header name up to the next
/// quote or line end. The closing quote is optional.
const LOCAL_INCLUDE: &str = r#"^#include "([^"\r\n]*)"#;

/// Inlines local headers, and the `.c` files that implement them, into one source.
pub struct Merger {
    include_dir: PathBuf,
    lib_dir: PathBuf,
    local_include: Regex,
    seen_headers: HashSet<String>,
}

impl Merger {
    pub fn new(layout: &Layout) -> Self {
        Merger {
            include_dir: layout.include_dir(),
            lib_dir: layout.lib_dir.clone(),
            local_include: Regex::new(LOCAL_INCLUDE).expect("valid include pattern"),
            seen_headers: HashSet::new(),
        }
    }

    /// Writes the merged form of `problem_path` to `output`, framed by main file markers.
    pub fn merge(&mut self, problem_path: &Path, output: &mut impl Write) -> io::Result<()> {
        let source = fs::read_to_string(problem_path)?;
        writeln!(output, "//BEGIN MAIN FILE: {}", problem_path.display())?;
        self.merge_source(&source, output)?;
        write!(output, "\n//END MAIN FILE: {}", problem_path.display())?;
        Ok(())
    }

    fn merge_source(&mut self, source: &str, output: &mut impl Write) -> io::Result<()> {
        for line in source.split_inclusive('\n') {
            // Drop blank lines
            if line.trim().is_empty() {
                continue;
            }

            let Some(header_name) = self.local_header(line) else {
                output.write_all(line.as_bytes())?;
                continue;
            };

            if !self.seen_headers.insert(header_name.clone()) {
                continue;
            }

            let header_path = self.include_dir.join(&header_name);
            if !header_path.is_file() {
                warn!(
                    "Header file {} not found in {}",
                    header_path.display(),
                    self.include_dir.display()
                );
                continue;
            }
            self.inline_file(&header_path, "HEADER", output)?;

            // The header's implementation follows it
            let c_file_path = self.lib_dir.join(header_name.replace(".h", ".c"));
            if !c_file_path.exists() {
                warn!(
                    "C file {} not found in {}",
                    c_file_path.display(),
                    self.lib_dir.display()
                );
                continue;
            }
            self.inline_file(&c_file_path, "C FILE", output)?;
        }
        Ok(())
    }

    fn inline_file(&mut self, path: &Path, kind: &str, output: &mut impl Write) -> io::Result<()> {
        let source = fs::read_to_string(path)?;
        writeln!(output, "//BEGIN {}: {}", kind, path.display())?;
        self.merge_source(&source, output)?;
        writeln!(output, "\n//END {}: {}", kind, path.display())?;
        Ok(())
    }

    fn local_header(&self, line: &str) -> Option<String> {
        self.local_include
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Merges `problem_path` and its local includes into a new file at `output_path`.
pub fn merge_include_files(
    problem_path: &Path,
    output_path: &Path,
    layout: &Layout,
) -> io::Result<()> {
    let mut output = BufWriter::new(File::create(output_path)?);
    Merger::new(layout).merge(problem_path, &mut output)?;
    output.flush()?;

    info!("Merged include files into: {}", output_path.display());
    Ok(())
}
