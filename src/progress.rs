//! Human-readable status lines on stdout
//!
//! Purely cosmetic; nothing downstream depends on it. Diagnostics meant for
//! debugging go through `tracing` instead.

use std::path::Path;

/// Progress printer. Silent when built with `quiet = true`.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    quiet: bool,
}

impl Progress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// A reporter that never prints.
    pub fn silent() -> Self {
        Self::new(true)
    }

    pub fn start(&self, root: &Path) {
        if !self.quiet {
            println!("[+] Starting Apex scan of: {}\n", root.display());
        }
    }

    pub fn ignore_file_missing(&self, ignore_file: &Path) {
        if !self.quiet {
            println!(
                "[!] Note: {} not found. Proceeding without it.",
                ignore_file.display()
            );
        }
    }

    pub fn scanning(&self) {
        if !self.quiet {
            println!("[1/3] Scanning project structure...");
        }
    }

    pub fn scan_root(&self, name: &str) {
        if !self.quiet {
            println!("[scan] dir: {}", name);
        }
    }

    pub fn scan_dir(&self, rel: &Path) {
        if !self.quiet {
            println!("  [scan] dir: {}", rel.display());
        }
    }

    pub fn scan_file(&self, rel: &Path) {
        if !self.quiet {
            println!("  [scan] file: {}", rel.display());
        }
    }

    pub fn scan_too_large(&self, rel: &Path) {
        if !self.quiet {
            println!("  [scan] skip: {} (size limit exceeded)", rel.display());
        }
    }

    pub fn scan_summary(&self, dir_count: usize, file_count: usize) {
        if !self.quiet {
            println!("  {} directories, {} files", dir_count, file_count);
        }
    }

    pub fn reading(&self) {
        if !self.quiet {
            println!("\n[2/3] Reading file contents...");
        }
    }

    pub fn read(&self, rel: &str) {
        if !self.quiet {
            println!("  [read] {}", rel);
        }
    }

    pub fn writing(&self, output: &Path, tree_only: bool) {
        if !self.quiet {
            let step = if tree_only { "2/2" } else { "3/3" };
            println!("\n[{}] Writing output to {}...", step, output.display());
        }
    }

    pub fn success(&self, output: &Path, format: &str) {
        if !self.quiet {
            println!(
                "\n[+] Success! Project documentation saved to '{}' in {} format.",
                output.display(),
                format
            );
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(false)
    }
}
