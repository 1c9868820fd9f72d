//! Java file discovery.

use anyhow::{Result, bail};
use globset::GlobSet;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

pub const JAVA_EXTENSION: &str = "java";

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub recursive: bool,
    pub exclude: GlobSet,
    /// Files whose stem ends with this suffix are outputs of an earlier run.
    pub skip_suffix: Option<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        DiscoveryOptions {
            recursive: true,
            exclude: GlobSet::empty(),
            skip_suffix: None,
        }
    }
}

pub fn is_java_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == JAVA_EXTENSION)
}

/// What a directory walk produced.
#[derive(Debug, Default)]
pub struct Discovered {
    /// `.java` files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read, with the reason. The walk goes on past them.
    pub errors: Vec<(PathBuf, String)>,
}

/// Enumerate `.java` files under `root`.
pub fn discover_java_files(root: &Path, options: &DiscoveryOptions) -> Result<Discovered> {
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut walker = WalkDir::new(root).follow_links(true);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut discovered = Discovered::default();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                discovered.errors.push((path, err.to_string()));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_java_file(path) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if options.exclude.is_match(relative) || options.exclude.is_match(path) {
            trace!(path = %path.display(), "excluded by pattern");
            continue;
        }
        if let Some(suffix) = options.skip_suffix.as_deref()
            && is_previous_output(path, suffix)
        {
            trace!(path = %path.display(), "skipping output of a previous run");
            continue;
        }
        discovered.files.push(path.to_path_buf());
    }

    discovered.files.sort();
    Ok(discovered)
}

/// `<stem><suffix>.java` counts as an earlier output only when `<stem>.java`
/// sits next to it.
pub fn is_previous_output(path: &Path, suffix: &str) -> bool {
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return false;
    };
    match stem.strip_suffix(suffix) {
        Some(source_stem) if !source_stem.is_empty() && !suffix.is_empty() => path
            .with_file_name(format!("{source_stem}.{JAVA_EXTENSION}"))
            .is_file(),
        _ => false,
    }
}

/// `<parent>/<stem><suffix>.<ext>` next to `input`.
pub fn suffixed_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// `<input>.backup`
pub fn backup_path(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
