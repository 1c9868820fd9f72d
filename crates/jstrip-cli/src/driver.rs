//! Processing driver: resolves options, finds files, strips and persists them.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::args::CliArgs;
use crate::config::{
    BACKUP_EXTENSION, ResolvedOptions, find_config, load_config, resolve_options,
};
use crate::fs::{
    DiscoveryOptions, backup_path, discover_java_files, is_java_file, suffixed_output_path,
};
use jstrip_common::{LineEnding, count_line_terminators, decode_source_text, encode_source_text};
use jstrip_emitter::{EmitOptions, LexState, StripOutput, strip_comments_with};

/// What the run was pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    File,
    Directory,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome {
    #[serde(rename_all = "camelCase")]
    Processed {
        input: PathBuf,
        output: PathBuf,
        backup: Option<PathBuf>,
        comments_removed: usize,
        /// Line terminators removed along with block comments.
        lines_removed: usize,
        unterminated: Option<LexState>,
    },
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Processed { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Processed { input, .. } => input,
            FileOutcome::Failed { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub target: PathBuf,
    pub kind: TargetKind,
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// 0 when every file was processed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.failed() == 0 { 0 } else { 1 }
    }
}

/// A stripped file held in memory, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct StrippedFile {
    pub original: Vec<u8>,
    /// `original` decoded.
    pub source: String,
    pub output: StripOutput,
    /// `output.text` encoded the way `original` was.
    pub contents: Vec<u8>,
}

impl StrippedFile {
    /// Line terminators that disappeared together with block comments.
    pub fn lines_removed(&self) -> usize {
        count_line_terminators(&self.source)
            .saturating_sub(count_line_terminators(&self.output.text))
    }
}

/// Resolve the config and options that apply to `args.path`.
pub fn resolve_for_args(args: &CliArgs) -> Result<ResolvedOptions> {
    let config = find_config(args.config.as_deref(), &args.path)
        .map(|path| {
            debug!(config = %path.display(), "loading config");
            load_config(&path)
        })
        .transpose()?;
    resolve_options(config.as_ref(), args)
}

/// Check that `path` is something the driver can process.
pub fn classify_target(path: &Path) -> Result<TargetKind> {
    if !path.exists() {
        bail!("Path {} does not exist", path.display());
    }
    if path.is_file() {
        if !is_java_file(path) {
            bail!("File must have .java extension: {}", path.display());
        }
        return Ok(TargetKind::File);
    }
    if path.is_dir() {
        return Ok(TargetKind::Directory);
    }
    bail!("{} is neither a file nor a directory", path.display())
}

pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let kind = classify_target(&args.path)?;
    let options = resolve_for_args(args)?;

    let outcomes = match kind {
        TargetKind::File => vec![process_file(&args.path, &options)],
        TargetKind::Directory => {
            let discovery = DiscoveryOptions {
                recursive: options.recursive,
                exclude: options.exclude.clone(),
                skip_suffix: (!options.in_place).then(|| options.suffix.clone()),
            };
            let discovered = discover_java_files(&args.path, &discovery)?;
            info!(
                count = discovered.files.len(),
                unreadable = discovered.errors.len(),
                root = %args.path.display(),
                "discovered Java files"
            );
            let mut outcomes = process_files(&discovered.files, &options, args.jobs)?;
            outcomes.extend(
                discovered
                    .errors
                    .into_iter()
                    .map(|(path, error)| FileOutcome::Failed { path, error }),
            );
            outcomes
        }
    };

    let summary = RunSummary {
        target: args.path.clone(),
        kind,
        outcomes,
    };
    info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "processing complete"
    );
    Ok(summary)
}

/// Process files in parallel. Each file is independent; failures are
/// recorded per file and never stop the batch.
pub fn process_files(
    files: &[PathBuf],
    options: &ResolvedOptions,
    jobs: Option<usize>,
) -> Result<Vec<FileOutcome>> {
    let work = || -> Vec<FileOutcome> {
        files
            .par_iter()
            .map(|path| process_file(path, options))
            .collect()
    };

    match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("failed to build worker pool")?;
            Ok(pool.install(work))
        }
        None => Ok(work()),
    }
}

/// Read, decode and strip `path` without writing anything.
pub fn strip_file(path: &Path, emit: &EmitOptions) -> Result<StrippedFile> {
    let original =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = decode_source_text(&original)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let mut output = strip_comments_with(&decoded.text, emit);
    output.encoding = decoded.encoding;
    let contents = encode_source_text(&output.text, output.encoding);
    Ok(StrippedFile {
        original,
        source: decoded.text,
        output,
        contents,
    })
}

/// Strip one file and persist the result according to `options`.
pub fn process_file(path: &Path, options: &ResolvedOptions) -> FileOutcome {
    match try_process_file(path, options) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "failed to process file");
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error: format!("{err:#}"),
            }
        }
    }
}

fn try_process_file(path: &Path, options: &ResolvedOptions) -> Result<FileOutcome> {
    let stripped = strip_file(path, &options.emit)?;

    let backup = if options.backup {
        let backup = backup_path(path, BACKUP_EXTENSION);
        std::fs::write(&backup, &stripped.original)
            .with_context(|| format!("failed to write backup {}", backup.display()))?;
        Some(backup)
    } else {
        None
    };

    let output_path = output_path_for(path, options);
    std::fs::write(&output_path, &stripped.contents)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    let lines_removed = stripped.lines_removed();
    debug!(
        input = %path.display(),
        output = %output_path.display(),
        comments = stripped.output.comments.len(),
        lines_removed,
        line_ending = ?LineEnding::detect(&stripped.output.text),
        "processed file"
    );

    Ok(FileOutcome::Processed {
        input: path.to_path_buf(),
        output: output_path,
        backup,
        comments_removed: stripped.output.comments.len(),
        lines_removed,
        unterminated: stripped.output.unterminated,
    })
}

pub fn output_path_for(path: &Path, options: &ResolvedOptions) -> PathBuf {
    if options.in_place {
        path.to_path_buf()
    } else {
        suffixed_output_path(path, &options.suffix)
    }
}
