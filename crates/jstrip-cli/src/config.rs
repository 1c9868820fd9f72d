use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use jstrip_emitter::{EmitOptions, strip_comments_with};

/// Name of the config file looked up next to the processed path.
pub const CONFIG_FILE_NAME: &str = "jstrip.json";
/// Suffix appended to the file stem of new output files.
pub const DEFAULT_SUFFIX: &str = "_no_comments";
/// Extension appended to the full file name of backups.
pub const BACKUP_EXTENSION: &str = "backup";

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles cases where jstrip.json contains `"backup": "false"` instead of `"backup": false`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                    s
                ))),
            }
        }
    }
}

/// Contents of a `jstrip.json` file. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JstripConfig {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub backup: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub in_place: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub recursive: Option<bool>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub preserve_line_breaks: Option<bool>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Options after merging the config file with command line flags.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub backup: bool,
    pub in_place: bool,
    pub recursive: bool,
    pub suffix: String,
    pub emit: EmitOptions,
    pub exclude: GlobSet,
    pub exclude_patterns: Vec<String>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ResolvedOptions {
            backup: true,
            in_place: false,
            recursive: true,
            suffix: DEFAULT_SUFFIX.to_string(),
            emit: EmitOptions::default(),
            exclude: GlobSet::empty(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Parse `jstrip.json` text. Comments and trailing commas are tolerated.
pub fn parse_config(source: &str) -> Result<JstripConfig> {
    // Line breaks are kept so serde_json error positions match the file.
    let stripped = strip_comments_with(
        source,
        &EmitOptions {
            preserve_line_breaks: true,
        },
    )
    .text;
    let normalized = remove_trailing_commas(&stripped);
    let config = serde_json::from_str(&normalized).context("failed to parse jstrip.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<JstripConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Find the config for `target`: an explicit `--config`, else `jstrip.json`
/// in the target directory (or the directory containing the target file).
pub fn find_config(explicit: Option<&Path>, target: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let dir = if target.is_dir() {
        target
    } else {
        target.parent()?
    };
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Merge config values with command line flags. Flags win.
pub fn resolve_options(config: Option<&JstripConfig>, args: &CliArgs) -> Result<ResolvedOptions> {
    let mut resolved = ResolvedOptions::default();

    if let Some(config) = config {
        if let Some(backup) = config.backup {
            resolved.backup = backup;
        }
        if let Some(in_place) = config.in_place {
            resolved.in_place = in_place;
        }
        if let Some(recursive) = config.recursive {
            resolved.recursive = recursive;
        }
        if let Some(suffix) = config.suffix.as_deref() {
            resolved.suffix = suffix.to_string();
        }
        if let Some(preserve) = config.preserve_line_breaks {
            resolved.emit.preserve_line_breaks = preserve;
        }
        if let Some(exclude) = config.exclude.as_ref() {
            resolved.exclude_patterns.extend(exclude.iter().cloned());
        }
    }

    if args.no_backup {
        resolved.backup = false;
    }
    if args.in_place {
        resolved.in_place = true;
    }
    if args.no_recursive {
        resolved.recursive = false;
    }
    if let Some(suffix) = args.suffix.as_deref() {
        resolved.suffix = suffix.to_string();
    }
    if args.preserve_line_breaks {
        resolved.emit.preserve_line_breaks = true;
    }
    resolved.exclude_patterns.extend(args.exclude.iter().cloned());

    if !resolved.in_place && resolved.suffix.is_empty() {
        anyhow::bail!("an empty --suffix would overwrite the input; use --in-place instead");
    }

    resolved.exclude = build_glob_set(&resolved.exclude_patterns)?;
    Ok(resolved)
}

pub fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid exclude pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build exclude patterns")
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            continue;
        }

        if ch == ',' {
            let mut lookahead = chars.clone();
            while lookahead.next_if(|next| next.is_whitespace()).is_some() {}
            if let Some(next) = lookahead.peek().copied()
                && (next == '}' || next == ']')
            {
                continue;
            }
        }

        out.push(ch);
    }

    out
}
