use std::path::PathBuf;

use crate::driver::{FileOutcome, RunSummary, TargetKind};
use crate::reporter::Reporter;
use jstrip_emitter::LexState;

fn processed(name: &str, backup: bool) -> FileOutcome {
    let input = PathBuf::from(format!("src/{name}.java"));
    FileOutcome::Processed {
        output: PathBuf::from(format!("src/{name}_no_comments.java")),
        backup: backup.then(|| PathBuf::from(format!("src/{name}.java.backup"))),
        input,
        comments_removed: 2,
        lines_removed: 0,
        unterminated: None,
    }
}

fn failed(name: &str) -> FileOutcome {
    FileOutcome::Failed {
        path: PathBuf::from(format!("src/{name}.java")),
        error: "invalid UTF-8 at byte 3".to_string(),
    }
}

fn summary(kind: TargetKind, outcomes: Vec<FileOutcome>) -> RunSummary {
    RunSummary {
        target: PathBuf::from("src"),
        kind,
        outcomes,
    }
}

#[test]
fn renders_directory_run_without_color() {
    let run = summary(
        TargetKind::Directory,
        vec![processed("A", true), failed("B")],
    );
    let rendered = Reporter::new(false).render(&run);

    assert_eq!(
        rendered,
        "Found 2 Java file(s) to process\n\
         Backup created: src/A.java.backup\n\
         Successfully processed: src/A.java -> src/A_no_comments.java\n\
         Error processing src/B.java: invalid UTF-8 at byte 3\n\
         \n\
         Processing complete:\n  \
         Successfully processed: 1 files\n  \
         Errors: 1 files"
    );
}

#[test]
fn single_file_run_has_no_summary() {
    let run = summary(TargetKind::File, vec![processed("A", false)]);
    let rendered = Reporter::new(false).render(&run);
    assert_eq!(
        rendered,
        "Successfully processed: src/A.java -> src/A_no_comments.java"
    );
}

#[test]
fn empty_directory_says_so() {
    let run = summary(TargetKind::Directory, Vec::new());
    assert_eq!(Reporter::new(false).render(&run), "No Java files found in src");
}

#[test]
fn quiet_prints_only_the_summary() {
    let run = summary(
        TargetKind::Directory,
        vec![processed("A", true), processed("B", true)],
    );
    let rendered = Reporter::new(false).quiet(true).render(&run);

    assert!(!rendered.contains("Backup created"));
    assert!(!rendered.contains("Found 2"));
    assert!(rendered.contains("Successfully processed: 2 files"));
    assert!(rendered.contains("Errors: 0 files"));
}

#[test]
fn warns_about_unterminated_constructs() {
    let outcome = FileOutcome::Processed {
        input: PathBuf::from("Open.java"),
        output: PathBuf::from("Open_no_comments.java"),
        backup: None,
        comments_removed: 1,
        lines_removed: 0,
        unterminated: Some(LexState::BlockComment { is_doc: true }),
    };
    let lines = Reporter::new(false).format_outcome(&outcome);
    assert_eq!(
        lines[0],
        "Warning: Open.java ends inside an unterminated doc comment"
    );
}

#[test]
fn color_mode_adds_escape_codes() {
    colored::control::set_override(true);
    let run = summary(TargetKind::File, vec![failed("B")]);
    let rendered = Reporter::new(true).render(&run);
    colored::control::unset_override();

    assert!(rendered.contains("\u{1b}["));
    assert!(rendered.contains("src/B.java"));
}

#[test]
fn json_output_lists_every_file() {
    let run = summary(
        TargetKind::Directory,
        vec![processed("A", false), failed("B")],
    );
    let json = Reporter::new(false).render_json(&run).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["kind"], "directory");
    assert_eq!(value["succeeded"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["files"][0]["status"], "processed");
    assert_eq!(value["files"][0]["commentsRemoved"], 2);
    assert_eq!(value["files"][1]["status"], "failed");
    assert_eq!(value["files"][1]["error"], "invalid UTF-8 at byte 3");
}
