// Text Monitor - core/template.rs
//
// Text written into the tracked files: the initial template for a missing
// file and the sample block appended by the "Add Sample Text" button.
// Timestamps are passed in so the output is deterministic under test.

use crate::core::model::StorageKind;
use crate::util::constants::{CLOCK_FORMAT, CREATED_TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// Lines of the initial content for a newly created file:
/// header, creation timestamp, then the kind's descriptive sentences.
pub fn initial_template(kind: StorageKind, created_at: &NaiveDateTime) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + kind.template_description().len());
    lines.push(kind.template_header().to_string());
    lines.push(format!(
        "Created: {}",
        created_at.format(CREATED_TIMESTAMP_FORMAT)
    ));
    lines.extend(kind.template_description().iter().map(|s| (*s).to_string()));
    lines
}

/// Join template lines into file content, each line newline-terminated.
pub fn template_text(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Block appended by "Add Sample Text": a blank line, a timestamped separator
/// and two fixed sentences.
pub fn sample_append_block(at: &NaiveDateTime) -> String {
    format!(
        "\n\n--- Added at {} ---\n\
         This text was added from the application.\n\
         You can also edit files directly on your host system!\n",
        at.format(CLOCK_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_bind_mount_template() {
        let lines = initial_template(StorageKind::BindMount, &at());
        assert_eq!(
            template_text(&lines),
            "=== Bind Mount File ===\n\
             Created: 2025-06-01 08:05:09\n\
             This file is stored in Bind Mount\n\
             You can edit it from your host system!\n"
        );
    }

    #[test]
    fn test_volume_template() {
        let lines = initial_template(StorageKind::Volume, &at());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "=== Volume File ===");
        assert_eq!(lines[1], "Created: 2025-06-01 08:05:09");
        assert_eq!(lines[3], "It persists between container restarts");
    }

    #[test]
    fn test_sample_block_format() {
        let block = sample_append_block(&at());
        assert!(block.starts_with("\n\n--- Added at 08:05:09 ---\n"));
        assert!(block.ends_with("You can also edit files directly on your host system!\n"));
        assert_eq!(block.lines().count(), 5);
    }

    #[test]
    fn test_template_text_empty() {
        assert_eq!(template_text(&[]), "");
    }
}
