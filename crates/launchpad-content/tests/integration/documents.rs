//! Whole-document parsing of realistic resource files.

use launchpad_content::{extract_description, parse_content, section_label};

use crate::common::{fields, sections, AGENT_FILE, COMMAND_FILE};

#[test]
fn test_agent_file_with_implicit_frontmatter() {
    let parsed = parse_content(AGENT_FILE);

    assert_eq!(
        parsed.frontmatter,
        Some(fields(&[
            ("name", "code-reviewer"),
            ("description", "Reviews diffs for correctness"),
            ("model", "opus"),
        ]))
    );
    assert_eq!(
        parsed.sections,
        sections(&[
            ("role", "You are a meticulous code reviewer."),
            ("workflow", "1. Read the diff.\n2. Flag risky changes."),
        ])
    );
    assert_eq!(
        parsed.remaining_content,
        "## Tone\n\nBe direct: point at the line, suggest a fix."
    );
}

#[test]
fn test_command_file_with_delimited_frontmatter() {
    let parsed = parse_content(COMMAND_FILE);

    assert_eq!(parsed.frontmatter_value("allowed-tools"), Some("Bash(git:*)"));
    assert_eq!(parsed.frontmatter_value("argument-hint"), Some("[branch]"));
    assert_eq!(
        parsed.frontmatter_value("description"),
        Some("Commit, push, and open a PR")
    );
    assert_eq!(
        parsed.sections,
        sections(&[("instructions", "Use conventional commit messages.")])
    );
    assert_eq!(parsed.remaining_content, "Commit staged changes on $ARGUMENTS.");
}

#[test]
fn test_section_labels_for_parsed_sections() {
    let parsed = parse_content(AGENT_FILE);
    let labels: Vec<_> = parsed.sections.iter().map(|s| section_label(&s.tag)).collect();
    assert_eq!(labels, vec!["Role", "Workflow"]);
}

#[test]
fn test_description_of_command_file() {
    assert_eq!(
        extract_description(COMMAND_FILE).as_deref(),
        Some("Commit staged changes on $ARGUMENTS.")
    );
}

#[test]
fn test_prose_only_document() {
    let content = "\n\n# Plan\n\nStep one: gather data.\n\n";
    let parsed = parse_content(content);
    assert!(parsed.frontmatter.is_none());
    assert!(parsed.sections.is_empty());
    assert_eq!(parsed.remaining_content, "# Plan\n\nStep one: gather data.");
}

#[test]
fn test_fenced_code_with_tags_is_still_scanned() {
    // The parser is not markdown-aware: tags inside code fences count too.
    let content = "```xml\n<item>1</item>\n```";
    let parsed = parse_content(content);
    assert_eq!(parsed.sections, sections(&[("item", "1")]));
    assert_eq!(parsed.remaining_content, "```xml\n\n```");
}
