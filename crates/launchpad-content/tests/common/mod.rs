//! Shared helpers for content parsing tests.

use std::collections::BTreeMap;

use launchpad_content::Section;

/// Build a frontmatter map from literal pairs.
pub fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build an expected section list from literal pairs.
pub fn sections(pairs: &[(&str, &str)]) -> Vec<Section> {
    pairs.iter().map(|(tag, content)| Section::new(*tag, *content)).collect()
}

/// A realistic agent file with implicit frontmatter and tagged sections.
pub const AGENT_FILE: &str = "name: code-reviewer
description: \"Reviews diffs for correctness\"
model: opus
<role>
You are a meticulous code reviewer.
</role>

<workflow>
1. Read the diff.
2. Flag risky changes.
</workflow>

## Tone

Be direct: point at the line, suggest a fix.
";

/// A realistic command file with a delimited frontmatter block.
pub const COMMAND_FILE: &str = "---
allowed-tools: Bash(git:*)
argument-hint: '[branch]'
description: Commit, push, and open a PR
---

Commit staged changes on $ARGUMENTS.

<instructions>
Use conventional commit messages.
</instructions>
";
