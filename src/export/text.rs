use anyhow::{Context, Result};

use crate::board::GroupBoard;

/// Plain-text rendering: one numbered block per group, blank line between
/// groups. Suitable for pasting straight into chat or email.
pub fn render_text(board: &GroupBoard) -> String {
    board
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let members = group
                .members
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{}. {}", i + 1, name))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}:\n{}", board.display_name(index), members)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Markdown rendering with a heading per group.
pub fn render_markdown(board: &GroupBoard) -> String {
    let mut out = String::from("# Group Assignment\n");

    for (index, group) in board.groups().iter().enumerate() {
        out.push_str(&format!("\n## {}\n\n", board.display_name(index)));
        for (i, name) in group.members.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, name));
        }
    }

    out
}

/// JSON rendering: an array of `{ "label", "members" }` objects with the
/// resolved display names filled in.
pub fn render_json(board: &GroupBoard) -> Result<String> {
    let groups: Vec<serde_json::Value> = board
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| {
            serde_json::json!({
                "label": board.display_name(index),
                "members": group.members,
            })
        })
        .collect();

    serde_json::to_string_pretty(&groups).context("Failed to serialize groups")
}
