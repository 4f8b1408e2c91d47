//! Print a fetched issue to the terminal.
//!
//! The document is always the same four pieces in the same order: a level-1
//! title heading, the description body, a horizontal rule, and the labels
//! line. `--raw` prints them as plain markdown; otherwise each piece goes
//! through termimad's terminal renderer.

use termimad::MadSkin;

use crate::core::service::Issue;

/// The issue as a raw markdown document. Pure; carries the ordering so it is
/// testable without capturing stdout.
pub fn format_raw(issue: &Issue) -> String {
    format!(
        "# {}\n\n{}\n---\n{}\n",
        issue.title,
        issue.description,
        labels_line(&issue.labels)
    )
}

/// Print the issue to stdout, rendered unless `raw` is set.
pub fn print_issue(issue: &Issue, raw: bool) {
    if raw {
        print!("{}", format_raw(issue));
        return;
    }

    let skin = MadSkin::default();
    skin.print_text(&format!("# {}\n", issue.title));
    skin.print_text(&issue.description);
    skin.print_text("---");
    skin.print_text(&labels_line(&issue.labels));
}

/// `Labels: ` plus each label wrapped in bold-italic markers, space-separated.
fn labels_line(labels: &[String]) -> String {
    let wrapped: Vec<String> = labels.iter().map(|l| format!("**_{}_**", l)).collect();
    format!("Labels: {}", wrapped.join(" "))
}
