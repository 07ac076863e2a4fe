//! Replays the callback sequence an argument parser issues when asked
//! for help, against a [`ManPageFormatter`] instead of a console
//! formatter: one usage line, the description, one section per argument
//! group, then the epilog.

use crate::error::FormatError;
use crate::formatter::ManPageFormatter;
use crate::markup::{bold, escape_dashes, ActionView};
use crate::model::HelpModel;

/// Render a complete help model to man page text.
pub fn render_model(model: &HelpModel) -> Result<String, FormatError> {
    let mut formatter = ManPageFormatter::new(
        &model.prog,
        model.suite.as_deref(),
        model.short_desc.as_deref(),
        &model.extra_sections,
        model.date.as_deref(),
    );

    let usage = match &model.usage {
        Some(usage) => usage.clone(),
        None => synthesize_usage(model)?,
    };
    formatter.add_usage(&usage);
    if let Some(description) = &model.description {
        formatter.add_text(description);
    }
    for group in &model.groups {
        formatter.start_section(&group.title)?;
        if let Some(description) = &group.description {
            formatter.add_text(description);
        }
        formatter.add_arguments(&group.actions)?;
        formatter.end_section()?;
    }
    if let Some(epilog) = &model.epilog {
        formatter.add_text(epilog);
    }

    tracing::debug!(
        prog = %model.prog,
        groups = model.groups.len(),
        "rendered help model"
    );
    Ok(formatter.format_help())
}

/// Build a usage invocation from the model's actions: bracketed optionals
/// first (first flag only), then positionals, flags bold and metavars
/// italic. An explicit usage string in the model bypasses this entirely.
fn synthesize_usage(model: &HelpModel) -> Result<String, FormatError> {
    let mut parts = Vec::new();
    let actions: Vec<_> = model
        .groups
        .iter()
        .flat_map(|group| group.actions.iter())
        .collect();

    for action in actions.iter().filter(|action| !action.flags.is_empty()) {
        let Some(first) = action.flags.first() else {
            continue;
        };
        let flag = bold(&escape_dashes(first));
        let part = match ActionView::new(action).format_args()? {
            None => format!("[{flag}]"),
            Some(args) => format!("[{flag} {args}]"),
        };
        parts.push(part);
    }
    for action in actions.iter().filter(|action| action.flags.is_empty()) {
        if let Some(args) = ActionView::new(action).format_args()? {
            parts.push(args);
        }
    }
    Ok(parts.join(" "))
}
