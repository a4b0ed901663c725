//! Human-readable error reports for the binary.

use tagtree::TagTreeError;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

/// Format an error chain, with a fix hint when the cause is a known
/// tagtree error.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode { icons::ERROR } else { icons_ascii::ERROR };
    let mut out = ColoredText::error(format!("{} {}", icon, err))
        .bold()
        .render(supports_color);
    out.push('\n');

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(hint) = err
        .chain()
        .find_map(|e| e.downcast_ref::<TagTreeError>())
        .and_then(fix_hint)
    {
        out.push_str(&ColoredText::dim(format!("  hint: {}", hint)).render(supports_color));
        out.push('\n');
    }

    out
}

fn fix_hint(err: &TagTreeError) -> Option<&'static str> {
    match err {
        TagTreeError::UnknownNode { .. } => {
            Some("run `tagtree tree --tags <FILE>` to list the available ids")
        }
        TagTreeError::OrphanedNode { .. } => {
            Some("fix the parentId, or set `orphans = \"promote\"` under [forest]")
        }
        TagTreeError::CyclicReference { .. } => Some("parentId references must not loop"),
        TagTreeError::DuplicateNode { .. } => Some("tag ids must be unique across dimensions"),
        TagTreeError::DimensionMismatch { .. } => {
            Some("a child must share its parent's dimension")
        }
        TagTreeError::LevelMismatch { .. } => {
            Some("fix the level, or set `strict_levels = false` under [forest]")
        }
        TagTreeError::TooDeep { .. } => {
            Some("check parentId chains, or raise `max_depth` under [forest]")
        }
        _ => None,
    }
}
