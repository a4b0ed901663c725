use tagtree::config::ConfigWarning;
use tagtree::domain::entities::PromotedOrphan;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let icon = if unicode { icons::WARNING } else { icons_ascii::WARNING };
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// One warning line per orphan that was re-rooted during the build
pub fn render_promoted_orphans(orphans: &[PromotedOrphan], color: bool, unicode: bool) -> String {
    let icon = if unicode { icons::WARNING } else { icons_ascii::WARNING };
    let mut out = String::new();
    for orphan in orphans {
        let line = format!(
            "{} '{}' promoted to root (parent '{}' not found)",
            icon, orphan.id, orphan.missing_parent_id
        );
        out.push_str(&ColoredText::warning(line).render(color));
        out.push('\n');
    }
    out
}
