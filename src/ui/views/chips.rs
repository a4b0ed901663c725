use tagtree::{Chip, TaxonomyDimension};

use crate::ui::primitives::text::ColoredText;

/// Chips grouped under their dimension label, in display order.
pub fn render_chips(chips: &[Chip], supports_color: bool) -> String {
    if chips.is_empty() {
        return ColoredText::dim("No tags selected").render(supports_color) + "\n";
    }

    let mut out = String::new();
    let mut current: Option<TaxonomyDimension> = None;
    for chip in chips {
        if current != Some(chip.dimension) {
            out.push_str(
                &ColoredText::info(chip.dimension.label())
                    .bold()
                    .render(supports_color),
            );
            out.push('\n');
            current = Some(chip.dimension);
        }
        out.push_str(&format!(
            "  {} {}\n",
            chip.name,
            ColoredText::dim(format!("({})", chip.id)).render(supports_color)
        ));
    }
    out
}

/// Chip names on one line, for the interactive preview
pub fn chip_line(chips: &[Chip]) -> String {
    chips
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
