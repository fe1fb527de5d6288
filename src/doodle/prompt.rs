//! The workshop-doodle instruction template.
//!
//! Every generation wraps the user's trend text in the same fixed template so
//! the model produces doodles with a consistent canvas, palette, and stroke
//! style across the whole board.

/// Canvas width every doodle is drawn on, in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height every doodle is drawn on, in pixels.
pub const CANVAS_HEIGHT: u32 = 300;

/// Paper background color. Mandatory, never pure white.
pub const PAPER: &str = "#f4e4c3";
/// Ink color for outlines.
pub const INK: &str = "#0d1b2a";
/// Orange accent.
pub const ACCENT_ORANGE: &str = "#e4572e";
/// Yellow accent.
pub const ACCENT_YELLOW: &str = "#f5b42a";
/// Teal accent.
pub const ACCENT_TEAL: &str = "#4cb5ae";
/// Purple accent.
pub const ACCENT_PURPLE: &str = "#6c4ab6";

/// System directive sent with every completion request.
pub const SYSTEM_DIRECTIVE: &str = "You are an SVG illustration engine for playful workshop doodles. You ONLY respond with a single <svg>...</svg> element.";

/// Wraps a trend description in the full doodle instruction template.
pub fn compose(trend: &str) -> String {
    format!(
        r#"
You are designing a playful WORKSHOP DOODLE as SVG for this concept:

"{trend}"

Requirements:

- Overall vibe:
  - Fun, chunky, hand-drawn workshop doodle.
  - Looks like something on a sticky note or facilitation wall.
  - Simple but expressive, not overly detailed.

- Composition:
  - Use a {width}x{height} canvas.
  - Include 3–7 simple elements (shapes / icons / arrows).
  - Focus on clear metaphor for the concept (e.g. people, arrows, screens, circles, stars).
  - Center-weighted composition, avoid empty corners.

- Style:
  - Flat colors, no gradients.
  - THICK strokes (4–6px) with rounded linecaps and linejoins.
  - DO NOT use text labels inside the image (no words, letters, or numbers).

- Color palette (stick to these):
  - Background: {paper} (paper)
  - Ink / outlines: {ink}
  - Accents: {orange} (orange), {yellow} (yellow), {teal} (teal), {purple} (purple)
  - Avoid pure white backgrounds; always use the paper color as base.

- Technical SVG details:
  - Use: <svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" ...>
  - Set a background rect that fills the whole canvas with {paper}.
  - Use stroke="{ink}" and stroke-width between 4 and 6 for main outlines.
  - No external images, no <foreignObject>, no scripts.

Return ONLY a single <svg>...</svg> element, nothing else.
"#,
        trend = trend,
        width = CANVAS_WIDTH,
        height = CANVAS_HEIGHT,
        paper = PAPER,
        ink = INK,
        orange = ACCENT_ORANGE,
        yellow = ACCENT_YELLOW,
        teal = ACCENT_TEAL,
        purple = ACCENT_PURPLE,
    )
}

/// Default prompt synthesized from a tile title when no prompt text was
/// entered.
pub fn fallback_prompt(title: &str) -> String {
    format!(
        "A visual metaphor for the 2025 trend: {title}. Stylized, clean, workshop-friendly illustration."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_embeds_trend_in_quotes() {
        let composed = compose("robots swapping sticky notes");
        assert!(composed.contains("\"robots swapping sticky notes\""));
    }

    #[test]
    fn test_compose_pins_canvas_and_palette() {
        let composed = compose("anything");
        assert!(composed.contains("Use a 400x300 canvas."));
        assert!(composed.contains("Background: #f4e4c3 (paper)"));
        assert!(composed.contains("Ink / outlines: #0d1b2a"));
        assert!(composed.contains("#e4572e (orange)"));
        assert!(composed.contains("#f5b42a (yellow)"));
        assert!(composed.contains("#4cb5ae (teal)"));
        assert!(composed.contains("#6c4ab6 (purple)"));
    }

    #[test]
    fn test_compose_demands_a_single_svg_element() {
        let composed = compose("anything");
        assert!(composed.ends_with("Return ONLY a single <svg>...</svg> element, nothing else.\n"));
    }

    #[test]
    fn test_fallback_prompt_embeds_title() {
        assert_eq!(
            fallback_prompt("AI co-pilots"),
            "A visual metaphor for the 2025 trend: AI co-pilots. Stylized, clean, workshop-friendly illustration."
        );
    }
}
