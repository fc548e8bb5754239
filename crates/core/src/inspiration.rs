//! Inspiration section helpers: rich text flattening and the scattered
//! moodboard layout.

use serde::Serialize;
use serde_json::Value;

/// Copy shown when the section has no text of its own.
pub const FALLBACK_TEXT: &str = "Natural textures, warm wood, sculpted stone, and subtle metallic \
accents inspired a serene and timeless design. Soft light, neutral tones, and organic materials \
evoke Mediterranean calm and understated sophistication.";

/// Flatten CMS rich text into plain paragraphs.
///
/// A plain string is returned as-is. A block list is flattened by joining
/// each block's `children[].text` and separating blocks with a blank line.
/// Anything else yields [`FALLBACK_TEXT`].
pub fn plain_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .map(|block| {
                block
                    .get("children")
                    .and_then(Value::as_array)
                    .map(|children| {
                        children
                            .iter()
                            .filter_map(|child| child.get("text").and_then(Value::as_str))
                            .collect::<String>()
                    })
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => FALLBACK_TEXT.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Scattered layout
// ---------------------------------------------------------------------------

/// Horizontal anchor of a scattered image.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    Left(f32),
    Right(f32),
}

struct Slot {
    top: f32,
    anchor: Anchor,
    width_rem: f32,
    z_index: u8,
}

const SLOTS: [Slot; 7] = [
    Slot { top: 12.0, anchor: Anchor::Left(32.0), width_rem: 10.0, z_index: 1 },
    Slot { top: 15.0, anchor: Anchor::Left(10.0), width_rem: 10.0, z_index: 1 },
    Slot { top: 20.0, anchor: Anchor::Left(60.0), width_rem: 12.0, z_index: 3 },
    Slot { top: 42.0, anchor: Anchor::Left(15.0), width_rem: 11.0, z_index: 2 },
    Slot { top: 55.0, anchor: Anchor::Left(50.0), width_rem: 13.0, z_index: 4 },
    Slot { top: 72.0, anchor: Anchor::Left(25.0), width_rem: 10.0, z_index: 1 },
    Slot { top: 68.0, anchor: Anchor::Right(5.0), width_rem: 11.0, z_index: 2 },
];

/// Offset added per full pass over the slot table.
const CYCLE_OFFSET_REM: f32 = 1.25;

/// CSS placement of one moodboard image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPosition {
    pub top: String,
    pub left: Option<String>,
    pub right: Option<String>,
    pub width: String,
    pub z_index: u8,
}

impl ScatterPosition {
    /// Inline `style` attribute value.
    pub fn to_style(&self) -> String {
        let mut style = format!("top:{};width:{};z-index:{};", self.top, self.width, self.z_index);
        if let Some(left) = &self.left {
            style.push_str(&format!("left:{left};"));
        }
        if let Some(right) = &self.right {
            style.push_str(&format!("right:{right};"));
        }
        style
    }
}

/// Deterministic pseudo-random placement for the image at `index`.
///
/// Positions repeat every seven images, nudged down and inward on each
/// further pass so stacked images stay visible.
pub fn scatter_position(index: usize) -> ScatterPosition {
    let slot = &SLOTS[index % SLOTS.len()];
    let offset = (index / SLOTS.len()) as f32 * CYCLE_OFFSET_REM;
    let calc = |percent: f32| format!("calc({percent}% + {offset}rem)");

    let (left, right) = match slot.anchor {
        Anchor::Left(p) => (Some(calc(p)), None),
        Anchor::Right(p) => (None, Some(calc(p))),
    };

    ScatterPosition {
        top: calc(slot.top),
        left,
        right,
        width: format!("{}rem", slot.width_rem),
        z_index: slot.z_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_is_kept() {
        let text = json!("Soft light and stone.");
        assert_eq!(plain_text(Some(&text)), "Soft light and stone.");
    }

    #[test]
    fn blocks_are_joined_with_blank_lines() {
        let blocks = json!([
            { "type": "paragraph", "children": [{ "type": "text", "text": "First " }, { "type": "text", "text": "line." }] },
            { "type": "paragraph", "children": [{ "type": "text", "text": "Second." }] }
        ]);
        assert_eq!(plain_text(Some(&blocks)), "First line.\n\nSecond.");
    }

    #[test]
    fn missing_text_uses_fallback() {
        assert_eq!(plain_text(None), FALLBACK_TEXT);
        assert_eq!(plain_text(Some(&json!(null))), FALLBACK_TEXT);
        assert_eq!(plain_text(Some(&json!(42))), FALLBACK_TEXT);
    }

    #[test]
    fn first_pass_uses_slot_table() {
        let pos = scatter_position(0);
        assert_eq!(pos.top, "calc(12% + 0rem)");
        assert_eq!(pos.left.as_deref(), Some("calc(32% + 0rem)"));
        assert_eq!(pos.width, "10rem");
        assert_eq!(pos.z_index, 1);
    }

    #[test]
    fn right_anchored_slot() {
        let pos = scatter_position(6);
        assert!(pos.left.is_none());
        assert_eq!(pos.right.as_deref(), Some("calc(5% + 0rem)"));
    }

    #[test]
    fn later_passes_are_offset() {
        let pos = scatter_position(8);
        assert_eq!(pos.top, "calc(15% + 1.25rem)");
        assert_eq!(pos.left.as_deref(), Some("calc(10% + 1.25rem)"));
    }

    #[test]
    fn style_attribute_lists_anchor() {
        let style = scatter_position(6).to_style();
        assert!(style.contains("right:calc(5% + 0rem);"));
        assert!(!style.contains("left:"));
    }
}
