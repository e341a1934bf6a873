//! Label text helpers: greedy word wrapping and anchor selection.

use crate::geom::normalize_angle;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// SVG `text-anchor` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }

    /// Anchor for a label placed radially at `deg`: labels on the right grow outwards to the
    /// right, labels on the left grow to the left, top and bottom labels are centered.
    pub fn for_angle(deg: f64) -> Self {
        let a = normalize_angle(deg);
        if !(45.0..315.0).contains(&a) {
            TextAnchor::Start
        } else if a < 135.0 {
            TextAnchor::Middle
        } else if a < 225.0 {
            TextAnchor::End
        } else {
            TextAnchor::Middle
        }
    }
}

pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedily packs whitespace-separated words into lines no wider than `max_width` cells.
///
/// A single word wider than the budget gets a line of its own and is never split.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let w = text_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = w;
        } else if current_width + 1 + w > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_area_names_at_twelve_cells() {
        assert_eq!(wrap_words("Financial Control", 12), ["Financial", "Control"]);
        assert_eq!(wrap_words("Lifestyle & Exit Plan", 12), ["Lifestyle &", "Exit Plan"]);
        assert_eq!(wrap_words("Drive Change", 12), ["Drive Change"]);
        assert_eq!(
            wrap_words("Selling & Salespeople", 12),
            ["Selling &", "Salespeople"]
        );
    }

    #[test]
    fn long_words_are_kept_whole() {
        assert_eq!(wrap_words("Internationalization now", 5), ["Internationalization", "now"]);
        assert!(wrap_words("   ", 12).is_empty());
    }

    #[test]
    fn anchors_by_quadrant() {
        assert_eq!(TextAnchor::for_angle(0.0), TextAnchor::Start);
        assert_eq!(TextAnchor::for_angle(44.9), TextAnchor::Start);
        assert_eq!(TextAnchor::for_angle(315.0), TextAnchor::Start);
        assert_eq!(TextAnchor::for_angle(45.0), TextAnchor::Middle);
        assert_eq!(TextAnchor::for_angle(90.0), TextAnchor::Middle);
        assert_eq!(TextAnchor::for_angle(135.0), TextAnchor::End);
        assert_eq!(TextAnchor::for_angle(224.0), TextAnchor::End);
        assert_eq!(TextAnchor::for_angle(225.0), TextAnchor::Middle);
        assert_eq!(TextAnchor::for_angle(-30.0), TextAnchor::Start);
    }
}
