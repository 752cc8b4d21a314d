use crate::reflow::TextMeasure;
use gpui::{Font, Hsla, SharedString, TextRun, Window, font, px};

/// Measures text through the window's shaping pipeline so wrapping sees the
/// same glyph advances the renderer will use, including full-width CJK.
pub(super) struct WindowTextMeasure<'a> {
    window: &'a Window,
    font: Font,
}

impl<'a> WindowTextMeasure<'a> {
    pub(super) fn new(window: &'a Window, family: &str) -> Self {
        Self {
            window,
            font: font(family.to_string()),
        }
    }
}

impl TextMeasure for WindowTextMeasure<'_> {
    fn text_width(&mut self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let run = TextRun {
            len: text.len(),
            font: self.font.clone(),
            color: Hsla::default(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = self.window.text_system().shape_line(
            SharedString::from(text.to_string()),
            px(font_size),
            &[run],
            None,
        );
        f32::from(line.width)
    }
}
