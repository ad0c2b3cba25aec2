//! Render sink - the single transform write per state update.

/// Receives the horizontal translation to apply to the panel container.
pub trait RenderSink {
    fn apply_translate_x(&mut self, offset_px: f32);
}

/// CSS transform value for a horizontal translation
pub fn translate_x_css(offset_px: f32) -> String {
    format!("translateX({offset_px}px)")
}

/// Sink that records every transform it was asked to write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformLog {
    writes: Vec<String>,
}

impl TransformLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Last transform written, if any
    pub fn current(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl RenderSink for TransformLog {
    fn apply_translate_x(&mut self, offset_px: f32) {
        self.writes.push(translate_x_css(offset_px));
    }
}
