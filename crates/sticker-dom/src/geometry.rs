//! Layout geometry
//!
//! The headless document does not run layout. Each element carries an
//! explicit box in document coordinates which the embedder (or a test)
//! assigns.

/// Border box of an element, relative to the document origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutBox {
    /// Offset from the top of the document
    pub top: f64,
    /// Content height
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl LayoutBox {
    /// Box with no padding
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            ..Self::default()
        }
    }

    /// Add vertical padding
    pub fn with_padding(mut self, top: f64, bottom: f64) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Content + padding height, what `outerHeight()` reports
    pub fn outer_height(&self) -> f64 {
        self.height + self.padding_top + self.padding_bottom
    }
}
