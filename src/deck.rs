// ABOUTME: In-memory slide deck model for the weekly-deck application
// ABOUTME: Typed slides, text boxes, and paragraphs, independent of the PPTX container

/// English Metric Units, the length unit used throughout OOXML.
pub const EMU_PER_INCH: i64 = 914_400;

/// Convert a length in inches to EMU.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64) as i64
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One paragraph of text with its typography. Sizes and spacing are in
/// hundredths of a point, matching the OOXML `sz`/`spcPts` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub size: u32,
    pub bold: bool,
    pub font: String,
    pub level: u8,
    pub align: Align,
    pub space_after: u32,
}

impl Paragraph {
    /// An empty paragraph used as vertical spacing between section blocks.
    pub fn spacer() -> Self {
        Self {
            text: String::new(),
            size: 0,
            bold: false,
            font: String::new(),
            level: 0,
            align: Align::Left,
            space_after: 0,
        }
    }

    pub fn is_spacer(&self) -> bool {
        self.text.is_empty()
    }
}

/// A positioned text box on a slide. Position and extent are in EMU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

/// One slide: a flat list of text boxes on a blank canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    pub boxes: Vec<TextBox>,
}

/// A complete deck, ready to be written out as a PPTX package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }
}
