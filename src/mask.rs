//! Parsing of locale date/time patterns into segment masks.
//!
//! A pattern such as `MMM d, y` is reduced to an ordered mask of field
//! segments (runs of identical pattern letters) and literal segments
//! (punctuation and quoted text). The mask drives both the tokenizer and
//! the shared-prefix/suffix walks of the range formatter.

use crate::error::PatternError;
use crate::field::{classify, FieldCategory};

/// The escape character used by ICU date/time patterns.
const ESCAPE: char = '\'';

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSegment {
    /// A contiguous run of pattern letters of one category.
    Field(FieldCategory),
    /// Literal text that appears verbatim in formatted output.
    Literal(String),
}

/// A locale date/time pattern parsed into an ordered segment mask.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMask {
    segments: Vec<PatternSegment>,
    precision: FieldCategory,
}

/// Segment under construction during the scan.
enum Open {
    None,
    Literal(String),
    Field(FieldCategory),
}

impl PatternMask {
    /// Parse a raw pattern string into a mask.
    ///
    /// Two adjacent field characters of different categories with no
    /// literal in between fail with [`PatternError::MissingSeparator`]:
    /// such a pattern cannot be tokenized back out of a formatted string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut mask = PatternMask {
            segments: Vec::new(),
            precision: FieldCategory::Era,
        };
        let mut esc_active = false;
        let mut esc_start = 0;
        let mut open = Open::None;

        for (pos, c) in pattern.char_indices() {
            if c == ESCAPE {
                if esc_active {
                    esc_active = false;
                    // A lone escape pair is a literal quote character.
                    if let Open::Literal(text) = &mut open {
                        if text.is_empty() {
                            text.push(ESCAPE);
                        }
                    }
                    mask.push(std::mem::replace(&mut open, Open::None));
                } else {
                    esc_active = true;
                    esc_start = pos;
                    mask.push(std::mem::replace(&mut open, Open::Literal(String::new())));
                }
            } else if esc_active {
                if let Open::Literal(text) = &mut open {
                    text.push(c);
                }
            } else if let Some(category) = classify(c) {
                match open {
                    // A repeated letter of the same category is absorbed
                    // into the open segment.
                    Open::Field(current) if current == category => {}
                    Open::Field(_) => {
                        return Err(PatternError::MissingSeparator { position: pos });
                    }
                    _ => {
                        mask.push(std::mem::replace(&mut open, Open::Field(category)));
                    }
                }
            } else {
                match &mut open {
                    Open::Literal(text) => text.push(c),
                    _ => {
                        mask.push(std::mem::replace(&mut open, Open::Literal(c.to_string())));
                    }
                }
            }
        }

        if esc_active {
            return Err(PatternError::UnterminatedEscape { position: esc_start });
        }
        mask.push(open);

        Ok(mask)
    }

    fn push(&mut self, open: Open) {
        match open {
            Open::None => {}
            Open::Literal(text) => {
                if !text.is_empty() {
                    self.segments.push(PatternSegment::Literal(text));
                }
            }
            Open::Field(category) => {
                self.segments.push(PatternSegment::Field(category));
                // Timezone sorts below Era, so it never raises the ceiling.
                self.precision = self.precision.max(category);
            }
        }
    }

    /// The ordered segments of this mask.
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// The finest field category present in the mask.
    ///
    /// Two points whose divergence is at or below this ceiling are
    /// indistinguishable at the requested display resolution.
    pub fn precision(&self) -> FieldCategory {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
