//! Splitting formatted date/time strings along a pattern mask.

use crate::field::FieldCategory;
use crate::mask::{PatternMask, PatternSegment};

/// What a token's content represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Field(FieldCategory),
    Literal,
}

/// A substring of a formatted date/time string attributed to one mask
/// segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
}

/// Split a formatted string into one token per mask segment, in mask order.
///
/// A field segment's content runs up to the first occurrence of the next
/// literal segment's text (or to the end of the string); literal segments
/// consume their own text. Concatenating all token contents reproduces the
/// input, so the caller can reassemble any subrange verbatim.
///
/// The caller must format the string from the same pattern the mask was
/// built from; a structural mismatch is an integration error, not a
/// user-facing one, and tokenization degrades leniently in release builds.
pub fn tokenize(mask: &PatternMask, formatted: &str) -> Vec<Token> {
    let segments = mask.segments();
    let mut tokens = Vec::with_capacity(segments.len());
    let mut rest = formatted;

    for (idx, segment) in segments.iter().enumerate() {
        match segment {
            PatternSegment::Literal(text) => {
                match rest.strip_prefix(text.as_str()) {
                    Some(stripped) => rest = stripped,
                    None => {
                        debug_assert!(
                            false,
                            "formatted string {formatted:?} does not match mask literal {text:?}"
                        );
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Literal,
                    content: text.clone(),
                });
            }
            PatternSegment::Field(category) => {
                // Fields cannot be adjacent, so the next segment (if any)
                // is the literal that bounds this field's content.
                let content = match segments.get(idx + 1) {
                    Some(PatternSegment::Literal(next)) => match rest.find(next.as_str()) {
                        Some(pos) => {
                            let (content, remainder) = rest.split_at(pos);
                            rest = remainder;
                            content
                        }
                        None => std::mem::take(&mut rest),
                    },
                    _ => std::mem::take(&mut rest),
                };
                tokens.push(Token {
                    kind: TokenKind::Field(*category),
                    content: content.to_string(),
                });
            }
        }
    }

    tokens
}
