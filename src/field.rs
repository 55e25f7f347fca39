//! Field categories and the pattern-letter classifier.

/// Coarse semantic category of a date/time pattern field.
///
/// The declaration order is the precision order, coarsest to finest, so the
/// derived `Ord` can be used directly to compare granularities. `Timezone`
/// deliberately sorts below `Era`: timezone fields never raise a mask's
/// precision and never interrupt the shared-prefix/suffix walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldCategory {
    Timezone,
    Era,
    Year,
    Quarter,
    Month,
    Week,
    Day,
    AmPm,
    Hour,
    Minute,
    Second,
}

/// The coarsest granularity at which two points in time agree.
///
/// `Expand` is the "nothing can be shared" sentinel: it sorts below every
/// field category, so every segment counts as finer than the split and both
/// ends are rendered in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Expand,
    Field(FieldCategory),
}

impl Granularity {
    /// Whether a segment of the given category belongs to the shared
    /// portion of the output.
    pub fn shares(&self, category: FieldCategory) -> bool {
        Granularity::Field(category) <= *self
    }
}

/// Classify an ICU pattern letter. Returns `None` for literal characters.
pub fn classify(c: char) -> Option<FieldCategory> {
    use FieldCategory::*;

    match c {
        'G' => Some(Era),
        'y' | 'Y' | 'u' | 'U' | 'r' => Some(Year),
        'Q' | 'q' => Some(Quarter),
        'M' | 'L' => Some(Month),
        'w' | 'W' => Some(Week),
        'd' | 'D' | 'F' | 'g' | 'E' | 'e' | 'c' => Some(Day),
        'a' => Some(AmPm),
        'h' | 'H' | 'k' | 'K' => Some(Hour),
        'm' => Some(Minute),
        's' | 'S' | 'A' => Some(Second),
        'z' | 'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => Some(Timezone),
        _ => None,
    }
}
