//! Source-location tracking for tokens and errors.

use std::fmt;
use std::ops::Add;

/// A byte-offset range into the source buffer, with an optional 1-based
/// line/column for diagnostics.
///
/// Whether the line/column fields actually hold anything useful is a
/// runtime decision (see [`crate::ParserConfig::track_positions`]), not a
/// compile-time one: a caller that disables position tracking simply hands
/// this type `line: 0, column: 0` (read back as `None`) instead of omitting
/// the fields, so the type itself never changes shape.
///
/// # Limitations
///
/// Line and column are tracked with 16-bit resolution, matching the
/// resolution the rest of the front-end uses for token positions: up to
/// 65,535 lines and 65,535 columns per line. Advancing past either maximum
/// saturates rather than wrapping.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Default)]
pub struct Span {
    start: u32,
    end: u32,
    line: u16,
    column: u16,
}

impl Span {
    /// A [`Span`] representing no location at all (synthesized tokens).
    pub const DUMMY: Self = Self {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new [`Span`] at the given byte range and line/column.
    ///
    /// `line` is 1-based; `0` means "no position known" (mirrors `DUMMY`).
    #[inline(always)]
    #[must_use]
    pub const fn new(start: u32, end: u32, line: u16, column: u16) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Byte offset of the first character covered by this span.
    #[inline(always)]
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Byte offset one past the last character covered by this span.
    #[inline(always)]
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// 1-based line number, or [`None`] if position tracking was disabled
    /// when this span was created, or this span is [`Span::DUMMY`].
    #[inline(always)]
    #[must_use]
    pub const fn line(self) -> Option<usize> {
        if self.line == 0 {
            None
        } else {
            Some(self.line as usize)
        }
    }

    /// 1-based column number, or [`None`] if position tracking was disabled
    /// when this span was created, or this span is [`Span::DUMMY`].
    #[inline(always)]
    #[must_use]
    pub const fn column(self) -> Option<usize> {
        if self.column == 0 {
            None
        } else {
            Some(self.column as usize)
        }
    }

    /// Is this span [`Span::DUMMY`]?
    #[inline(always)]
    #[must_use]
    pub const fn is_dummy(self) -> bool {
        self.start == 0 && self.end == 0
    }
}

/// Combine two spans into the smallest span covering both. Used when a node
/// built from several tokens needs a span covering all of them.
impl Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_dummy() {
            return rhs;
        }
        if rhs.is_dummy() {
            return self;
        }
        let (start, line, column) = if self.start <= rhs.start {
            (self.start, self.line(), self.column())
        } else {
            (rhs.start, rhs.line(), rhs.column())
        };
        Self {
            start,
            end: self.end.max(rhs.end),
            line: line.unwrap_or(0) as u16,
            column: column.unwrap_or(0) as u16,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            return f.write_str("<none>");
        }
        match (self.line(), self.column()) {
            (Some(line), Some(col)) => write!(f, "line {}, column {}", line, col),
            _ => write!(f, "byte {}..{}", self.start, self.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line(), self.column()) {
            (Some(line), Some(col)) => write!(f, "{}:{}", line, col),
            _ => write!(f, "{}..{}", self.start, self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_has_no_line_or_column() {
        assert_eq!(Span::DUMMY.line(), None);
        assert_eq!(Span::DUMMY.column(), None);
        assert!(Span::DUMMY.is_dummy());
    }

    #[test]
    fn zero_line_reads_back_as_none() {
        let untracked = Span::new(0, 3, 0, 0);
        assert_eq!(untracked.line(), None);
        assert_eq!(untracked.column(), None);
        assert!(!untracked.is_dummy());
    }

    #[test]
    fn add_combines_to_earliest_start_and_widest_end() {
        let a = Span::new(5, 8, 2, 1);
        let b = Span::new(0, 3, 1, 1);
        let combined = a + b;
        assert_eq!(combined.start(), 0);
        assert_eq!(combined.end(), 8);
    }

    #[test]
    fn add_with_dummy_returns_the_other_span() {
        let real = Span::new(0, 3, 1, 1);
        assert_eq!(Span::DUMMY + real, real);
        assert_eq!(real + Span::DUMMY, real);
    }

    #[test]
    fn display_prefers_line_column_over_byte_offsets() {
        let span = Span::new(10, 13, 4, 7);
        assert_eq!(span.to_string(), "line 4, column 7");
        let untracked = Span::new(10, 13, 0, 0);
        assert_eq!(untracked.to_string(), "byte 10..13");
    }
}
