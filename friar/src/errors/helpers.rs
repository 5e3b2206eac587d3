use std::ops::Range;

use crate::source::{SourceCode, SourceLocation};

/// Converts a location into the one-character range [ariadne] labels, counted in characters
/// rather than bytes. Locations at the end of input point at the last character.
pub fn char_span(location: &SourceLocation, source: &SourceCode) -> Range<usize> {
  let code = source.as_str();
  let total = code.chars().count();

  if total == 0 {
    return 0..0;
  }

  let offset = location.offset.min(code.len());
  let start = code
    .get(..offset)
    .map_or(total, |prefix| prefix.chars().count())
    .min(total - 1);

  start..start + 1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_char_span() {
    let source = SourceCode::from_str("é = 1");
    let location = source.start().advance("é ");

    assert_eq!(char_span(&location, &source), 2..3);
    assert_eq!(char_span(&source.start().advance("é = 1"), &source), 4..5);
    assert_eq!(char_span(&SourceCode::from_str("").start(), &SourceCode::from_str("")), 0..0);
  }
}
