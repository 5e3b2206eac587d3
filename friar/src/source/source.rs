use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Source code container to avoid large files duplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCode(pub Arc<SourceContainer>);

/// Internal source code container, used for ergonomics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceContainer {
  /// File path or 'inline'.
  pub source: String,
  /// Source code.
  pub code: String,
}

impl SourceCode {
  /// Creates a [SourceContainer] instance wrapping a string.
  pub fn from_string(code: String, path: &str) -> Self {
    SourceCode(Arc::new(SourceContainer {
      code,
      source: path.to_string(),
    }))
  }

  /// Creates a [SourceContainer] instance *cloning* a string slice.
  #[allow(clippy::should_implement_trait)]
  pub fn from_str(code: &str) -> Self {
    Self::from_string(code.to_string(), "inline")
  }

  /// Creates a [SourceContainer] instance from an vector of bytes.
  ///
  /// NOTE: It uses `String::from_utf8_lossy`.
  pub fn from_bytes(bytes: Vec<u8>, path: &str) -> Self {
    Self::from_string(String::from_utf8_lossy(&bytes).to_string(), path)
  }

  /// Returns a string slice of the `code`.
  pub fn as_str(&self) -> &str {
    self.0.code.as_str()
  }

  /// Returns the file name of source.
  pub fn file_name(&self) -> &str {
    let path = self.0.source.as_str();

    Path::new(path)
      .file_name()
      .and_then(|filename| filename.to_str())
      .unwrap_or(path)
  }

  /// Returns the file path of source.
  pub fn file_path(&self) -> &str {
    self.0.source.as_str()
  }

  /// Location of the very first character of the code.
  pub fn start(&self) -> SourceLocation {
    SourceLocation {
      file: Arc::from(self.file_path()),
      line: 1,
      column: 1,
      offset: 0,
    }
  }
}

/// Position of a token or node, attached once when it is created.
///
/// `offset` is the byte offset into the [SourceCode], used to label reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
  pub file: Arc<str>,
  pub line: u32,
  pub column: u32,
  pub offset: usize,
}

impl SourceLocation {
  /// Returns the location right after `consumed` was read starting at `self`.
  pub fn advance(&self, consumed: &str) -> SourceLocation {
    let mut line = self.line;
    let mut column = self.column;

    for ch in consumed.chars() {
      if ch == '\n' {
        line += 1;
        column = 1;
      } else {
        column += 1;
      }
    }

    SourceLocation {
      file: self.file.clone(),
      line,
      column,
      offset: self.offset + consumed.len(),
    }
  }
}

impl fmt::Display for SourceLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}", self.file, self.line, self.column)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_advance_tracks_lines_and_columns() {
    let start = SourceCode::from_str("ab\ncd").start();
    let end = start.advance("ab\nc");

    assert_eq!((end.line, end.column, end.offset), (2, 2, 4));
    assert_eq!(end.to_string(), "inline:2:2");
  }

  #[test]
  fn test_file_name() {
    let code = SourceCode::from_string("".to_string(), "some/dir/main.fr");

    assert_eq!(code.file_name(), "main.fr");
    assert_eq!(code.file_path(), "some/dir/main.fr");
    assert_eq!(code.as_str(), "");
  }
}
