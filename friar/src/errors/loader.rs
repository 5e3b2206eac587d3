use std::fmt;
use std::io::Error;
use std::sync::Arc;

use super::{LangError, Wrappable};

#[derive(Clone, Debug)]
pub enum LoaderError {
  IO { error: Arc<Error>, path: String },
}

impl Wrappable for LoaderError {
  type Wrapper = LangError;

  fn wrap(self) -> Self::Wrapper {
    LangError::Loader(self)
  }
}

/// Custom [PartialEq] implementation because of [Arc] used in IO variant.
impl PartialEq for LoaderError {
  fn eq(&self, other: &LoaderError) -> bool {
    match (self, other) {
      // std::io::Error cannot be compared, so only the paths are.
      | (LoaderError::IO { path: this, .. }, LoaderError::IO { path: other, .. }) => this == other,
    }
  }
}

impl fmt::Display for LoaderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | LoaderError::IO { error, path } => write!(f, "{path}: could not read file: {error}"),
    }
  }
}
