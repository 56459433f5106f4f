//! Failures surfaced by flex layout.

use core::fmt::{self, Display, Formatter};
use css_box::BoxKind;
use std::collections::TryReserveError;
use std::error::Error;

/// Why a flex container could not be laid out.
///
/// Either kind aborts layout of the container; the caller keeps whatever
/// geometry the subtree had before.
#[derive(Debug)]
pub enum FlexLayoutError {
    /// Growing the item or line array failed.
    OutOfMemory {
        what: &'static str,
        source: TryReserveError,
    },
    /// A block, table or grid child could not be laid out.
    ChildLayout {
        kind: BoxKind,
        source: anyhow::Error,
    },
}

impl Display for FlexLayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { what, source } => {
                write!(f, "out of memory allocating flex {what}: {source}")
            }
            Self::ChildLayout { kind, source } => {
                write!(f, "{kind:?} flex item layout failed: {source}")
            }
        }
    }
}

impl Error for FlexLayoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfMemory { source, .. } => Some(source),
            Self::ChildLayout { source, .. } => Some(source.as_ref()),
        }
    }
}
