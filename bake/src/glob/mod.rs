//! Glob pattern matching over a [`FileSystem`](crate::io::FileSystem).
//!
//! Matching happens in three steps:
//!
//! 1. [`brace::expand`] turns `{a,b}` alternatives into separate patterns
//! 2. [`parse`] turns each pattern into a [`GlobPattern`]: a root and a list
//!    of [`Segment`]s
//! 3. a recursive visitor walks the filesystem segment by segment
//!
//! [`Globber`] ties these together and de-duplicates the results.

mod ast;
pub mod brace;
mod globber;
mod matcher;
mod parser;
mod visitor;

pub use ast::{GlobPattern, GlobRoot, Segment};
pub use globber::{DirectoryPredicate, FilePredicate, Globber, GlobberSettings};
pub use matcher::{has_wildcard, SegmentMatcher};
pub use parser::parse;
