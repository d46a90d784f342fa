//! nblint: structural linting for notebook documents.
//!
//! A notebook is an ordered list of markdown and code cells. nblint checks it against a set of
//! authorship conventions: a well-formed container, a leading title, a description under every
//! header, properly nested headers, no adjacent code cells, and every import declared at the
//! deepest header whose section contains all of that import's uses.
//!
//! The import check runs as a pipeline over one immutable [`notebook::Notebook`]:
//!
//! ```text
//! cells → segment (headers + import registry) → classify usage → build tree → resolve placement
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod checks;
pub mod config;
pub mod error;
pub mod grammar;
pub mod header;
pub mod imports;
pub mod notebook;
pub mod placement;
pub mod report;
pub mod segment;
pub mod tree;
pub mod usage;

pub use checks::{run_all, Check};
pub use config::Config;
pub use error::{LoadError, Violation};
pub use notebook::{Cell, CellKind, Notebook};
pub use report::{CheckOutcome, NotebookReport};
