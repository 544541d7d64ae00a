// Owned XML document tree
//
// Manifest elements are constructed from an already materialized tree rather
// than from the event stream, so child elements can be visited in document
// order and non-element children (comments, text) skipped explicitly.

mod tree;

pub use tree::{XmlElementNode, XmlNode};

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while turning XML text into a tree
#[derive(Error, Debug, Diagnostic)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    #[diagnostic(code(appmanifest::xml::syntax))]
    Syntax(#[from] quick_xml::Error),

    #[error("Malformed XML: <{0}> is never closed")]
    #[diagnostic(code(appmanifest::xml::unclosed))]
    Unclosed(String),

    #[error("XML document has no root element")]
    #[diagnostic(code(appmanifest::xml::missing_root))]
    MissingRoot,

    #[error("Malformed XML: <{0}> follows the root element")]
    #[diagnostic(
        code(appmanifest::xml::multiple_roots),
        help("A manifest has exactly one top-level element")
    )]
    MultipleRoots(String),
}

impl From<quick_xml::events::attributes::AttrError> for XmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmlError::Syntax(err.into())
    }
}
