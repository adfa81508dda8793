use crate::domain::error::ParseError;
use crate::domain::markup::MarkupTree;
use crate::domain::model::Category;
use anyhow::Result;

/// Turns loosely structured bookmark markup into a well-formed tree.
///
/// Implementations must be lenient: unclosed `<DT>`/`<H3>`/`<p>` elements are
/// closed the way a browser would close them.
pub trait MarkupTokenizer {
    fn tokenize(&self, text: &str) -> Result<MarkupTree, ParseError>;
}

pub trait PageEmitter {
    fn emit(&self, categories: &[Category]) -> Result<String>;
}
