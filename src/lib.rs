//! Netscape bookmark export -> single-file searchable navigation page.
//!
//! Layers follow the usual split:
//! - domain: pure model, markup tree and ports
//! - usecase: bookmark parsing, validation, per-file and batch conversion
//! - infrastructure: html5 tokenizer, page emitter, schema, async file IO, event printing
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
