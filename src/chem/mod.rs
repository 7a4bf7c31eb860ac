//! Chemical identifier support for the naming functions.

pub mod element;
pub mod formula;
pub mod inchi;

pub use element::Element;
pub use inchi::HashKey;
