pub mod html;
pub mod index;
pub mod normalize;
pub mod tokenizer;

pub use index::{DocId, Document, Index, Posting};
