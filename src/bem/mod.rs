//! BEM classification: token shapes, filtering, and tree construction.

pub mod classifier;
pub mod filter;
pub mod token;
pub mod tree;

pub use classifier::{Classification, ClassifierState, classify, classify_detailed};
pub use filter::FilterConfig;
pub use token::TokenKind;
pub use tree::{BemNode, BemTree, ElemNode};
