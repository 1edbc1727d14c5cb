pub mod binary;
pub mod literal;
pub mod node;
pub mod tree;
pub mod unary;

pub use binary::Binary;
pub use literal::{LitNum, LitVar};
pub use node::Node;
pub use tree::Tree;
pub use unary::Unary;
