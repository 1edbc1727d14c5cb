//! Evaluation, simplification, and factoring of expression trees built by [`exparse_parser`].
//!
//! ```
//! use exparse_compute::{symbolic::Symbolic, Eval};
//! use exparse_parser::parse;
//!
//! let mut tree = parse("2x + 3").unwrap();
//! tree.set_variable('x', 4);
//! assert_eq!(tree.eval().unwrap(), 11.0);
//!
//! let tree = parse("x*y + x*z").unwrap();
//! assert_eq!(tree.factor().to_infix(), "x(y + z)");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for [`Value`].
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod funcs;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

pub use numerical::{eval::Eval, value::Value};
