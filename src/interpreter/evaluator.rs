/// Core evaluation dispatch.
///
/// Walks an [`Expr`](crate::ast::Expr) or a whole
/// [`SyntaxTree`](crate::ast::SyntaxTree) at a sample point `(x, y)`.
pub mod core;

/// Binary operator evaluation.
///
/// Arithmetic, exponentiation and roots on `f64` operands.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Built-in function evaluation: `sin`, `cos` and `tan`.
pub mod function;
