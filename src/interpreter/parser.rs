/// Parser state and the program-level rule.
///
/// Holds the current token, the lexer it pulls from and the nesting guard,
/// and parses a whole input into a [`SyntaxTree`](crate::ast::SyntaxTree).
pub mod core;

/// Binary operator rules.
///
/// Addition and subtraction, multiplication and division (all
/// left-associative), and right-associative `**` and `//`.
pub mod binary;

/// Unary minus and primary expressions.
///
/// Literals, variables, parenthesised groups and function calls.
pub mod unary;
