/// The character stream that feeds the lexer.
///
/// Lowercases the input and hands it out one classified character at a
/// time, skipping whitespace, with a single character of pushback.
pub mod char_stream;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer pulls characters from the stream and produces typed tokens:
/// numbers, operators, the variables `x` and `y`, function names,
/// parentheses and end of input. Anything else becomes an `Unknown` token;
/// the lexer itself never fails.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// A recursive-descent parser with one token of lookahead that encodes
/// operator precedence and associativity in the shape of the tree.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Reports the first syntax error, without recovery.
/// - Bounds nesting depth so hostile input cannot overflow the stack.
pub mod parser;
/// The evaluator module computes the value of a tree at a point.
///
/// Evaluation is a pure recursive walk over `f64` values. It has no error
/// path and no side effects, so one tree can be sampled from many threads.
pub mod evaluator;
