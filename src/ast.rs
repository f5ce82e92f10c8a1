use std::fmt;

use log::error;
use ordered_float::NotNan;

use crate::{
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
    util::num::literal_to_not_nan,
};

/// One of the two free variables of a surface function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    /// The first coordinate.
    X,
    /// The second coordinate.
    Y,
}

/// Binary arithmetic operators, in the grammar's precedence groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`, right-associative.
    Pow,
    /// `//`: `a // b` is the `b`-th root of `a`. Right-associative.
    Root,
}

impl BinaryOperator {
    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Root => "//",
        }
    }
}

/// Built-in functions of one argument, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
}

impl Function {
    /// Returns the source name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

impl TryFrom<TokenKind> for Var {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::VarX => Ok(Self::X),
            TokenKind::VarY => Ok(Self::Y),
            other => Err(other),
        }
    }
}

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Add => Ok(Self::Add),
            TokenKind::Sub => Ok(Self::Sub),
            TokenKind::Mul => Ok(Self::Mul),
            TokenKind::Div => Ok(Self::Div),
            TokenKind::Pow => Ok(Self::Pow),
            TokenKind::Root => Ok(Self::Root),
            other => Err(other),
        }
    }
}

impl TryFrom<TokenKind> for Function {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Sin => Ok(Self::Sin),
            TokenKind::Cos => Ok(Self::Cos),
            TokenKind::Tan => Ok(Self::Tan),
            other => Err(other),
        }
    }
}

/// An expression node.
///
/// Each node owns its children; the tree has no sharing and no unresolved
/// names. Evaluation lives in
/// [`interpreter::evaluator`](crate::interpreter::evaluator).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A finite numeric literal.
    Literal {
        /// The literal's value.
        value: NotNan<f64>,
    },
    /// A reference to `x` or `y`.
    Variable {
        /// Which variable.
        var: Var,
    },
    /// Unary minus.
    Negate {
        /// The negated operand.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in function.
    FunctionCall {
        /// The function being called.
        func:     Function,
        /// Its single argument.
        argument: Box<Self>,
    },
}

/// Builds the error for a node constructor handed the wrong token.
fn invalid_node(node: &str, token: &Token) -> ParseError {
    error!("cannot build {node} node from {token}; the parser is inconsistent");
    ParseError::InvalidNodeCreation { details: format!("{node} node cannot be built from {}",
                                                       token.describe()) }
}

impl Expr {
    /// Builds a literal node from a `Number` token.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNodeCreation` if the token is not a number
    /// or its text does not convert to a finite value.
    ///
    /// # Example
    /// ```
    /// use mathlang::{
    ///     ast::Expr,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let node = Expr::literal(&Token::new(TokenKind::Number, "2.5")).unwrap();
    /// assert_eq!(node.to_string(), "2.5");
    /// assert!(Expr::literal(&Token::new(TokenKind::VarX, "x")).is_err());
    /// ```
    pub fn literal(token: &Token) -> Result<Self, ParseError> {
        if token.kind != TokenKind::Number {
            return Err(invalid_node("literal", token));
        }

        let value = literal_to_not_nan(&token.text).inspect_err(|e| error!("{e}"))?;
        Ok(Self::Literal { value })
    }

    /// Builds a variable node from a `VarX` or `VarY` token.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNodeCreation` for any other token.
    pub fn variable(token: &Token) -> Result<Self, ParseError> {
        let var = Var::try_from(token.kind).map_err(|_| invalid_node("variable", token))?;
        Ok(Self::Variable { var })
    }

    /// Builds a negation of `expr`.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr) }
    }

    /// Builds a binary node from an operator token and two operands.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNodeCreation` if the token is not one of
    /// `+ - * / ** //`.
    pub fn binary(left: Self, op: &Token, right: Self) -> Result<Self, ParseError> {
        let op = BinaryOperator::try_from(op.kind).map_err(|_| invalid_node("binary", op))?;
        Ok(Self::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right) })
    }

    /// Builds a function call node from a `sin`, `cos` or `tan` token.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNodeCreation` for any other token.
    pub fn function(func: &Token, argument: Self) -> Result<Self, ParseError> {
        let func = Function::try_from(func.kind).map_err(|_| invalid_node("function", func))?;
        Ok(Self::FunctionCall { func,
                                argument: Box::new(argument) })
    }

    /// Writes an indented, one-node-per-line description of this subtree.
    fn write_dump(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Self::Literal { value } => writeln!(f, "{pad}Literal[{value}]"),
            Self::Variable { var } => writeln!(f, "{pad}Variable[{var:?}]"),
            Self::Negate { expr } => {
                writeln!(f, "{pad}Negate(")?;
                expr.write_dump(f, indent + 1)?;
                writeln!(f, "{pad})")
            },
            Self::BinaryOp { left, op, right } => {
                writeln!(f, "{pad}BinaryOp[{}](", op.symbol())?;
                left.write_dump(f, indent + 1)?;
                right.write_dump(f, indent + 1)?;
                writeln!(f, "{pad})")
            },
            Self::FunctionCall { func, argument } => {
                writeln!(f, "{pad}FunctionCall[{}](", func.name())?;
                argument.write_dump(f, indent + 1)?;
                writeln!(f, "{pad})")
            },
        }
    }
}

/// Prints the expression in fully parenthesised infix form. The output
/// parses back to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { var: Var::X } => f.write_str("x"),
            Self::Variable { var: Var::Y } => f.write_str("y"),
            Self::Negate { expr } => match **expr {
                Self::Literal { .. } | Self::Variable { .. } | Self::FunctionCall { .. } => {
                    write!(f, "-{expr}")
                },
                _ => write!(f, "-({expr})"),
            },
            Self::BinaryOp { left, op, right } => write!(f, "({left} {} {right})", op.symbol()),
            Self::FunctionCall { func, argument } => write!(f, "{}({argument})", func.name()),
        }
    }
}

/// The result of parsing one input string.
///
/// A tree holds zero or more top-level expressions; its value is their sum.
/// Trees are immutable and can be shared freely between threads for
/// read-only evaluation.
///
/// # Example
/// ```
/// use mathlang::parse;
///
/// let tree = parse("1 2 3").unwrap();
/// assert_eq!(tree.nodes().len(), 3);
/// assert_eq!(tree.eval(0.0, 0.0), 6.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    nodes: Vec<Expr>,
}

impl SyntaxTree {
    /// Creates a tree from its top-level expressions.
    #[must_use]
    pub const fn new(nodes: Vec<Expr>) -> Self {
        Self { nodes }
    }

    /// Returns the top-level expressions in source order.
    #[must_use]
    pub fn nodes(&self) -> &[Expr] {
        &self.nodes
    }

    /// Returns `true` if the input contained no expressions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an indented, one-node-per-line description of the tree.
    ///
    /// # Example
    /// ```
    /// use mathlang::parse;
    ///
    /// let dump = parse("-x").unwrap().dump();
    /// assert_eq!(dump, "AST(\n  Negate(\n    Variable[X]\n  )\n)\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        TreeDump(self).to_string()
    }
}

/// Adapter that formats a tree as its indented dump.
struct TreeDump<'a>(&'a SyntaxTree);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AST(")?;
        for node in &self.0.nodes {
            node.write_dump(f, 1)?;
        }
        writeln!(f, ")")
    }
}

/// Prints each top-level expression, separated by spaces.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
