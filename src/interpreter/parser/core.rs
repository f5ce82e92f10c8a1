use std::mem;

use log::debug;

use crate::{
    ast::{Expr, SyntaxTree},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result of a parsing rule.
pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on grammar nesting.
///
/// Every parenthesised group, function argument, right-hand side of `**`
/// or `//`, and operator folded into a `+ - * /` chain counts towards the
/// limit. The limit therefore bounds the height of every tree the parser
/// returns, and input nested too deeply fails with
/// [`ParseError::NestingTooDeep`] instead of exhausting the stack while it
/// is parsed, evaluated or dropped.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from its [`Lexer`] on demand and never
/// backtracks. Parsing stops at the first error.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     program := expression* EOF
///     expression := term (("+" | "-") term)*
///     term := power (("*" | "/") power)*
///     power := unary (("**" | "//") power)?
///     unary := "-"? primary
///     primary := NUMBER | "x" | "y"
///              | "(" expression ")"
///              | ("sin" | "cos" | "tan") "(" expression ")"
/// ```
///
/// # Example
/// ```
/// use mathlang::interpreter::parser::core::Parser;
///
/// let tree = Parser::new("2**3**2").parse().unwrap();
/// assert_eq!(tree.eval(0.0, 0.0), 512.0);
/// ```
#[derive(Debug)]
pub struct Parser {
    lexer:     Lexer,
    current:   Token,
    depth:     usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over `input` with the default nesting limit.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser over `input` that rejects nesting deeper than
    /// `max_depth`.
    #[must_use]
    pub fn with_max_depth(input: &str, max_depth: usize) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer,
               current,
               depth: 0,
               max_depth }
    }

    /// Parses the whole input into a [`SyntaxTree`].
    ///
    /// Zero or more expressions may follow each other without a separator;
    /// each becomes a top-level node of the tree.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(mut self) -> ParseResult<SyntaxTree> {
        let mut nodes = Vec::new();
        while self.current.kind != TokenKind::EndOfInput {
            match self.parse_expression() {
                Ok(node) => nodes.push(node),
                Err(e) => {
                    debug!("parse failed: {e}");
                    return Err(e);
                },
            }
        }

        debug!("parsed {} top-level expression(s)", nodes.len());
        Ok(SyntaxTree::new(nodes))
    }

    /// Returns the current token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Moves to the next token and returns the one just left behind.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSyntax` if the kinds differ.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.current.kind != kind {
            return Err(ParseError::InvalidSyntax { expected: kind.to_string(),
                                                   found:    self.current.describe(), });
        }

        self.advance();
        Ok(())
    }

    /// Counts one more level of nesting.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the limit would be exceeded.
    pub(in crate::interpreter::parser) fn deepen(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }

        self.depth += 1;
        Ok(())
    }

    /// Runs `rule` with the nesting depth restored afterwards, whatever
    /// `rule` added to it.
    pub(in crate::interpreter::parser) fn scoped<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        let depth = self.depth;
        let result = rule(self);
        self.depth = depth;
        result
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the limit would be exceeded,
    /// otherwise whatever `rule` returns.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        self.scoped(|parser| {
                parser.deepen()?;
                rule(parser)
            })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing; it starts at the
    /// lowest precedence level, addition and subtraction.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_additive)
    }
}
