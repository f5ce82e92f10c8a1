use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses an optional unary minus followed by a primary.
    ///
    /// The minus applies to the primary alone, so `-2**2` is `(-2)**2`.
    /// A second minus is not a primary, which makes `--1` an
    /// `InvalidState` error.
    ///
    /// Grammar: `unary := "-"? primary`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.current().kind == TokenKind::Sub {
            self.advance();
            let operand = self.parse_primary()?;
            return Ok(Expr::negate(operand));
        }

        self.parse_primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "x" | "y"
    ///              | "(" expression ")"
    ///              | ("sin" | "cos" | "tan") "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnknownToken` if the lexer could not recognise the input here.
    /// - `InvalidState` for any other token that cannot start a primary.
    /// - `InvalidSyntax` if a `(` or `)` is missing.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Number => {
                let token = self.advance();
                Expr::literal(&token)
            },
            TokenKind::VarX | TokenKind::VarY => {
                let token = self.advance();
                Expr::variable(&token)
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            },
            TokenKind::Sin | TokenKind::Cos | TokenKind::Tan => {
                let func = self.advance();
                self.expect(TokenKind::LParen)?;
                let argument = self.parse_expression()?;
                let node = Expr::function(&func, argument)?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            },
            TokenKind::Unknown => {
                let token = self.current().text.clone();
                Err(ParseError::UnknownToken { token })
            },
            _ => Err(ParseError::InvalidState { found: self.current().describe() }),
        }
    }
}
