use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses addition and subtraction.
    ///
    /// Left-associative: `10-3-2` is `(10-3)-2`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[TokenKind::Add, TokenKind::Sub], Self::parse_multiplicative)
    }

    /// Parses multiplication and division.
    ///
    /// Left-associative: `8/4/2` is `(8/4)/2`.
    ///
    /// The rule is: `multiplicative := power (("*" | "/") power)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[TokenKind::Mul, TokenKind::Div], Self::parse_power)
    }

    /// Folds `operand (operator operand)*` into a left-leaning tree.
    ///
    /// Each folded operator makes the tree one level taller, so it counts as
    /// one nesting level until the chain ends. Operands parsed later in the
    /// chain see the extra depth.
    fn parse_left_assoc(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        self.scoped(|parser| {
                let mut left = operand(parser)?;
                while operators.contains(&parser.current().kind) {
                    parser.deepen()?;
                    let op = parser.advance();
                    let right = operand(parser)?;
                    left = Expr::binary(left, &op, right)?;
                }
                Ok(left)
            })
    }

    /// Parses exponentiation and roots.
    ///
    /// Right-associative through recursion on the right-hand side:
    /// `2**3**2` parses as `2**(3**2)`.
    ///
    /// The rule is: `power := unary (("**" | "//") power)?`
    pub(in crate::interpreter::parser) fn parse_power(&mut self) -> ParseResult<Expr> {
        let base = self.parse_unary()?;
        if !matches!(self.current().kind, TokenKind::Pow | TokenKind::Root) {
            return Ok(base);
        }

        let op = self.advance();
        let exponent = self.nested(Self::parse_power)?;
        Expr::binary(base, &op, exponent)
    }
}
