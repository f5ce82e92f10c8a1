/// Represents all errors that can occur while turning input text into a
/// [`SyntaxTree`](crate::ast::SyntaxTree).
///
/// Lexing never fails on its own; unrecognised input becomes
/// [`TokenKind::Unknown`](crate::interpreter::lexer::TokenKind::Unknown) and is
/// reported here once the parser reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An AST node was built from a token it cannot represent, or a numeric
    /// literal could not be converted to a finite number.
    ///
    /// A correct parser never produces this for well-lexed input.
    InvalidNodeCreation {
        /// What went wrong while building the node.
        details: String,
    },
    /// A required token, such as a closing parenthesis, was not where the
    /// grammar expects it.
    InvalidSyntax {
        /// The token the grammar required.
        expected: String,
        /// The token that was actually found.
        found:    String,
    },
    /// The lexer could not recognise some input where a primary expression
    /// was required.
    UnknownToken {
        /// The offending literal text.
        token: String,
    },
    /// The current token can never appear at this position, e.g. a second
    /// leading `-` or input ending where an operand is required.
    InvalidState {
        /// The token that was found.
        found: String,
    },
    /// Expressions were nested deeper than the parser allows.
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
}

/// The kind of a [`ParseError`], without its payload.
///
/// Useful for callers that branch on the failure category but show the
/// error's `Display` text to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// See [`ParseError::InvalidNodeCreation`].
    InvalidNodeCreation,
    /// See [`ParseError::InvalidSyntax`].
    InvalidSyntax,
    /// See [`ParseError::UnknownToken`].
    UnknownToken,
    /// See [`ParseError::InvalidState`].
    InvalidState,
    /// See [`ParseError::NestingTooDeep`].
    NestingTooDeep,
}

impl ParseError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use mathlang::{error::ParseErrorKind, parse};
    ///
    /// let err = parse("(1+2").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::InvalidSyntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidNodeCreation { .. } => ParseErrorKind::InvalidNodeCreation,
            Self::InvalidSyntax { .. } => ParseErrorKind::InvalidSyntax,
            Self::UnknownToken { .. } => ParseErrorKind::UnknownToken,
            Self::InvalidState { .. } => ParseErrorKind::InvalidState,
            Self::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNodeCreation { details } => {
                write!(f, "Internal error: invalid node creation: {details}.")
            },
            Self::InvalidSyntax { expected, found } => {
                write!(f, "Invalid syntax: expected {expected} but found {found}.")
            },
            Self::UnknownToken { token } => write!(f, "Unknown token: '{token}'."),
            Self::InvalidState { found } => {
                write!(f, "Unexpected {found}: expected a number, variable, function or '('.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Expression is nested too deeply (limit is {limit}).")
            },
        }
    }
}

impl std::error::Error for ParseError {}
