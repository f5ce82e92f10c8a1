use std::fmt;

use crate::interpreter::char_stream::{CharClass, CharStream};

/// The kind of a lexical token.
///
/// This is a closed set: everything the lexer does not recognise becomes
/// [`TokenKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Add,
    /// `-`, both binary subtraction and unary negation.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
    /// `//`
    Root,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The variable `x`.
    VarX,
    /// The variable `y`.
    VarY,
    /// A decimal literal such as `42` or `2.5`.
    Number,
    /// The end of the input.
    EndOfInput,
    /// Anything the lexer could not recognise.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "'+'",
            Self::Sub => "'-'",
            Self::Mul => "'*'",
            Self::Div => "'/'",
            Self::Pow => "'**'",
            Self::Root => "'//'",
            Self::Sin => "'sin'",
            Self::Cos => "'cos'",
            Self::Tan => "'tan'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::VarX => "'x'",
            Self::VarY => "'y'",
            Self::Number => "number",
            Self::EndOfInput => "end of input",
            Self::Unknown => "unknown token",
        };
        f.write_str(s)
    }
}

/// One lexical unit: its kind and the literal text it was read from.
///
/// The text of a [`TokenKind::EndOfInput`] token is `"\0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What sort of token this is.
    pub kind: TokenKind,
    /// The (lowercased) source text of the token.
    pub text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Describes the token for error messages, e.g. `number '2.5'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number => format!("number '{}'", self.text),
            TokenKind::Unknown => format!("unknown token '{}'", self.text),
            kind => kind.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text.escape_default())
    }
}

/// Greedy, pull-based tokenizer over a [`CharStream`].
///
/// Each call to [`next_token`](Lexer::next_token) reads one maximal token.
/// Whitespace ends a number or a word, so `1 2` is two numbers, but the two
/// halves of `**` and `//` may be spread apart. The lexer never fails: unrecognised input becomes
/// [`TokenKind::Unknown`] tokens and is reported by the parser.
///
/// # Example
/// ```
/// use mathlang::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("2**X // 3.5").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Pow,
///             TokenKind::VarX,
///             TokenKind::Root,
///             TokenKind::Number]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    stream:   CharStream,
    finished: bool,
}

impl Lexer {
    /// Creates a lexer over `input`. The input is lowercased first.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { stream:   CharStream::new(input),
               finished: false, }
    }

    /// Reads the next token. Returns an [`TokenKind::EndOfInput`] token
    /// forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        let (class, c) = self.stream.read();

        match class {
            CharClass::EndOfInput => Token::new(TokenKind::EndOfInput, "\0"),
            CharClass::Digit => self.read_number(c),
            CharClass::Letter => match c {
                'x' => Token::new(TokenKind::VarX, "x"),
                'y' => Token::new(TokenKind::VarY, "y"),
                _ => self.read_keyword(c),
            },
            CharClass::Other => self.read_operator(c),
            CharClass::DecimalPoint | CharClass::Whitespace => {
                Token::new(TokenKind::Unknown, c.to_string())
            },
        }
    }

    /// Reads the next character if it continues the current token, i.e. it
    /// belongs to `class` and no whitespace was skipped to reach it.
    ///
    /// Otherwise the character is pushed back and `None` is returned.
    fn continue_with(&mut self, class: CharClass) -> Option<char> {
        let (next_class, c) = self.stream.read();
        if next_class == class && !self.stream.after_whitespace() {
            Some(c)
        } else {
            self.stream.unread();
            None
        }
    }

    fn read_number(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.continue_with(CharClass::Digit) {
            text.push(c);
        }

        if let Some(point) = self.continue_with(CharClass::DecimalPoint) {
            text.push(point);
            while let Some(c) = self.continue_with(CharClass::Digit) {
                text.push(c);
            }
        }

        Token::new(TokenKind::Number, text)
    }

    fn read_keyword(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        while let Some(c) = self.continue_with(CharClass::Letter) {
            word.push(c);
        }

        let kind = match word.as_str() {
            "sin" => TokenKind::Sin,
            "cos" => TokenKind::Cos,
            "tan" => TokenKind::Tan,
            _ => TokenKind::Unknown,
        };
        Token::new(kind, word)
    }

    fn read_operator(&mut self, c: char) -> Token {
        match c {
            '+' => Token::new(TokenKind::Add, "+"),
            '-' => Token::new(TokenKind::Sub, "-"),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '*' => {
                if self.followed_by('*') {
                    Token::new(TokenKind::Pow, "**")
                } else {
                    Token::new(TokenKind::Mul, "*")
                }
            },
            '/' => {
                if self.followed_by('/') {
                    Token::new(TokenKind::Root, "//")
                } else {
                    Token::new(TokenKind::Div, "/")
                }
            },
            other => Token::new(TokenKind::Unknown, other.to_string()),
        }
    }

    /// Consumes the next character if it is `expected`. Whitespace between
    /// the two is skipped, so `* *` still reads as `**`.
    fn followed_by(&mut self, expected: char) -> bool {
        let (_, c) = self.stream.read();
        if c == expected {
            true
        } else {
            self.stream.unread();
            false
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer {}
