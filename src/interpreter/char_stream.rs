use log::warn;

/// The lexical class of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// An alphabetic character.
    Letter,
    /// An ASCII digit `0`-`9`.
    Digit,
    /// The decimal point `.`.
    DecimalPoint,
    /// Any whitespace character. Never returned by [`CharStream::read`].
    Whitespace,
    /// Anything else: operators, parentheses, punctuation.
    Other,
    /// The end of the input has been reached.
    EndOfInput,
}

impl CharClass {
    /// Classifies a single character.
    ///
    /// # Example
    /// ```
    /// use mathlang::interpreter::char_stream::CharClass;
    ///
    /// assert_eq!(CharClass::of('7'), CharClass::Digit);
    /// assert_eq!(CharClass::of('.'), CharClass::DecimalPoint);
    /// assert_eq!(CharClass::of('q'), CharClass::Letter);
    /// assert_eq!(CharClass::of('\t'), CharClass::Whitespace);
    /// assert_eq!(CharClass::of('*'), CharClass::Other);
    /// ```
    #[must_use]
    pub fn of(c: char) -> Self {
        match c {
            '.' => Self::DecimalPoint,
            c if c.is_ascii_digit() => Self::Digit,
            c if c.is_whitespace() => Self::Whitespace,
            c if c.is_alphabetic() => Self::Letter,
            _ => Self::Other,
        }
    }
}

/// A lowercased character source with one character of pushback.
///
/// The stream hands out `(CharClass, char)` pairs, skipping whitespace. At
/// the end of the input it keeps returning `(CharClass::EndOfInput, '\0')`
/// without moving.
///
/// # Example
/// ```
/// use mathlang::interpreter::char_stream::{CharClass, CharStream};
///
/// let mut stream = CharStream::new("S i");
/// assert_eq!(stream.read(), (CharClass::Letter, 's'));
/// stream.unread();
/// assert_eq!(stream.read(), (CharClass::Letter, 's'));
/// assert_eq!(stream.read(), (CharClass::Letter, 'i'));
/// assert!(stream.after_whitespace());
/// assert_eq!(stream.read(), (CharClass::EndOfInput, '\0'));
/// ```
#[derive(Debug, Clone)]
pub struct CharStream {
    chars:            Vec<char>,
    pos:              usize,
    mark:             usize,
    last_read_eof:    bool,
    after_whitespace: bool,
}

impl CharStream {
    /// Creates a stream over the lowercased `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { chars:            input.to_lowercase().chars().collect(),
               pos:              0,
               mark:             0,
               last_read_eof:    false,
               after_whitespace: false, }
    }

    /// Skips any whitespace and returns the next character with its class.
    ///
    /// Returns `(CharClass::EndOfInput, '\0')` once the input is exhausted;
    /// further calls return the same pair.
    pub fn read(&mut self) -> (CharClass, char) {
        self.mark = self.pos;
        while self.chars
                  .get(self.pos)
                  .is_some_and(|c| c.is_whitespace())
        {
            self.pos += 1;
        }
        self.after_whitespace = self.pos > self.mark;

        if let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            self.last_read_eof = false;
            (CharClass::of(c), c)
        } else {
            self.last_read_eof = true;
            (CharClass::EndOfInput, '\0')
        }
    }

    /// Steps back over the character returned by the last [`read`] and
    /// any whitespace that read skipped, so the next read sees both again.
    ///
    /// Does nothing if that read hit the end of the input, or if nothing has
    /// been read yet. Only one level of pushback is supported.
    ///
    /// [`read`]: CharStream::read
    pub fn unread(&mut self) {
        if self.last_read_eof {
            return;
        }

        if self.pos == 0 {
            warn!("CharStream: cannot unread before the first character");
            return;
        }

        self.pos = self.mark;
    }

    /// Returns `true` if the last [`read`](CharStream::read) skipped
    /// whitespace before the character it returned.
    #[must_use]
    pub const fn after_whitespace(&self) -> bool {
        self.after_whitespace
    }

    /// Returns the number of characters consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}
