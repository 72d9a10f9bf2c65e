use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display};
use std::sync::mpsc::{self, SyncSender};
use std::thread;

/// Default capacity of the bounded token queue between the scanner and the parser.
pub const DEFAULT_CAPACITY: usize = 16;

/// The closed set of delimiters, including the section header comments.
pub const DELIMITERS: [&str; 30] = [
    "// Functional Definitions",
    "// Instance Definitions",
    "// Constructor Methods",
    "// Aspect Definitions",
    "// Aspect Interfaces",
    "// Attribute Methods",
    "// Class Definitions",
    "// Constant Methods",
    "// Function Methods",
    "// Type Definitions",
    "// Public Methods",
    "// Aspect Methods",
    "interface",
    "package",
    "import",
    "const",
    "iota",
    "func",
    "chan",
    "type",
    "map",
    "}",
    "{",
    "]",
    "[",
    ".",
    ")",
    "(",
    "=",
    ",",
];

/// The kinds of tokens that the scanner can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Input that matched no other pattern; always the last token of a scan.
    Error,
    /// A `/*` ... `*/` block comment, including its trailing newline.
    Comment,
    /// A keyword, punctuation character or section header.
    Delimiter,
    /// An identifier.
    Name,
    Newline,
    /// A double quoted module path.
    Path,
    /// A run of spaces and tabs.
    Space,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Error => "Error",
            TokenKind::Comment => "Comment",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Name => "Name",
            TokenKind::Newline => "Newline",
            TokenKind::Path => "Path",
            TokenKind::Space => "Space",
        };
        f.write_str(name)
    }
}

/// A token with its kind, text and position. `line` and `position` are 1-based;
/// `offset` is the byte offset of the token in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    line: usize,
    position: usize,
    offset: usize,
    kind: TokenKind,
    value: String,
}

impl Token {
    pub fn new(
        line: usize,
        position: usize,
        offset: usize,
        kind: TokenKind,
        value: impl Into<String>,
    ) -> Token {
        Token {
            line,
            position,
            offset,
            kind,
            value: value.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Newline)
    }

    pub fn is_delimiter(&self, text: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.value == text
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}

static PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    let delimiters = DELIMITERS
        .iter()
        .map(|delimiter| regex::escape(delimiter))
        .collect::<Vec<_>>()
        .join("|");
    [
        (TokenKind::Comment, r"(?s)^/\*\n.*?\n\*/\n".to_string()),
        (TokenKind::Delimiter, format!("^(?:{delimiters})")),
        (TokenKind::Name, r"^\p{L}[\p{L}\p{N}]*_?".to_string()),
        (TokenKind::Newline, r"^\r?\n".to_string()),
        (TokenKind::Path, r#"^"[^"\r\n]*""#.to_string()),
        (TokenKind::Space, r"^[ \t]+".to_string()),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        let regex = Regex::new(&pattern).expect("token patterns are valid regular expressions");
        (kind, regex)
    })
    .collect()
});

/// Converts source text into tokens and feeds them into a bounded queue that is
/// drained by the parser. The queue is closed when the scanner is dropped, which
/// happens at the end of the input or right after an `Error` token.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: SyncSender<Token>,
    offset: usize,
    line: usize,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, tokens: SyncSender<Token>) -> Self {
        Self {
            source,
            tokens,
            offset: 0,
            line: 1,
            position: 1,
        }
    }

    /// Scans the whole source, blocking whenever the queue is full.
    pub fn scan(mut self) {
        while self.offset < self.source.len() {
            let rest = &self.source[self.offset..];
            match Self::match_token(rest) {
                Some((kind, length)) => {
                    if !self.emit(kind, length) {
                        return;
                    }
                }
                None => {
                    let length = rest.chars().next().map_or(1, char::len_utf8);
                    self.emit(TokenKind::Error, length);
                    return;
                }
            }
        }
    }

    /// Scans `source` on a separate thread and collects every token it produces.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let (sender, receiver) = mpsc::sync_channel(DEFAULT_CAPACITY);
        thread::scope(|scope| {
            let scanner = Scanner::new(source, sender);
            scope.spawn(move || scanner.scan());
            receiver.iter().collect()
        })
    }

    fn match_token(rest: &str) -> Option<(TokenKind, usize)> {
        for (kind, pattern) in PATTERNS.iter() {
            if let Some(found) = pattern.find(rest) {
                if *kind == TokenKind::Delimiter
                    && Self::is_partial_name(found.as_str(), &rest[found.end()..])
                {
                    continue;
                }
                return Some((*kind, found.end()));
            }
        }
        None
    }

    /// A keyword delimiter such as `chan` must not swallow the start of an
    /// identifier such as `chanSize`.
    fn is_partial_name(delimiter: &str, following: &str) -> bool {
        let alphanumeric = delimiter.chars().all(char::is_alphanumeric);
        let continues = following
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        alphanumeric && continues
    }

    fn emit(&mut self, kind: TokenKind, length: usize) -> bool {
        let value = &self.source[self.offset..self.offset + length];
        let token = Token::new(self.line, self.position, self.offset, kind, value);
        trace!("scanned {} at {}:{}", token, self.line, self.position);
        for c in value.chars() {
            if c == '\n' {
                self.line += 1;
                self.position = 1;
            } else {
                self.position += 1;
            }
        }
        self.offset += length;
        self.tokens.send(token).is_ok()
    }
}
