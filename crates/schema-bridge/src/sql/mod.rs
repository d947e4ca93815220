//! SQL script lexing.
//!
//! [`SqlLexer`] splits raw SQL text into discrete, normalized statements. It
//! understands just enough SQL to do that safely: single- and double-quoted
//! literals, `--` line comments, `/* */` block comments and the statement
//! delimiter. It is deliberately not a validating parser: any character
//! sequence outside a recognized quote or comment is statement text, so the
//! lexer never fails on malformed input.
//!
//! Normalization: each input line contributes its content with leading
//! indentation stripped, line breaks become single spaces, comments are
//! dropped, statements are trimmed and the trailing delimiter is removed.
//! Empty segments produce no output.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuote,
    DoubleQuote,
    BlockComment,
}

/// Tokenizes SQL scripts into executable statements.
#[derive(Debug, Clone)]
pub struct SqlLexer {
    delimiter: char,
}

impl Default for SqlLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlLexer {
    /// Create a lexer with the standard `;` statement delimiter.
    pub fn new() -> Self {
        Self { delimiter: ';' }
    }

    /// Create a lexer with a custom statement delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Split a script into normalized statements, preserving script order.
    pub fn parse(&self, script: &str) -> Vec<String> {
        self.parse_lines(script.lines())
    }

    /// Split pre-split script lines into normalized statements.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut statements = Vec::new();
        let mut buf = String::new();
        let mut state = State::Normal;

        for line in lines {
            let line = line.as_ref().trim_start_matches([' ', '\t']);
            let mut chars = line.chars().peekable();

            while let Some(ch) = chars.next() {
                match state {
                    State::Normal => {
                        if ch == self.delimiter {
                            Self::finalize(&mut buf, &mut statements);
                        } else if ch == '-' && chars.peek() == Some(&'-') {
                            // Line comment runs to end of line.
                            break;
                        } else if ch == '/' && chars.peek() == Some(&'*') {
                            chars.next();
                            state = State::BlockComment;
                        } else if ch == '\'' {
                            state = State::SingleQuote;
                            buf.push(ch);
                        } else if ch == '"' {
                            state = State::DoubleQuote;
                            buf.push(ch);
                        } else {
                            buf.push(ch);
                        }
                    }
                    State::SingleQuote => {
                        buf.push(ch);
                        if ch == '\'' {
                            state = State::Normal;
                        }
                    }
                    State::DoubleQuote => {
                        buf.push(ch);
                        if ch == '"' {
                            state = State::Normal;
                        }
                    }
                    State::BlockComment => {
                        if ch == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            state = State::Normal;
                        }
                    }
                }
            }

            // Line break joins continuation lines with a single space.
            if state != State::BlockComment && !buf.is_empty() {
                buf.push(' ');
            }
        }

        Self::finalize(&mut buf, &mut statements);
        statements
    }

    fn finalize(buf: &mut String, statements: &mut Vec<String>) {
        let statement = buf.trim();
        if !statement.is_empty() {
            statements.push(statement.to_string());
        }
        buf.clear();
    }
}
