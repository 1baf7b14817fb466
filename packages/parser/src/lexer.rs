//! Hand-written lexer for ariaconf blocks
//!
//! The lexer is a pull-driven state machine: each call to [`Lexer::next_item`]
//! runs states until at least one item is ready, then returns it. Newlines are
//! collapsed to spaces before scanning, which keeps every byte offset valid
//! against the caller's original text.

use crate::error::LexError;
use crate::token::{Item, ItemKind, Span};
use std::collections::VecDeque;
use std::iter::FusedIterator;

const LEFT_META: &str = "{{";
const RIGHT_META: &str = "}}";

const SIGNS: &str = "+-";
const DECIMAL_DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    LeftMeta,
    InsideAction,
    RightMeta,
    Quote,
    Identifier,
    Number,
    Done,
}

/// Lexer over a single input string
pub struct Lexer {
    input: String,
    start: usize,
    pos: usize,
    /// Byte width of the last rune returned by `advance`, for `undo_one`
    width: usize,
    state: State,
    pending: VecDeque<Result<Item, LexError>>,
    terminal: Option<Result<Item, LexError>>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.replace('\n', " "),
            start: 0,
            pos: 0,
            width: 0,
            state: State::Text,
            pending: VecDeque::with_capacity(2),
            terminal: None,
        }
    }

    /// Return the next item, running the state machine until one is ready.
    ///
    /// Once `EndOfInput` or an error has been returned, the same result is
    /// returned on every later call.
    pub fn next_item(&mut self) -> Result<Item, LexError> {
        loop {
            if let Some(result) = self.pending.pop_front() {
                let ends_stream = match &result {
                    Ok(item) => item.is(ItemKind::EndOfInput),
                    Err(_) => true,
                };
                if ends_stream {
                    self.terminal = Some(result.clone());
                }
                return result;
            }

            if let Some(terminal) = &self.terminal {
                return terminal.clone();
            }

            self.state = self.step();
        }
    }

    fn step(&mut self) -> State {
        match self.state {
            State::Text => self.lex_text(),
            State::LeftMeta => self.lex_left_meta(),
            State::InsideAction => self.lex_inside_action(),
            State::RightMeta => self.lex_right_meta(),
            State::Quote => self.lex_quote(),
            State::Identifier => self.lex_identifier(),
            State::Number => self.lex_number(),
            State::Done => {
                self.pending
                    .push_back(Ok(Item::end_of_input(self.input.len())));
                State::Done
            }
        }
    }

    fn lex_text(&mut self) -> State {
        loop {
            if self.rest().starts_with(LEFT_META) {
                if self.pos > self.start {
                    self.emit(ItemKind::Text);
                }
                return State::LeftMeta;
            }
            if self.advance().is_none() {
                break;
            }
        }

        if self.pos > self.start {
            self.emit(ItemKind::Text);
        }
        self.emit(ItemKind::EndOfInput);
        State::Done
    }

    fn lex_left_meta(&mut self) -> State {
        self.pos += LEFT_META.len();
        self.emit(ItemKind::LeftMeta);
        State::InsideAction
    }

    fn lex_right_meta(&mut self) -> State {
        self.pos += RIGHT_META.len();
        self.emit(ItemKind::RightMeta);
        State::Text
    }

    fn lex_inside_action(&mut self) -> State {
        loop {
            if self.rest().starts_with(RIGHT_META) {
                return State::RightMeta;
            }

            match self.advance() {
                None => return self.fail(LexError::UnclosedAction { offset: self.pos }),
                Some(ch) if is_space(ch) => self.discard_pending(),
                Some('=') => {
                    self.emit(ItemKind::Equals);
                    return State::InsideAction;
                }
                Some('"') => return State::Quote,
                Some(ch) if ch == '+' || ch == '-' || ch.is_ascii_digit() => {
                    self.undo_one();
                    return State::Number;
                }
                Some(ch) if is_alphanumeric(ch) => {
                    self.undo_one();
                    return State::Identifier;
                }
                // a lone `}` with no `}}` after it means the block never closes
                Some('}') if !self.rest().contains(RIGHT_META) => {
                    let offset = self.input.len();
                    return self.fail(LexError::UnclosedAction { offset });
                }
                Some(ch) => {
                    let offset = self.pos - self.width;
                    return self.fail(LexError::UnexpectedChar { ch, offset });
                }
            }
        }
    }

    fn lex_quote(&mut self) -> State {
        loop {
            match self.advance() {
                Some('\\') => match self.advance() {
                    Some(ch) if ch != '\n' => {}
                    _ => return self.unterminated_string(),
                },
                None | Some('\n') => return self.unterminated_string(),
                Some('"') => break,
                Some(_) => {}
            }
        }

        self.emit(ItemKind::String);
        State::InsideAction
    }

    fn unterminated_string(&mut self) -> State {
        let offset = self.start;
        self.fail(LexError::UnterminatedString { offset })
    }

    fn lex_identifier(&mut self) -> State {
        loop {
            match self.advance() {
                Some(ch) if is_alphanumeric(ch) => {}
                _ => {
                    self.undo_one();
                    break;
                }
            }
        }

        let kind = match self.pending_text() {
            "true" | "false" => ItemKind::Bool,
            _ => ItemKind::Identifier,
        };
        self.emit(kind);
        State::InsideAction
    }

    fn lex_number(&mut self) -> State {
        self.accept(SIGNS);

        let mut digits = DECIMAL_DIGITS;
        if self.accept("0") && self.accept("xX") {
            digits = HEX_DIGITS;
        }

        self.accept_run(digits);
        if self.accept(".") {
            self.accept_run(digits);
        }
        if self.accept("eE") {
            self.accept(SIGNS);
            self.accept_run(DECIMAL_DIGITS);
        }
        // imaginary suffix
        self.accept("i");

        if self.peek().is_some_and(is_alphanumeric) {
            self.advance();
            let text = self.pending_text().to_string();
            let span = Span::new(self.start, self.pos);
            return self.fail(LexError::BadNumber { text, span });
        }

        self.emit(ItemKind::Number);
        State::InsideAction
    }

    /// Consume the next rune, or return `None` at end of input
    fn advance(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(ch) => {
                self.width = ch.len_utf8();
                self.pos += self.width;
                Some(ch)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the rune returned by the last `advance`
    fn undo_one(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek(&mut self) -> Option<char> {
        let ch = self.advance();
        self.undo_one();
        ch
    }

    /// Drop the buffered text between `start` and `pos`
    fn discard_pending(&mut self) {
        self.start = self.pos;
    }

    fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(ch) if valid.contains(ch) => true,
            _ => {
                self.undo_one();
                false
            }
        }
    }

    fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn pending_text(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    fn emit(&mut self, kind: ItemKind) {
        let item = Item::new(kind, self.pending_text(), Span::new(self.start, self.pos));
        self.pending.push_back(Ok(item));
        self.start = self.pos;
    }

    fn fail(&mut self, error: LexError) -> State {
        self.pending.push_back(Err(error));
        State::Done
    }
}

impl Iterator for Lexer {
    type Item = Result<Item, LexError>;

    /// Yields items up to and including `EndOfInput` or the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.terminal.is_some() {
            return None;
        }
        Some(self.next_item())
    }
}

impl FusedIterator for Lexer {}

/// Lex a whole input, stopping at the first lexical error
pub fn tokenize(input: &str) -> Result<Vec<Item>, LexError> {
    Lexer::new(input).collect()
}

fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r'
}

fn is_alphanumeric(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}
