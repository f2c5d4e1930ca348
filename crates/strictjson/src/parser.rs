//! The value parser: recursive descent over the scanner.
//!
//! One stack frame per open container; nesting depth is bounded by the host
//! call stack, not by an explicit limit. Every rule reports its violation
//! the instant it is detected and the resulting `Err` unwinds the whole
//! descent, so a failed parse performs no further input activity.

use crate::code_unit::CodeUnit;
use crate::error::{ErrorKind, ParseError, fail};
use crate::factory::DocumentFactory;
use crate::literal::Literal;
use crate::number::scan_number;
use crate::options::ParseOptions;
use crate::scanner::Scanner;
use crate::string::scan_string;

pub(crate) struct Parser<'a, U, F> {
    scanner: Scanner<'a, U>,
    factory: F,
    options: ParseOptions,
}

impl<'a, U: CodeUnit, F: DocumentFactory<U>> Parser<'a, U, F> {
    pub(crate) fn new(input: &'a [U], factory: F, options: ParseOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            factory,
            options,
        }
    }

    /// Parses exactly one document: leading whitespace, one root value,
    /// trailing whitespace, end of input.
    pub(crate) fn parse_document(mut self) -> Result<F::Value, ParseError> {
        self.scanner.skip_whitespace();

        let root = match self.scanner.peek() {
            Some(unit) if unit.is(b'{') => self.parse_object()?,
            Some(unit) if unit.is(b'[') => self.parse_array()?,
            _ if self.options.allow_scalar_root => self.parse_value()?,
            _ => return fail(ErrorKind::ExpectedRoot, self.scanner.offset()),
        };

        self.scanner.skip_whitespace();
        if self.scanner.peek().is_some() {
            return fail(ErrorKind::ExpectedDocumentEnd, self.scanner.offset());
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> Result<F::Value, ParseError> {
        let Some(unit) = self.scanner.peek() else {
            return fail(ErrorKind::ExpectedValue, self.scanner.offset());
        };

        if unit.is(b'{') {
            return self.parse_object();
        }
        if unit.is(b'[') {
            return self.parse_array();
        }
        if unit.is(b'"') {
            let text = scan_string(&mut self.scanner, self.options)?;
            return Ok(self.factory.new_string(text));
        }
        if let Some(literal) = Literal::from_lead(unit) {
            return self.parse_literal(literal);
        }
        // A leading `.` goes to the number scanner, which rejects it with
        // `Expected digit` at the dot itself rather than `Expected value`;
        // retained observable behavior.
        if unit.is(b'-') || unit.is_digit() || unit.is(b'.') {
            let value = scan_number(&mut self.scanner)?;
            return Ok(self.factory.new_number(value));
        }

        fail(ErrorKind::ExpectedValue, self.scanner.offset())
    }

    fn parse_literal(&mut self, literal: Literal) -> Result<F::Value, ParseError> {
        let start = self.scanner.offset();
        self.scanner.advance();
        for &byte in literal.tail() {
            // Any deviation reports at the literal's starting offset, not
            // at the deviating unit.
            if !self.scanner.eat(byte) {
                return fail(ErrorKind::ExpectedValue, start);
            }
        }
        Ok(match literal {
            Literal::Null => self.factory.new_null(),
            Literal::True => self.factory.new_bool(true),
            Literal::False => self.factory.new_bool(false),
        })
    }

    fn parse_array(&mut self) -> Result<F::Value, ParseError> {
        self.scanner.advance();
        self.scanner.skip_whitespace();

        let mut array = self.factory.new_array();
        if self.scanner.eat(b']') {
            return Ok(self.factory.finish_array(array));
        }

        loop {
            let value = self.parse_value()?;
            self.factory.push_element(&mut array, value);

            self.scanner.skip_whitespace();
            if self.scanner.eat(b',') {
                // Another value is mandatory; a `]` here fails inside
                // parse_value, which is what rejects trailing commas.
                self.scanner.skip_whitespace();
                continue;
            }
            if self.scanner.eat(b']') {
                return Ok(self.factory.finish_array(array));
            }
            return fail(ErrorKind::ExpectedArraySeparator, self.scanner.offset());
        }
    }

    fn parse_object(&mut self) -> Result<F::Value, ParseError> {
        self.scanner.advance();
        self.scanner.skip_whitespace();

        let mut object = self.factory.new_object();
        if self.scanner.eat(b'}') {
            return Ok(self.factory.finish_object(object));
        }
        match self.scanner.peek() {
            Some(unit) if unit.is(b'"') => {}
            _ => return fail(ErrorKind::ExpectedObjectEndOrName, self.scanner.offset()),
        }

        loop {
            let name = scan_string(&mut self.scanner, self.options)?;

            self.scanner.skip_whitespace();
            if !self.scanner.eat(b':') {
                return fail(ErrorKind::ExpectedNameSeparator, self.scanner.offset());
            }

            self.scanner.skip_whitespace();
            let value = self.parse_value()?;
            self.factory.push_member(&mut object, name, value);

            self.scanner.skip_whitespace();
            if self.scanner.eat(b',') {
                self.scanner.skip_whitespace();
                match self.scanner.peek() {
                    Some(unit) if unit.is(b'"') => continue,
                    // `}` is not an acceptable continuation after a comma.
                    _ => return fail(ErrorKind::ExpectedName, self.scanner.offset()),
                }
            }
            if self.scanner.eat(b'}') {
                return Ok(self.factory.finish_object(object));
            }
            return fail(ErrorKind::ExpectedObjectSeparator, self.scanner.offset());
        }
    }
}
