//! Compiler for spec DSL text.
//!
//! A recursive-descent parser over the [`Lexer`]'s token stream:
//!
//! ```text
//! spec     := option* rest*
//! required := NAMES SP TAG
//! optional := '[' NAMES (SP (TAG | '[' TAG ']'))? ']'
//! rest     := TAG QUANTIFIER?        (quantifier only on the last rest)
//! NAMES    := NAME (',' NAME)* ','?
//! ```

use std::collections::HashMap;

use argspec_foundation::{Error, Result, TypeTag};
use tracing::debug;

use crate::config::CompilerConfig;
use crate::lexer::Lexer;
use crate::spec::{ArgumentForm, CompiledSpec, OptionNode, Requirement, RestNode};
use crate::span::Span;
use crate::token::{Quantifier, Token, TokenKind};

/// Compiles spec text into a [`CompiledSpec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SpecCompiler {
    config: CompilerConfig,
}

impl SpecCompiler {
    /// Creates a compiler with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with the given configuration.
    #[must_use]
    pub const fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Returns this compiler's configuration.
    #[must_use]
    pub const fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compiles spec text.
    ///
    /// # Errors
    /// Returns [`ErrorKind::SpecSyntax`](argspec_foundation::ErrorKind::SpecSyntax)
    /// if the text is malformed.
    pub fn compile(&self, source: &str) -> Result<CompiledSpec> {
        let mut parser = Parser::new(source, &self.config);
        let (options, rest) = parser.parse_spec()?;

        if self.config.reject_duplicate_aliases {
            check_duplicate_aliases(&options)?;
        }

        let spec = CompiledSpec::new(options, rest);
        debug!(
            options = spec.options().len(),
            aliases = spec.alias_count(),
            rest = spec.rest().len(),
            "compiled spec"
        );
        Ok(spec)
    }
}

/// Parser state over one spec string.
struct Parser<'src, 'cfg> {
    lexer: Lexer<'src>,
    current: Token,
    config: &'cfg CompilerConfig,
}

impl<'src, 'cfg> Parser<'src, 'cfg> {
    fn new(source: &'src str, config: &'cfg CompilerConfig) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            config,
        }
    }

    fn parse_spec(&mut self) -> Result<(Vec<OptionNode>, Vec<RestNode>)> {
        let mut options = Vec::new();
        let mut rest = Vec::new();

        self.skip_space();

        loop {
            let node = match self.current.kind {
                TokenKind::Name(_) => self.parse_required()?,
                TokenKind::LBracket => self.parse_optional()?,
                _ => break,
            };
            options.push(node);
            self.end_declaration()?;
        }

        while self.current.kind != TokenKind::Eof {
            rest.push(self.parse_rest()?);
            self.end_declaration()?;
        }

        if let Some((_, earlier)) = rest.split_last() {
            if let Some(node) = earlier.iter().find(|n| n.quantifier != Quantifier::One) {
                return Err(Error::spec_syntax(
                    "only the last positional declaration may carry a ?, * or + suffix",
                )
                .at(node.span.location()));
            }
        }

        Ok((options, rest))
    }

    /// Parses `NAMES SP TAG`.
    fn parse_required(&mut self) -> Result<OptionNode> {
        let start = self.current.span;
        let names = self.parse_names()?;

        let tag = if self.current.kind == TokenKind::Space {
            self.advance();
            self.parse_tag()?
        } else {
            None
        };
        let Some(tag) = tag else {
            return Err(Error::spec_syntax("required option must have an argument")
                .at(start.location()));
        };

        Ok(OptionNode {
            names,
            canonical_name: String::new(),
            requirement: Requirement::Required,
            argument: ArgumentForm::Mandatory(tag),
            span: start.to(self.previous_end()),
        })
    }

    /// Parses `'[' NAMES (SP (TAG | '[' TAG ']'))? ']'`.
    fn parse_optional(&mut self) -> Result<OptionNode> {
        let start = self.current.span;
        self.advance();

        if !matches!(self.current.kind, TokenKind::Name(_)) {
            return Err(self.error(&format!(
                "expected option name after '[', found {}",
                self.current.kind.name()
            )));
        }
        let names = self.parse_names()?;

        let argument = match self.current.kind {
            TokenKind::RBracket => ArgumentForm::None,
            TokenKind::Space => {
                self.advance();
                if self.current.kind == TokenKind::LBracket {
                    self.advance();
                    let tag = self.expect_tag()?;
                    self.expect_close()?;
                    ArgumentForm::Optional(tag)
                } else {
                    ArgumentForm::Mandatory(self.expect_tag()?)
                }
            }
            TokenKind::Eof => {
                return Err(Error::spec_syntax("unterminated optional option")
                    .at(start.location()));
            }
            _ => {
                return Err(self.error(&format!(
                    "unexpected {} in optional option",
                    self.current.kind.name()
                )));
            }
        };
        self.expect_close()?;

        Ok(OptionNode {
            names,
            canonical_name: String::new(),
            requirement: Requirement::Optional,
            argument,
            span: start.to(self.previous_end()),
        })
    }

    /// Parses a comma-separated alias list. A trailing comma is allowed.
    fn parse_names(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        while let TokenKind::Name(name) = &self.current.kind {
            names.push(name.clone());
            self.advance();
            if self.current.kind != TokenKind::Comma {
                break;
            }
            self.advance();
            if let TokenKind::Word(word) = &self.current.kind {
                return Err(self.error(&format!("option alias {word} must begin with '-'")));
            }
        }
        Ok(names)
    }

    /// Parses `TAG QUANTIFIER?`.
    fn parse_rest(&mut self) -> Result<RestNode> {
        let start = self.current.span;
        if matches!(self.current.kind, TokenKind::Name(_) | TokenKind::LBracket) {
            return Err(self.error("options must be declared before positional arguments"));
        }
        let tag = self.expect_tag()?;

        let quantifier = if let TokenKind::Quantifier(q) = self.current.kind {
            self.advance();
            q
        } else {
            Quantifier::One
        };

        Ok(RestNode {
            tag,
            quantifier,
            span: start.to(self.previous_end()),
        })
    }

    /// Parses a type tag if the current token is a word beginning with a
    /// letter.
    fn parse_tag(&mut self) -> Result<Option<TypeTag>> {
        let TokenKind::Word(text) = &self.current.kind else {
            return Ok(None);
        };
        if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Ok(None);
        }

        let tag = TypeTag::parse(text);
        if self.config.strict_types && !tag.is_known() {
            return Err(self.error(&format!("unknown type {tag}")));
        }
        self.advance();
        Ok(Some(tag))
    }

    fn expect_tag(&mut self) -> Result<TypeTag> {
        match self.parse_tag()? {
            Some(tag) => Ok(tag),
            None => Err(self.error(&format!(
                "expected a type beginning with a letter, found {}",
                self.describe_current()
            ))),
        }
    }

    fn expect_close(&mut self) -> Result<()> {
        if self.current.kind == TokenKind::RBracket {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected ']', found {}",
                self.current.kind.name()
            )))
        }
    }

    /// Requires whitespace or the end of input after a declaration.
    fn end_declaration(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Space => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.error(&format!(
                "expected whitespace between declarations, found {}",
                self.current.kind.name()
            ))),
        }
    }

    fn skip_space(&mut self) {
        if self.current.kind == TokenKind::Space {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// A zero-width span where the current token starts, i.e. where the
    /// previously consumed token ended.
    const fn previous_end(&self) -> Span {
        let span = self.current.span;
        Span::new(span.start, span.start, span.line, span.column)
    }

    fn describe_current(&self) -> String {
        match &self.current.kind {
            TokenKind::Word(text) => format!("{text:?}"),
            other => other.name().to_string(),
        }
    }

    fn error(&self, message: &str) -> Error {
        Error::spec_syntax(message).at(self.current.span.location())
    }
}

/// Fails if any alias is declared by two different options.
fn check_duplicate_aliases(options: &[OptionNode]) -> Result<()> {
    let mut owners: HashMap<&str, usize> = HashMap::new();
    for (index, node) in options.iter().enumerate() {
        for name in &node.names {
            match owners.insert(name.as_str(), index) {
                Some(previous) if previous != index => {
                    let first = options[previous].names.first().map_or("", String::as_str);
                    let second = node.names.first().map_or("", String::as_str);
                    return Err(Error::spec_syntax(format!(
                        "alias {name} is declared by both {first} and {second}"
                    ))
                    .at(node.span.location()));
                }
                _ => {}
            }
        }
    }
    Ok(())
}
