use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failed tokenize or parse, pinned to the offending token.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::MalformedNumber { .. }
                | ErrorImpl::NumberParseError { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::NoInfixRule { .. } => "NoInfixRule",
            ErrorImpl::IncompleteExpression => "IncompleteExpression",
            ErrorImpl::MissingClosingParen { .. } => "MissingClosingParen",
            ErrorImpl::NotCallable { .. } => "NotCallable",
            ErrorImpl::MalformedArguments { .. } => "MalformedArguments",
            ErrorImpl::UnusedTokens { .. } => "UnusedTokens",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a decimal point must be followed by digits",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it out of range?",
                token
            )),
            ErrorImpl::NoPrefixRule { token } => ErrorTip::Suggestion(format!(
                "Expected a value, found `{}`",
                token
            )),
            ErrorImpl::NoInfixRule { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot follow a complete operand",
                token
            )),
            ErrorImpl::IncompleteExpression => {
                ErrorTip::Suggestion(String::from("An operator is missing its right operand"))
            }
            ErrorImpl::MissingClosingParen { .. } => {
                ErrorTip::Suggestion(String::from("Add a `)` to close the group"))
            }
            ErrorImpl::NotCallable { callee } => ErrorTip::Suggestion(format!(
                "Only identifiers can be called, `{}` is not one",
                callee
            )),
            ErrorImpl::MalformedArguments { .. } => ErrorTip::Suggestion(String::from(
                "Separate arguments with a single `,`",
            )),
            ErrorImpl::UnusedTokens { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("no prefix rule for token {token:?}")]
    NoPrefixRule { token: String },
    #[error("no infix rule for token {token:?}")]
    NoInfixRule { token: String },
    #[error("incomplete expression, unexpected end of input")]
    IncompleteExpression,
    #[error("missing matching ')', found {found:?}")]
    MissingClosingParen { found: String },
    #[error("{callee} is not callable")]
    NotCallable { callee: String },
    #[error("malformed argument list near {found:?}")]
    MalformedArguments { found: String },
    #[error("unused tokens following expression, starting with {token:?}")]
    UnusedTokens { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
