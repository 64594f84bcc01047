//! Errors raised while binding accumulated arguments to declared parameters.
//!
//! The curry transformer itself never fails. These errors come from
//! [`Signature::bind`](crate::Signature::bind) inside a wrapped callable and
//! reach the caller of the completing call as part of the callable's output.

use thiserror::Error;

/// Failure to bind [`Arguments`](crate::Arguments) onto a
/// [`Signature`](crate::Signature).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BindingError {
    /// More positional arguments than declared parameters.
    #[error("{callable}() takes {expected} positional arguments but {given} were given")]
    TooManyPositional {
        /// Name of the callable.
        callable: String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of positional arguments supplied.
        given: usize,
    },

    /// A named argument matches no declared parameter.
    #[error("{callable}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword {
        /// Name of the callable.
        callable: String,
        /// The unmatched keyword.
        keyword: String,
    },

    /// A parameter received both a positional and a named value.
    #[error("{callable}() got multiple values for argument '{parameter}'")]
    DuplicateArgument {
        /// Name of the callable.
        callable: String,
        /// The doubly supplied parameter.
        parameter: String,
    },

    /// A parameter without default received no value.
    #[error("{callable}() missing required argument: '{parameter}'")]
    MissingArgument {
        /// Name of the callable.
        callable: String,
        /// The parameter left unbound.
        parameter: String,
    },

    /// The bound values do not fit the callable's fixed parameter count.
    #[error("{callable}() expects {expected} bound values but the signature produced {given}")]
    ArityMismatch {
        /// Name of the callable.
        callable: String,
        /// Parameter count of the underlying function.
        expected: usize,
        /// Number of values the signature bound.
        given: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        BindingError::TooManyPositional { callable: "add".into(), expected: 2, given: 3 },
        "add() takes 2 positional arguments but 3 were given"
    )]
    #[case(
        BindingError::UnexpectedKeyword { callable: "add".into(), keyword: "c".into() },
        "add() got an unexpected keyword argument 'c'"
    )]
    #[case(
        BindingError::DuplicateArgument { callable: "add".into(), parameter: "a".into() },
        "add() got multiple values for argument 'a'"
    )]
    #[case(
        BindingError::MissingArgument { callable: "add".into(), parameter: "b".into() },
        "add() missing required argument: 'b'"
    )]
    fn test_display(#[case] error: BindingError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
