//! Declared parameter lists and argument binding.
//!
//! # Binding Algorithm
//!
//! 1. Bind positional arguments to parameters left to right
//! 2. Error if positional arguments outnumber parameters
//! 3. Bind each named argument to the parameter of the same name
//! 4. Error on unknown names and on parameters bound twice
//! 5. Fill unbound parameters with their defaults
//! 6. Error on any parameter still unbound

use crate::{Arguments, BindingError};

/// One declared parameter, optionally with a default value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter<A> {
    name: String,
    default: Option<A>,
}

impl<A> Parameter<A> {
    /// A parameter that must be supplied.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default` when not supplied.
    pub fn with_default(name: impl Into<String>, default: A) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
        }
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    #[must_use]
    pub const fn default(&self) -> Option<&A> {
        self.default.as_ref()
    }
}

/// The name and ordered parameter list of a callable.
///
/// Every declared parameter counts toward [`arity`](Self::arity),
/// including parameters that have a default. A curried callable whose
/// signature is `(a, b = 10)` completes after two arguments, not one.
///
/// # Examples
///
/// ```
/// use curried::{arguments, Signature};
///
/// let signature = Signature::new("add")
///     .parameter("a")
///     .parameter_with_default("b", 10);
///
/// assert_eq!(signature.arity(), 2);
/// assert_eq!(signature.bind(arguments![1]), Ok(vec![1, 10]));
/// assert_eq!(signature.bind(arguments![; b = 2, a = 1]), Ok(vec![1, 2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<A> {
    name: String,
    parameters: Vec<Parameter<A>>,
}

impl<A> Signature<A> {
    /// A signature with no parameters yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a required parameter.
    #[must_use]
    pub fn parameter(self, name: impl Into<String>) -> Self {
        self.with(Parameter::required(name))
    }

    /// Appends a parameter with a default value.
    #[must_use]
    pub fn parameter_with_default(self, name: impl Into<String>, default: A) -> Self {
        self.with(Parameter::with_default(name, default))
    }

    /// Appends an already built parameter.
    #[must_use]
    pub fn with(mut self, parameter: Parameter<A>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// The callable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared parameters, defaulted ones included.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// The declared parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter<A>] {
        &self.parameters
    }

    /// Index of the parameter called `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|parameter| parameter.name == name)
    }

    /// Binds `arguments` to the declared parameters, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`BindingError`] when there are too many positional
    /// arguments, a named argument matches no parameter, a parameter is
    /// bound twice, or a parameter without default is left unbound.
    pub fn bind(&self, arguments: Arguments<A>) -> Result<Vec<A>, BindingError>
    where
        A: Clone,
    {
        let result = self.bind_slots(arguments);
        if let Err(error) = &result {
            tracing::debug!(callable = %self.name, %error, "argument binding failed");
        }
        result
    }

    fn bind_slots(&self, arguments: Arguments<A>) -> Result<Vec<A>, BindingError>
    where
        A: Clone,
    {
        let (positional, named) = arguments.into_parts();

        if positional.len() > self.parameters.len() {
            return Err(BindingError::TooManyPositional {
                callable: self.name.clone(),
                expected: self.parameters.len(),
                given: positional.len(),
            });
        }

        let mut slots: Vec<Option<A>> = positional.into_iter().map(Some).collect();
        slots.resize_with(self.parameters.len(), || None);

        for (keyword, value) in named {
            let index = self
                .position(&keyword)
                .ok_or_else(|| BindingError::UnexpectedKeyword {
                    callable: self.name.clone(),
                    keyword: keyword.clone(),
                })?;

            if slots[index].is_some() {
                return Err(BindingError::DuplicateArgument {
                    callable: self.name.clone(),
                    parameter: keyword,
                });
            }
            slots[index] = Some(value);
        }

        slots
            .into_iter()
            .zip(&self.parameters)
            .map(|(slot, parameter)| {
                slot.or_else(|| parameter.default.clone())
                    .ok_or_else(|| BindingError::MissingArgument {
                        callable: self.name.clone(),
                        parameter: parameter.name.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn add_signature() -> Signature<i32> {
        Signature::new("add")
            .parameter("a")
            .parameter_with_default("b", 10)
    }

    #[rstest]
    fn test_arity_counts_defaulted_parameters(add_signature: Signature<i32>) {
        assert_eq!(add_signature.arity(), 2);
        assert_eq!(add_signature.parameters()[1].default(), Some(&10));
        assert_eq!(add_signature.position("b"), Some(1));
        assert_eq!(add_signature.position("c"), None);
    }

    #[rstest]
    #[case(Arguments::from([1, 2]), vec![1, 2])]
    #[case(Arguments::from([1]), vec![1, 10])]
    #[case(Arguments::from([1]).with_named("b", 5), vec![1, 5])]
    #[case(Arguments::new().with_named("b", 5).with_named("a", 4), vec![4, 5])]
    fn test_bind_success(
        add_signature: Signature<i32>,
        #[case] arguments: Arguments<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(add_signature.bind(arguments), Ok(expected));
    }

    #[rstest]
    fn test_bind_too_many_positional(add_signature: Signature<i32>) {
        assert_eq!(
            add_signature.bind(Arguments::from([1, 2, 3])),
            Err(BindingError::TooManyPositional {
                callable: "add".to_string(),
                expected: 2,
                given: 3,
            })
        );
    }

    #[rstest]
    fn test_bind_unexpected_keyword(add_signature: Signature<i32>) {
        assert_eq!(
            add_signature.bind(Arguments::from([1]).with_named("default", 1)),
            Err(BindingError::UnexpectedKeyword {
                callable: "add".to_string(),
                keyword: "default".to_string(),
            })
        );
    }

    #[rstest]
    fn test_bind_duplicate_argument(add_signature: Signature<i32>) {
        assert_eq!(
            add_signature.bind(Arguments::from([1]).with_named("a", 3)),
            Err(BindingError::DuplicateArgument {
                callable: "add".to_string(),
                parameter: "a".to_string(),
            })
        );
    }

    #[rstest]
    fn test_bind_missing_argument(add_signature: Signature<i32>) {
        assert_eq!(
            add_signature.bind(Arguments::new().with_named("b", 1)),
            Err(BindingError::MissingArgument {
                callable: "add".to_string(),
                parameter: "a".to_string(),
            })
        );
    }
}
