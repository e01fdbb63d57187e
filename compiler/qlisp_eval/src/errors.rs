//! Error values produced by evaluation.
//!
//! qlisp has no exceptions: every failure is an ordinary [`Value::Error`]
//! carrying an [`EvalError`]. Factory functions (e.g. [`division_by_zero`])
//! are the construction API; they fill in both the structured `kind` and the
//! rendered `message`.
//!
//! [`Value::Error`]: crate::Value::Error

/// Result of an operation that fails with an evaluation error.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound symbol '{name}'")]
    UnboundSymbol { name: String },

    #[error("{}", arity_message(.name, .expected, .got))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{}", type_message(.name, .expected, .got))]
    TypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    #[error("'{name}' passed an empty list")]
    EmptyList { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    #[error("negative exponent")]
    NegativeExponent,

    #[error("malformed special form: {message}")]
    MalformedSpecialForm { message: String },

    #[error("{message}")]
    ParseFailure { message: String },

    #[error("maximum call depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
}

fn arity_message(name: &str, expected: &usize, got: &usize) -> String {
    if name.is_empty() {
        format!("function passed too many arguments: got {got}, expected {expected}")
    } else {
        let noun = if *expected == 1 { "argument" } else { "arguments" };
        format!("'{name}' expects {expected} {noun}, got {got}")
    }
}

fn type_message(name: &str, expected: &str, got: &str) -> String {
    if name.is_empty() {
        format!("expected {expected}, got {got}")
    } else {
        format!("'{name}' expected {expected}, got {got}")
    }
}

/// An evaluation error: a structured kind plus its rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    /// The structured error category.
    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Application

/// Wrong number of arguments. An empty `name` means a user closure.
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// An argument of the wrong kind was passed to `name`.
pub fn wrong_type(name: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// The head of an evaluated list was not a function.
pub fn not_a_function(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        name: String::new(),
        expected: "function as first element".to_string(),
        got: got.to_string(),
    })
}

pub fn empty_list(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList {
        name: name.to_string(),
    })
}

pub fn malformed_form(message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedSpecialForm {
        message: message.to_string(),
    })
}

pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Arithmetic

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

pub fn negative_exponent() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent)
}

// Reader and loader

pub fn parse_failure(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseFailure {
        message: message.into(),
    })
}

#[cfg(test)]
mod tests;
