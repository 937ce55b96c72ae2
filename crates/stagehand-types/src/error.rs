use thiserror::Error;

/// Errors raised by fixture collaborators.
///
/// Builders never wrap these; whatever a collaborator returns is what the
/// caller sees.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The environment loader does not know the requested environment.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    /// A scope has no method under the requested identifier.
    #[error("undefined method `{0}` for scope")]
    MethodNotFound(String),

    /// No function with this name is registered.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A function was called with the wrong number of arguments.
    #[error("{function}: expected {expected} argument(s), got {found}")]
    ArgumentCount {
        function: String,
        expected: usize,
        found: usize,
    },

    /// A function argument had the wrong shape.
    #[error("{function}: {message}")]
    InvalidArgument { function: String, message: String },

    /// A scope's parent belongs to a different compiler than the scope.
    #[error("parent scope belongs to compiler for node {parent}, not {scope}")]
    CompilerMismatch { scope: String, parent: String },

    /// DSL variables are single-assignment within a scope.
    #[error("cannot reassign variable ${0}")]
    VariableReassigned(String),

    /// A template could not be rendered.
    #[error("template error: {0}")]
    Template(String),

    /// Raised by the `fail` function.
    #[error("evaluation error: {0}")]
    Failed(String),

    /// A resource kind name that the DSL does not define.
    #[error("unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// Fact data was not a JSON object.
    #[error("facts must be a JSON object, found {0}")]
    InvalidFacts(String),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
