use thiserror::Error;

pub type SgResult<T> = Result<T, SgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SgError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

impl SgError {
    pub fn invalid_arg(what: impl Into<String>) -> Self {
        SgError::InvalidArg { what: what.into() }
    }

    pub fn invariant(what: impl Into<String>) -> Self {
        SgError::Invariant { what: what.into() }
    }

    /// True for caller mistakes (bad handle, rejected edge, missing label).
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self, SgError::InvalidArg { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = SgError::invalid_arg("self-loop on v0");
        assert_eq!(err.to_string(), "Invalid argument: self-loop on v0");
        assert!(err.is_invalid_arg());

        let err = SgError::invariant("edge missing from incidence list");
        assert!(!err.is_invalid_arg());
    }
}
