use std::fmt;

/// Non-fatal conditions met while bumping that the user should hear about.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No push token in the environment; the push goes ahead without one
    MissingPushToken { variable: String },
    /// The tag exists locally but the remote never received it
    LocalTagNotPushed { tag: String, remote: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingPushToken { variable } => {
                write!(
                    f,
                    "{} is not set; pushing without a token (HTTPS remotes may reject the push)",
                    variable
                )
            }
            BoundaryWarning::LocalTagNotPushed { tag, remote } => {
                write!(
                    f,
                    "Tag '{}' exists only locally. Retry with `git push {} {}` or discard it with `git tag -d {}`",
                    tag, remote, tag, tag
                )
            }
        }
    }
}
