use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run before anything is scanned or written.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("No local or global 'config.json' found (expected catalog at {})", expected.display())]
    ConfigNotFound { expected: PathBuf },

    #[error("Invalid configuration in {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("No language selected")]
    NoLanguageSelected,
}

impl ContextError {
    /// What the user can do about it, if there is anything to say.
    pub fn remedy(&self) -> Option<String> {
        match self {
            ContextError::ConfigNotFound { expected } => Some(format!(
                "Please create a 'config.json' catalog at {} (or pass --install-dir).",
                expected.display()
            )),
            ContextError::InvalidConfig { path, .. } => Some(format!(
                "Fix or delete {} and run again.",
                path.display()
            )),
            ContextError::NoLanguageSelected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_names_expected_path() {
        let err = ContextError::ConfigNotFound {
            expected: PathBuf::from("/opt/tool/config.json"),
        };
        assert!(err.to_string().contains("/opt/tool/config.json"));
        assert!(err.remedy().unwrap().contains("/opt/tool/config.json"));
    }

    #[test]
    fn cancelled_selection_has_no_remedy() {
        assert!(ContextError::NoLanguageSelected.remedy().is_none());
    }
}
