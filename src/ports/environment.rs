use crate::domain::AppError;

/// Port for reading the process environment.
pub trait Environment {
    /// Look up a variable. Unset or non-Unicode values yield `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating empty values as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }

    /// Look up a variable that must be present and non-empty.
    fn require(&self, key: &str) -> Result<String, AppError> {
        self.non_empty_var(key)
            .ok_or_else(|| AppError::config_error(format!("{} env variable not specified", key)))
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
