use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{label} is required")]
    MissingRequired {
        key: &'static str,
        label: &'static str,
    },
}

impl FormError {
    pub fn missing(key: &'static str, label: &'static str) -> Self {
        Self::MissingRequired { key, label }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
