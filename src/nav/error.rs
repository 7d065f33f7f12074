use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Element with ID \"{0}\" not found")]
    SectionNotFound(String),
    #[error("Section registry must contain at least one section")]
    EmptyRegistry,
}
