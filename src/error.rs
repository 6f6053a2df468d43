use crate::document::ElementId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The element was removed from the document, or never existed.
    #[error("{0} is not present in the document")]
    StaleTarget(ElementId),
    #[error("slide {0} does not exist")]
    UnknownSlide(usize),
    #[error("{0} is already present in the document")]
    DuplicateElement(ElementId),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}
