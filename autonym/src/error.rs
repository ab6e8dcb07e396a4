use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a two-letter lowercase code")]
    InvalidCode(String),

    #[error("'{tag}' is not a valid language tag: {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: unic_langid::LanguageIdentifierError,
    },
}
