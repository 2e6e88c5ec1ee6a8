use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("unknown {sum} tag: {tag}")]
    UnknownTag { sum: &'static str, tag: u16 },

    #[error("invalid format options: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_message_names_the_sum() {
        let err = Error::UnknownTag {
            sum: "arith_expr",
            tag: 99,
        };
        assert_eq!(err.to_string(), "unknown arith_expr tag: 99");
    }

    #[test]
    fn key_not_found_message() {
        assert_eq!(
            Error::KeyNotFound("3".into()).to_string(),
            "key not found: 3"
        );
    }
}
