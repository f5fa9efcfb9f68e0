pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    ContentReadFailure(std::io::Error),

    ContentParseFailure(serde_json::Error),

    InvalidLink { label: String, href: String },

    MissingField(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(val: std::io::Error) -> Self {
        Self::ContentReadFailure(val)
    }
}

impl From<serde_json::Error> for Error {
    fn from(val: serde_json::Error) -> Self {
        Self::ContentParseFailure(val)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
