use std::io;

#[derive(Debug, Fail)]
pub enum ShapeError {
    #[fail(display = "Unknown shape: {}", _0)]
    UnknownShape(String),
    #[fail(display = "Unknown enumeration: {}", _0)]
    UnknownEnum(String),
    #[fail(display = "Invalid {} document: {}", shape, cause)]
    Decode {
        shape: String,
        #[cause]
        cause: serde_json::Error,
    },
    #[fail(display = "Unable to encode {}: {}", shape, cause)]
    Encode {
        shape: String,
        #[cause]
        cause: serde_json::Error,
    },
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for ShapeError {
    fn from(err: io::Error) -> Self {
        ShapeError::Io(err)
    }
}
