pub type SerdePathError = serde_path_to_error::Error<serde_json::Error>;

/// Parses JSON while keeping the path of the field that failed, so errors
/// read like `[3].close: invalid type: string "n/a", expected f64`.
pub trait SerdeResponseParse {
    type Error;

    fn serde_parse_custom<T>(self) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

impl SerdeResponseParse for &str {
    type Error = SerdePathError;

    fn serde_parse_custom<T>(self) -> Result<T, SerdePathError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(self))
    }
}
