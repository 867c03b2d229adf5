use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use std::fmt::Debug;
use url::Url;

use crate::serde::{SerdePathError, SerdeResponseParse};

#[derive(Debug)]
pub enum ReqwestStage {
    Send,
    DecodeText,
    Deserialise,
}

fn parse_url<U: ToString>(url: U) -> crate::Result<Url> {
    url.to_string()
        .parse::<Url>()
        .map_err(|_| crate::Error::InvalidUrl(url.to_string()))
}

#[derive(Debug)]
#[allow(dead_code)]
pub struct ReqwestErrorContext {
    pub url: Url,
    query: String,
}

impl ReqwestErrorContext {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            query: String::new(),
        }
    }
}

#[derive(Debug)]
pub enum ReqwestInnerError {
    Reqwest(reqwest::Error),
    SerdePath(SerdePathError),
}

impl ReqwestInnerError {
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Reqwest(err) => err.is_connect(),
            Self::SerdePath(_) => false,
        }
    }
}

/// Body shape the backend uses for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
}

pub struct Reqwest {
    builder: RequestBuilder,
    error_context: Option<ReqwestErrorContext>,
}

impl Reqwest {
    /// A GET request sharing the connection pool of `client`.
    pub fn get_with<U: ToString>(client: &Client, url: U) -> crate::Result<Self> {
        let url = parse_url(url)?;
        let builder = client.get(url.clone());
        Ok(Self {
            builder,
            error_context: Some(ReqwestErrorContext::new(url)),
        })
    }

    pub fn query<T: serde::Serialize + Debug>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        if let Some(context) = self.error_context.as_mut() {
            context.query = format!("{query:?}");
        }
        self
    }

    async fn receive_text_internal(mut self) -> crate::Result<(String, Box<ReqwestErrorContext>)> {
        let error_context = Box::new(
            self.error_context
                .take()
                .ok_or(crate::Error::ReqwestErrorContextMissing)?,
        );

        let send_result = self.builder.send().await;
        let response = match send_result {
            Ok(response) => response,
            Err(err) => {
                return Err(crate::Error::ReqwestFailed {
                    stage: ReqwestStage::Send,
                    context: error_context,
                    inner: ReqwestInnerError::Reqwest(err),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            // The body is only read for its optional `error` field, an
            // unreadable body is the same as one without that field.
            let body = response.text().await.unwrap_or_default();
            return Err(crate::Error::HttpStatus {
                status: status.as_u16(),
                server_message: server_message(&body),
                context: error_context,
            });
        }

        let text_result = response.text().await;
        let Ok(text) = text_result else {
            let err = text_result.unwrap_err();
            return Err(crate::Error::ReqwestFailed {
                stage: ReqwestStage::DecodeText,
                context: error_context,
                inner: ReqwestInnerError::Reqwest(err),
            });
        };

        Ok((text, error_context))
    }

    pub async fn receive_json<J: Debug + DeserializeOwned>(self) -> crate::Result<J> {
        let (text, error_context) = self.receive_text_internal().await?;

        let parse_result = text.as_str().serde_parse_custom();
        let Ok(json) = parse_result else {
            let err = parse_result.unwrap_err();
            return Err(crate::Error::ReqwestFailed {
                stage: ReqwestStage::Deserialise,
                context: error_context,
                inner: ReqwestInnerError::SerdePath(err),
            });
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_error_field() {
        assert_eq!(
            server_message(r#"{"error":"Ticker not found"}"#),
            Some("Ticker not found".to_string())
        );
    }

    #[test]
    fn server_message_missing_field() {
        assert_eq!(server_message(r#"{"detail":"nope"}"#), None);
    }

    #[test]
    fn server_message_empty_is_missing() {
        assert_eq!(server_message(r#"{"error":""}"#), None);
        assert_eq!(server_message(r#"{"error":null}"#), None);
    }

    #[test]
    fn server_message_not_json() {
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
        assert_eq!(server_message(""), None);
    }

    #[test]
    fn get_rejects_invalid_url() {
        let result = Reqwest::get_with(&Client::new(), "not a url");
        assert!(matches!(result, Err(crate::Error::InvalidUrl(_))));
    }
}
