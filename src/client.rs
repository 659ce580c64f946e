use log::{debug, error, trace, warn};
use reqwest::blocking::Client as ReqwestClient;
use serde::Deserialize;

use crate::configuration::Configuration;
use crate::error::{Error, Result};

/// HTTP method of a remote endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully assembled call to one remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Endpoint name, e.g. `sendMessage`
    pub endpoint: &'static str,
    /// Query parameters, in template order. Unset parameters are absent.
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: &'static str) -> Self {
        ApiRequest {
            method,
            endpoint,
            params: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn param<V: ToString>(mut self, name: &'static str, value: V) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Append a parameter only when it has a value
    pub fn optional_param<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Look up a parameter value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Envelope every remote response is wrapped in
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    /// Whether the request was successful
    pub ok: bool,
    /// Response payload
    pub result: Option<T>,
    /// Human readable error, present when `ok` is false
    pub description: Option<String>,
    /// Numeric error code, present when `ok` is false
    pub error_code: Option<i32>,
}

impl<T> Response<T> {
    /// Validate a decoded envelope and unwrap its payload.
    ///
    /// An absent envelope is a remote failure without a message.
    pub fn into_result(response: Option<Response<T>>) -> Result<T> {
        let response = match response {
            Some(response) => response,
            None => {
                warn!("Telegram API returned no response");
                return Err(Error::remote_api(None, None));
            }
        };

        if !response.ok {
            warn!(
                "Telegram API returned error {:?}: {:?}",
                response.error_code, response.description
            );
            return Err(Error::remote_api(response.description, response.error_code));
        }

        response
            .result
            .ok_or_else(|| Error::remote_api(Some("response has no result".to_string()), None))
    }
}

/// Capability that delivers an [`ApiRequest`] and hands back the raw body.
///
/// Implementations perform no retries. `Ok(None)` means the server produced no body;
/// a blank body is treated the same way by the caller.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<Option<String>>;
}

/// Blocking HTTP transport for the Telegram Bot API
pub struct HttpTransport {
    client: ReqwestClient,
    endpoint: String,
    log_traffic: bool,
}

impl HttpTransport {
    /// Create a transport for a bot token using the given configuration
    pub fn new(token: &str, config: &Configuration) -> Result<Self> {
        config.validate()?;

        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

        Ok(HttpTransport {
            client,
            endpoint: config.endpoint(token),
            log_traffic: config.log_traffic(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.endpoint, endpoint)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<Option<String>> {
        let url = self.url(request.endpoint);

        // Never log the URL itself, it embeds the bot token
        debug!("{:?} /{}", request.method, request.endpoint);
        if self.log_traffic {
            trace!("Request parameters: {:?}", request.params);
        }

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        let response = builder.query(&request.params).send().map_err(|e| {
            let e = e.without_url();
            error!("HTTP request to /{} failed: {}", request.endpoint, e);
            Error::Http(e)
        })?;

        // Error envelopes arrive with 4xx statuses, so the body is read either way
        let status = response.status();
        debug!("Received response with status code: {}", status);

        let body = response.text().map_err(|e| Error::Http(e.without_url()))?;
        if self.log_traffic {
            trace!("Response body: {}", body);
        }

        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_params_are_omitted() {
        let request = ApiRequest::new(Method::Get, "getUpdates")
            .optional_param("offset", Some(5))
            .optional_param::<i32>("limit", None)
            .optional_param("timeout", Some(30));

        assert_eq!(
            request.params,
            vec![("offset", "5".to_string()), ("timeout", "30".to_string())]
        );
        assert_eq!(request.get("limit"), None);
    }

    #[test]
    fn test_into_result() {
        let ok: Response<bool> = serde_json::from_str(r#"{"ok":true,"result":true}"#).unwrap();
        assert!(Response::into_result(Some(ok)).unwrap());

        let failed: Response<bool> = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        match Response::into_result(Some(failed)) {
            Err(Error::RemoteApi {
                description,
                error_code,
            }) => {
                assert_eq!(description.as_deref(), Some("Bad Request: chat not found"));
                assert_eq!(error_code, Some(400));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let missing = Response::<bool>::into_result(None).unwrap_err();
        assert!(missing.is_remote_api());
        assert_eq!(missing.description(), None);
    }
}
