use std::future::Future;

use crate::error::TransportError;
use crate::response::{transform_response, HttpResponse};

pub type Client = reqwest::Client;

/// Something that can perform a GET and hand back the whole response.
pub trait Transport: Send + Sync {
    fn get(&self, uri: &str) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, uri: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(uri, err))?;

        transform_response(uri, response).await
    }
}
