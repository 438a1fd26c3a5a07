use crate::error::TransportError;

/// A fully buffered response. The body is decoded text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub async fn transform_response(
    uri: &str,
    response: reqwest::Response,
) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| TransportError::from_reqwest(uri, err))?;

    Ok(HttpResponse { status, body })
}
