use std::future::Future;

use tracing::Instrument;

use crate::error::TransportError;
use crate::sink::LogSink;
use crate::transport::Transport;

pub struct RequestLogger<T, S> {
    transport: T,
    sink: S,
}

impl<T, S> RequestLogger<T, S>
where
    T: Transport,
    S: LogSink,
{
    pub fn new(transport: T, sink: S) -> Self {
        Self { transport, sink }
    }

    /// Announces `uri`, then returns the fetch that announces the received body.
    ///
    /// The fetch-announcement is written before this returns, so callers that
    /// create several fetches before awaiting any of them get every
    /// announcement ahead of the first receipt. The receipt line is only
    /// written once the body has been read in full. The status code is not
    /// inspected.
    pub fn fetch_and_log<'a>(
        &'a self,
        uri: &'a str,
    ) -> impl Future<Output = Result<(), TransportError>> + 'a {
        self.sink.line(&format!("Fetching {}", uri));

        let span = tracing::trace_span!("fetch", uri);
        async move {
            let response = self.transport.get(uri).await?;
            tracing::debug!(
                "{} responded with {} ({} bytes)",
                uri,
                response.status,
                response.body.len()
            );

            self.sink.line(&format!("Received {}", response.body));

            Ok(())
        }
        .instrument(span)
    }
}
