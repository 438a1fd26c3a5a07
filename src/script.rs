use futures::future::try_join_all;
use serde::Deserialize;

use crate::error::TransportError;
use crate::logger::RequestLogger;
use crate::sink::LogSink;
use crate::transport::Transport;

const DEFAULT_ORIGIN: &str = "https://httpbin.org/get";

/// The fixed sequence of fetches the program performs.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Script {
    // fetched one after another, each finishing before the next starts
    pub sequential: Vec<String>,
    // fetched together once every sequential fetch is done
    pub concurrent: Vec<String>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            sequential: vec![request_uri("a"), request_uri("b")],
            concurrent: vec![request_uri("c"), request_uri("d")],
        }
    }
}

fn request_uri(name: &str) -> String {
    format!("{}?request={}", DEFAULT_ORIGIN, name)
}

impl Script {
    /// Runs the sequential fetches in order, then all concurrent fetches at once.
    ///
    /// The concurrent fetches are all created, and so announced in list order,
    /// before any of them is polled. They run within the current task. The
    /// first transport error stops the script.
    pub async fn run<T, S>(&self, logger: &RequestLogger<T, S>) -> Result<(), TransportError>
    where
        T: Transport,
        S: LogSink,
    {
        for uri in &self.sequential {
            logger.fetch_and_log(uri).await?;
        }

        tracing::trace!("starting {} concurrent fetches", self.concurrent.len());
        let fetches: Vec<_> = self
            .concurrent
            .iter()
            .map(|uri| logger.fetch_and_log(uri))
            .collect();
        try_join_all(fetches).await?;

        Ok(())
    }
}

#[test]
fn default_script_targets_httpbin() {
    let script = Script::default();

    assert_eq!(
        script.sequential,
        vec![
            "https://httpbin.org/get?request=a",
            "https://httpbin.org/get?request=b"
        ]
    );
    assert_eq!(
        script.concurrent,
        vec![
            "https://httpbin.org/get?request=c",
            "https://httpbin.org/get?request=d"
        ]
    );
}
