pub mod config;
pub mod error;
pub mod logger;
pub mod response;
pub mod script;
pub mod sink;
pub mod transport;

pub use crate::config::Config;
pub use crate::error::TransportError;
pub use crate::logger::RequestLogger;
pub use crate::script::Script;

use crate::sink::TracingSink;
use crate::transport::HttpTransport;

pub fn app() -> RequestLogger<HttpTransport, TracingSink> {
    RequestLogger::new(HttpTransport::new(), TracingSink)
}

pub async fn run(config: &Config) -> Result<(), TransportError> {
    let logger = app();
    config.script.run(&logger).await
}
