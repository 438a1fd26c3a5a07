use serde::Deserialize;

use crate::script::Script;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub script: Script,
}
