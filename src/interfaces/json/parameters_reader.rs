use crate::domain::payment::AuthPayloadParameters;
use crate::error::Result;
use std::io::Read;

/// Reads checkout parameters from a JSON document.
///
/// Field names follow the gateway's camelCase spelling (`browserIP`,
/// `notificationURL`, ...); anything missing takes its default.
pub struct ParametersReader<R: Read> {
    source: R,
}

impl<R: Read> ParametersReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read(self) -> Result<AuthPayloadParameters> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
