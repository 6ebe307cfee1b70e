use std::str::FromStr;

use serde::Deserialize;

use super::{
    flow_record::{PortProtocol, RecordError},
    protocol::Protocol,
};

/// One row of the lookup table as read from the CSV file, before validation.
///
/// The tag is kept byte for byte; only the port and protocol are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupRow {
    #[serde(rename = "dstport")]
    pub dst_port: String,
    #[serde(rename = "protocol")]
    pub protocol: String,
    #[serde(rename = "tag")]
    pub tag: String,
}

/// One rule of the lookup table: traffic to `dst_port` over `protocol` gets `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRule {
    pub dst_port: u32,
    pub protocol: Protocol,
    pub tag: String,
}

impl LookupRule {
    pub fn port_protocol(&self) -> PortProtocol {
        PortProtocol::new(i64::from(self.dst_port), self.protocol)
    }
}

impl TryFrom<LookupRow> for LookupRule {
    type Error = RecordError;

    fn try_from(row: LookupRow) -> Result<Self, Self::Error> {
        let dst_port = row
            .dst_port
            .trim()
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidPort {
                value: row.dst_port.clone(),
            })?;
        let protocol =
            Protocol::from_str(row.protocol.trim()).map_err(|_| RecordError::UnknownProtocol {
                value: row.protocol.clone(),
            })?;

        Ok(LookupRule {
            dst_port,
            protocol,
            tag: row.tag,
        })
    }
}
