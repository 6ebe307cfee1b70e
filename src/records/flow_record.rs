use std::fmt;

use super::protocol::Protocol;

/// Minimum number of whitespace separated fields in a flow log line.
pub const MIN_FIELDS: usize = 14;
const DST_PORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

/// A destination port together with its protocol.
///
/// This is the key used both for tag lookups and for the per port/protocol counts.
/// Flow logs may carry any integer in the port field, so the port is not limited
/// to the 16-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortProtocol {
    pub port: i64,
    pub protocol: Protocol,
}

impl PortProtocol {
    pub fn new(port: i64, protocol: Protocol) -> Self {
        PortProtocol { port, protocol }
    }
}

/// Reasons a flow log line cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    TooFewFields { found: usize },
    InvalidPort { value: String },
    UnknownProtocol { value: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::TooFewFields { found } => write!(
                f,
                "expected at least {} fields, found {}",
                MIN_FIELDS, found
            ),
            RecordError::InvalidPort { value } => {
                write!(f, "destination port {:?} is not an integer", value)
            }
            RecordError::UnknownProtocol { value } => {
                write!(f, "unknown protocol {:?}", value)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// The part of a flow log record needed for tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowRecord {
    pub dst_port: i64,
    pub protocol: Protocol,
}

impl FlowRecord {
    /// Parses one flow log line, whose fields are separated by runs of whitespace.
    ///
    /// The destination port is field 6 and the IANA protocol number field 7. A line
    /// with too few fields, or a port that is not an integer, is rejected.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
            });
        }

        let dst_port = fields[DST_PORT_FIELD]
            .parse::<i64>()
            .map_err(|_| RecordError::InvalidPort {
                value: fields[DST_PORT_FIELD].to_string(),
            })?;

        Ok(FlowRecord {
            dst_port,
            protocol: Protocol::from_iana_number(fields[PROTOCOL_FIELD]),
        })
    }

    pub fn port_protocol(&self) -> PortProtocol {
        PortProtocol::new(self.dst_port, self.protocol)
    }
}
