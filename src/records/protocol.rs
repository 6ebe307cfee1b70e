use strum_macros::{Display, EnumString};

/// Transport protocol of a flow, as far as tagging is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
}

impl Protocol {
    /// Maps an IANA protocol number, as it appears in a flow log, to a protocol.
    ///
    /// Only TCP (6) and UDP (17) are told apart. Every other value, including
    /// text that is not a number at all, is reported as ICMP.
    pub fn from_iana_number(number: &str) -> Self {
        match number {
            "6" => Protocol::Tcp,
            "17" => Protocol::Udp,
            _ => Protocol::Icmp,
        }
    }
}
