#[cfg(test)]
mod tests {
    use crate::records::{
        flow_record::{FlowRecord, RecordError},
        protocol::Protocol,
    };
    use std::str::FromStr;

    const TCP_LINE: &str = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 45678 6 10 1000 1623456789 1623456799 ACCEPT OK";

    #[test]
    fn test_from_line_tcp() {
        let record = FlowRecord::from_line(TCP_LINE).unwrap();
        assert_eq!(record.dst_port, 45678);
        assert_eq!(record.protocol, Protocol::Tcp);
    }

    #[test]
    fn test_from_line_udp_with_runs_of_whitespace() {
        let line = "  2 123456789012\teni-1234567890 10.0.0.1   10.0.0.4 53 45680 17 5 500 1623456791 1623456801 ACCEPT OK\n";
        let record = FlowRecord::from_line(line).unwrap();
        assert_eq!(record.dst_port, 45680);
        assert_eq!(record.protocol, Protocol::Udp);
    }

    #[test]
    fn test_from_line_extra_fields() {
        let line = format!("{} extra fields here", TCP_LINE);
        let record = FlowRecord::from_line(&line).unwrap();
        assert_eq!(record.dst_port, 45678);
    }

    #[test]
    fn test_from_line_too_few_fields() {
        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 45678 6 10 1000";
        assert_eq!(
            FlowRecord::from_line(line),
            Err(RecordError::TooFewFields { found: 10 })
        );
        assert_eq!(
            FlowRecord::from_line(""),
            Err(RecordError::TooFewFields { found: 0 })
        );
    }

    #[test]
    fn test_from_line_thirteen_fields() {
        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 45678 6 10 1000 1623456789 1623456799 ACCEPT";
        assert_eq!(
            FlowRecord::from_line(line),
            Err(RecordError::TooFewFields { found: 13 })
        );
    }

    #[test]
    fn test_from_line_invalid_port() {
        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 abc 6 10 1000 1623456789 1623456799 ACCEPT OK";
        assert_eq!(
            FlowRecord::from_line(line),
            Err(RecordError::InvalidPort {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_from_line_port_beyond_16_bits() {
        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 70000 6 10 1000 1623456789 1623456799 ACCEPT OK";
        let record = FlowRecord::from_line(line).unwrap();
        assert_eq!(record.dst_port, 70000);
        assert_eq!(record.protocol, Protocol::Tcp);

        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 -1 17 10 1000 1623456789 1623456799 ACCEPT OK";
        assert_eq!(FlowRecord::from_line(line).unwrap().dst_port, -1);
    }

    #[test]
    fn test_from_line_port_not_an_integer() {
        for port in ["4.5", "0x50", "99999999999999999999"] {
            let line = format!(
                "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 {} 6 10 1000 1623456789 1623456799 ACCEPT OK",
                port
            );
            assert_eq!(
                FlowRecord::from_line(&line),
                Err(RecordError::InvalidPort {
                    value: port.to_string()
                })
            );
        }
    }

    #[test]
    fn test_protocol_from_iana_number() {
        assert_eq!(Protocol::from_iana_number("6"), Protocol::Tcp);
        assert_eq!(Protocol::from_iana_number("17"), Protocol::Udp);

        for number in ["1", "47", "50", "0", "255", "06", "tcp", "", "-6"] {
            assert_eq!(Protocol::from_iana_number(number), Protocol::Icmp);
        }
    }

    #[test]
    fn test_unknown_protocol_number_is_icmp() {
        let line = "2 123456789012 eni-1234567890 10.0.0.1 10.0.0.2 80 443 47 10 1000 1623456789 1623456799 ACCEPT OK";
        let record = FlowRecord::from_line(line).unwrap();
        assert_eq!(record.protocol, Protocol::Icmp);
    }

    #[test]
    fn test_protocol_names() {
        assert_eq!(Protocol::Tcp.to_string(), "tcp");
        assert_eq!(Protocol::Udp.to_string(), "udp");
        assert_eq!(Protocol::Icmp.to_string(), "icmp");
        assert_eq!(Protocol::from_str("TCP").unwrap(), Protocol::Tcp);
        assert_eq!(Protocol::from_str("Udp").unwrap(), Protocol::Udp);
        assert!(Protocol::from_str("gre").is_err());
    }
}
