#[cfg(test)]
mod tests {
    use crate::aggregator::Aggregator;
    use crate::args::ExportMethodType;
    use crate::lookup::LookupIndex;
    use crate::output::OutputWriter;
    use crate::records::{lookup_rule::LookupRule, protocol::Protocol};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_summary() {
        let index = LookupIndex::from_rules(vec![LookupRule {
            dst_port: 443,
            protocol: Protocol::Tcp,
            tag: "sv_P2".to_string(),
        }]);
        let mut aggregator = Aggregator::new(index);
        aggregator.process_lines([
            "2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 23 6 15 1500 1620140761 1620140821 REJECT OK",
            "2 123456789012 eni-4d3c2b1a 192.168.1.100 203.0.113.101 49154 443 6 18 14000 1620140761 1620140821 ACCEPT OK",
            "2 123456789012 eni-5e6f7g8h 192.168.1.101 198.51.100.3 49155 53 17 12 8000 1620140761 1620140821 ACCEPT OK",
            "2 123456789012 eni-9h8g7f6e 172.16.0.100 203.0.113.102 49156 443 6 10 5000 1620140761 1620140821 ACCEPT OK",
            "2 123456789012 eni-1a2b3c4d 10.0.1.102 172.217.7.228 49157 0 1 8 4000 1620140761 1620140821 ACCEPT OK",
        ]);
        let summary = aggregator.finish();

        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let path = path.to_str().unwrap();

        let mut writer = OutputWriter::new(ExportMethodType::File, Some(path)).unwrap();
        writer.write_summary(&summary).unwrap();
        writer.flush_and_close().unwrap();

        let expected = "\
Tag Counts:
Tag,Count
Untagged,3
sv_P2,2

Port/Protocol Combination Counts:
Port,Protocol,Count
23,tcp,1
443,tcp,2
53,udp,1
0,icmp,1
";
        assert_eq!(fs::read_to_string(path).unwrap(), expected);
    }

    #[test]
    fn test_write_empty_summary() {
        let summary = Aggregator::new(LookupIndex::default()).finish();

        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let path = path.to_str().unwrap();

        let mut writer = OutputWriter::new(ExportMethodType::File, Some(path)).unwrap();
        writer.write_summary(&summary).unwrap();
        writer.flush_and_close().unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Tag Counts:\nTag,Count\n\nPort/Protocol Combination Counts:\nPort,Protocol,Count\n"
        );
    }

    #[test]
    fn test_file_output_requires_path() {
        assert!(OutputWriter::new(ExportMethodType::File, None).is_err());

        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("output.txt");
        assert!(OutputWriter::new(ExportMethodType::File, path.to_str()).is_err());
    }
}
