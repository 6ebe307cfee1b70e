use anyhow::Context;
use log::{debug, warn};

use crate::counts::Counts;
use crate::lookup::LookupIndex;
use crate::parsers::flow_log_parser::FlowLogParser;
use crate::records::flow_record::{FlowRecord, PortProtocol};

/// Result of tagging one flow log.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub tag_counts: Counts<String>,
    pub port_protocol_counts: Counts<PortProtocol>,
    pub lines_read: u64,
    pub lines_skipped: u64,
}

impl Summary {
    pub fn lines_classified(&self) -> u64 {
        self.lines_read - self.lines_skipped
    }
}

/// Classifies flow log lines against a lookup index and tallies the results.
pub struct Aggregator {
    index: LookupIndex,
    tag_counts: Counts<String>,
    port_protocol_counts: Counts<PortProtocol>,
    lines_read: u64,
    lines_skipped: u64,
}

impl Aggregator {
    pub fn new(index: LookupIndex) -> Self {
        Self {
            index,
            tag_counts: Counts::new(),
            port_protocol_counts: Counts::new(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Classifies one line and counts it. Returns the tag assigned to the line, or
    /// `None` if the line was malformed and skipped.
    pub fn process_line(&mut self, line: &str) -> Option<&str> {
        self.lines_read += 1;

        let record = match FlowRecord::from_line(line) {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping malformed line {:?}: {}", line, err);
                self.lines_skipped += 1;
                return None;
            }
        };

        let pair = record.port_protocol();
        let tag = self.index.tag_for(&pair);
        self.tag_counts.increment(tag);
        self.port_protocol_counts.increment(&pair);
        Some(tag)
    }

    pub fn process_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref());
        }
    }

    pub fn finish(self) -> Summary {
        Summary {
            tag_counts: self.tag_counts,
            port_protocol_counts: self.port_protocol_counts,
            lines_read: self.lines_read,
            lines_skipped: self.lines_skipped,
        }
    }
}

/// Tags every record of the flow log at `flow_log_path` using the lookup table at
/// `lookup_table_path`.
///
/// Malformed flow log lines are skipped. Failing to open or read either file aborts
/// the run and no counts are returned.
pub fn process_flow_logs(flow_log_path: &str, lookup_table_path: &str) -> anyhow::Result<Summary> {
    let index = LookupIndex::load(lookup_table_path)?;
    let lines = FlowLogParser
        .lines(flow_log_path)
        .with_context(|| format!("failed to open flow log {}", flow_log_path))?;

    debug!("Tagging flow log {:?} ...", flow_log_path);
    let mut aggregator = Aggregator::new(index);
    for line in lines {
        let line = line.with_context(|| format!("failed to read flow log {}", flow_log_path))?;
        aggregator.process_line(&line);
    }

    Ok(aggregator.finish())
}
