use super::parser::ReadError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Reads flow logs one line at a time.
///
/// Lines are handed out raw; splitting them into fields is left to
/// [`FlowRecord::from_line`](crate::records::flow_record::FlowRecord::from_line) so that a
/// malformed line only costs that line.
pub struct FlowLogParser;

impl FlowLogParser {
    pub fn lines(&self, file_path: &str) -> Result<FlowLogLines, ReadError> {
        debug!("Opening flow log: {:?}", file_path);
        let file = File::open(file_path)?;
        Ok(self.lines_from_reader(file))
    }

    pub fn lines_from_reader<R>(&self, reader: R) -> FlowLogLines
    where
        R: Read + 'static,
    {
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(reader));
        FlowLogLines {
            inner: reader.lines(),
        }
    }
}

pub struct FlowLogLines {
    inner: std::io::Lines<Box<dyn BufRead>>,
}

impl Iterator for FlowLogLines {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|line| line.map_err(ReadError::Io))
    }
}
