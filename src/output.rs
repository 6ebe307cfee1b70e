use std::{
    fs::File,
    io::{BufWriter, Write},
};

use crate::{aggregator::Summary, args::ExportMethodType};
use anyhow::Context;
use log::debug;

pub struct OutputWriter {
    writer: BufWriter<Box<dyn Write>>,
}

impl OutputWriter {
    pub fn new(export_type: ExportMethodType, file_path: Option<&str>) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = match export_type {
            ExportMethodType::File => {
                let path = file_path.context("file path required for file output")?;
                let file = File::create(path)
                    .with_context(|| format!("failed to create output file {}", path))?;
                Box::new(file)
            }
            ExportMethodType::Print => Box::new(std::io::stdout()),
        };

        Ok(Self::from_writer(writer))
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        OutputWriter {
            writer: BufWriter::new(writer),
        }
    }

    /// Writes both count tables, each under its own title and column header.
    pub fn write_summary(&mut self, summary: &Summary) -> std::io::Result<()> {
        debug!("Writing tag counts");
        writeln!(self.writer, "Tag Counts:")?;
        writeln!(self.writer, "Tag,Count")?;
        for (tag, count) in summary.tag_counts.iter() {
            writeln!(self.writer, "{},{}", tag, count)?;
        }

        debug!("Writing port/protocol counts");
        writeln!(self.writer)?;
        writeln!(self.writer, "Port/Protocol Combination Counts:")?;
        writeln!(self.writer, "Port,Protocol,Count")?;
        for (pair, count) in summary.port_protocol_counts.iter() {
            writeln!(self.writer, "{},{},{}", pair.port, pair.protocol, count)?;
        }

        Ok(())
    }

    /// Flushes the writer. Called once the summary is written so that write errors
    /// surface instead of being lost on drop.
    pub fn flush_and_close(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
