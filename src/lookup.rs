use std::collections::HashMap;

use anyhow::Context;
use log::{debug, warn};

use crate::parsers::{csv_parser::CsvParser, parser::Parser};
use crate::records::{
    flow_record::PortProtocol,
    lookup_rule::{LookupRow, LookupRule},
};

/// Tag reported for records that match no lookup rule.
pub const UNTAGGED: &str = "Untagged";

const LOOKUP_HEADERS: &[&str] = &["dstport", "protocol", "tag"];

/// Maps tags to the port/protocol pairs that carry them.
///
/// Tags keep the order in which they first appear in the lookup table. When a pair
/// is claimed by several tags, the earliest tag wins; the inverted `by_pair` map is
/// filled with that tag at build time so lookups don't have to walk every tag.
#[derive(Debug, Default)]
pub struct LookupIndex {
    tags: Vec<(String, Vec<PortProtocol>)>,
    tag_positions: HashMap<String, usize>,
    by_pair: HashMap<PortProtocol, usize>,
}

impl LookupIndex {
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = LookupRule>,
    {
        let mut index = LookupIndex::default();
        for rule in rules {
            index.insert(rule);
        }
        index
    }

    /// Reads the lookup table at `file_path` and builds the index from it.
    ///
    /// Rows with a bad port or an unknown protocol are logged and contribute no
    /// pair, but their tag still takes its place in tag order. Rows that cannot be
    /// read at all are logged and left out. Failing to open or read the file, or a
    /// header without the `dstport`, `protocol` and `tag` columns, is an error.
    pub fn load(file_path: &str) -> anyhow::Result<Self> {
        let parser = CsvParser::new(LOOKUP_HEADERS);
        let rows = parser
            .parse::<LookupRow>(file_path)
            .with_context(|| format!("failed to read lookup table {}", file_path))?;

        let mut index = LookupIndex::default();
        // Row numbers are 1-based and count the header.
        for (line, row) in rows.enumerate() {
            match row {
                Ok(row) => {
                    let tag = row.tag.clone();
                    match LookupRule::try_from(row) {
                        Ok(rule) => index.insert(rule),
                        Err(err) => {
                            warn!("Skipping lookup table row {}: {}", line + 2, err);
                            index.tag_position(&tag);
                        }
                    }
                }
                Err(err) if err.is_fatal() => {
                    return Err(err)
                        .with_context(|| format!("failed to read lookup table {}", file_path));
                }
                Err(err) => warn!("Skipping lookup table row {}: {}", line + 2, err),
            }
        }

        debug!(
            "Loaded {} tags covering {} port/protocol pairs from {}",
            index.len(),
            index.by_pair.len(),
            file_path
        );
        Ok(index)
    }

    /// Position of `tag` in tag order, appending it if it is new.
    fn tag_position(&mut self, tag: &str) -> usize {
        match self.tag_positions.get(tag) {
            Some(&position) => position,
            None => {
                let position = self.tags.len();
                self.tag_positions.insert(tag.to_string(), position);
                self.tags.push((tag.to_string(), Vec::new()));
                position
            }
        }
    }

    fn insert(&mut self, rule: LookupRule) {
        let pair = rule.port_protocol();
        let position = self.tag_position(&rule.tag);

        let pairs = &mut self.tags[position].1;
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }

        // The pair belongs to the earliest tag claiming it, even when that tag's
        // claim comes from a later row.
        let owner = self.by_pair.entry(pair).or_insert(position);
        if position < *owner {
            *owner = position;
        }
    }

    /// Returns the tag for `pair`, or [`UNTAGGED`] if no rule covers it.
    pub fn tag_for(&self, pair: &PortProtocol) -> &str {
        self.by_pair
            .get(pair)
            .map(|&position| self.tags[position].0.as_str())
            .unwrap_or(UNTAGGED)
    }

    pub fn pairs(&self, tag: &str) -> Option<&[PortProtocol]> {
        self.tag_positions
            .get(tag)
            .map(|&position| self.tags[position].1.as_slice())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
