//! Tags network flow log records by destination port and protocol and counts
//! the results per tag and per port/protocol pair.

pub mod aggregator;
pub mod args;
pub mod counts;
pub mod lookup;
pub mod output;
pub mod parsers;
pub mod records;
mod tests;
