pub mod flow_record;
pub mod lookup_rule;
pub mod protocol;
