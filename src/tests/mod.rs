mod flow_record_test;
mod output_test;
