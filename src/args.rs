use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Path to a TOML configuration file, takes the place of all other options
    #[clap(short, long)]
    pub config_file: Option<String>,

    /// Input files
    #[clap(flatten)]
    pub input: InputConfig,

    /// Output method
    #[clap(flatten)]
    pub output: OutputConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// The flow log to tag, one record per line
    #[clap(long, default_value = "flow_logs.txt")]
    pub flow_log: String,

    /// The lookup table, a CSV file with the columns dstport,protocol,tag
    #[clap(long, default_value = "lookup_table.csv")]
    pub lookup_table: String,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output method
    #[clap(short, long, value_enum, default_value_t = ExportMethodType::File)]
    pub output: ExportMethodType,

    /// File path for output (used if method is File)
    #[clap(default_value = "output.txt")]
    pub export_path: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethodType {
    /// The output will be printed to the console
    Print,

    /// The output will be written to a file
    File,
}

/// Layout of the configuration file loaded with `--config-file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            input: InputConfig {
                flow_log: String::from("flow_logs.txt"),
                lookup_table: String::from("lookup_table.csv"),
            },
            output: OutputConfig {
                output: ExportMethodType::File,
                export_path: String::from("output.txt"),
            },
        }
    }
}

impl From<Cli> for ConfigFile {
    fn from(cli: Cli) -> Self {
        ConfigFile {
            input: cli.input,
            output: cli.output,
        }
    }
}
