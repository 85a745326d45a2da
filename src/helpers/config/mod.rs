use super::*;

mod build_config;
mod config_builder;
mod config_option;
mod config_options;
mod load_toml;
mod master_config;
mod parse_args;

pub use build_config::{build_config, build_config_with};
pub use config_option::{ConfigOption, OptionKind, OptionValue};
pub use master_config::{MasterConfig, RequestLogFormat};

use config_builder::*;
use config_options::*;
use load_toml::*;
use parse_args::*;
