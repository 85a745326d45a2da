use super::*;

/// Get the current configuration from pushstream.toml (if it exists) and the command line.
/// Command line arguments override the file.
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), std::env::args().collect())
}

pub fn build_config_with(fs: Filesystem, args: Vec<String>) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_options());
    if let Some(contents) = fs.read_optional(DEFAULT_TOML_PATH)? {
        debug!("loading configuration from {}", DEFAULT_TOML_PATH);
        load_toml(DEFAULT_TOML_PATH, &contents, &mut builder)?;
    }
    parse_args(&mut builder, args)?;
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    if conf.happy_exit {
        println!("{}", builder.help_text());
    }
    Ok(conf)
}
