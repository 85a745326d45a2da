use super::*;

pub const DEFAULT_TOML_PATH: &str = "pushstream.toml";

/// Sets every key of a TOML table as an option. `path` is only used in messages.
pub fn load_toml(
    path: &str,
    contents: &str,
    builder: &mut ConfigBuilder,
) -> Result<(), Box<dyn Error>> {
    let parsed = contents
        .parse::<toml::Value>()
        .map_err(|e| format!("{}: {}", path, e))?;
    match parsed {
        toml::Value::Table(table) => {
            for (name, value) in table {
                let source = format!("{} in {}", name, path);
                builder.set(&name, source, |kind| kind.from_toml(value))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
