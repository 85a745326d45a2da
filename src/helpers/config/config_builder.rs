use super::*;

/// Collects option values from the config file and the command line, then applies them. A value
/// set later replaces one set earlier, so the command line overrides the file.
pub struct ConfigBuilder {
    options: Vec<ConfigOption>,
    /// Values given so far, with a description of where each came from
    values: HashMap<&'static str, (OptionValue, String)>,
}

impl ConfigBuilder {
    pub fn new(options: Vec<ConfigOption>) -> Self {
        let mut names = HashSet::new();
        for option in &options {
            if !names.insert(option.name) {
                panic!("duplicate configuration option {}", option.name);
            }
        }
        Self {
            options,
            values: HashMap::new(),
        }
    }

    /// Sets the named option. `parse` turns the raw input into a value of the option's kind.
    pub fn set<F>(&mut self, name: &str, source: String, parse: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(OptionKind) -> Result<OptionValue, String>,
    {
        let option = self
            .options
            .iter()
            .find(|option| option.name == name)
            .ok_or_else(|| format!("{} is not a valid option", source))?;
        let value = parse(option.kind).map_err(|e| format!("{}: {}", source, e))?;
        trace!("{} = {}", source, value);
        self.values.insert(option.name, (value, source));
        Ok(())
    }

    pub fn help_text(&self) -> String {
        self.options
            .iter()
            .map(ConfigOption::help_text)
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for option in &self.options {
            let (value, source) = match self.values.get(option.name) {
                Some((value, source)) => (value, source.as_str()),
                None => (&option.default, "default"),
            };
            (option.apply)(target, value)
                .map_err(|e| format!("{} ({} from {}) {}", option.name, value, source, e))?;
        }
        Ok(())
    }
}
