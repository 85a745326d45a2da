use super::*;

/// An option's value after it has been parsed, before it is applied to a `MasterConfig`
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    Int(i64),
}

impl OptionValue {
    pub fn as_bool(&self) -> Result<bool, String> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(format!("expected a bool, got {}", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str, String> {
        match self {
            Self::Str(s) => Ok(s),
            other => Err(format!("expected a string, got {}", other)),
        }
    }

    pub fn as_int(&self) -> Result<i64, String> {
        match self {
            Self::Int(i) => Ok(*i),
            other => Err(format!("expected an int, got {}", other)),
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => write!(f, "{:?}", s),
            Self::Int(i) => write!(f, "{}", i),
        }
    }
}

/// What values an option accepts. `Choice` holds each allowed string with its help text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionKind {
    Bool,
    Str,
    Int,
    Choice(&'static [(&'static str, &'static str)]),
}

impl OptionKind {
    /// Parses a command line value. A bool option given with no value is true.
    pub fn parse_arg(self, value: Option<&str>) -> Result<OptionValue, String> {
        let value = match (self, value) {
            (Self::Bool, None) => return Ok(OptionValue::Bool(true)),
            (_, None) => return Err(format!("{} argument is required", self)),
            (_, Some(value)) => value,
        };
        let parsed = match self {
            Self::Bool => match value {
                "true" => Some(OptionValue::Bool(true)),
                "false" => Some(OptionValue::Bool(false)),
                _ => None,
            },
            Self::Int => value.parse().ok().map(OptionValue::Int),
            Self::Str | Self::Choice(_) => Some(OptionValue::Str(value.to_owned())),
        };
        match parsed {
            Some(parsed) => self.check(parsed),
            None => Err(format!("{} is not valid (expected: {})", value, self)),
        }
    }

    pub fn from_toml(self, value: toml::Value) -> Result<OptionValue, String> {
        let converted = match (self, value) {
            (Self::Bool, toml::Value::Boolean(b)) => OptionValue::Bool(b),
            (Self::Int, toml::Value::Integer(i)) => OptionValue::Int(i),
            (Self::Str, toml::Value::String(s)) | (Self::Choice(_), toml::Value::String(s)) => {
                OptionValue::Str(s)
            }
            (_, value) => return Err(format!("{} is not valid (expected: {})", value, self)),
        };
        self.check(converted)
    }

    fn check(self, value: OptionValue) -> Result<OptionValue, String> {
        if let (Self::Choice(choices), OptionValue::Str(s)) = (self, &value) {
            if !choices.iter().any(|(name, _)| name == s) {
                return Err(format!("{} is not {}", s, self));
            }
        }
        Ok(value)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Str => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Choice(choices) => write!(
                f,
                "one of {}",
                choices
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
        }
    }
}

/// Applies an option's value (already checked against its kind) to the config
pub type ApplyFn = fn(&mut MasterConfig, &OptionValue) -> Result<(), String>;

/// One named setting of the demo program
pub struct ConfigOption {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: OptionKind,
    pub default: OptionValue,
    pub apply: ApplyFn,
}

impl ConfigOption {
    /// The paragraph shown for this option by --help
    pub fn help_text(&self) -> String {
        let mut text = format!(
            "--{} ({}, default {})\n  {}",
            self.name.replace('_', "-"),
            self.kind,
            self.default,
            self.help
        );
        if let OptionKind::Choice(choices) = self.kind {
            for (name, help) in choices {
                text.push_str(&format!("\n    {}: {}", name, help));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMATS: OptionKind = OptionKind::Choice(&[("a", "first"), ("b", "second")]);

    #[test]
    fn bool_arg_without_value_is_true() {
        assert_eq!(OptionKind::Bool.parse_arg(None), Ok(OptionValue::Bool(true)));
        assert_eq!(
            OptionKind::Bool.parse_arg(Some("false")),
            Ok(OptionValue::Bool(false))
        );
        assert!(OptionKind::Bool.parse_arg(Some("maybe")).is_err());
    }

    #[test]
    fn non_bool_arg_requires_value() {
        assert!(OptionKind::Str.parse_arg(None).is_err());
        assert!(OptionKind::Int.parse_arg(None).is_err());
    }

    #[test]
    fn int_arg_must_be_a_number() {
        assert_eq!(OptionKind::Int.parse_arg(Some("12")), Ok(OptionValue::Int(12)));
        assert!(OptionKind::Int.parse_arg(Some("lots")).is_err());
    }

    #[test]
    fn choice_rejects_unlisted_value() {
        assert_eq!(FORMATS.parse_arg(Some("b")), Ok(OptionValue::Str("b".into())));
        assert_eq!(
            FORMATS.parse_arg(Some("c")),
            Err("c is not one of a, b".to_owned())
        );
    }

    #[test]
    fn toml_value_must_match_kind() {
        assert_eq!(
            OptionKind::Int.from_toml(toml::Value::Integer(3)),
            Ok(OptionValue::Int(3))
        );
        assert!(OptionKind::Int
            .from_toml(toml::Value::String("3".into()))
            .is_err());
        assert!(FORMATS.from_toml(toml::Value::String("z".into())).is_err());
    }

    #[test]
    fn accessors_reject_wrong_variant() {
        assert_eq!(OptionValue::Int(2).as_int(), Ok(2));
        assert!(OptionValue::Int(2).as_bool().is_err());
        assert!(OptionValue::Bool(true).as_str().is_err());
    }

    #[test]
    fn help_text_lists_kind_default_and_choices() {
        let option = ConfigOption {
            name: "some_format",
            help: "picks a format",
            kind: FORMATS,
            default: OptionValue::Str("a".into()),
            apply: |_, _| Ok(()),
        };
        assert_eq!(
            option.help_text(),
            "--some-format (one of a, b, default \"a\")\n  picks a format\n    a: first\n    b: second"
        );
    }
}
