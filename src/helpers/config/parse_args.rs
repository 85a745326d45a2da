use super::*;

fn transform_arg_name(mut arg_name: &str) -> String {
    for _ in 0..2 {
        if let Some(stripped) = arg_name.strip_prefix('-') {
            arg_name = stripped;
        }
    }
    arg_name.replace('-', "_")
}

fn try_set(
    builder: &mut ConfigBuilder,
    arg_name: &str,
    value: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let source = format!("{} command line argument", arg_name);
    builder.set(&transform_arg_name(arg_name), source, |kind| kind.parse_arg(value))
}

struct Arg {
    pub index: usize,
    pub name: String,
    pub values: Vec<String>,
}

/// Splits arguments into options and the values that follow them. `--name=value` is the same as
/// `--name value`.
fn parse_list(args: &[String]) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut parsed = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if i == 0 {
            if arg.starts_with('-') {
                return Err(format!(
                    "first command line argument {} starts with \"--\", {}",
                    arg, "it should have been the program name"
                )
                .into());
            }
        } else if arg.starts_with('-') {
            let (name, values) = match arg.find('=') {
                Some(eq) => (arg[..eq].to_owned(), vec![arg[eq + 1..].to_owned()]),
                None => (arg.to_owned(), Vec::new()),
            };
            parsed.push(Arg {
                index: i,
                name,
                values,
            });
        } else if let Some(last) = parsed.last_mut() {
            last.values.push(arg.to_owned());
        } else {
            return Err(format!(
                "first command line argument {} is a value not an --option-name",
                arg
            )
            .into());
        }
    }
    Ok(parsed)
}

pub fn parse_args(builder: &mut ConfigBuilder, args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let parsed = parse_list(&args)?;
    for arg in parsed {
        if arg.values.len() > 1 {
            return Err(format!(
                "command line argument {} has multiple values: {}",
                arg.index,
                arg.values.join(" ")
            )
            .into());
        } else if arg.values.len() == 1 {
            try_set(builder, &arg.name, Some(&arg.values[0]))?;
        } else {
            try_set(builder, &arg.name, None)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn transforms_dashed_names() {
        assert_eq!(transform_arg_name("--requests-file"), "requests_file");
        assert_eq!(transform_arg_name("-help"), "help");
    }

    #[test]
    fn splits_options_and_values() {
        let parsed = parse_list(&args(&["prog", "--a", "1", "--b", "--c=x"])).unwrap();
        let summary: Vec<(usize, &str, Vec<String>)> = parsed
            .iter()
            .map(|arg| (arg.index, arg.name.as_str(), arg.values.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "--a", vec!["1".to_owned()]),
                (3, "--b", vec![]),
                (4, "--c", vec!["x".to_owned()]),
            ]
        );
    }

    #[test]
    fn program_name_must_not_be_an_option() {
        assert!(parse_list(&args(&["--help"])).is_err());
    }

    #[test]
    fn value_before_any_option_errors() {
        assert!(parse_list(&args(&["prog", "stray"])).is_err());
    }

    #[test]
    fn unknown_option_errors() {
        let mut builder = ConfigBuilder::new(config_options());
        assert!(parse_args(&mut builder, args(&["prog", "--frobnicate"])).is_err());
    }

    #[test]
    fn multiple_values_error() {
        let mut builder = ConfigBuilder::new(config_options());
        let result = parse_args(&mut builder, args(&["prog", "--subscriptions", "1", "2"]));
        assert!(result.is_err());
    }

    #[test]
    fn int_option_rejects_non_numbers() {
        let mut builder = ConfigBuilder::new(config_options());
        let result = parse_args(&mut builder, args(&["prog", "--subscriptions", "lots"]));
        assert!(result.is_err());
    }

    #[test]
    fn string_option_requires_value() {
        let mut builder = ConfigBuilder::new(config_options());
        assert!(parse_args(&mut builder, args(&["prog", "--requests-file"])).is_err());
    }
}
