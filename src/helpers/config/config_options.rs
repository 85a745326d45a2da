use super::*;

const REQUEST_LOG_FORMATS: &[(&str, &str)] = &[
    ("summary", "method, host and path on one line"),
    ("json", "the full request as JSON"),
];

/// Every option pushstream understands. They are applied in this order (NOT in the order the user
/// gives them), and each one is always applied, falling back to its default.
pub fn config_options() -> Vec<ConfigOption> {
    vec![
        ConfigOption {
            name: "help",
            help: "show this help message and exit",
            kind: OptionKind::Bool,
            default: OptionValue::Bool(false),
            apply: |conf, value| {
                conf.happy_exit = value.as_bool()?;
                Ok(())
            },
        },
        ConfigOption {
            name: "requests_file",
            help: "JSON file containing an array of requests to stream, or empty for the built-in mocks",
            kind: OptionKind::Str,
            default: OptionValue::Str(String::new()),
            apply: |conf, value| {
                let path = value.as_str()?;
                conf.requests_file = if path.is_empty() {
                    None
                } else {
                    Some(path.to_owned())
                };
                Ok(())
            },
        },
        ConfigOption {
            name: "subscriptions",
            help: "how many times to subscribe to the request stream",
            kind: OptionKind::Int,
            default: OptionValue::Int(1),
            apply: |conf, value| {
                let count = value.as_int()?;
                if count < 1 {
                    Err("should be at least 1".to_owned())
                } else if count > u32::MAX as i64 {
                    Err("is too large".to_owned())
                } else {
                    conf.subscriptions = count as u32;
                    Ok(())
                }
            },
        },
        ConfigOption {
            name: "unsubscribe_immediately",
            help: "unsubscribe from each subscription as soon as subscribe returns",
            kind: OptionKind::Bool,
            default: OptionValue::Bool(true),
            apply: |conf, value| {
                conf.unsubscribe_immediately = value.as_bool()?;
                Ok(())
            },
        },
        ConfigOption {
            name: "request_log",
            help: "how each received request is logged",
            kind: OptionKind::Choice(REQUEST_LOG_FORMATS),
            default: OptionValue::Str("summary".to_owned()),
            apply: |conf, value| {
                conf.request_log = match value.as_str()? {
                    "json" => RequestLogFormat::Json,
                    _ => RequestLogFormat::Summary,
                };
                Ok(())
            },
        },
    ]
}
