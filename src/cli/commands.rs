use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "agenthub")]
#[command(author, version, about = "Dispatch tasks to simulated service agents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the one-click setup followed by the sample tasks (default)
    Demo,

    /// Fetch social updates and sync calendars
    Setup,

    /// Dispatch a single task
    Exec {
        /// Agent name, e.g. social_media
        provider: String,

        /// Task name, e.g. post_update
        operation: String,

        /// Named argument as KEY=VALUE (repeatable)
        #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE")]
        args: Vec<String>,

        /// Named arguments as a JSON object; --arg values override its keys
        #[arg(long)]
        json: Option<String>,
    },

    /// List agents and the tasks they accept
    List,
}

/// Merge `--json` and `--arg` inputs into a single argument object
///
/// Values that look like JSON objects or arrays are parsed as JSON; anything
/// else is taken as a plain string.
pub fn parse_arguments(pairs: &[String], json: Option<&str>) -> Result<Value> {
    let mut args = match json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--json is not valid JSON")? {
            Value::Object(map) => map,
            _ => bail!("--json must be a JSON object"),
        },
        None => Map::new(),
    };

    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .with_context(|| format!("argument '{}' is not in KEY=VALUE form", pair))?;
        if key.is_empty() {
            bail!("argument '{}' has an empty key", pair);
        }

        let trimmed = raw.trim_start();
        let value = if trimmed.starts_with('{') || trimmed.starts_with('[') {
            serde_json::from_str(raw)
                .with_context(|| format!("value for '{}' is not valid JSON", key))?
        } else {
            Value::String(raw.to_string())
        };
        args.insert(key.to_string(), value);
    }

    Ok(Value::Object(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_key_value_pairs() {
        let args = parse_arguments(
            &["platform=Twitter".to_string(), "content=a=b c".to_string()],
            None,
        )
        .unwrap();

        assert_eq!(args, json!({"platform": "Twitter", "content": "a=b c"}));
    }

    #[test]
    fn test_parse_object_value() {
        let args = parse_arguments(&[r#"details={"budget": "$1000"}"#.to_string()], None).unwrap();
        assert_eq!(args["details"]["budget"], "$1000");
    }

    #[test]
    fn test_pairs_override_json() {
        let args = parse_arguments(
            &["issue=Broken heater".to_string()],
            Some(r#"{"issue": "Sink Repair"}"#),
        )
        .unwrap();
        assert_eq!(args, json!({"issue": "Broken heater"}));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_arguments(&["noequals".to_string()], None).is_err());
        assert!(parse_arguments(&["=value".to_string()], None).is_err());
        assert!(parse_arguments(&[], Some("[1, 2]")).is_err());
        assert!(parse_arguments(&[], Some("{oops")).is_err());
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["agenthub"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_exec_subcommand_parses() {
        let cli = Cli::try_parse_from([
            "agenthub",
            "exec",
            "social_media",
            "post_update",
            "--arg",
            "platform=Twitter",
            "-a",
            "content=Hi",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Exec {
                provider,
                operation,
                args,
                json,
            }) => {
                assert_eq!(provider, "social_media");
                assert_eq!(operation, "post_update");
                assert_eq!(args.len(), 2);
                assert!(json.is_none());
            }
            _ => panic!("expected exec command"),
        }
    }
}
