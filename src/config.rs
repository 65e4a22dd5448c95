use crate::parser::GraphFormat;
use crate::{Error, Result};

/// Usage line printed on argument errors
pub const USAGE: &str = "usage: shortest_paths <basic|db1b> <file> <origin> [destination] [--json]";

/// Configuration for the command-line front end
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub format: GraphFormat,
    pub path: String,
    pub origin: String,
    pub destination: Option<String>,
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: GraphFormat::Basic,
            path: String::new(),
            origin: String::new(),
            destination: None,
            json: false,
        }
    }
}

impl CliConfig {
    /// Builds the configuration from the arguments following the program name
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args.into_iter().map(Into::<String>::into) {
            if arg == "--json" {
                config.json = true;
            } else if arg.starts_with("--") {
                return Err(Error::Usage(format!("unknown option {}\n{}", arg, USAGE)));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() < 3 || positional.len() > 4 {
            return Err(Error::Usage(USAGE.to_string()));
        }

        let mut positional = positional.into_iter();
        config.format = positional.next().unwrap_or_default().parse()?;
        config.path = positional.next().unwrap_or_default();
        config.origin = positional.next().unwrap_or_default();
        config.destination = positional.next();

        Ok(config)
    }
}
