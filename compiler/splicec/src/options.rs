//! Command-line options shared by the subcommands.

use splice_scan::ScanConfig;

/// Environment variable overriding the default nesting budget.
pub const MAX_DEPTH_ENV: &str = "SPLICE_MAX_DEPTH";

/// Options after the subcommand name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Positional arguments, in order.
    pub inputs: Vec<String>,
    pub max_depth: Option<u32>,
    pub indent: Option<usize>,
    pub header: Option<String>,
    /// Print the line map after normalized text.
    pub line_map: bool,
}

impl CliOptions {
    /// Scanner configuration for these options.
    ///
    /// `--max-depth` wins over `env_depth` (the value of
    /// [`MAX_DEPTH_ENV`]), which wins over the default.
    pub fn scan_config(&self, env_depth: Option<&str>) -> Result<ScanConfig, String> {
        let mut config = ScanConfig::default();
        if let Some(depth) = env_depth {
            let depth = parse_number(MAX_DEPTH_ENV, depth)?;
            config = config.with_max_depth(depth);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if let Some(indent) = self.indent {
            config = config.with_indent(indent);
        }
        Ok(config)
    }

    /// Like [`scan_config`](Self::scan_config), reading the environment.
    pub fn scan_config_from_env(&self) -> Result<ScanConfig, String> {
        let env_depth = std::env::var(MAX_DEPTH_ENV).ok();
        self.scan_config(env_depth.as_deref())
    }
}

/// Parse the arguments that follow a subcommand.
///
/// Flags may appear anywhere; everything not starting with `--` is an
/// input.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_number("--max-depth", depth)?);
        } else if let Some(indent) = arg.strip_prefix("--indent=") {
            options.indent = Some(parse_number("--indent", indent)?);
        } else if let Some(header) = arg.strip_prefix("--header=") {
            options.header = Some(header.to_string());
        } else if arg == "--line-map" {
            options.line_map = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.inputs.push(arg.clone());
        }
    }
    Ok(options)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{name} expects a non-negative integer, got '{value}'"))
}
