pub mod cli;
pub mod toml_config;

use crate::domain::ports::InvocationProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT: &str = "./projects";
pub const DEFAULT_MODEL: &str = "MDX23C";

#[derive(Debug, Clone, Parser)]
#[command(name = "riftkit", version)]
#[command(about = "Process MP3 into practice-ready REAPER project")]
pub struct CliConfig {
    /// Input MP3 file
    pub mp3_file: String,

    #[arg(long, default_value = DEFAULT_OUTPUT, help = "Output directory")]
    pub output: String,

    #[arg(long, default_value = DEFAULT_MODEL, help = "UVR model to use")]
    pub model: String,

    #[arg(long, help = "Skip lyrics transcription")]
    pub no_lyrics: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "RIFTKIT_CONFIG", help = "TOML file with logging settings")]
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Settings from `--config`, or defaults when no file was given.
    pub fn load_toml_config(&self) -> Result<TomlConfig> {
        let Some(path) = &self.config else {
            return Ok(TomlConfig::default());
        };
        let config = TomlConfig::from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl InvocationProvider for CliConfig {
    fn mp3_file(&self) -> &str {
        &self.mp3_file
    }

    fn output(&self) -> &str {
        &self.output
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn no_lyrics(&self) -> bool {
        self.no_lyrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_defaults_when_flags_omitted() {
        let config = CliConfig::try_parse_from(["riftkit", "song.mp3"]).unwrap();
        assert_eq!(config.mp3_file, "song.mp3");
        assert_eq!(config.output, "./projects");
        assert_eq!(config.model, "MDX23C");
        assert!(!config.no_lyrics);
        assert!(!config.verbose);
    }

    #[test]
    fn test_declared_defaults() {
        let command = CliConfig::command();
        let default_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .map(|arg| {
                    arg.get_default_values()
                        .iter()
                        .map(|value| value.to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                })
                .unwrap()
        };
        assert_eq!(default_of("output"), vec!["./projects"]);
        assert_eq!(default_of("model"), vec!["MDX23C"]);
    }

    #[test]
    fn test_all_flags_parse() {
        let config = CliConfig::try_parse_from([
            "riftkit",
            "--output",
            "/tmp/out",
            "--model",
            "UVR-MDX-NET",
            "--no-lyrics",
            "song.mp3",
        ])
        .unwrap();
        assert_eq!(config.output, "/tmp/out");
        assert_eq!(config.model, "UVR-MDX-NET");
        assert!(config.no_lyrics);
        assert_eq!(config.invocation().mp3_file, "song.mp3");
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        let err = CliConfig::try_parse_from(["riftkit"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = CliConfig::try_parse_from(["riftkit", "song.mp3", "--stems", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_blank_values_are_accepted_as_given() {
        let config =
            CliConfig::try_parse_from(["riftkit", "", "--output", "", "--model", " "]).unwrap();
        let invocation = config.invocation();
        assert_eq!(invocation.mp3_file, "");
        assert_eq!(invocation.output, "");
        assert_eq!(invocation.model, " ");
    }

    #[test]
    fn test_no_config_file_gives_defaults() {
        let config = CliConfig::try_parse_from(["riftkit", "song.mp3"]).unwrap();
        let config = CliConfig { config: None, ..config };
        let toml = config.load_toml_config().unwrap();
        assert!(toml.logging.level.is_none());
    }

    #[test]
    fn test_command_is_well_formed() {
        CliConfig::command().debug_assert();
    }
}
