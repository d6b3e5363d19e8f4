pub mod cli;
pub mod participants;
pub mod toml_config;

pub const DEFAULT_USERS_URL: &str = "https://gist.githubusercontent.com/benjambles/ea36b76bc5d8ff09a51def54f6ebd0cb/raw/ee1d0c16eaf373cccadd3d5604a1e0ea307b2ca0/users.json";
pub const DEFAULT_VENUES_URL: &str = "https://gist.githubusercontent.com/benjambles/ea36b76bc5d8ff09a51def54f6ebd0cb/raw/ee1d0c16eaf373cccadd3d5604a1e0ea307b2ca0/venues.json";
pub const DEFAULT_REARRANGE_KEY: &str = "name";

#[cfg(feature = "cli")]
pub use self::command_line::CliConfig;

#[cfg(feature = "cli")]
mod command_line {
    use super::{DEFAULT_REARRANGE_KEY, DEFAULT_USERS_URL, DEFAULT_VENUES_URL};
    use crate::domain::ports::{ConfigProvider, Entity};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_empty_string, validate_path, validate_source, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "where-to-go")]
    #[command(about = "Find the venues a whole team can go to")]
    pub struct CliConfig {
        /// Participants in delimited format (like: 'a b,c d,e')
        #[arg(short = 'n', long = "list")]
        pub list: Option<String>,

        #[arg(long, default_value = DEFAULT_USERS_URL)]
        pub users_url: String,

        #[arg(long, default_value = DEFAULT_VENUES_URL)]
        pub venues_url: String,

        /// Record field holding the user or venue name
        #[arg(long, default_value = DEFAULT_REARRANGE_KEY)]
        pub rearrange_key: String,

        /// Directory to also write report.json into
        #[arg(long = "output-dir")]
        pub output_path: Option<String>,

        /// TOML configuration file, used instead of the source flags
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Increase output verbosity")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(long, help = "Log process CPU and memory usage")]
        pub monitor: bool,
    }

    impl ConfigProvider for CliConfig {
        fn source(&self, entity: Entity) -> &str {
            match entity {
                Entity::Users => &self.users_url,
                Entity::Venues => &self.venues_url,
            }
        }

        fn rearrange_key(&self) -> &str {
            &self.rearrange_key
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_source("users_url", &self.users_url)?;
            validate_source("venues_url", &self.venues_url)?;
            validate_non_empty_string("rearrange_key", &self.rearrange_key)?;
            if let Some(path) = &self.output_path {
                validate_path("output_path", path)?;
            }
            Ok(())
        }
    }

}
