pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_path, Validate};
use crate::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shoplist")]
#[command(about = "An interactive shopping-list manager")]
pub struct CliConfig {
    /// Directory that list files are saved to and loaded from
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// List file to load before the menu starts
    #[arg(long)]
    pub file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn startup_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }
        Ok(())
    }
}
