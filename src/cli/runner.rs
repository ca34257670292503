//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::emit::{Emitter, JsonLinesEmitter};
use crate::error::{Error, Result, ResultExt};
use crate::extractor::ExtractStats;
use crate::registry::{Extractor, ExtractorRegistry};
use crate::types::JsonValue;
use serde_json::json;
use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    registry: ExtractorRegistry,
}

impl Runner {
    /// Create a runner over the built-in extractors
    pub fn new(cli: Cli) -> Self {
        Self::with_registry(cli, ExtractorRegistry::with_builtin())
    }

    /// Create a runner over a caller-supplied registry
    pub fn with_registry(cli: Cli, registry: ExtractorRegistry) -> Self {
        Self { cli, registry }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Extract { output, timeout } => {
                self.extract(output.as_deref(), timeout.map(Duration::from_secs))
                    .await
            }
            Commands::Check => self.check().await,
            Commands::Validate => self.validate(),
            Commands::Info => self.info(),
            Commands::List => self.list(),
        }
    }

    /// Load the recipe
    fn load_config(&self) -> Result<JsonValue> {
        // Inline config takes precedence
        if let Some(json_str) = &self.cli.config_json {
            return serde_json::from_str(json_str)
                .map_err(|e| Error::config(format!("Invalid config JSON: {e}")));
        }

        // YAML is a superset of JSON, so either file format parses here
        if let Some(path) = &self.cli.config {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::config(format!(
                    "Failed to read config file {}: {e}",
                    path.display()
                ))
            })?;
            return serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid config file: {e}")));
        }

        Err(Error::config(
            "No recipe given (use -C <file> or --config-json)",
        ))
    }

    fn build_extractor(&self) -> Result<Box<dyn Extractor>> {
        self.registry.build(&self.cli.extractor)
    }

    /// Run an extraction
    async fn extract(&self, output: Option<&Path>, timeout: Option<Duration>) -> Result<()> {
        let config = self.load_config()?;
        let mut extractor = self.build_extractor()?;
        extractor.init(&config).await?;

        let stats = match output {
            Some(path) => {
                let mut emitter = JsonLinesEmitter::create(path)
                    .with_context(|| format!("failed to open output {}", path.display()))?;
                let stats = run_extract(extractor.as_ref(), &mut emitter, timeout).await?;
                emitter.into_inner()?;
                stats
            }
            None => {
                let mut emitter = JsonLinesEmitter::new(BufWriter::new(io::stdout()));
                let stats = run_extract(extractor.as_ref(), &mut emitter, timeout).await?;
                emitter.into_inner()?;
                stats
            }
        };

        info!(
            "Run complete: {} workbooks listed, {} dashboards, {} charts",
            stats.workbooks_listed, stats.dashboards_emitted, stats.charts_emitted
        );
        Ok(())
    }

    /// Validate the recipe and sign in
    async fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        let mut extractor = self.build_extractor()?;

        match extractor.init(&config).await {
            Ok(()) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Signed in successfully"
                    }
                }));
                Ok(())
            }
            Err(e) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "message": format!("Connection failed: {e}")
                    }
                }));
                Err(e)
            }
        }
    }

    /// Validate the recipe without touching the network
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        let extractor = self.build_extractor()?;
        extractor.validate(&config)?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!("Recipe for '{}' is valid", self.cli.extractor)
            }
        }));
        Ok(())
    }

    /// Describe the selected extractor
    fn info(&self) -> Result<()> {
        let extractor = self.build_extractor()?;
        let info = extractor.info();

        self.output_message(&json!({
            "type": "INFO",
            "info": info
        }));
        Ok(())
    }

    /// List registered extractors
    fn list(&self) -> Result<()> {
        let extractors: Vec<JsonValue> = self
            .registry
            .names()
            .into_iter()
            .filter_map(|name| {
                let extractor = self.registry.build(name).ok()?;
                let info = extractor.info();
                Some(json!({
                    "name": name,
                    "description": info.description,
                    "tags": info.tags
                }))
            })
            .collect();

        self.output_message(&json!({
            "type": "EXTRACTORS",
            "extractors": extractors
        }));
        Ok(())
    }

    fn output_message(&self, msg: &JsonValue) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

async fn run_extract(
    extractor: &dyn Extractor,
    emitter: &mut dyn Emitter,
    timeout: Option<Duration>,
) -> Result<ExtractStats> {
    match timeout {
        Some(deadline) => extractor.extract_with_deadline(emitter, deadline).await,
        None => extractor.extract(emitter).await,
    }
}
