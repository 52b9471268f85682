//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags and the loaded
//! configuration, then passed as `&AppContext` to each handler.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::ProvisionConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::docker::DockerRuntime;
use crate::infra::store::JsonContainerStore;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective configuration.
    pub config: ProvisionConfig,
    /// Where the configuration was (or would be) loaded from.
    pub config_store: YamlConfigStore,
    /// Docker CLI adapter.
    pub runtime: DockerRuntime<TokioCommandRunner>,
    /// Durable container records.
    pub store: JsonContainerStore,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed or the
    /// home directory cannot be determined.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        let config_store = YamlConfigStore;
        let config = config_store.load()?;
        let store = match &config.store.path {
            Some(path) => JsonContainerStore::with_path(path.clone()),
            None => JsonContainerStore::new()?,
        };
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            runtime: DockerRuntime::from_config(&config.docker),
            config,
            config_store,
            store,
        })
    }
}
