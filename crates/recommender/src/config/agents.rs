//! Agent configuration document.
//!
//! The document is a YAML mapping of agent name to [`AgentDefinition`] plus a
//! global `config` block. It is read once at startup into an immutable
//! [`AgentRegistry`]; a missing or broken document degrades to the built-in
//! `hackathon_recommender` definition instead of failing startup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the agent used when a request does not pick one.
pub const DEFAULT_AGENT: &str = "hackathon_recommender";
/// Agent document location when `AGENTS_CONFIG_PATH` is unset.
pub const DEFAULT_AGENTS_PATH: &str = "/agents.yaml";

/// One recommendation persona.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    pub model: String,
    pub instructions: String,
    /// Gateway tools the agent may call. Declared only; nothing invokes them.
    #[serde(rename = "mcp_tools")]
    pub tool_names: BTreeSet<String>,
    pub parameters: AgentParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentParameters {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for AgentParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

/// Global `config` block. Parsed and kept, never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_agents: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    pub logging: LoggingSettings,
    pub rate_limits: RateLimitSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Keys this version does not know about, kept for round-tripping.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_hour: Option<u32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// On-disk shape of the agent document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsDocument {
    pub agents: BTreeMap<String, AgentDefinition>,
    pub config: GlobalSettings,
}

/// Where the registry contents came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    BuiltIn,
}

/// Read-only agent mapping shared by every request handler.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: BTreeMap<String, AgentDefinition>,
    settings: GlobalSettings,
    source: RegistrySource,
}

impl AgentRegistry {
    /// Read and parse the document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(path, &data)
    }

    /// Parse a document already in memory. `path` is only used for errors.
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self, ConfigError> {
        let document: AgentsDocument =
            serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if document.agents.is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            agents: document.agents,
            settings: document.config,
            source: RegistrySource::File(path.to_path_buf()),
        })
    }

    /// Load `path`, falling back to [`AgentRegistry::builtin`] on any failure.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(registry) => {
                tracing::info!(
                    path = %path.display(),
                    agents = registry.len(),
                    "loaded agent configuration"
                );
                registry
            }
            Err(error) => {
                tracing::error!("failed to load agent config: {error}");
                tracing::warn!("using built-in '{DEFAULT_AGENT}' agent definition");
                Self::builtin()
            }
        }
    }

    /// Registry holding only the built-in recommender.
    pub fn builtin() -> Self {
        let mut agents = BTreeMap::new();
        agents.insert(DEFAULT_AGENT.to_string(), builtin_recommender());
        Self {
            agents,
            settings: GlobalSettings::default(),
            source: RegistrySource::BuiltIn,
        }
    }

    pub fn get(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// Configured agent names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn source(&self) -> &RegistrySource {
        &self.source
    }
}

fn builtin_recommender() -> AgentDefinition {
    AgentDefinition {
        name: "Hackathon Project Recommender".to_string(),
        description: "Analyzes GitHub profiles to recommend personalized hackathon projects"
            .to_string(),
        ..AgentDefinition::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = include_str!("../../../../config/agents.yaml");

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn sample_document_parses_every_field() {
        let registry =
            AgentRegistry::from_yaml(Path::new("agents.yaml"), SAMPLE).expect("parse sample");
        assert_eq!(
            registry.names(),
            vec!["hackathon_recommender", "profile_summarizer"]
        );

        let agent = registry.get(DEFAULT_AGENT).expect("default agent");
        assert_eq!(agent.name, "Hackathon Project Recommender");
        assert_eq!(agent.model, "gpt-4o-mini");
        assert!(agent.instructions.contains("hackathon mentor"));
        assert!(agent.tool_names.contains("github_official"));
        assert_eq!(agent.tool_names.len(), 3);
        assert_eq!(agent.parameters.temperature, 0.7);
        assert_eq!(agent.parameters.max_tokens, 2000);

        let settings = registry.settings();
        assert_eq!(settings.default_model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(settings.max_concurrent_agents, Some(5));
        assert_eq!(settings.timeout_seconds, Some(300));
        assert_eq!(settings.logging.level.as_deref(), Some("info"));
        assert_eq!(settings.rate_limits.requests_per_minute, Some(60));
    }

    #[test]
    fn load_reads_file_and_records_source() {
        let file = write_temp(SAMPLE);
        let registry = AgentRegistry::load(file.path()).expect("load");
        assert_eq!(
            registry.source(),
            &RegistrySource::File(file.path().to_path_buf())
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn partial_definition_uses_defaults() {
        let yaml = "agents:\n  minimal:\n    name: Minimal\n";
        let registry = AgentRegistry::from_yaml(Path::new("inline"), yaml).expect("parse");
        let agent = registry.get("minimal").expect("agent");
        assert_eq!(agent.name, "Minimal");
        assert!(agent.description.is_empty());
        assert!(agent.tool_names.is_empty());
        assert_eq!(agent.parameters, AgentParameters::default());
        assert_eq!(registry.settings(), &GlobalSettings::default());
    }

    #[test]
    fn unknown_logging_keys_are_kept() {
        let yaml = "agents:\n  a:\n    name: A\nconfig:\n  logging:\n    level: debug\n    sink: stdout\n";
        let registry = AgentRegistry::from_yaml(Path::new("inline"), yaml).expect("parse");
        let logging = &registry.settings().logging;
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(
            logging.extra.get("sink"),
            Some(&serde_yaml::Value::String("stdout".to_string()))
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = AgentRegistry::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = AgentRegistry::from_yaml(Path::new("bad"), "agents: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn document_without_agents_is_rejected() {
        let err = AgentRegistry::from_yaml(Path::new("empty"), "config:\n  timeout_seconds: 5\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn load_or_builtin_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = AgentRegistry::load_or_builtin(&dir.path().join("agents.yaml"));
        assert_eq!(registry.source(), &RegistrySource::BuiltIn);
        assert_eq!(registry.names(), vec![DEFAULT_AGENT]);
        assert_eq!(
            registry.get(DEFAULT_AGENT).map(|a| a.name.as_str()),
            Some("Hackathon Project Recommender")
        );
    }

    #[test]
    fn load_or_builtin_falls_back_on_garbage() {
        let file = write_temp("::: not yaml :::\n\t- [");
        let registry = AgentRegistry::load_or_builtin(file.path());
        assert_eq!(registry.source(), &RegistrySource::BuiltIn);
        assert!(!registry.is_empty());
    }
}
