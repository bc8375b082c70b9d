pub mod agents;
pub mod settings;

pub use agents::{
    AgentDefinition, AgentParameters, AgentRegistry, AgentsDocument, GlobalSettings,
    RegistrySource, DEFAULT_AGENT, DEFAULT_AGENTS_PATH,
};
pub use settings::{GeneratorKind, ServiceSettings};
