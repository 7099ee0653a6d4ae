//! Agent construction from a type name and a configuration.

use super::config::AgentConfig;
use super::kind::AgentKind;
use super::model::Agent;
use crate::error::ApiError;
use crate::knowledge::KnowledgeStore;
use crate::logging::LogSink;

/// Create a bare agent of the named type (case-insensitive).
pub fn create_agent(
    agent_type: &str,
    name: &str,
    config: AgentConfig,
    log_sink: LogSink,
) -> Result<Agent, ApiError> {
    let kind: AgentKind = agent_type.parse()?;
    Ok(Agent::new(kind, name, config, log_sink))
}

/// Create an agent and attach its knowledge: the kind's built-in store first, then
/// every store listed under `knowledge_files`, in order.
pub fn load_agent(
    agent_type: &str,
    name: &str,
    config: AgentConfig,
    log_sink: LogSink,
) -> Result<Agent, ApiError> {
    let extra_files = config.knowledge_files()?;
    let mut agent = create_agent(agent_type, name, config, log_sink)?;

    let builtin = agent.kind().builtin_knowledge()?;
    agent.add_knowledge_base(builtin);
    for path in extra_files {
        agent.add_knowledge_base(KnowledgeStore::from_file(&path)?);
    }
    Ok(agent)
}
