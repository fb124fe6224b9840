//! Plugin identity as registered with the host.

/// Static description of this plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub repo: &'static str,
}

pub const PLUGIN_METADATA: PluginMetadata = PluginMetadata {
    name: "更好的自动回复 (Better Auto-Reply)",
    author: "LumineStory",
    description: "主动或被动分析群聊消息，由LLM决定是否回复，并输出思考过程。",
    version: env!("CARGO_PKG_VERSION"),
    repo: "https://github.com/oyxning/astrtbot_plugin_better_auto_reply",
};
