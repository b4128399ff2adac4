//! Built-in registries for the bot's filterable features

use super::StaticRegistry;
use crate::types::ValueKind;

/// Alert hooks with a built-in registry
pub const ALERT_HOOKS: [&str; 11] = [
    "follow",
    "cheer",
    "tip",
    "sub",
    "resub",
    "subcommunitygift",
    "subgift",
    "raid",
    "custom",
    "rewardredeem",
    "promo",
];

/// Registry for an alert hook (e.g. "tip", "raid")
pub fn alert(hook: &str) -> Option<StaticRegistry> {
    let registry = StaticRegistry::new().with_attribute("name", ValueKind::String);
    let registry = match hook {
        "follow" => registry,
        "cheer" => registry
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("message", ValueKind::String),
        "tip" => registry
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("currency", ValueKind::String)
            .with_attribute("message", ValueKind::String)
            .with_attribute("service", ValueKind::Service),
        "sub" => registry.with_attribute("tier", ValueKind::Tier),
        "resub" => registry
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("tier", ValueKind::Tier)
            .with_attribute("message", ValueKind::String),
        "subcommunitygift" => registry
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("tier", ValueKind::Tier),
        "subgift" => registry
            .with_attribute("recipient", ValueKind::String)
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("tier", ValueKind::Tier),
        "raid" => registry.with_attribute("amount", ValueKind::Number),
        "custom" => registry
            .with_attribute("recipient", ValueKind::String)
            .with_attribute("message", ValueKind::Any),
        "rewardredeem" => registry
            .with_attribute("rewardId", ValueKind::Reward)
            .with_attribute("message", ValueKind::String),
        "promo" => registry.with_attribute("message", ValueKind::String),
        _ => return None,
    };
    Some(registry)
}

/// Registry for custom command filters
pub fn command() -> StaticRegistry {
    StaticRegistry::new()
        .with_attribute("sender", ValueKind::String)
        .with_attribute("command", ValueKind::String)
        .with_attribute("param", ValueKind::Any)
        .with_attribute("subscribers", ValueKind::Number)
        .with_attribute("viewers", ValueKind::Number)
}

/// Registry for keyword group filters
pub fn keyword() -> StaticRegistry {
    StaticRegistry::new()
        .with_attribute("sender", ValueKind::String)
        .with_attribute("message", ValueKind::String)
        .with_attribute("game", ValueKind::String)
        .with_attribute("viewers", ValueKind::Number)
}

/// Resolve a preset by name: "command", "keyword" or "alert.<hook>"
pub fn by_name(name: &str) -> Option<StaticRegistry> {
    match name {
        "command" => Some(command()),
        "keyword" => Some(keyword()),
        _ => name.strip_prefix("alert.").and_then(alert),
    }
}
