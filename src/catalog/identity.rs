use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const COMMON_SUFFIX: &str = "-common";
const STARTER_SUFFIX: &str = "-starter";
const QUARKUS_SUFFIX: &str = "-quarkus";

/// Family name of an artifact: its first two dash-separated segments.
///
/// `forage-jdbc-postgresql` becomes `forage-jdbc`; ids with fewer than two
/// segments are returned unchanged.
pub fn base_artifact_name(artifact_id: &str) -> String {
    let mut segments = artifact_id.split('-');
    match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => format!("{first}-{second}"),
        _ => artifact_id.to_string(),
    }
}

/// Shared `-common` sibling of an artifact's family.
pub fn common_artifact_name(artifact_id: &str) -> String {
    format!("{}{COMMON_SUFFIX}", base_artifact_name(artifact_id))
}

/// Strip a trailing `-starter` or `-quarkus` runtime suffix.
pub fn strip_runtime_suffix(artifact_id: &str) -> &str {
    artifact_id
        .strip_suffix(STARTER_SUFFIX)
        .or_else(|| artifact_id.strip_suffix(QUARKUS_SUFFIX))
        .unwrap_or(artifact_id)
}

pub fn spring_boot_artifact_name(base: &str) -> String {
    format!("{base}{STARTER_SUFFIX}")
}

pub fn quarkus_artifact_name(base: &str) -> String {
    format!("{base}{QUARKUS_SUFFIX}")
}

/// Maven coordinate rendered as `groupId:artifactId:version`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Runtime a factory or runtime bundle targets.
///
/// Matching is case-insensitive; `Other` keeps unrecognized values so they
/// survive a round trip and stay out of every dependency bucket.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum RuntimeType {
    Main,
    SpringBoot,
    Quarkus,
    Other(String),
}

impl RuntimeType {
    pub fn as_str(&self) -> &str {
        match self {
            RuntimeType::Main => "main",
            RuntimeType::SpringBoot => "spring-boot",
            RuntimeType::Quarkus => "quarkus",
            RuntimeType::Other(value) => value.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "main" => RuntimeType::Main,
            "spring-boot" => RuntimeType::SpringBoot,
            "quarkus" => RuntimeType::Quarkus,
            _ => RuntimeType::Other(value.to_string()),
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuntimeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuntimeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Input widget family derived from a configuration property's `type`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    BeanName,
    Boolean,
    Number,
    Password,
    Text,
}

impl PropertyKind {
    pub fn from_type(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bean-name" => PropertyKind::BeanName,
            "boolean" => PropertyKind::Boolean,
            "integer" | "int" | "number" => PropertyKind::Number,
            "password" => PropertyKind::Password,
            _ => PropertyKind::Text,
        }
    }
}
