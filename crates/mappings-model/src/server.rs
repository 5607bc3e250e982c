// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const SERVER_ID_MAX_LEN: usize = 64;

pub fn parse_server_id(input: &str) -> Result<ServerId, ValidationError> {
    ServerId::parse(input)
}

/// Folder name and primary key of a server entry. Lowercase alphanumeric only,
/// which keeps ids usable verbatim in asset file names and URLs. Deserialization
/// goes through [`ServerId::parse`], so a metadata file cannot smuggle in an id
/// that violates the rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub struct ServerId(String);

impl ServerId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("server id must not be empty".to_string()));
        }
        if input != input.trim() {
            return Err(ValidationError(
                "server id must not carry leading/trailing whitespace".to_string(),
            ));
        }
        if input.len() > SERVER_ID_MAX_LEN {
            return Err(ValidationError(format!(
                "server id exceeds max length {SERVER_ID_MAX_LEN}"
            )));
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError(
                "server id must match [a-z0-9]+".to_string(),
            ));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ServerId {
    type Error = ValidationError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::parse(&input)
    }
}

impl From<ServerId> for String {
    fn from(id: ServerId) -> Self {
        id.0
    }
}

impl Display for ServerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `#RRGGBB` with uppercase hex digits, as the metadata schema requires.
/// Deserialization goes through [`Color::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub struct Color(String);

impl Color {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let valid = input.len() == 7
            && input.starts_with('#')
            && input[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c));
        if !valid {
            return Err(ValidationError(format!(
                "color must match #RRGGBB with uppercase hex digits, got {input:?}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::parse(&input)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
}

/// One entry of the directory, as read from `<id>/metadata.json`.
///
/// Unknown fields are tolerated: upstream metadata gains fields faster than the
/// tooling ships. `inactive` and `enriched` are computed at scan time and never
/// expected in the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub id: ServerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_minecraft_version: Option<String>,
    #[serde(default)]
    pub minecraft_versions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub enriched: bool,
}

impl ServerRecord {
    /// Field-level checks the JSON schema cannot express (schema validation
    /// runs separately against the raw document).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError(format!(
                "{}: name must not be blank",
                self.id
            )));
        }
        if let Some(primary) = &self.primary_address {
            if !self.addresses.iter().any(|a| a == primary) {
                return Err(ValidationError(format!(
                    "{}: primaryAddress {primary:?} is not listed in addresses",
                    self.id
                )));
            }
        }
        if let Some(primary) = &self.primary_minecraft_version {
            if !self.minecraft_versions.iter().any(|v| v == primary) {
                return Err(ValidationError(format!(
                    "{}: primaryMinecraftVersion {primary:?} is not listed in minecraftVersions",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Expanded version list with wildcard aliases resolved.
    pub fn expanded_versions(&self) -> Result<Vec<String>, ValidationError> {
        crate::versions::expand_versions(&self.minecraft_versions)
    }
}
