//! Container, image and store-record types.
//!
//! Pure types plus the `docker inspect` decoder. No I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::ProvisionError;

/// Script baked into every runtime image; receives the clone URL.
pub const DEPLOY_SCRIPT: &str = "/var/lib/tsuru/deploy";

/// A provisioning request for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
    /// Runtime type, which names the base image (e.g. `python`).
    pub app_type: String,
    /// Requested unit count.
    pub units: u32,
}

impl App {
    #[must_use]
    pub fn new(name: impl Into<String>, app_type: impl Into<String>, units: u32) -> Self {
        Self {
            name: name.into(),
            app_type: app_type.into(),
            units,
        }
    }
}

/// One provisioned compute unit.
///
/// An empty `id` means runtime creation failed; such a container must not be
/// stopped, removed or inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub id: String,
}

impl Container {
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        !self.id.is_empty()
    }

    /// Runtime id, refusing containers whose creation failed.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::NotCreated`] if `id` is empty.
    pub fn runtime_id(&self) -> Result<&str, ProvisionError> {
        if self.is_created() {
            Ok(&self.id)
        } else {
            Err(ProvisionError::NotCreated {
                name: self.name.clone(),
            })
        }
    }
}

/// Result of [`create`](crate::application::services::container::create).
///
/// The failed variant still hands back a `Container` whose `id` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Container),
    Failed { container: Container, reason: String },
}

impl CreateOutcome {
    #[must_use]
    pub fn container(&self) -> &Container {
        match self {
            Self::Created(c) | Self::Failed { container: c, .. } => c,
        }
    }

    #[must_use]
    pub fn into_container(self) -> Container {
        match self {
            Self::Created(c) | Self::Failed { container: c, .. } => c,
        }
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// A committed filesystem snapshot tagged `<namespace>/<name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub name: String,
    pub id: String,
}

impl Image {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: String::new(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ProvisionError::NotCommitted`] if `id` is empty.
    pub fn runtime_id(&self) -> Result<&str, ProvisionError> {
        if self.id.is_empty() {
            Err(ProvisionError::NotCommitted {
                name: self.name.clone(),
            })
        } else {
            Ok(&self.id)
        }
    }
}

/// Durable record of a created container, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: String,
    #[serde(default)]
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl ContainerRecord {
    #[must_use]
    pub fn container(&self) -> Container {
        Container::new(&self.name, &self.id)
    }
}

/// Single argument passed to `docker run` after the image reference.
#[must_use]
pub fn deploy_command(clone_url: &str) -> String {
    format!("{DEPLOY_SCRIPT} {clone_url}")
}

// ── docker inspect ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct InspectedContainer {
    #[serde(rename = "NetworkSettings")]
    network_settings: NetworkSettings,
}

#[derive(Debug, Deserialize)]
struct NetworkSettings {
    #[serde(rename = "IpAddress", alias = "IPAddress")]
    ip_address: String,
}

/// `docker inspect` prints an array; older runtimes printed a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InspectOutput {
    One(InspectedContainer),
    Many(Vec<InspectedContainer>),
}

/// Extract `NetworkSettings.IpAddress` from `docker inspect` output.
///
/// # Errors
///
/// Returns [`ProvisionError::InspectParse`] if the payload is not JSON, lacks
/// the field, or is an empty array.
pub fn parse_inspect_ip(raw: &[u8]) -> Result<String, ProvisionError> {
    let parsed: InspectOutput =
        serde_json::from_slice(raw).map_err(|e| ProvisionError::InspectParse(e.to_string()))?;
    let container = match parsed {
        InspectOutput::One(c) => c,
        InspectOutput::Many(list) => list
            .into_iter()
            .next()
            .ok_or_else(|| ProvisionError::InspectParse("empty inspect array".to_string()))?,
    };
    Ok(container.network_settings.ip_address)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
