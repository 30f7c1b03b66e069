//! Common identifier, timestamp, and request-context types.

/// Stable user identifier carried in token claims and storage rows.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Client fingerprint binding a request to a session lineage.
///
/// Built by the transport layer from request metadata. The raw user-agent
/// string never travels past that boundary; only its SHA-256 hex digest
/// does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFingerprint {
    /// Remote address as reported by the transport layer.
    pub origin: Option<String>,
    /// SHA-256 hex digest of the raw user-agent string.
    pub agent_digest: Option<String>,
}
