use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the domain model does not know.
    ///
    /// Only possible if the row was written outside the service. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Unknown {kind} value '{value}' stored in database")]
    UnknownEnumValue {
        /// Name of the enum, e.g. "role"
        kind: &'static str,
        /// The stored string that failed to parse
        value: String,
    },

    /// A record or patch could not be serialized for change detection.
    #[error("Failed to serialize {what} for change detection: {source}")]
    PatchSerialization {
        /// Which side of the comparison failed ("record" or "patch")
        what: &'static str,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A record or patch serialized to something other than a JSON object.
    #[error("Expected {what} to serialize to an object")]
    PatchNotAnObject {
        /// Which side of the comparison was malformed
        what: &'static str,
    },

    /// A JSON column holds data that does not match the domain type.
    #[error("Stored {field} has an unexpected shape: {source}")]
    InvalidStoredJson {
        /// Column name
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
