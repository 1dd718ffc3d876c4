// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names and environment variable prefixes shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants grouped by domain rather than kept in a single flat list.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line tool
    pub const STUDIO_CLI: &str = "studio-cli";
}

/// Environment variable prefixes
pub mod env_prefixes {
    /// Prefix for body-composition engine overrides
    pub const COMPOSITION: &str = "STUDIO_COMPOSITION_";
}
