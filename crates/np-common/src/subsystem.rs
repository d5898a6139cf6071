//! Subsystem tags for native panics.
//!
//! Every [`NativePanic`](crate::NativePanic) records exactly one subsystem: the
//! integration point whose native component terminated abnormally. The wire
//! names are stable and shared with downstream error reporting.

use serde::{Deserialize, Serialize};

/// Integration point that produced a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subsystem {
    /// Schema-migration CLI.
    LiftCli,
    /// Studio integration. Unused; kept so old payloads still parse.
    PhotonStudio,
    /// Introspection CLI. Superseded by [`Subsystem::LiftCli`]; kept so old
    /// payloads still parse.
    IntrospectionCli,
    /// Formatting CLI.
    FmtCli,
    /// Query-engine binary invoked as a subprocess.
    QueryEngineBinaryCli,
    /// Query-engine library invoked in-process.
    QueryEngineLibraryCli,
}

impl Subsystem {
    /// All known tags, deprecated ones included.
    pub const ALL: [Subsystem; 6] = [
        Subsystem::LiftCli,
        Subsystem::PhotonStudio,
        Subsystem::IntrospectionCli,
        Subsystem::FmtCli,
        Subsystem::QueryEngineBinaryCli,
        Subsystem::QueryEngineLibraryCli,
    ];

    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::LiftCli => "LIFT_CLI",
            Subsystem::PhotonStudio => "PHOTON_STUDIO",
            Subsystem::IntrospectionCli => "INTROSPECTION_CLI",
            Subsystem::FmtCli => "FMT_CLI",
            Subsystem::QueryEngineBinaryCli => "QUERY_ENGINE_BINARY_CLI",
            Subsystem::QueryEngineLibraryCli => "QUERY_ENGINE_LIBRARY_CLI",
        }
    }

    /// Whether this tag is only kept for backward compatibility.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Subsystem::PhotonStudio | Subsystem::IntrospectionCli)
    }

    /// Whether the subsystem runs in-process rather than as a subprocess.
    pub fn is_in_process(&self) -> bool {
        matches!(self, Subsystem::QueryEngineLibraryCli)
    }
}

impl std::fmt::Display for Subsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Subsystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subsystem::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown subsystem: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_wire_names() {
        assert_eq!(Subsystem::LiftCli.to_string(), "LIFT_CLI");
        assert_eq!(
            Subsystem::QueryEngineBinaryCli.to_string(),
            "QUERY_ENGINE_BINARY_CLI"
        );
        assert_eq!(
            serde_json::to_string(&Subsystem::QueryEngineLibraryCli).unwrap(),
            r#""QUERY_ENGINE_LIBRARY_CLI""#
        );
    }

    #[test]
    fn test_subsystem_parse() {
        assert_eq!("FMT_CLI".parse::<Subsystem>().unwrap(), Subsystem::FmtCli);
        assert_eq!(
            "query_engine_binary_cli".parse::<Subsystem>().unwrap(),
            Subsystem::QueryEngineBinaryCli
        );
        assert!("SOMETHING_ELSE".parse::<Subsystem>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for tag in Subsystem::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
            let back: Subsystem = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tag);
        }
    }

    #[test]
    fn test_deprecated_tags() {
        assert!(Subsystem::PhotonStudio.is_deprecated());
        assert!(Subsystem::IntrospectionCli.is_deprecated());
        assert!(!Subsystem::LiftCli.is_deprecated());
        assert!(!Subsystem::QueryEngineLibraryCli.is_deprecated());
    }

    #[test]
    fn test_in_process() {
        assert!(Subsystem::QueryEngineLibraryCli.is_in_process());
        assert!(!Subsystem::QueryEngineBinaryCli.is_in_process());
    }
}
