//! Parameter files
//!
//! A parameter file is YAML with optional `boundaries` and `compute` maps.
//! Entries are layered over the built-in registry:
//!
//! ```yaml
//! boundaries:
//!   optical:
//!     beta_pj_per_byte: 0.4
//!     alpha_pj_per_event: 20.0
//! compute:
//!   digital:
//!     pj_per_byte: 0.2
//! ```

use std::fs;
use std::path::Path;

use crossingbench_core::{CrossingError, ParameterRegistry};

/// Error types for parameter file operations
#[derive(Debug, thiserror::Error)]
pub enum ParamsFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("invalid entry in {path}: {source}")]
    Invalid {
        path: String,
        source: CrossingError,
    },
}

/// Parse a registry fragment from YAML text
pub fn registry_from_yaml(yaml: &str) -> Result<ParameterRegistry, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Render a registry as YAML
pub fn registry_to_yaml(registry: &ParameterRegistry) -> Result<String, ParamsFileError> {
    serde_saphyr::to_string(registry).map_err(|e| ParamsFileError::Serialize(e.to_string()))
}

/// Build the effective registry: the defaults, with `path` layered on top if given.
pub fn load_registry(path: Option<&Path>) -> Result<ParameterRegistry, ParamsFileError> {
    let defaults = ParameterRegistry::default();
    let Some(path) = path else {
        return Ok(defaults);
    };

    let path_display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ParamsFileError::Io {
        path: path_display.clone(),
        source,
    })?;
    let fragment = registry_from_yaml(&content).map_err(|e| ParamsFileError::Parse {
        path: path_display.clone(),
        message: e.to_string(),
    })?;
    fragment.validate().map_err(|source| ParamsFileError::Invalid {
        path: path_display.clone(),
        source,
    })?;

    tracing::info!(
        path = %path_display,
        boundaries = fragment.boundaries.len(),
        compute = fragment.compute.len(),
        "Loaded parameter file"
    );

    Ok(defaults.merged(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_file_gives_defaults() {
        let registry = load_registry(None).unwrap();
        assert_eq!(registry, ParameterRegistry::default());
    }

    #[test]
    fn test_file_entries_layer_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        fs::write(
            &path,
            "boundaries:\n  optical:\n    beta_pj_per_byte: 0.4\n    alpha_pj_per_event: 20.0\n  analog:\n    beta_pj_per_byte: 4.0\ncompute:\n  digital:\n    pj_per_byte: 0.2\n",
        )
        .unwrap();

        let registry = load_registry(Some(&path)).unwrap();

        let optical = registry.boundary("optical").unwrap();
        assert_eq!(optical.beta_pj_per_byte, 0.4);
        assert_eq!(optical.alpha_pj_per_event, 20.0);
        // alpha defaults to zero when omitted
        assert_eq!(registry.boundary("analog").unwrap().alpha_pj_per_event, 0.0);
        assert_eq!(registry.boundary("analog").unwrap().beta_pj_per_byte, 4.0);
        assert_eq!(registry.compute("digital").unwrap().pj_per_byte, 0.2);
        assert_eq!(registry.compute("lowv").unwrap().pj_per_byte, 0.05);
    }

    #[test]
    fn test_negative_entry_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        fs::write(&path, "compute:\n  broken:\n    pj_per_byte: -0.5\n").unwrap();

        let err = load_registry(Some(&path)).unwrap_err();
        assert!(matches!(err, ParamsFileError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        fs::write(&path, "boundaries:\n  optical: [1, 2\n").unwrap();

        let err = load_registry(Some(&path)).unwrap_err();
        assert!(matches!(err, ParamsFileError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_registry(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(err, ParamsFileError::Io { .. }));
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = registry_to_yaml(&ParameterRegistry::default()).unwrap();
        assert!(yaml.contains("chiplet"));
        let parsed = registry_from_yaml(&yaml).unwrap();
        assert_eq!(parsed, ParameterRegistry::default());
    }
}
