//! Configuration loading with a strict schema.
//!
//! Unknown keys and missing required keys are rejected at parse time rather
//! than surfacing later as absent attributes.

use crate::error::{Result, SspadError};
use crate::regions::{RegionSource, select_regions};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Regex patterns selecting the regions to deploy to by default.
    pub default_regions: Vec<String>,
    /// Home region from which stack sets are administered.
    pub stackset_region: String,
    /// Directory scanned for stack set templates.
    pub stackset_template_dir: PathBuf,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SspadError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| SspadError::ParseYaml {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Resolve the `default_regions` patterns against the live region list.
    pub fn select_default_regions(&self, source: &dyn RegionSource) -> Result<HashSet<String>> {
        select_regions(&self.default_regions, source.region_names()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GOOD_CONFIG: &str = "\
default_regions:
  - '^us-(east|west)-1$'
stackset_region: us-east-1
stackset_template_dir: /srv/stacksets
";

    struct FixedRegions(Vec<&'static str>);

    impl RegionSource for FixedRegions {
        fn region_names(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("sspad.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_file_loads_all_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, GOOD_CONFIG);

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.default_regions, vec!["^us-(east|west)-1$"]);
        assert_eq!(config.stackset_region, "us-east-1");
        assert_eq!(
            config.stackset_template_dir,
            PathBuf::from("/srv/stacksets")
        );
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/sspad.yaml"));
        assert!(matches!(result, Err(SspadError::ReadFile { .. })));
    }

    #[test]
    fn test_from_file_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        let content = format!("{GOOD_CONFIG}unknown_option: true\n");
        let path = write_config(&dir, &content);

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(SspadError::ParseYaml { .. })));
    }

    #[test]
    fn test_from_file_rejects_missing_required_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "default_regions: []\n");

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(SspadError::ParseYaml { .. })));
    }

    #[test]
    fn test_select_default_regions() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, GOOD_CONFIG);
        let config = Config::from_file(&path).unwrap();

        let source = FixedRegions(vec!["us-east-1", "us-west-1", "ca-central-1"]);
        let selected = config.select_default_regions(&source).unwrap();

        assert_eq!(selected.len(), 2);
        assert!(selected.contains("us-east-1"));
        assert!(selected.contains("us-west-1"));
    }

    #[test]
    fn test_select_default_regions_empty_patterns() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "default_regions: []\nstackset_region: us-east-1\nstackset_template_dir: /srv\n",
        );
        let config = Config::from_file(&path).unwrap();

        let source = FixedRegions(vec!["us-east-1"]);
        assert!(config.select_default_regions(&source).unwrap().is_empty());
    }
}
