use crate::dlog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One raw sensor package: a workout type code and its positional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, fields: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            fields: fields.to_vec(),
        }
    }
}

/// Sample sessions used when no package file is given.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read a JSON array of packages:
///
/// ```json
/// [{"code": "RUN", "fields": [15000, 1, 75]}]
/// ```
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("reading packages: {shown}"))?;
    let packages: Vec<Package> =
        serde_json::from_str(&text).with_context(|| format!("parsing packages: {shown}"))?;

    dlog!("loaded packages path={} count={}", path.display(), packages.len());
    Ok(packages)
}
