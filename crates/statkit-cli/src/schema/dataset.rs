use serde::{Deserialize, Serialize};

/// Values read from an input file.
///
/// Accepts either a bare array (`[1.0, 2.5]`) or an object
/// (`{ "values": [1.0, 2.5] }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Values(Vec<f64>),
    Object { values: Vec<f64> },
}

impl Dataset {
    pub fn into_values(self) -> Vec<f64> {
        match self {
            Dataset::Values(values) | Dataset::Object { values } => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let dataset: Dataset = serde_json::from_str("[2.2, -3.3, 66]").unwrap();
        assert_eq!(dataset.into_values(), [2.2, -3.3, 66.0]);
    }

    #[test]
    fn test_parse_object() {
        let dataset: Dataset = serde_json::from_str(r#"{ "values": [1.5] }"#).unwrap();
        assert_eq!(dataset.into_values(), [1.5]);
    }

    #[test]
    fn test_parse_rejects_strings() {
        assert!(serde_json::from_str::<Dataset>(r#"["1.5"]"#).is_err());
    }
}
