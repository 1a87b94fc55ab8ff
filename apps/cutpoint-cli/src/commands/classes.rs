//! # Classes Command
//!
//! Lists the bottle sizes the line runs and their conversion factor.

use cutpoint_core::volume_table;
use serde::Serialize;
use tracing::debug;

use crate::output::Outputable;

/// One row of the volume table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeClassInfo {
    pub volume_cc: u32,
    pub bottles_per_hl: f64,
    pub is_default: bool,
}

/// The whole volume table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassList(pub Vec<VolumeClassInfo>);

impl Outputable for ClassList {
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.0).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize: {}", e) })
        })
    }

    fn to_human(&self) -> String {
        let mut out = String::from("Volumen     Botellas/HL\n");
        out.push_str("----------  -----------");
        for class in &self.0 {
            out.push_str(&format!(
                "\n{:<10}  {:>11.4}{}",
                format!("{}cc", class.volume_cc),
                class.bottles_per_hl,
                if class.is_default { "  (predeterminado)" } else { "" }
            ));
        }
        out
    }
}

/// Lists every supported class, marking the configured default.
pub fn list_classes(default_cc: u32) -> ClassList {
    debug!("classes command");
    ClassList(
        volume_table()
            .iter()
            .map(|(class, bottles_per_hl)| VolumeClassInfo {
                volume_cc: class.cc(),
                bottles_per_hl,
                is_default: class.cc() == default_cc,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_classes() {
        let list = list_classes(970);
        let volumes: Vec<u32> = list.0.iter().map(|c| c.volume_cc).collect();
        assert_eq!(volumes, vec![1000, 970, 925]);
        assert_eq!(list.0[0].bottles_per_hl, 100.0);
        assert!(list.0[1].is_default);
        assert!(!list.0[0].is_default);
    }

    #[test]
    fn test_human_table() {
        let human = list_classes(1000).to_human();
        assert!(human.contains("1000cc         100.0000  (predeterminado)"));
        assert!(human.contains("925cc          108.1081"));
    }
}
