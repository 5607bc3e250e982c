// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertStage {
    Load,
    Resize,
    Encode,
    Sidecar,
    Finalize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertEvent {
    pub stage: ConvertStage,
    pub name: String,
    pub fields: BTreeMap<String, String>,
}

/// Ordered in-memory pipeline log; the CLI prints it under `--verbose`.
#[derive(Debug, Default, Clone)]
pub struct ConvertLog {
    events: Vec<ConvertEvent>,
}

impl ConvertLog {
    pub fn emit(
        &mut self,
        stage: ConvertStage,
        name: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) {
        self.events.push(ConvertEvent {
            stage,
            name: name.into(),
            fields,
        });
    }

    pub fn emit_kv(&mut self, stage: ConvertStage, name: impl Into<String>, key: &str, value: &str) {
        let mut fields = BTreeMap::new();
        fields.insert(key.to_string(), value.to_string());
        self.emit(stage, name, fields);
    }

    #[must_use]
    pub fn events(&self) -> &[ConvertEvent] {
        &self.events
    }
}
