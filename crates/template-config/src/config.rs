use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rules deciding which template literals carry an embedded language.
///
/// A literal qualifies when its tag matches one of `tags`. Literals containing
/// `${...}` holes only qualify when `enable_for_string_with_substitutions` is set.
///
/// Settings that can never match (no tags at all) are accepted as-is: every
/// lookup simply reports "not a template" and the host answers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSettings {
    /// Tag identifiers to recognize (e.g. `["sql", "html"]`)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Allow literals that contain interpolation holes
    #[serde(default)]
    pub enable_for_string_with_substitutions: bool,

    /// Embedded-service specific options, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<HashMap<String, serde_json::Value>>,
}

impl TemplateSettings {
    #[must_use]
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_substitutions(mut self, enabled: bool) -> Self {
        self.enable_for_string_with_substitutions = enabled;
        self
    }

    /// True when no literal can ever qualify
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.iter().all(|tag| tag.trim().is_empty())
    }
}
