use crate::locator::{locate_template, valid_template_node};
use crate::{Position, ScriptSourceHelper, SubstitutionHooks, TemplateContext};
use template_config::TemplateSettings;

/// Finds the template literals of a file that an embedded service handles
pub struct TemplateSourceHelper<H> {
    host: H,
    settings: TemplateSettings,
    hooks: SubstitutionHooks,
}

impl<H: ScriptSourceHelper> TemplateSourceHelper<H> {
    #[must_use]
    pub fn new(host: H, settings: TemplateSettings) -> Self {
        Self {
            host,
            settings,
            hooks: SubstitutionHooks::default(),
        }
    }

    #[must_use]
    pub fn with_substitution_hooks(mut self, hooks: SubstitutionHooks) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &TemplateSettings {
        &self.settings
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The template literal containing `offset`, if any
    #[must_use]
    pub fn get_template(&self, file_name: &str, offset: usize) -> Option<TemplateContext> {
        let file = self.host.source_file(file_name)?;
        let node = locate_template(&self.settings, &file, offset)?.id();
        tracing::trace!("Offset {} of {} is inside template {:?}", offset, file_name, node);

        Some(TemplateContext::new(file, node, self.hooks.clone()))
    }

    /// All template literals of a file, in document order
    #[must_use]
    pub fn get_all_templates(&self, file_name: &str) -> Vec<TemplateContext> {
        let Some(file) = self.host.source_file(file_name) else {
            return Vec::new();
        };

        let nodes: Vec<_> = file
            .find_all(|node| valid_template_node(&self.settings, node).is_some())
            .into_iter()
            .filter_map(|node| valid_template_node(&self.settings, node))
            .map(|node| node.id())
            .collect();

        nodes
            .into_iter()
            .map(|node| TemplateContext::new(file.clone(), node, self.hooks.clone()))
            .collect()
    }

    /// Express a document offset as a position in the virtual text of `context`
    #[must_use]
    pub fn get_relative_position(&self, context: &TemplateContext, offset: usize) -> Position {
        context.relative_position(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySourceHost;

    fn helper(source: &str, settings: TemplateSettings) -> TemplateSourceHelper<MemorySourceHost> {
        let host = MemorySourceHost::new();
        host.open("test.ts", source);
        TemplateSourceHelper::new(host, settings)
    }

    #[test]
    fn test_get_template() {
        let source = "const a = sql`select 1`;";
        let helper = helper(source, TemplateSettings::new(["sql"]));

        let context = helper.get_template("test.ts", 16).unwrap();
        assert_eq!(context.body_offset(), 14);
        assert_eq!(context.text(), "select 1");
        assert_eq!(
            helper.get_relative_position(&context, 16),
            Position::new(0, 2)
        );

        assert!(helper.get_template("test.ts", 3).is_none());
        assert!(helper.get_template("missing.ts", 16).is_none());
    }

    #[test]
    fn test_get_all_templates_in_order() {
        let source = "a = sql`one`;\nb = css`two`;\nc = sql`three ${x}`;\nd = sql`four`;";
        let helper = helper(
            source,
            TemplateSettings::new(["sql"]).with_substitutions(true),
        );

        let texts: Vec<_> = helper
            .get_all_templates("test.ts")
            .iter()
            .map(|context| context.text().to_string())
            .collect();
        assert_eq!(texts, vec!["one", "three xxxx", "four"]);
    }

    #[test]
    fn test_get_all_templates_skips_substitutions_when_disabled() {
        let source = "a = sql`one`; b = sql`two ${x}`;";
        let helper = helper(source, TemplateSettings::new(["sql"]));

        let templates = helper.get_all_templates("test.ts");
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw_text(), "one");
    }

    #[test]
    fn test_get_all_templates_missing_file() {
        let helper = helper("", TemplateSettings::new(["sql"]));
        assert!(helper.get_all_templates("missing.ts").is_empty());
    }

    #[test]
    fn test_custom_hooks_reach_contexts() {
        let helper = helper(
            "sql`a ${b} c`",
            TemplateSettings::new(["sql"]).with_substitutions(true),
        )
        .with_substitution_hooks(SubstitutionHooks::new().with_substitution(|_, _, _| "0".into()));

        let context = helper.get_template("test.ts", 5).unwrap();
        assert_eq!(context.text(), "a 0 c");
    }
}
