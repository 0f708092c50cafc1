use super::view::EntityView;
use crate::config::GeneratorConfig;
use crate::core::{GenError, Result};
use log::debug;
use minijinja::{AutoEscape, Environment, context};
use std::path::Path;

/// Name of the template shipped with the crate
pub const DEFAULT_TEMPLATE: &str = "entity_extension.tmpl";

const BUILTIN_TEMPLATE: &str = include_str!("../../templates/entity_extension.tmpl");

/// Turns one resolved entity into the text of its output file
pub trait Renderer {
    fn render(&self, entity: &EntityView<'_>) -> Result<String>;
}

/// Jinja-style template renderer. The entity is available to the template
/// as `entity`.
pub struct TemplateRenderer {
    env: Environment<'static>,
    template: String,
}

impl TemplateRenderer {
    /// Render with the built-in template set
    pub fn builtin(template: &str) -> Self {
        let mut env = Self::environment();
        env.set_loader(|name| Ok((name == DEFAULT_TEMPLATE).then(|| BUILTIN_TEMPLATE.to_string())));
        Self {
            env,
            template: template.to_string(),
        }
    }

    /// Render with templates loaded from `dir`
    pub fn from_dir(dir: &Path, template: &str) -> Result<Self> {
        if !dir.is_dir() {
            return Err(GenError::io(
                dir,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "template directory does not exist",
                ),
            ));
        }

        debug!("Loading templates from '{}'", dir.display());
        let mut env = Self::environment();
        env.set_loader(minijinja::path_loader(dir));
        Ok(Self {
            env,
            template: template.to_string(),
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        match &config.template_dir {
            Some(dir) => Self::from_dir(dir, &config.template_name),
            None => Ok(Self::builtin(&config.template_name)),
        }
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        // Output is source code, never markup
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::builtin(DEFAULT_TEMPLATE)
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, entity: &EntityView<'_>) -> Result<String> {
        let template = self
            .env
            .get_template(&self.template)
            .map_err(|err| GenError::render(entity.name, err))?;

        template
            .render(context! { entity => entity })
            .map_err(|err| GenError::render(entity.name, err))
    }
}
