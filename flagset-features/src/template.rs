//! HTML templates for the admin page
//!
//! A [`TemplateEngine`] is built once, with every built-in template
//! registered up front, and is read-only afterwards. The admin handler owns
//! one and hands it to [`crate::RenderableFlag::render_html`].

use crate::error::FeatureResult;
use handlebars::Handlebars;
use serde::Serialize;

/// Checkbox form for a [`crate::BooleanFlag`]
pub const BOOLEAN_TEMPLATE: &str = "boolean";

/// Checkbox and slider form for a [`crate::RatioFlag`]
pub const RATIO_TEMPLATE: &str = "ratio";

/// Read-only line for flags that cannot render themselves
pub const PLAIN_TEMPLATE: &str = "plain";

/// The full index page
pub const INDEX_TEMPLATE: &str = "index";

const BOOLEAN_SOURCE: &str = r#"
<form id="feature-{{name}}" class="feature" method="POST" action="./{{name}}" autocomplete="off">
	{{name}}
	<input name="enabled" type="checkbox" value="true" {{#if enabled}}checked{{/if}} />

	<input type="submit" value="Apply!" />
</form>"#;

const RATIO_SOURCE: &str = r#"
<form id="feature-{{name}}" class="feature" method="POST" action="./{{name}}" autocomplete="off" oninput="ratio_value.value = Math.round(parseFloat(ratio.value)*100) + '%'">
	{{name}}
	<input name="enabled" type="checkbox" value="true"{{#if enabled}} checked{{/if}} />
	<input name="ratio" type="range" min="0.0" max="1.0" step="0.01" value="{{ratio}}" />
	<output name="ratio_value">{{ratio_percent}}</output>

	<input type="submit" value="Apply!" />
</form>"#;

const PLAIN_SOURCE: &str = "<pre>{{name}}: {{enabled}}</pre>\n";

const INDEX_SOURCE: &str = r#"<!doctype html>
<html>
	<head>
		<meta charset="utf-8" />
		<title>{{title}}</title>
	</head>

	<body>
		<ul>
{{#each items}}
<li>{{{this}}}
</li>

{{/each}}
		</ul>
	</body>
</html>"#;

/// Handlebars registry preloaded with the admin templates
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.handlebars.get_templates().keys().collect();
        names.sort();
        f.debug_struct("TemplateEngine")
            .field("templates", &names)
            .finish()
    }
}

impl TemplateEngine {
    /// Build the engine with the built-in templates.
    ///
    /// Strict mode is on, so a template that references a missing field
    /// fails to render instead of printing nothing.
    pub fn new() -> FeatureResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        handlebars.register_template_string(BOOLEAN_TEMPLATE, BOOLEAN_SOURCE)?;
        handlebars.register_template_string(RATIO_TEMPLATE, RATIO_SOURCE)?;
        handlebars.register_template_string(PLAIN_TEMPLATE, PLAIN_SOURCE)?;
        handlebars.register_template_string(INDEX_TEMPLATE, INDEX_SOURCE)?;

        Ok(Self { handlebars })
    }

    /// Register an extra named template before the engine is handed out.
    ///
    /// Used by flag types that live outside this crate.
    pub fn with_template(mut self, name: &str, source: &str) -> FeatureResult<Self> {
        self.handlebars.register_template_string(name, source)?;
        Ok(self)
    }

    /// Render a registered template
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> FeatureResult<String> {
        Ok(self.handlebars.render(name, data)?)
    }

    /// Render a one-off template string
    pub fn render_template<T: Serialize>(&self, source: &str, data: &T) -> FeatureResult<String> {
        Ok(self.handlebars.render_template(source, data)?)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
