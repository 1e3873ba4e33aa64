use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use mailform_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::{Tera, Value};

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("html_breaks", html_breaks);

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to parse template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera
            .render(T::NAME, &context)
            .with_context(|| format!("Failed to render template {}", T::NAME))
    }
}

fn html_breaks(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("html_breaks", "value", String, value);
    Ok(Value::String(html_with_breaks(&text)))
}

/// Escapes `text` for use in HTML and turns its line breaks into `<br />`.
fn html_with_breaks(text: &str) -> String {
    tera::escape_html(text)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "<br />\n")
}
