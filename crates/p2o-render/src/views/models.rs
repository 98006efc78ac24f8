use minijinja::context;
use serde::Serialize;

use p2o_core::analyze::Analysis;

use super::pad;
use crate::{RenderError, environment};

#[derive(Serialize)]
struct ModelRow {
    label: String,
    detail: String,
}

/// Named schemas from `components.schemas`.
pub fn render(analysis: &Analysis) -> Result<String, RenderError> {
    let mut env = environment();
    env.add_template("models.txt.j2", include_str!("../../templates/models.txt.j2"))?;
    let tmpl = env.get_template("models.txt.j2")?;

    let width = analysis
        .models
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);
    let models: Vec<ModelRow> = analysis
        .models
        .iter()
        .map(|m| ModelRow {
            label: pad(&m.name, width),
            detail: match m.property_count {
                0 => m.kind.clone(),
                1 => format!("{} (1 property)", m.kind),
                n => format!("{} ({n} properties)", m.kind),
            },
        })
        .collect();

    Ok(tmpl.render(context! { models => models })?)
}
