use minijinja::context;

use p2o_core::analyze::Analysis;

use crate::{RenderError, environment};

/// Every operation with its summary, description, tags and parameter count.
pub fn render(analysis: &Analysis) -> Result<String, RenderError> {
    let mut env = environment();
    env.add_template(
        "endpoints.txt.j2",
        include_str!("../../templates/endpoints.txt.j2"),
    )?;
    let tmpl = env.get_template("endpoints.txt.j2")?;

    Ok(tmpl.render(context! {
        endpoints => &analysis.endpoints,
    })?)
}
