//! Descriptor serialization: renders a resolved model as rebel.xml text.
//!
//! The tag and attribute vocabulary is a contract with the reload agent and
//! must stay stable across versions. Rendering is total for any well-formed
//! model and byte-deterministic, which is what lets the change guard compare
//! output texts directly.

use crate::model::{Model, War, WebResource};

const XMLNS: &str = "http://www.zeroturnaround.com";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.zeroturnaround.com http://www.zeroturnaround.com/alderaan/rebel-2_0.xsd";

/// Render the full descriptor document.
pub fn render(model: &Model) -> String {
    let mut sections = Vec::new();
    sections.push(render_classpath(model));
    if let Some(war) = &model.war {
        sections.push(render_war(war));
    }
    if !model.web_resources.is_empty() {
        sections.push(render_web(&model.web_resources));
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<application xmlns=\"{}\"\n", XMLNS));
    out.push_str(&format!("    xmlns:xsi=\"{}\"\n", XSI_NS));
    out.push_str(&format!("    xsi:schemaLocation=\"{}\">\n", SCHEMA_LOCATION));
    for section in sections {
        out.push('\n');
        out.push_str(&section);
    }
    out.push('\n');
    out.push_str("</application>\n");
    out
}

fn render_classpath(model: &Model) -> String {
    let mut out = String::new();
    out.push_str("  <classpath>\n");
    for dir in &model.classpath {
        out.push_str(&format!(
            "    <dir name=\"{}\"/>\n",
            escape_attr(&dir.to_string_lossy())
        ));
    }
    out.push_str("  </classpath>\n");
    out
}

fn render_war(war: &War) -> String {
    format!(
        "  <war dir=\"{}\"/>\n",
        escape_attr(&war.resolved_path.to_string_lossy())
    )
}

fn render_web(resources: &[WebResource]) -> String {
    let mut out = String::new();
    out.push_str("  <web>\n");
    for resource in resources {
        out.push_str(&format!(
            "    <link target=\"{}\">\n",
            escape_attr(&resource.target)
        ));
        let dir_name = escape_attr(&resource.directory.to_string_lossy());
        if resource.includes.is_empty() && resource.excludes.is_empty() {
            out.push_str(&format!("      <dir name=\"{}\"/>\n", dir_name));
        } else {
            out.push_str(&format!("      <dir name=\"{}\">\n", dir_name));
            for include in &resource.includes {
                out.push_str(&format!(
                    "        <include name=\"{}\"/>\n",
                    escape_attr(include)
                ));
            }
            for exclude in &resource.excludes {
                out.push_str(&format!(
                    "        <exclude name=\"{}\"/>\n",
                    escape_attr(exclude)
                ));
            }
            out.push_str("      </dir>\n");
        }
        out.push_str("    </link>\n");
    }
    out.push_str("  </web>\n");
    out
}

/// Escape a string for use inside a double-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
