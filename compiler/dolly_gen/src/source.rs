//! Clone method synthesis.

use dolly_ir::well_known::{support_namespace, CLONABLE_INTERFACE};
use dolly_model::Model;

use crate::{
    method_modifiers, render_expression, type_modifiers, CloneDepth, Emitter, StringEmitter,
};

/// Indentation of object initializer entries.
const INITIALIZER_INDENT: usize = 12;

/// One generated source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedSource {
    /// File name the host registers the text under.
    pub hint_name: String,
    pub text: String,
}

impl GeneratedSource {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        GeneratedSource {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}

/// Render the partial re-declaration of `model`'s type with its clone
/// methods.
///
/// The text uses `\n` line endings and ends at the closing brace.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %model.qualified_name()))]
pub fn render(model: &Model) -> GeneratedSource {
    let mut out = StringEmitter::with_capacity(512);
    let name = model.name.as_str();

    out.emit_line(0, "using global::System.Linq;");
    if !model.namespace.is_empty() {
        out.emit_line(0, &format!("namespace {};", model.namespace));
    }
    out.emit_line(
        0,
        &format!(
            "{} {name} : global::{}.{CLONABLE_INTERFACE}<{name}>",
            type_modifiers(model.flags),
            support_namespace(&model.module),
        ),
    );
    out.emit_line(0, "{");
    if model.flags.clonable_base {
        out.emit_line(4, "");
    } else {
        out.emit_line(4, "object global::System.ICloneable.Clone() => this.DeepClone();");
    }

    emit_method(&mut out, model, "DeepClone", CloneDepth::Deep);
    out.emit_blank();
    emit_method(&mut out, model, "ShallowClone", CloneDepth::Shallow);
    out.emit_line(0, "}");

    tracing::debug!(
        members = model.members.len(),
        constructor_members = model.constructor_members.len(),
        "rendered clone methods"
    );
    GeneratedSource::new(format!("{name}.g.cs"), out.finish())
}

fn emit_method(out: &mut StringEmitter, model: &Model, method: &str, depth: CloneDepth) {
    let return_type = if model.namespace.is_empty() {
        format!("global::{}", model.name)
    } else {
        format!("global::{}.{}", model.namespace, model.name)
    };
    out.emit_line(
        4,
        &format!(
            "public {}{return_type} {method}() =>",
            method_modifiers(model.flags)
        ),
    );

    let arguments: Vec<String> = model
        .constructor_members
        .iter()
        .map(|m| render_expression(m, depth))
        .collect();
    out.emit_line(8, &format!("new ({})", arguments.join(", ")));
    out.emit_line(8, "{");

    if model.members.is_empty() {
        out.emit_blank();
    }
    let last = model.members.len().saturating_sub(1);
    for (i, member) in model.members.iter().enumerate() {
        let separator = if i < last { "," } else { "" };
        out.emit_line(
            INITIALIZER_INDENT,
            &format!(
                "{} = {}{separator}",
                member.name,
                render_expression(member, depth)
            ),
        );
    }
    out.emit_line(8, "};");
}
