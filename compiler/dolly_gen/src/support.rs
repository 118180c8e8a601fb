//! Support types generated into every module.
//!
//! Generated clone methods implement `<module>.Dolly.IClonable<T>`, and types
//! opt in and out through `<module>.Dolly.ClonableAttribute` and
//! `<module>.Dolly.CloneIgnoreAttribute`. The three are emitted as
//! `internal` declarations so several modules can each carry their own.

use dolly_ir::well_known::{
    support_namespace, CLONABLE_ATTRIBUTE, CLONABLE_INTERFACE, CLONE_IGNORE_ATTRIBUTE,
};

use crate::{Emitter, GeneratedSource, StringEmitter};

fn attribute(namespace: &str, name: &str, targets: &str) -> String {
    let mut out = StringEmitter::new();
    out.emit_line(0, "using System;");
    out.emit_blank();
    out.emit_line(0, &format!("namespace {namespace}"));
    out.emit_line(0, "{");
    out.emit_line(4, &format!("[AttributeUsage({targets})]"));
    out.emit_line(4, &format!("internal class {name} : Attribute"));
    out.emit_line(4, "{");
    out.emit_line(4, "}");
    out.emit_line(0, "}");
    out.finish()
}

fn interface(namespace: &str) -> String {
    let mut out = StringEmitter::new();
    out.emit_line(0, "using System;");
    out.emit_line(0, &format!("namespace {namespace}"));
    out.emit_line(0, "{");
    out.emit_line(
        4,
        &format!("internal interface {CLONABLE_INTERFACE}<T> : ICloneable"),
    );
    out.emit_line(4, "{");
    out.emit_line(8, "T DeepClone();");
    out.emit_line(8, "T ShallowClone();");
    out.emit_line(4, "}");
    out.emit_line(0, "}");
    out.finish()
}

/// The clonability attribute, the ignore attribute and the clone interface
/// for `module`, in that order.
pub fn support_sources(module: &str) -> [GeneratedSource; 3] {
    let namespace = support_namespace(module);
    [
        GeneratedSource::new(
            format!("{namespace}.{CLONABLE_ATTRIBUTE}.g.cs"),
            attribute(
                &namespace,
                CLONABLE_ATTRIBUTE,
                "AttributeTargets.Class | AttributeTargets.Struct",
            ),
        ),
        GeneratedSource::new(
            format!("{namespace}.{CLONE_IGNORE_ATTRIBUTE}.g.cs"),
            attribute(
                &namespace,
                CLONE_IGNORE_ATTRIBUTE,
                "AttributeTargets.Field | AttributeTargets.Property",
            ),
        ),
        GeneratedSource::new(
            format!("{namespace}.{CLONABLE_INTERFACE}.g.cs"),
            interface(&namespace),
        ),
    ]
}
