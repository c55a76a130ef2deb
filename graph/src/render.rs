use std::fmt::Write;

use crate::Output;

/// Renders `output` one span per line, for diffing normalized output across runs.
///
/// Sequences are rendered in their current order; call [`crate::sort`] first for a
/// canonical rendering.
pub fn format_output(output: &Output) -> String {
    let mut out = String::new();

    for d in &output.defs {
        let _ = write!(&mut out, "def {} [{}..{}]", d.file, d.def_start, d.def_end);
        let _ = write!(
            &mut out,
            " {}",
            key_string(&d.key.repo, &d.key.unit_type, &d.key.unit, &d.key.path)
        );
        let _ = write!(&mut out, " name={}", d.name);
        if !d.kind.is_empty() {
            let _ = write!(&mut out, " kind={}", d.kind);
        }
        if d.exported {
            out.push_str(" exported");
        }
        out.push('\n');
    }

    for r in &output.refs {
        let _ = write!(&mut out, "ref {} [{}..{}] -> ", r.file, r.start, r.end);
        out.push_str(&key_string(
            &r.def_repo,
            &r.def_unit_type,
            &r.def_unit,
            &r.def_path,
        ));
        if r.is_def {
            out.push_str(" (def)");
        }
        out.push('\n');
    }

    for d in &output.docs {
        let _ = writeln!(
            &mut out,
            "doc {} [{}..{}] {} {} {:?}",
            d.file,
            d.start,
            d.end,
            key_string(&d.key.repo, &d.key.unit_type, &d.key.unit, &d.key.path),
            d.format,
            d.data
        );
    }

    out
}

fn key_string(repo: &str, unit_type: &str, unit: &str, path: &str) -> String {
    let repo = if repo.is_empty() { "." } else { repo };
    format!("{repo}:{unit_type}:{unit}:{path}")
}
