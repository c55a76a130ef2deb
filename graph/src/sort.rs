//! Canonical ordering of grapher output.
//!
//! Key precedence (compared left to right):
//! - defs: `file`, `def_start`, `def_end`, `repo`, `unit_type`, `unit`, `path`, `name`, `kind`,
//!   `exported`
//! - refs: `file`, `start`, `end`, `def_repo`, `def_unit_type`, `def_unit`, `def_path`,
//!   `is_def`, `repo`, `unit_type`, `unit`
//! - docs: `file`, `start`, `end`, `repo`, `unit_type`, `unit`, `path`, `format`, `data`
//!
//! Entries equal on every key keep their input order (the sort is stable). A def's opaque
//! `data` is not a key.

use std::cmp::Ordering;

use crate::{Def, Doc, Output, Ref};

/// Sorts each sequence of `output` into canonical order. Idempotent.
pub fn sort(output: &mut Output) -> &mut Output {
    output.defs.sort_by(cmp_defs);
    output.refs.sort_by(cmp_refs);
    output.docs.sort_by(cmp_docs);
    output
}

pub fn cmp_defs(a: &Def, b: &Def) -> Ordering {
    def_key(a).cmp(&def_key(b))
}

pub fn cmp_refs(a: &Ref, b: &Ref) -> Ordering {
    ref_key(a).cmp(&ref_key(b))
}

pub fn cmp_docs(a: &Doc, b: &Doc) -> Ordering {
    doc_key(a).cmp(&doc_key(b))
}

/// True if every sequence is already in canonical order.
pub fn is_sorted(output: &Output) -> bool {
    output.defs.is_sorted_by(|a, b| cmp_defs(a, b).is_le())
        && output.refs.is_sorted_by(|a, b| cmp_refs(a, b).is_le())
        && output.docs.is_sorted_by(|a, b| cmp_docs(a, b).is_le())
}

type DefSortKey<'a> = (
    &'a str,
    u32,
    u32,
    &'a str,
    &'a str,
    &'a str,
    &'a str,
    &'a str,
    &'a str,
    bool,
);

fn def_key(d: &Def) -> DefSortKey<'_> {
    (
        &d.file,
        d.def_start,
        d.def_end,
        &d.key.repo,
        &d.key.unit_type,
        &d.key.unit,
        &d.key.path,
        &d.name,
        &d.kind,
        d.exported,
    )
}

type RefSortKey<'a> = (
    &'a str,
    u32,
    u32,
    &'a str,
    &'a str,
    &'a str,
    &'a str,
    bool,
    &'a str,
    &'a str,
    &'a str,
);

fn ref_key(r: &Ref) -> RefSortKey<'_> {
    (
        &r.file,
        r.start,
        r.end,
        &r.def_repo,
        &r.def_unit_type,
        &r.def_unit,
        &r.def_path,
        r.is_def,
        &r.repo,
        &r.unit_type,
        &r.unit,
    )
}

type DocSortKey<'a> = (&'a str, u32, u32, &'a str, &'a str, &'a str, &'a str, &'a str, &'a str);

fn doc_key(d: &Doc) -> DocSortKey<'_> {
    (
        &d.file,
        d.start,
        d.end,
        &d.key.repo,
        &d.key.unit_type,
        &d.key.unit,
        &d.key.path,
        &d.format,
        &d.data,
    )
}
