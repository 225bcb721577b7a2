//! Inlining of immediately-invoked function literals
//!
//! `FUNCALL(FUNC([v1..vn], body), VAR(w1)..VAR(wn))` with no named arguments
//! is replaced by `body` with every free `vi` renamed to `wi`. All renames
//! happen in one pass, so a swap `v1 -> v2, v2 -> v1` is a true swap.
//!
//! Renaming stops at a nested `FUNC` for the ids it rebinds. If a nested
//! `FUNC` binds one of the target ids while a renamed variable occurs free
//! under it, the rename would be captured; the rewrite is declined instead.
//! A declined rewrite leaves the call untouched. Nothing is ever partially
//! rewritten.

use std::collections::{HashMap, HashSet};

use crate::observability::{log_event_with_fields, Event};
use crate::term::{Term, TermKind, VarId};

/// Body of the called function with parameters renamed, if the call is
/// safe to inline. `args` are the positional arguments of the `FUNCALL`.
pub fn inline_funcall(args: &[Term]) -> Option<Term> {
    let (function, actuals) = args.split_first()?;
    let (params, body) = function.func_parts()?;
    if params.len() != actuals.len() {
        return None;
    }

    let distinct: HashSet<VarId> = params.iter().copied().collect();
    if distinct.len() != params.len() {
        return None;
    }

    let targets = actuals
        .iter()
        .map(Term::as_var)
        .collect::<Option<Vec<VarId>>>()?;

    let mapping: HashMap<VarId, VarId> = params.iter().copied().zip(targets).collect();
    let inlined = rename(&mapping, body)?;

    let params_str = params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");
    log_event_with_fields(Event::FuncallInlined, &[("params", params_str.as_str())]);

    Some(inlined)
}

/// Simultaneously rename the free variables of `term` according to
/// `mapping`. Returns `None` when a nested binder would capture a renamed
/// variable.
pub fn rename(mapping: &HashMap<VarId, VarId>, term: &Term) -> Option<Term> {
    if mapping.is_empty() {
        return Some(term.clone());
    }

    match term {
        Term::Literal(_) => Some(term.clone()),
        Term::Annotated { note, inner } => {
            Some(Term::annotated(note.clone(), rename(mapping, inner)?))
        }
        Term::Call {
            kind,
            args,
            optargs,
        } => {
            if let Some(id) = term.as_var() {
                return Some(match mapping.get(&id) {
                    Some(target) => Term::var(*target),
                    None => term.clone(),
                });
            }

            if let Some((params, body)) = term.func_parts() {
                return rename_under_binder(mapping, term, &params, body);
            }

            let args = args
                .iter()
                .map(|arg| rename(mapping, arg))
                .collect::<Option<Vec<_>>>()?;
            let mut renamed = optargs.clone();
            for value in renamed.values_mut() {
                *value = rename(mapping, value)?;
            }
            Some(Term::call_with(*kind, args, renamed))
        }
    }
}

fn rename_under_binder(
    mapping: &HashMap<VarId, VarId>,
    func: &Term,
    params: &[VarId],
    body: &Term,
) -> Option<Term> {
    let active: HashMap<VarId, VarId> = mapping
        .iter()
        .filter(|(from, _)| !params.contains(from))
        .map(|(from, to)| (*from, *to))
        .collect();

    let captured = active
        .iter()
        .any(|(from, to)| params.contains(to) && occurs_free(*from, body));
    if captured {
        return None;
    }

    let Term::Call { args, .. } = func else {
        return None;
    };
    let new_body = rename(&active, body)?;
    Some(Term::call(TermKind::Func, vec![args[0].clone(), new_body]))
}

/// Returns true if `id` occurs free in `term`
pub fn occurs_free(id: VarId, term: &Term) -> bool {
    match term {
        Term::Literal(_) => false,
        Term::Annotated { inner, .. } => occurs_free(id, inner),
        Term::Call { args, optargs, .. } => {
            if let Some(v) = term.as_var() {
                return v == id;
            }
            if let Some((params, body)) = term.func_parts() {
                return !params.contains(&id) && occurs_free(id, body);
            }
            args.iter().any(|arg| occurs_free(id, arg))
                || optargs.values().any(|value| occurs_free(id, value))
        }
    }
}
