//! Human-readable rendering of terms
//!
//! Debugging aid only, never sent to the server. Renderings longer than
//! `MAX_WIDTH` characters, or already spanning several lines, are laid out
//! one argument per line; a long lambda moves its body below the
//! parameter list.

use super::{Term, TermKind, TermMap, VarId};

const MAX_WIDTH: usize = 80;
const INDENT: &str = "  ";

/// Letter name of a variable: 1 → `a`, 26 → `z`, 27 → `aa`, 28 → `ab`
pub fn var_name(id: VarId) -> String {
    if id == 0 {
        return "_".to_string();
    }
    let mut n = id;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Render a term as text
pub fn render(term: &Term) -> String {
    match term {
        Term::Literal(value) => value.to_string(),
        Term::Annotated { note, inner } => format!("/* {} */ {}", note, render(inner)),
        Term::Call {
            kind,
            args,
            optargs,
        } => render_call(term, *kind, args, optargs),
    }
}

fn render_call(term: &Term, kind: TermKind, args: &[Term], optargs: &TermMap) -> String {
    if let Some(id) = term.as_var() {
        return var_name(id);
    }
    if let Some((params, body)) = term.func_parts() {
        let names: Vec<String> = params.iter().map(|p| var_name(*p)).collect();
        let head = format!("\\{} ->", names.join(" "));
        let body = render(body);
        let single = format!("{} {}", head, body);
        if fits(&single) {
            return single;
        }
        return format!("{}\n{}", head, indent(&body));
    }

    match kind {
        TermKind::MakeArray if optargs.is_empty() => layout("[", &positional(args), "]"),
        TermKind::MakeObj if args.is_empty() => layout("{", &named(optargs), "}"),
        TermKind::Bracket if optargs.is_empty() && args.len() == 2 => {
            layout(&format!("{}[", render(&args[0])), &[render(&args[1])], "]")
        }
        _ => {
            let mut items = positional(args);
            items.extend(named(optargs));
            layout(&format!("{}(", kind.name()), &items, ")")
        }
    }
}

fn positional(args: &[Term]) -> Vec<String> {
    args.iter().map(render).collect()
}

fn named(optargs: &TermMap) -> Vec<String> {
    optargs
        .iter()
        .map(|(key, value)| format!("{}: {}", key, render(value)))
        .collect()
}

fn layout(open: &str, items: &[String], close: &str) -> String {
    let single = format!("{}{}{}", open, items.join(", "), close);
    if items.is_empty() || fits(&single) {
        return single;
    }

    let mut out = String::with_capacity(single.len() + items.len() * 4);
    out.push_str(open);
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        out.push_str(&indent(item));
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(close);
    out
}

fn fits(text: &str) -> bool {
    text.chars().count() <= MAX_WIDTH && !text.contains('\n')
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add(a: Term, b: Term) -> Term {
        Term::call(TermKind::Add, vec![a, b])
    }

    #[test]
    fn test_var_names() {
        assert_eq!(var_name(1), "a");
        assert_eq!(var_name(2), "b");
        assert_eq!(var_name(26), "z");
        assert_eq!(var_name(27), "aa");
        assert_eq!(var_name(28), "ab");
        assert_eq!(var_name(52), "az");
        assert_eq!(var_name(53), "ba");
        assert_eq!(var_name(702), "zz");
        assert_eq!(var_name(703), "aaa");
    }

    #[test]
    fn test_render_call() {
        let t = add(Term::literal(1), Term::literal(2));
        assert_eq!(render(&t), "add(1, 2)");
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(render(&Term::literal("hi")), "\"hi\"");
        assert_eq!(render(&Term::literal(json!(null))), "null");
    }

    #[test]
    fn test_render_array_and_object() {
        let arr = Term::call(TermKind::MakeArray, vec![Term::literal(1), Term::literal(2)]);
        assert_eq!(render(&arr), "[1, 2]");

        let mut optargs = TermMap::new();
        optargs.insert("b".into(), Term::literal(2));
        optargs.insert("a".into(), Term::literal(1));
        let obj = Term::call_with(TermKind::MakeObj, vec![], optargs);
        assert_eq!(render(&obj), "{a: 1, b: 2}");
    }

    #[test]
    fn test_render_lambda() {
        let f = Term::func(&[1, 2], add(Term::var(1), Term::var(2)));
        assert_eq!(render(&f), "\\a b -> add(a, b)");
    }

    #[test]
    fn test_render_bracket() {
        let t = Term::call(TermKind::Bracket, vec![Term::var(1), Term::literal("name")]);
        assert_eq!(render(&t), "a[\"name\"]");
    }

    #[test]
    fn test_render_optargs_after_args() {
        let mut optargs = TermMap::new();
        optargs.insert("use_outdated".into(), Term::literal(true));
        let t = Term::call_with(TermKind::Table, vec![Term::literal("users")], optargs);
        assert_eq!(render(&t), "table(\"users\", use_outdated: true)");
    }

    #[test]
    fn test_render_note() {
        let t = Term::annotated("limit", Term::literal(10));
        assert_eq!(render(&t), "/* limit */ 10");
    }

    #[test]
    fn test_short_stays_single_line() {
        let t = add(Term::literal("x".repeat(60)), Term::literal(1));
        let out = render(&t);
        assert!(out.chars().count() <= MAX_WIDTH);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_long_goes_multi_line() {
        let t = add(Term::literal("x".repeat(80)), Term::literal(1));
        let expected = format!("add(\n  \"{}\",\n  1\n)", "x".repeat(80));
        assert_eq!(render(&t), expected);
    }

    #[test]
    fn test_nested_multi_line_indents() {
        let inner = add(Term::literal("y".repeat(80)), Term::literal(2));
        let outer = Term::call(TermKind::Not, vec![inner]);
        let expected = format!("not(\n  add(\n    \"{}\",\n    2\n  )\n)", "y".repeat(80));
        assert_eq!(render(&outer), expected);
    }

    #[test]
    fn test_long_lambda_goes_multi_line() {
        let body = add(Term::literal("x".repeat(70)), Term::var(1));
        let f = Term::func(&[1], body);
        let expected = format!("\\a ->\n  add(\"{}\", a)", "x".repeat(70));
        assert_eq!(render(&f), expected);
    }

    #[test]
    fn test_short_lambda_stays_single_line() {
        let f = Term::func(&[1], add(Term::literal("x".repeat(60)), Term::var(1)));
        assert!(!render(&f).contains('\n'));
    }

    #[test]
    fn test_long_bracket_goes_multi_line() {
        let key = "k".repeat(80);
        let t = Term::call(TermKind::Bracket, vec![Term::var(1), Term::literal(key.as_str())]);
        assert_eq!(render(&t), format!("a[\n  \"{}\"\n]", key));
    }
}
