//! Integration tests for the display tree printer.

use std::io;

use asdl_runtime::format::flat_width;
use asdl_runtime::{
    print_tree, render_string, AnsiOutput, FormatOptions, HtmlOutput, Node, Printer, Record,
    Style, TextOutput, ToTree,
};
use proptest::prelude::*;
use serde_json::json;

fn var(name: &str) -> Node {
    Record::new("Var").field("name", name.to_tree()).into()
}

fn func_call() -> Node {
    Record::new("FuncCall")
        .field("name", "f".to_tree())
        .field("args", Node::list([var("v1"), var("v2")]))
        .into()
}

fn render(node: &Node, max_col: usize) -> String {
    render_string(node, &FormatOptions::plain().with_max_col(max_col))
}

/// Joins a multi-line rendering back into its single-line form.
fn unbreak(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        if out.ends_with(',') {
            out.push(' ');
        }
        out.push_str(line.trim_start());
    }
    out
}

// ------------------------------------------------------------------ Scenarios

#[test]
fn const_record_single_line() {
    let node: Node = Record::new("Const").field("i", 42i64.to_tree()).into();
    let record = node.as_record().unwrap();
    assert_eq!(record.node_type, "Const");
    assert_eq!(record.fields[0].name, "i");
    assert_eq!(record.fields[0].value, Node::leaf("42", Style::NumberConst));
    insta::assert_snapshot!(render(&node, 80), @"Const(i=42)");
}

#[test]
fn nested_list_of_records() {
    let node = func_call();
    let record = node.as_record().unwrap();
    assert_eq!(record.get("name"), Some(&Node::leaf("f", Style::StringConst)));
    let args = record.get("args").unwrap().as_list().unwrap();
    assert_eq!(args, [var("v1"), var("v2")]);
    assert_eq!(
        render(&node, 80),
        "FuncCall(name=f, args=[Var(name=v1), Var(name=v2)])"
    );
}

#[test]
fn over_budget_record_breaks_one_level() {
    insta::assert_snapshot!(render(&func_call(), 40), @r"
FuncCall(
  name=f,
  args=[Var(name=v1), Var(name=v2)]
)
");
}

#[test]
fn over_budget_child_breaks_at_its_own_depth() {
    assert_eq!(
        render(&func_call(), 30),
        "FuncCall(\n  name=f,\n  args=[\n    Var(name=v1),\n    Var(name=v2)\n  ]\n)"
    );
}

#[test]
fn deep_nesting_closes_at_parent_indentation() {
    let mut node = Node::leaf("0", Style::NumberConst);
    for depth in 1..=4 {
        node = Record::new("Unary")
            .field("op", "-".to_tree())
            .field("a", node)
            .field("depth", (depth as i64).to_tree())
            .into();
    }
    let text = render(&node, 20);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"Unary("));
    assert_eq!(lines.last(), Some(&")"));
    for line in &lines {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 2, 0, "odd indentation in {line:?}");
        assert!(line.len() <= 20, "overlong line {line:?}");
    }
    // Every opener has a closer at the same indentation.
    let openers: Vec<usize> = lines
        .iter()
        .filter(|l| l.ends_with('('))
        .map(|l| l.len() - l.trim_start().len())
        .collect();
    let mut closers: Vec<usize> = lines
        .iter()
        .filter(|l| l.trim_start().starts_with(')'))
        .map(|l| l.len() - l.trim_start().len())
        .collect();
    closers.reverse();
    assert_eq!(openers, closers);
    assert_eq!(unbreak(&text), render(&node, usize::MAX));
}

// --------------------------------------------------------------- Properties

#[test]
fn same_tree_renders_identically_to_two_sinks() {
    let node = func_call();
    let mut a = TextOutput::new(Vec::new());
    let mut b = TextOutput::new(Vec::new());
    print_tree(&node, &mut a).unwrap();
    print_tree(&node, &mut b).unwrap();
    assert_eq!(a.into_inner(), b.into_inner());
}

struct FailAfter {
    remaining: usize,
}

impl io::Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.remaining {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.remaining -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_error_propagates_and_restores_depth() {
    let node = func_call();
    let mut printer = Printer::new(FormatOptions::plain().with_max_col(10));
    for remaining in [0, 5, 12, 20, 30] {
        let mut out = TextOutput::new(FailAfter { remaining });
        let err = printer.print(&node, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(printer.depth(), 0, "depth leaked after failing at {remaining}");
    }
    let mut out = TextOutput::new(Vec::new());
    printer.print(&node, &mut out).unwrap();
    assert_eq!(printer.depth(), 0);
}

#[test]
fn ansi_and_plain_differ_only_in_markers() {
    let node = func_call();
    let mut ansi = AnsiOutput::new(Vec::new());
    print_tree(&node, &mut ansi).unwrap();
    let colored = String::from_utf8(ansi.into_inner()).unwrap();
    assert!(colored.contains("\x1b["));

    let mut stripped = String::new();
    let mut chars = colored.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            stripped.push(ch);
        }
    }
    assert_eq!(stripped, node.to_string());
}

#[test]
fn html_output_marks_up_leaves() {
    let node: Node = Record::new("maps").field("ss", Node::missing()).into();
    let mut html = HtmlOutput::new(Vec::new());
    print_tree(&node, &mut html).unwrap();
    assert_eq!(
        String::from_utf8(html.into_inner()).unwrap(),
        "<span class=\"type-name\">maps</span>(ss=<span class=\"missing\">&lt;missing&gt;</span>)"
    );
}

#[test]
fn tree_serializes_to_json() {
    let node: Node = Record::new("Const").field("i", 42i64.to_tree()).into();
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "record": {
                "node_type": "Const",
                "left": "(",
                "right": ")",
                "unnamed": [],
                "fields": [
                    {"name": "i", "value": {"leaf": {"text": "42", "style": "number_const"}}}
                ]
            }
        })
    );
}

fn arb_style() -> impl Strategy<Value = Style> {
    prop_oneof![
        Just(Style::StringConst),
        Just(Style::NumberConst),
        Just(Style::BoolConst),
        Just(Style::UserType),
        Just(Style::Missing),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = ("[a-z0-9]{1,8}", arb_style()).prop_map(|(text, style)| Node::leaf(text, style));
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::List),
            (
                "[A-Z][a-z]{0,6}",
                prop::collection::vec(("[a-z]{1,5}", inner), 0..4)
            )
                .prop_map(|(name, fields)| {
                    Node::from(fields.into_iter().fold(
                        Record::new(name),
                        |record, (field, value)| record.field(field, value),
                    ))
                }),
        ]
    })
}

proptest! {
    #[test]
    fn rendering_is_deterministic(node in arb_node(), max_col in 0usize..60) {
        prop_assert_eq!(render(&node, max_col), render(&node, max_col));
    }

    #[test]
    fn unlimited_budget_is_single_line(node in arb_node()) {
        let text = render(&node, usize::MAX);
        prop_assert!(!text.contains('\n'));
        prop_assert_eq!(flat_width(&node, usize::MAX), Some(text.len()));
    }

    #[test]
    fn breaking_preserves_tokens(node in arb_node(), max_col in 0usize..40) {
        prop_assert_eq!(unbreak(&render(&node, max_col)), render(&node, usize::MAX));
    }

    #[test]
    fn depth_is_restored(node in arb_node(), max_col in 0usize..40) {
        let mut printer = Printer::new(FormatOptions::plain().with_max_col(max_col));
        let mut out = TextOutput::new(Vec::new());
        printer.print(&node, &mut out).unwrap();
        prop_assert_eq!(printer.depth(), 0);
    }

    #[test]
    fn record_starts_with_type_name(node in arb_node()) {
        if let Some(record) = node.as_record() {
            let prefix = format!("{}(", record.node_type);
            prop_assert!(render(&node, 10).starts_with(&prefix));
        }
    }
}
