//! Integration tests for the frontend pipeline.
//!
//! These tests drive source text through tokenization and parsing and
//! check the produced tree, the structural AST dump, and the rendered
//! diagnostics.

use std::rc::Rc;

use flint::{
    ast::{
        ast::{Node, NodeKind},
        printer,
    },
    errors::{
        errors::Error,
        reporter::{apply_color_policy, format_error, ColorPolicy},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
    SourceUnit,
};

fn parse_program(source: &str) -> Node {
    let unit = SourceUnit::new("test.fl", source.to_string());
    let tokens = tokenize(&unit).unwrap();
    parse(tokens, Rc::clone(&unit)).unwrap()
}

fn parse_program_error(source: &str) -> Error {
    let unit = SourceUnit::new("test.fl", source.to_string());
    let tokens = tokenize(&unit).unwrap();
    parse(tokens, Rc::clone(&unit)).unwrap_err()
}

#[test]
fn test_parse_complete_program() {
    let source = r#"
use "std/io";

export executable "hello";

extern {
    #link("c")
    fn puts(s: *const u8) -> i32;
    fn exit(code: i32) -> unreachable;
}

fn add(a: i32, b: i32) -> i32 {
    return a + b;
}

pub fn main() -> i32 {
    puts("hello world" as *const u8);
    return add(40, 2);
}
"#;

    let root = parse_program(source);
    let NodeKind::Root(root) = &root.kind else {
        panic!("expected a Root node");
    };

    assert_eq!(root.top_level_decls.len(), 5);
    assert!(matches!(root.top_level_decls[0].kind, NodeKind::Use(_)));
    assert!(matches!(
        root.top_level_decls[1].kind,
        NodeKind::RootExportDecl(_)
    ));
    assert!(matches!(
        root.top_level_decls[2].kind,
        NodeKind::ExternBlock(_)
    ));
    assert!(matches!(root.top_level_decls[3].kind, NodeKind::FnDef(_)));
    assert!(matches!(root.top_level_decls[4].kind, NodeKind::FnDef(_)));

    let NodeKind::ExternBlock(extern_block) = &root.top_level_decls[2].kind else {
        panic!("expected an ExternBlock node");
    };
    assert_eq!(extern_block.fn_decls.len(), 2);
}

#[test]
fn test_every_node_records_its_owner() {
    let source = r#"fn main() { return 1 + 2; }"#;
    let unit = SourceUnit::new("owned.fl", source.to_string());
    let tokens = tokenize(&unit).unwrap();
    let root = parse(tokens, Rc::clone(&unit)).unwrap();

    fn walk(node: &Node, check: &dyn Fn(&Node)) {
        check(node);
        match &node.kind {
            NodeKind::Root(root) => root.top_level_decls.iter().for_each(|n| walk(n, check)),
            NodeKind::FnDef(def) => {
                walk(&def.fn_proto, check);
                walk(&def.body, check);
            }
            NodeKind::FnProto(proto) => {
                proto.params.iter().for_each(|n| walk(n, check));
                walk(&proto.return_type, check);
            }
            NodeKind::Block(block) => block.statements.iter().for_each(|n| walk(n, check)),
            NodeKind::ReturnExpr(ret) => {
                if let Some(value) = &ret.value {
                    walk(value, check);
                }
            }
            NodeKind::BinOpExpr(expr) => {
                walk(&expr.lhs, check);
                walk(&expr.rhs, check);
            }
            _ => {}
        }
    }

    walk(&root, &|node| {
        assert_eq!(node.owner.path, "owned.fl");
        assert!(node.line >= 1);
        assert!(node.column >= 1);
    });
}

#[test]
fn test_ast_dump_for_minimal_program() {
    let root = parse_program("fn main() { return 0; }");

    let dump = printer::dump_to_string(&root);
    let expected = "\
Root
  FnDef
    FnProto private 'main'
      Type 'void'
    Block
      ReturnExpr
        NumberLiteral 0
";
    assert_eq!(dump, expected);
}

#[test]
fn test_ast_dump_for_extern_block() {
    let root = parse_program(r#"extern { #link("c") fn puts(s: *const u8) -> i32; }"#);

    let dump = printer::dump_to_string(&root);
    let expected = "\
Root
  ExternBlock
    FnDecl
      FnProto private 'puts'
        Directive #link('c')
        ParamDecl 's'
          Type 'const' pointer
            Type 'u8'
        Type 'i32'
";
    assert_eq!(dump, expected);
}

#[test]
fn test_syntax_error_is_rendered_with_context() {
    apply_color_policy(ColorPolicy::Never);

    let source = "fn main() {\n    return 1 +;\n}\n";
    let unit = SourceUnit::new("broken.fl", source.to_string());
    let tokens = tokenize(&unit).unwrap();
    let error = parse(tokens, Rc::clone(&unit)).unwrap_err();

    assert_eq!(error.message(), "invalid token: ';'");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 15);

    let rendered = format_error(&error, &unit);
    assert!(rendered.contains("-> broken.fl:2:15"));
    assert!(rendered.contains("2 | return 1 +;"));
}

#[test]
fn test_unknown_keyword_lexes_as_symbol() {
    let unit = SourceUnit::new("bad.fl", "fn main() {\n    let x;\n}\n".to_string());
    let tokens = tokenize(&unit).unwrap();

    // `let` is not a keyword of this language; it lexes as a symbol and
    // the parser rejects the statement at the `x` that follows it.
    let error = parse(tokens, Rc::clone(&unit)).unwrap_err();
    assert_eq!(error.message(), "invalid token: 'x'");
}

#[test]
fn test_first_error_wins() {
    let error = parse_program_error("fn f() { 1 +; }\nfn g() { 2 *; }\n");

    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_directives_survive_the_pipeline() {
    let source = r#"
#link("c")
#link("m")
extern {
    fn sin(x: f64) -> f64;
}
"#;
    let root = parse_program(source);
    let NodeKind::Root(root) = &root.kind else {
        panic!("expected a Root node");
    };
    let NodeKind::ExternBlock(extern_block) = &root.top_level_decls[0].kind else {
        panic!("expected an ExternBlock node");
    };

    assert_eq!(extern_block.directives.len(), 2);
    assert_eq!(extern_block.fn_decls.len(), 1);
}

#[test]
fn test_escapes_decode_through_the_pipeline() {
    let root = parse_program(r#"fn f() { log("a\tb\n"); }"#);

    let dump = printer::dump_to_string(&root);
    assert!(dump.contains("StringLiteral 'a\tb\n'"));
}
