//! Structural AST dump for debugging. Depth-first, two spaces of
//! indentation per level, one line per node with its kind name and
//! summary fields. The output is human-oriented and only stable enough
//! for debugging.

use std::fmt::{self, Write};

use super::ast::{Node, NodeKind};
use super::declarations::TypeNode;

pub fn dump<W: Write>(node: &Node, out: &mut W) -> fmt::Result {
    dump_node(node, 0, out)
}

pub fn dump_to_string(node: &Node) -> String {
    let mut out = String::new();
    dump(node, &mut out).expect("formatting into a String cannot fail");
    out
}

fn dump_node<W: Write>(node: &Node, indent: usize, out: &mut W) -> fmt::Result {
    write!(out, "{:indent$}", "")?;

    match &node.kind {
        NodeKind::Root(root) => {
            writeln!(out, "{}", node.kind_name())?;
            for decl in &root.top_level_decls {
                dump_node(decl, indent + 2, out)?;
            }
        }
        NodeKind::RootExportDecl(decl) => {
            writeln!(out, "{} {} '{}'", node.kind_name(), decl.export_type, decl.name)?;
            for directive in &decl.directives {
                dump_node(directive, indent + 2, out)?;
            }
        }
        NodeKind::Use(decl) => {
            writeln!(out, "{} '{}'", node.kind_name(), decl.path)?;
            for directive in &decl.directives {
                dump_node(directive, indent + 2, out)?;
            }
        }
        NodeKind::ExternBlock(block) => {
            writeln!(out, "{}", node.kind_name())?;
            for directive in &block.directives {
                dump_node(directive, indent + 2, out)?;
            }
            for decl in &block.fn_decls {
                dump_node(decl, indent + 2, out)?;
            }
        }
        NodeKind::FnDecl(decl) => {
            writeln!(out, "{}", node.kind_name())?;
            dump_node(&decl.fn_proto, indent + 2, out)?;
        }
        NodeKind::FnDef(def) => {
            writeln!(out, "{}", node.kind_name())?;
            dump_node(&def.fn_proto, indent + 2, out)?;
            dump_node(&def.body, indent + 2, out)?;
        }
        NodeKind::FnProto(proto) => {
            writeln!(out, "{} {} '{}'", node.kind_name(), proto.visibility, proto.name)?;
            for directive in &proto.directives {
                dump_node(directive, indent + 2, out)?;
            }
            for param in &proto.params {
                dump_node(param, indent + 2, out)?;
            }
            dump_node(&proto.return_type, indent + 2, out)?;
        }
        NodeKind::ParamDecl(param) => {
            writeln!(out, "{} '{}'", node.kind_name(), param.name)?;
            dump_node(&param.param_type, indent + 2, out)?;
        }
        NodeKind::Type(TypeNode::Primitive { name }) => {
            writeln!(out, "{} '{}'", node.kind_name(), name)?;
        }
        NodeKind::Type(TypeNode::Pointer { is_const, child_type }) => {
            let qualifier = if *is_const { "const" } else { "mut" };
            writeln!(out, "{} '{}' pointer", node.kind_name(), qualifier)?;
            dump_node(child_type, indent + 2, out)?;
        }
        NodeKind::Block(block) => {
            writeln!(out, "{}", node.kind_name())?;
            for statement in &block.statements {
                dump_node(statement, indent + 2, out)?;
            }
        }
        NodeKind::BinOpExpr(expr) => {
            writeln!(out, "{} {}", node.kind_name(), expr.op)?;
            dump_node(&expr.lhs, indent + 2, out)?;
            dump_node(&expr.rhs, indent + 2, out)?;
        }
        NodeKind::PrefixOpExpr(expr) => {
            writeln!(out, "{} {}", node.kind_name(), expr.op)?;
            dump_node(&expr.operand, indent + 2, out)?;
        }
        NodeKind::CastExpr(expr) => {
            writeln!(out, "{}", node.kind_name())?;
            dump_node(&expr.operand, indent + 2, out)?;
            dump_node(&expr.target_type, indent + 2, out)?;
        }
        NodeKind::FnCallExpr(expr) => {
            writeln!(out, "{}", node.kind_name())?;
            dump_node(&expr.callee, indent + 2, out)?;
            for arg in &expr.args {
                dump_node(arg, indent + 2, out)?;
            }
        }
        NodeKind::ReturnExpr(expr) => {
            writeln!(out, "{}", node.kind_name())?;
            if let Some(value) = &expr.value {
                dump_node(value, indent + 2, out)?;
            }
        }
        NodeKind::NumberLiteral(value) => {
            writeln!(out, "{} {}", node.kind_name(), value)?;
        }
        NodeKind::StringLiteral(value) => {
            writeln!(out, "{} '{}'", node.kind_name(), value)?;
        }
        NodeKind::Symbol(name) => {
            writeln!(out, "{} {}", node.kind_name(), name)?;
        }
        NodeKind::Unreachable => {
            writeln!(out, "{}", node.kind_name())?;
        }
        NodeKind::Directive(directive) => {
            writeln!(out, "{} #{}('{}')", node.kind_name(), directive.name, directive.param)?;
        }
    }

    Ok(())
}
