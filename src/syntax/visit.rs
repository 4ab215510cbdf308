//! Identifier traversal.

use super::tree::{Decl, Expr, Ident, Node, SourceFile};

/// Call `f` with every identifier in `file` and its immediate parent node, in
/// source order.
pub fn walk_idents<'a, F>(file: &'a SourceFile, mut f: F)
where
    F: FnMut(Node<'a>, &'a Ident),
{
    f(Node::File(file), &file.package);

    for decl in &file.decls {
        let parent = Node::Decl(decl);
        match decl {
            Decl::Import(group) => {
                for spec in &group.specs {
                    if let Some(name) = &spec.name {
                        f(Node::ImportSpec(spec), name);
                    }
                }
            }
            Decl::Gen(gen_decl) => {
                for name in &gen_decl.names {
                    f(parent, name);
                }
                for value in &gen_decl.values {
                    walk_expr(value, parent, &mut f);
                }
            }
            Decl::Func(func) => {
                f(parent, &func.name);
                for stmt in &func.body {
                    walk_expr(stmt, parent, &mut f);
                }
            }
        }
    }
}

fn walk_expr<'a, F>(expr: &'a Expr, parent: Node<'a>, f: &mut F)
where
    F: FnMut(Node<'a>, &'a Ident),
{
    let this = Node::Expr(expr);
    match expr {
        Expr::Ident(ident) => f(parent, ident),
        Expr::Selector(sel) => {
            walk_expr(&sel.x, this, f);
            f(this, &sel.sel);
        }
        Expr::Call(call) => {
            walk_expr(&call.fun, this, f);
            for arg in &call.args {
                walk_expr(arg, this, f);
            }
        }
        Expr::Lit(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;
    use crate::syntax::ImportSpec;

    #[test]
    fn test_walk_idents_reports_parents() {
        let file = SourceFile::new(FileId::new(0), "main")
            .with_decl(Decl::imports([ImportSpec::new("mypkg/util").named("u")]))
            .with_decl(Decl::func(
                "main",
                [Expr::call(Expr::selector(Expr::ident("u"), "Helper"), [])],
            ));

        let mut seen = Vec::new();
        walk_idents(&file, |parent, ident| {
            seen.push((ident.name.to_string(), parent.as_selector().is_some()));
        });

        assert_eq!(
            seen,
            vec![
                ("main".to_string(), false),
                ("u".to_string(), false),
                ("main".to_string(), false),
                ("u".to_string(), true),
                ("Helper".to_string(), true),
            ]
        );
    }
}
