//! Cyclomatic complexity over a parsed Rust AST.
//!
//! Parses a file with `syn` and computes `1 + Σ per-method complexity`,
//! where each method starts at 1 and gains one point per decision point
//! in its body. The leading 1 accounts for top-level flow outside any
//! method. The same parse also yields the method count.

use syn::visit::{self, Visit};
use syn::{BinOp, UnOp};

/// Result of one file parse: complexity score and method count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAnalysis {
    pub complexity: usize,
    pub method_count: usize,
}

/// Parse Rust source and compute complexity and method count.
///
/// Returns `None` when the source does not parse — callers treat that as
/// "not computed", never as a score of zero decision points.
pub fn analyze(source: &str) -> Option<FileAnalysis> {
    let file = syn::parse_file(source).ok()?;
    let mut collector = MethodCollector::default();
    collector.visit_file(&file);

    Some(FileAnalysis {
        complexity: 1 + collector.complexities.iter().sum::<usize>(),
        method_count: collector.complexities.len(),
    })
}

/// Finds every method-like declaration in the tree: free functions, impl
/// methods, and trait methods with default bodies, at any nesting depth.
/// Each gets its own complexity score.
#[derive(Default)]
struct MethodCollector {
    complexities: Vec<usize>,
}

impl<'ast> Visit<'ast> for MethodCollector {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.complexities.push(body_complexity(&node.block));
        // keep walking: fn items nested inside this body are methods too
        visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.complexities.push(body_complexity(&node.block));
        visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        if let Some(block) = &node.default {
            self.complexities.push(body_complexity(block));
        }
        visit::visit_trait_item_fn(self, node);
    }
}

/// Complexity of a single method body: 1 (the method itself is one path)
/// plus one per decision point.
fn body_complexity(block: &syn::Block) -> usize {
    let mut counter = DecisionCounter { count: 1 };
    counter.visit_block(block);
    counter.count
}

/// Counts decision points within one method body.
///
/// Contributors: `if`, `while`/`while let`, `for`, `match` arms, `?`,
/// `continue`, `&&`, `||`, and `!`. Closure bodies are walked inline, so a
/// closure's decision points count toward the enclosing method. Items
/// declared inside the body (nested `fn`, inline `impl`) are skipped here;
/// the collector scores those as methods in their own right.
struct DecisionCounter {
    count: usize,
}

impl<'ast> Visit<'ast> for DecisionCounter {
    fn visit_item(&mut self, _node: &'ast syn::Item) {}

    fn visit_expr_if(&mut self, node: &'ast syn::ExprIf) {
        self.count += 1;
        visit::visit_expr_if(self, node);
    }

    fn visit_expr_while(&mut self, node: &'ast syn::ExprWhile) {
        self.count += 1;
        visit::visit_expr_while(self, node);
    }

    fn visit_expr_for_loop(&mut self, node: &'ast syn::ExprForLoop) {
        self.count += 1;
        visit::visit_expr_for_loop(self, node);
    }

    fn visit_arm(&mut self, node: &'ast syn::Arm) {
        self.count += 1;
        visit::visit_arm(self, node);
    }

    fn visit_expr_try(&mut self, node: &'ast syn::ExprTry) {
        self.count += 1;
        visit::visit_expr_try(self, node);
    }

    fn visit_expr_continue(&mut self, node: &'ast syn::ExprContinue) {
        self.count += 1;
        visit::visit_expr_continue(self, node);
    }

    fn visit_expr_binary(&mut self, node: &'ast syn::ExprBinary) {
        if matches!(node.op, BinOp::And(_) | BinOp::Or(_)) {
            self.count += 1;
        }
        visit::visit_expr_binary(self, node);
    }

    fn visit_expr_unary(&mut self, node: &'ast syn::ExprUnary) {
        if matches!(node.op, UnOp::Not(_)) {
            self.count += 1;
        }
        visit::visit_expr_unary(self, node);
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
