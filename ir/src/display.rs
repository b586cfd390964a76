//! Text rendering of IR nodes.
//!
//! [`IrPrinter`] is an ordinary read-only visitor: values print inline,
//! operations print one per line, and loop and branch bodies are indented.

use crate::ir::{
    BinaryOp, Expr, Float, ForLoop, IfThenElse, Int, IterDomain, Merge, Reorder, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp, UnaryOpType, Val,
};
use crate::visit::OptInConstDispatch;
use alloc::string::String;
use core::fmt::{self, Write};

/// Visitor that formats IR nodes into a string.
pub struct IrPrinter {
    output: String,
    indent: usize,
}

impl IrPrinter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    pub fn print(stmt: &Statement) -> String {
        let mut printer = Self::new();
        printer.handle_statement(stmt);
        printer.output
    }

    pub fn print_val(val: &Val) -> String {
        let mut printer = Self::new();
        printer.handle_val(val);
        printer.output
    }

    pub fn print_expr(expr: &Expr) -> String {
        let mut printer = Self::new();
        printer.handle_expr(expr);
        printer.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn start_line(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn body(&mut self, exprs: &[Expr]) {
        self.indent += 1;
        for expr in exprs {
            self.handle_expr(expr);
        }
        self.indent -= 1;
    }
}

impl Default for IrPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl OptInConstDispatch for IrPrinter {
    fn handle_iter_domain(&mut self, node: &IterDomain) {
        let _ = write!(
            self.output,
            "{}{{",
            if node.is_reduction() { "R" } else { "I" }
        );
        self.handle_int(&node.start);
        let _ = write!(self.output, " : ");
        self.handle_int(&node.extent);
        let _ = write!(self.output, "}}");
        if node.is_broadcast() {
            let _ = write!(self.output, "b");
        }
        if node.is_parallelized() {
            let _ = write!(self.output, ".{}", node.parallel.as_str());
        }
    }

    fn handle_tensor_domain(&mut self, node: &TensorDomain) {
        let _ = write!(self.output, "[ ");
        for (i, axis) in node.axes.iter().enumerate() {
            if i > 0 {
                let _ = write!(self.output, ", ");
            }
            self.handle_iter_domain(axis);
        }
        let _ = write!(self.output, " ]");
    }

    fn handle_tensor(&mut self, node: &Tensor) {
        let _ = write!(self.output, "T{}", node.name);
    }

    fn handle_tensor_view(&mut self, node: &TensorView) {
        let _ = write!(self.output, "TV{}", node.name);
        self.handle_tensor_domain(&node.domain);
    }

    fn handle_float(&mut self, node: &Float) {
        let _ = match node.value {
            Some(value) => write!(self.output, "{:?}f", value),
            None => write!(self.output, "f{}", node.name),
        };
    }

    fn handle_int(&mut self, node: &Int) {
        let _ = match node.value {
            Some(value) => write!(self.output, "{}", value),
            None => write!(self.output, "i{}", node.name),
        };
    }

    fn handle_split(&mut self, node: &Split) {
        self.start_line();
        self.handle_tensor_domain(&node.out);
        let _ = write!(self.output, " = split(");
        self.handle_tensor_domain(&node.input);
        let _ = write!(self.output, ", axis = {}, factor = ", node.axis);
        self.handle_int(&node.factor);
        let _ = writeln!(self.output, ")");
    }

    fn handle_merge(&mut self, node: &Merge) {
        self.start_line();
        self.handle_tensor_domain(&node.out);
        let _ = write!(self.output, " = merge(");
        self.handle_tensor_domain(&node.input);
        let _ = writeln!(self.output, ", axis = {})", node.axis);
    }

    fn handle_reorder(&mut self, node: &Reorder) {
        self.start_line();
        self.handle_tensor_domain(&node.out);
        let _ = write!(self.output, " = reorder(");
        self.handle_tensor_domain(&node.input);
        let _ = writeln!(self.output, ", new2old = {:?})", node.new2old);
    }

    fn handle_unary_op(&mut self, node: &UnaryOp) {
        self.start_line();
        self.handle_val(&node.out);
        let _ = write!(self.output, " = ");
        match node.op {
            UnaryOpType::Neg => {
                let _ = write!(self.output, "-");
                self.handle_val(&node.input);
            }
            UnaryOpType::Cast => {
                let _ = write!(self.output, "cast(");
                self.handle_val(&node.input);
                let _ = write!(self.output, ")");
            }
        }
        let _ = writeln!(self.output);
    }

    fn handle_binary_op(&mut self, node: &BinaryOp) {
        self.start_line();
        self.handle_val(&node.out);
        let _ = write!(self.output, " = ");
        match node.op.symbol() {
            Some(symbol) => {
                self.handle_val(&node.lhs);
                let _ = write!(self.output, " {} ", symbol);
                self.handle_val(&node.rhs);
            }
            None => {
                let _ = write!(self.output, "ceilDiv(");
                self.handle_val(&node.lhs);
                let _ = write!(self.output, ", ");
                self.handle_val(&node.rhs);
                let _ = write!(self.output, ")");
            }
        }
        let _ = writeln!(self.output);
    }

    fn handle_for_loop(&mut self, node: &ForLoop) {
        self.start_line();
        let _ = write!(self.output, "for ");
        self.handle_int(&node.index);
        let _ = write!(self.output, " in ");
        self.handle_iter_domain(&node.range);
        let _ = writeln!(self.output, " {{");
        self.body(&node.body);
        self.start_line();
        let _ = writeln!(self.output, "}}");
    }

    fn handle_if_then_else(&mut self, node: &IfThenElse) {
        self.start_line();
        let _ = write!(self.output, "if ( ");
        self.handle_int(&node.cond);
        let _ = writeln!(self.output, " ) {{");
        self.body(&node.then_body);
        if node.has_else() {
            self.start_line();
            let _ = writeln!(self.output, "}} else {{");
            self.body(&node.else_body);
        }
        self.start_line();
        let _ = writeln!(self.output, "}}");
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IrPrinter::print(self))
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IrPrinter::print_val(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&IrPrinter::print_expr(self))
    }
}
