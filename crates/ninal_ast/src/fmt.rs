use crate::{FuncDef, Node, Unit};
use std::fmt;

impl Node {
    fn render(&self, indent: usize, buffer: &mut Vec<String>) {
        let pre = "  ".repeat(indent);

        match self {
            Node::Const(v) => buffer.push(format!("{pre}Const {v:?}")),
            Node::LiteralList(elements) => {
                buffer.push(format!("{pre}LiteralList"));

                for element in elements.iter() {
                    element.render(indent + 1, buffer);
                }
            },
            Node::VarLoad { name, slot } => buffer.push(format!("{pre}VarLoad {name} @{}", slot.index())),
            Node::VarStore { name, slot, init } => {
                buffer.push(format!("{pre}VarStore {name} @{}", slot.index()));
                init.render(indent + 1, buffer);
            },
            Node::Def(f) => f.render(indent, buffer),
            Node::Call { name, args } => {
                buffer.push(format!("{pre}Call {name}"));

                for arg in args.iter() {
                    arg.render(indent + 1, buffer);
                }
            },
            Node::Arith { op, lhs, rhs } => {
                buffer.push(format!("{pre}Arith {op}"));
                lhs.render(indent + 1, buffer);
                rhs.render(indent + 1, buffer);
            },
            Node::Compare { op, lhs, rhs } => {
                buffer.push(format!("{pre}Compare {op}"));
                lhs.render(indent + 1, buffer);
                rhs.render(indent + 1, buffer);
            },
            Node::Print(value) => {
                buffer.push(format!("{pre}Print"));
                value.render(indent + 1, buffer);
            },
            Node::If { cond, true_branch, false_branch } => {
                buffer.push(format!("{pre}If"));
                cond.render(indent + 1, buffer);
                true_branch.render(indent + 1, buffer);
                false_branch.render(indent + 1, buffer);
            },
        }
    }
}

impl FuncDef {
    fn render(&self, indent: usize, buffer: &mut Vec<String>) {
        buffer.push(format!(
            "{}Def {} (params: [{}], frame_size: {})",
            "  ".repeat(indent),
            self.name,
            self.params.iter().map(
                |slot| format!("@{}", slot.index())
            ).collect::<Vec<_>>().join(", "),
            self.frame_size,
        ));
        self.body.render(indent + 1, buffer);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut buffer = vec![];
        self.render(0, &mut buffer);

        write!(fmt, "{}", buffer.join("\n"))
    }
}

impl fmt::Display for FuncDef {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut buffer = vec![];
        self.render(0, &mut buffer);

        write!(fmt, "{}", buffer.join("\n"))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Unit (frame_size: {})\n{}", self.frame_size, self.body)
    }
}
