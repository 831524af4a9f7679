use crate::AstWarning;
use ninal_error::substr_edit_distance;
use ninal_value::Symbol;

/// An index into a frame. It's resolved at build time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot(pub(crate) usize);

impl Slot {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One per top-level form or function body. Slots are never freed, so
/// the number of declarations is the frame size.
#[derive(Default)]
pub struct Scope {
    // `names[i]` is the name of `Slot(i)`
    names: Vec<Symbol>,
    warnings: Vec<AstWarning>,

    // how many `build` calls are on the stack, including the enclosing scopes
    pub(crate) depth: usize,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// A fresh scope for a function body. It sees none of `outer`'s names.
    pub fn nested_in(outer: &Scope) -> Self {
        Scope {
            depth: outer.depth,
            ..Scope::default()
        }
    }

    /// It always allocates a new slot. If `name` is already declared,
    /// the new one shadows the old one and a warning is pushed.
    pub fn declare(&mut self, name: Symbol) -> Slot {
        if self.lookup(name).is_some() {
            self.warnings.push(AstWarning::shadowed_local(name));
        }

        self.names.push(name);

        Slot(self.names.len() - 1)
    }

    /// the latest declaration wins
    pub fn lookup(&self, name: Symbol) -> Option<Slot> {
        self.names.iter().rposition(|n| *n == name).map(Slot)
    }

    pub fn frame_size(&self) -> usize {
        self.names.len()
    }

    pub fn similar_names(&self, name: Symbol) -> Vec<Symbol> {
        let name_bytes = name.as_bytes();
        let mut result: Vec<Symbol> = vec![];

        for candidate in self.names.iter() {
            if result.contains(candidate) {
                continue;
            }

            let dist = substr_edit_distance(&name_bytes, &candidate.as_bytes());

            //  a -> b (no sense)
            //  cnt -> count (makes sense)
            if (name_bytes.len() > 3 && dist < 3) || (name_bytes.len() > 1 && dist < 2) {
                result.push(*candidate);
            }
        }

        result
    }

    pub fn push_warning(&mut self, warning: AstWarning) {
        self.warnings.push(warning);
    }

    pub fn take_warnings(&mut self) -> Vec<AstWarning> {
        std::mem::take(&mut self.warnings)
    }
}
