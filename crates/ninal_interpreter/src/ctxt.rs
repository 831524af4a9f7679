use crate::{EvalError, OutputSink, StdoutSink};
use log::debug;
use ninal_ast::FuncDef;
use ninal_error::substr_edit_distance;
use ninal_value::Symbol;
use std::collections::HashMap;
use std::rc::Rc;

/// Only `def` writes to this table. A later `def` of the same name overwrites the former.
pub type FunctionTable = HashMap<Symbol, Rc<FuncDef>>;

/// Lives for the whole run: functions defined by a form are visible to all the later forms.
pub struct EvalCtxt {
    functions: FunctionTable,
    sink: Box<dyn OutputSink>,

    call_depth: usize,
    max_call_depth: usize,
}

impl EvalCtxt {
    pub fn new(sink: Box<dyn OutputSink>, max_call_depth: usize) -> Self {
        EvalCtxt {
            functions: HashMap::new(),
            sink,
            call_depth: 0,
            max_call_depth,
        }
    }

    pub fn with_stdout(max_call_depth: usize) -> Self {
        EvalCtxt::new(Box::new(StdoutSink), max_call_depth)
    }

    pub fn register_function(&mut self, func: Rc<FuncDef>) {
        debug!(
            "ninal_interpreter::register_function(), `{}` with {} parameter{}",
            func.name,
            func.params.len(),
            if func.params.len() == 1 { "" } else { "s" },
        );

        if self.functions.insert(func.name, func.clone()).is_some() {
            debug!("ninal_interpreter::register_function(), `{}` is overwritten", func.name);
        }
    }

    pub fn get_function(&self, name: Symbol) -> Result<Rc<FuncDef>, EvalError> {
        match self.functions.get(&name) {
            Some(func) => Ok(func.clone()),
            None => Err(EvalError::undefined_function(name, self.similar_functions(name))),
        }
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    fn similar_functions(&self, name: Symbol) -> Vec<Symbol> {
        let name_bytes = name.as_bytes();
        let mut result = self.functions.keys().filter(
            |candidate| {
                let dist = substr_edit_distance(&name_bytes, &candidate.as_bytes());

                (name_bytes.len() > 3 && dist < 3) || (name_bytes.len() > 1 && dist < 2)
            }
        ).copied().collect::<Vec<_>>();

        // `HashMap` doesn't keep the order
        result.sort_by_key(|s| s.name());

        result
    }

    pub fn emit_line(&mut self, line: String) {
        self.sink.emit_line(line);
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    pub fn inc_call_depth(&mut self) {
        self.call_depth += 1;
    }

    pub fn dec_call_depth(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }
}
