use crate::EvalError;
use ninal_ast::Slot;
use ninal_value::{Symbol, Value};

/// Storage for one invocation. Slots are resolved at build time.
pub struct Frame {
    slots: Vec<Option<Value>>,
}

impl Frame {
    pub fn new(size: usize) -> Self {
        Frame { slots: vec![None; size] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `name` is only for the error message.
    pub fn load(&self, slot: Slot, name: Symbol) -> Result<Value, EvalError> {
        match self.slots.get(slot.index()) {
            Some(Some(value)) => Ok(value.clone()),
            _ => Err(EvalError::uninitialized_slot(name)),
        }
    }

    pub fn store(&mut self, slot: Slot, value: Value) {
        let index = slot.index();

        // the builder sized this frame, so it doesn't grow in practice
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }

        self.slots[index] = Some(value);
    }
}
