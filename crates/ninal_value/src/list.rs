use crate::Value;
use std::rc::Rc;

mod builder;

pub use builder::ListBuilder;

thread_local! {
    static EMPTY: List = List { elements: Rc::from(Vec::new()) };
}

#[derive(Clone)]
pub struct List {
    elements: Rc<[Value]>,
}

impl List {
    /// Every empty list is this one.
    pub fn empty() -> Self {
        EMPTY.with(|e| e.clone())
    }

    pub fn of(elements: Vec<Value>) -> Self {
        if elements.is_empty() {
            List::empty()
        }

        else {
            List { elements: Rc::from(elements) }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// `from` is inclusive and `to` is exclusive. The elements are copied,
    /// so `self` is left untouched. Out-of-range bounds are clamped.
    pub fn sub_list(&self, from: usize, to: usize) -> List {
        let to = to.min(self.len());
        let from = from.min(to);

        List::of(self.elements[from..to].to_vec())
    }

    /// `true` if both share the same buffer
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
    }
}

impl PartialEq for List {
    fn eq(&self, other: &List) -> bool {
        self.ptr_eq(other) || self.elements[..] == other.elements[..]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
