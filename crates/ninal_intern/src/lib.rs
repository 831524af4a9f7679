#![deny(unused_imports)]

mod global;
mod string;


pub use string::InternedString;

use global::GLOBAL_INTERN_SESSION;

pub fn intern_string(s: &[u8]) -> InternedString {
    // a poisoned lock still holds a consistent table: every insertion is a single `insert` pair
    let mut g = GLOBAL_INTERN_SESSION.lock().unwrap_or_else(|e| e.into_inner());

    g.intern_string(s)
}

pub fn unintern_string(s: InternedString) -> Vec<u8> {
    let g = GLOBAL_INTERN_SESSION.lock().unwrap_or_else(|e| e.into_inner());

    g.unintern_string(s).to_vec()
}
