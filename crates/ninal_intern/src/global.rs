use crate::InternedString;
use lazy_static::lazy_static;
use log::trace;
use ninal_keyword::keywords;
use std::collections::HashMap;
use std::sync::Mutex;

lazy_static! {
    pub(crate) static ref GLOBAL_INTERN_SESSION: Mutex<GlobalInternSession> = Mutex::new(GlobalInternSession::new());
}

pub(crate) struct GlobalInternSession {
    strings: HashMap<Vec<u8>, InternedString>,
    strings_rev: Vec<Vec<u8>>,
}

impl GlobalInternSession {
    pub fn new() -> Self {
        let mut strings = HashMap::new();
        let mut strings_rev = vec![];

        // keywords are interned first, so that `InternedString(n)` is `keywords()[n]`
        for (index, keyword) in keywords().into_iter().enumerate() {
            strings.insert(keyword.to_utf8(), InternedString(index as u32));
            strings_rev.push(keyword.to_utf8());
        }

        GlobalInternSession {
            strings,
            strings_rev,
        }
    }

    pub fn intern_string(&mut self, string: &[u8]) -> InternedString {
        match self.strings.get(string) {
            Some(ii) => *ii,
            None => {
                let ii = InternedString(self.strings_rev.len() as u32);
                trace!("interning {:?} as {}", String::from_utf8_lossy(string), ii.0);

                self.strings.insert(string.to_vec(), ii);
                self.strings_rev.push(string.to_vec());

                ii
            },
        }
    }

    pub fn unintern_string(&self, string: InternedString) -> &[u8] {
        // an `InternedString` can only be constructed by this session
        &self.strings_rev[string.0 as usize]
    }
}
