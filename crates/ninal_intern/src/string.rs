use ninal_keyword::Keyword;

mod fmt;

#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InternedString(pub(crate) u32);

impl InternedString {
    pub fn try_into_keyword(&self) -> Option<Keyword> {
        Keyword::from_index(self.0)
    }
}

impl From<Keyword> for InternedString {
    fn from(k: Keyword) -> Self {
        InternedString(k as u32)
    }
}
