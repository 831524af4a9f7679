mod fmt;

/// Heads of special forms. Every other head symbol is either a local
/// variable (literal list) or a function call.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Def = 0,
    If = 1,
    Var = 2,
    Print = 3,
    Add = 4,
    Sub = 5,
    Mul = 6,
    Div = 7,
    Lt = 8,
    Le = 9,
    Gt = 10,
    Ge = 11,
}

impl Keyword {
    pub fn to_utf8(&self) -> Vec<u8> {
        self.as_str().as_bytes().to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::If => "if",
            Keyword::Var => "var",
            Keyword::Print => "print",
            Keyword::Add => "+",
            Keyword::Sub => "-",
            Keyword::Mul => "*",
            Keyword::Div => "/",
            Keyword::Lt => "<",
            Keyword::Le => "<=",
            Keyword::Gt => ">",
            Keyword::Ge => ">=",
        }
    }

    /// `index` is the value interned strings of keywords have.
    pub fn from_index(index: u32) -> Option<Self> {
        KEYWORDS.get(index as usize).copied()
    }

    pub fn is_binary_operator(&self) -> bool {
        (*self as u32) >= (Keyword::Add as u32)
    }
}

const KEYWORDS: [Keyword; 12] = keywords();

pub const fn keywords() -> [Keyword; 12] {
    [
        Keyword::Def,
        Keyword::If,
        Keyword::Var,
        Keyword::Print,
        Keyword::Add,
        Keyword::Sub,
        Keyword::Mul,
        Keyword::Div,
        Keyword::Lt,
        Keyword::Le,
        Keyword::Gt,
        Keyword::Ge,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_all() {
        let keywords = super::keywords();

        for (i, k) in keywords.into_iter().enumerate() {
            assert_eq!(i, k as usize);
            assert_eq!(Keyword::from_index(i as u32), Some(k));
        }

        assert_eq!(Keyword::from_index(keywords.len() as u32), None);
    }

    #[test]
    fn binary_operators() {
        assert!(!Keyword::Print.is_binary_operator());
        assert!(Keyword::Add.is_binary_operator());
        assert!(Keyword::Ge.is_binary_operator());
    }
}
