use crate::ArgKind;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Flag {
    Help,
    Version,
    RawInput,
    DumpForms,
    DumpAst,
    ShowWarnings,
    HideWarnings,
    MaxCallDepth,
    Verbose,
}

pub const FLAGS: [Flag; 9] = [
    Flag::Help,
    Flag::Version,
    Flag::RawInput,
    Flag::DumpForms,
    Flag::DumpAst,
    Flag::ShowWarnings,
    Flag::HideWarnings,
    Flag::MaxCallDepth,
    Flag::Verbose,
];

impl Flag {
    /// what kind of arg this flag takes
    pub fn arg_kind(&self) -> ArgKind {
        match self {
            Flag::RawInput => ArgKind::RawInput,
            Flag::MaxCallDepth
            | Flag::Verbose => ArgKind::Integer,
            Flag::Help
            | Flag::Version
            | Flag::DumpForms
            | Flag::DumpAst
            | Flag::ShowWarnings
            | Flag::HideWarnings => ArgKind::None,
        }
    }

    pub fn short(&self) -> Option<&'static [u8]> {
        match self {
            Flag::Help => Some(b"-h"),
            Flag::Verbose => Some(b"-v"),
            Flag::Version
            | Flag::RawInput
            | Flag::DumpForms
            | Flag::DumpAst
            | Flag::ShowWarnings
            | Flag::HideWarnings
            | Flag::MaxCallDepth => None,
        }
    }

    pub fn long(&self) -> &'static [u8] {
        match self {
            Flag::Help => b"--help",
            Flag::Version => b"--version",
            Flag::RawInput => b"--raw-input",
            Flag::DumpForms => b"--dump-forms",
            Flag::DumpAst => b"--dump-ast",
            Flag::ShowWarnings => b"--show-warnings",
            Flag::HideWarnings => b"--hide-warnings",
            Flag::MaxCallDepth => b"--max-call-depth",
            Flag::Verbose => b"--verbose",
        }
    }

    pub fn try_parse(s: &[u8]) -> Option<Self> {
        for flag in FLAGS.iter() {
            if let Some(short) = flag.short() {
                if s == short {
                    return Some(*flag);
                }
            }

            if s == flag.long() {
                return Some(*flag);
            }
        }

        None
    }

    pub fn render_error(&self) -> String {
        String::from_utf8_lossy(self.long()).to_string()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error())
    }
}
