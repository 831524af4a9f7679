use crate::Flag;
use ninal_error::{
    ErrorContext,
    ExtraErrInfo,
    NinalError,
    NinalErrorKind,
};
use ninal_span::SpanRange;
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Debug)]
pub struct ClapWarning {
    kind: ClapWarningKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl ClapWarning {
    /// `because` makes `flag` do nothing
    pub fn useless_flag(flag: Flag, flag_span: SpanRange, because: Flag, because_span: SpanRange) -> Self {
        ClapWarning {
            kind: ClapWarningKind::UselessFlag { flag, because },
            spans: smallvec![flag_span, because_span],
            extra: ExtraErrInfo::at_context(ErrorContext::ParsingCommandLine),
        }
    }
}

impl NinalError<ClapWarningKind> for ClapWarning {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn get_spans(&self) -> &[SpanRange] {
        &self.spans
    }

    fn get_spans_mut(&mut self) -> &mut SmallVec<[SpanRange; 1]> {
        &mut self.spans
    }

    fn err_kind(&self) -> &ClapWarningKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        0
    }

    fn is_warning(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
pub enum ClapWarningKind {
    UselessFlag {
        flag: Flag,
        because: Flag,
    },
}

impl NinalErrorKind for ClapWarningKind {
    fn msg(&self) -> String {
        match self {
            ClapWarningKind::UselessFlag { flag, because } => format!("`{flag}` does nothing with `{because}`"),
        }
    }

    fn help(&self) -> String {
        match self {
            ClapWarningKind::UselessFlag { because: Flag::DumpForms, .. } => String::from("Nothing is evaluated when dumping forms."),
            _ => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            ClapWarningKind::UselessFlag { .. } => 0,
        }
    }
}
