use ninal_error::{ExtraErrInfo, NinalError, NinalErrorKind};
use ninal_span::SpanRange;
use ninal_value::Symbol;
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Debug)]
pub struct AstWarning {
    kind: AstWarningKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl AstWarning {
    pub fn shadowed_local(name: Symbol) -> Self {
        AstWarning {
            kind: AstWarningKind::ShadowedLocal(name),
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }
}

impl NinalError<AstWarningKind> for AstWarning {
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

    fn err_kind(&self) -> &AstWarningKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        2
    }

    fn is_warning(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AstWarningKind {
    ShadowedLocal(Symbol),
}

impl NinalErrorKind for AstWarningKind {
    fn msg(&self) -> String {
        match self {
            AstWarningKind::ShadowedLocal(name) => format!("`{}` is declared more than once", name.render_error()),
        }
    }

    fn help(&self) -> String {
        match self {
            AstWarningKind::ShadowedLocal(name) => format!(
                "Reads after the second declaration see the new `{}`.",
                name.render_error(),
            ),
        }
    }

    fn index(&self) -> u32 {
        match self {
            AstWarningKind::ShadowedLocal(_) => 0,
        }
    }
}
