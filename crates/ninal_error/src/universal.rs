use ninal_span::SpanRange;

/// Any error type that implements `NinalError` can be converted to this type.
/// The driver uses this type to manage all the errors and warnings.
#[derive(Clone, Debug)]
pub struct UniversalError {
    pub(crate) context: String,
    pub(crate) rendered: String,
    pub is_warning: bool,

    /// It's used to sort the errors by span.
    pub(crate) first_span: SpanRange,

    /// It's used to remove duplicate errors.
    pub(crate) hash: u64,
}

impl UniversalError {
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn rendered(&self) -> &String {
        &self.rendered
    }

    pub fn first_span(&self) -> SpanRange {
        self.first_span
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }
}
