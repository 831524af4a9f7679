use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorContext {
    Unknown,
    ParsingCommandLine,
    ReadingForm,
    BuildingForm,
    BuildingFunctionBody,
    EvaluatingForm,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::Unknown => "",
            ErrorContext::ParsingCommandLine => "parsing command line arguments",
            ErrorContext::ReadingForm => "reading a form",
            ErrorContext::BuildingForm => "building a form",
            ErrorContext::BuildingFunctionBody => "building a function body",
            ErrorContext::EvaluatingForm => "evaluating a form",
        };

        write!(fmt, "{s}")
    }
}
