use ninal_span::SpanRange;

pub struct Token {
    pub buffer: String,
    pub span: SpanRange,
}

// the span of the command line starts after this
const PREFIX: &str = "ninal ";

/// It joins the command line arguments into a single line, so that error messages can use spans.
/// Each token keeps the original argument, even when it's rendered with quotes.
pub fn into_line(args: &[String]) -> (Vec<u8>, Vec<Token>) {
    let mut line = String::from(PREFIX);
    let mut tokens = Vec::with_capacity(args.len());

    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }

        let rendered = if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
            format!("{arg:?}")
        } else {
            arg.to_string()
        };

        let start = line.len();
        line.push_str(&rendered);

        tokens.push(Token {
            buffer: arg.to_string(),
            span: SpanRange::new(start, line.len()),
        });
    }

    (line.into_bytes(), tokens)
}
