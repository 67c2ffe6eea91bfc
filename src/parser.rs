/// One parsed input line: the command name, its arguments, and the full
/// token list kept verbatim for external execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    parts: Vec<String>,
}

impl ParsedCommand {
    /// Returns `None` when the line tokenizes to nothing, which the loop
    /// treats as "re-prompt".
    pub fn parse(line: &str) -> Option<Self> {
        let parts = tokenize(line);
        if parts.is_empty() {
            None
        } else {
            Some(ParsedCommand { parts })
        }
    }

    pub fn name(&self) -> &str {
        &self.parts[0]
    }

    pub fn arguments(&self) -> &[String] {
        &self.parts[1..]
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

/// Splits a line on unquoted whitespace runs, honoring single and double
/// quotes. Quote characters toggle their mode unless the other mode is
/// active, and are consumed rather than copied. An unterminated quote
/// closes implicitly at end of line.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;

    for c in line.chars() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            c if c.is_whitespace() && !in_single && !in_double => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
