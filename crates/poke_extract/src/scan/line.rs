//! Lexical shape of a single assembly source line.
//!
//! A line is at most `label: directive operands ; comment`. Everything a
//! grammar needs to classify the line is available without re-scanning
//! the raw text.

/// `Name:` or `Name::` at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub name: &'a str,
}

/// `keyword operand, operand, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub keyword: &'a str,
    pub operands: &'a str,
}

impl<'a> Directive<'a> {
    /// Comma-separated operands, trimmed. Commas inside string literals do
    /// not split.
    pub fn operands(&self) -> Vec<&'a str> {
        split_operands(self.operands)
    }

    /// Contents of the first string literal, without quotes or a trailing
    /// `@` terminator.
    pub fn string(&self) -> Option<&'a str> {
        let start = self.operands.find('"')? + 1;
        let len = self.operands[start..].find('"')?;
        Some(strip_terminator(&self.operands[start..start + len]))
    }

    /// `db 0`, `dw 0`: the terminating zero of a table.
    pub fn is_terminator(&self) -> bool {
        matches!(self.keyword, "db" | "dw") && self.operands == "0"
    }
}

/// One lexed line. All parts are optional; a blank line has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line<'a> {
    pub label: Option<Label<'a>>,
    pub directive: Option<Directive<'a>>,
    pub comment: Option<&'a str>,
}

impl<'a> Line<'a> {
    pub fn lex(raw: &'a str) -> Self {
        let (code, comment) = split_comment(raw);
        let mut code = code.trim();

        let label = lex_label(code).map(|(label, rest)| {
            code = rest.trim_start();
            label
        });

        let directive = (!code.is_empty()).then(|| {
            let (keyword, operands) = match code.find(char::is_whitespace) {
                Some(at) => (&code[..at], code[at..].trim()),
                None => (code, ""),
            };
            Directive { keyword, operands }
        });

        Line {
            label,
            directive,
            comment: comment.map(str::trim),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label.is_none() && self.directive.is_none() && self.comment.is_none()
    }

    /// A line holding nothing but a comment.
    pub fn comment_only(&self) -> Option<&'a str> {
        match (self.label, self.directive) {
            (None, None) => self.comment,
            _ => None,
        }
    }

    /// The directive if its keyword matches.
    pub fn directive(&self, keyword: &str) -> Option<Directive<'a>> {
        self.directive.filter(|d| d.keyword == keyword)
    }
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.')
}

fn lex_label(code: &str) -> Option<(Label<'_>, &str)> {
    let end = code.find(|c: char| !is_label_char(c)).unwrap_or(code.len());
    if end == 0 {
        return None;
    }
    let rest = code[end..].strip_prefix(':')?;
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    Some((Label { name: &code[..end] }, rest))
}

/// Split at the first `;` that is not inside a string literal.
fn split_comment(raw: &str) -> (&str, Option<&str>) {
    let mut in_string = false;
    for (at, c) in raw.char_indices() {
        match c {
            '"' => in_string = !in_string,
            ';' if !in_string => return (&raw[..at], Some(&raw[at + 1..])),
            _ => {}
        }
    }
    (raw, None)
}

fn split_operands(operands: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_string = false;
    let mut start = 0;
    for (at, c) in operands.char_indices() {
        match c {
            '"' => in_string = !in_string,
            ',' if !in_string => {
                parts.push(operands[start..at].trim());
                start = at + 1;
            }
            _ => {}
        }
    }
    let last = operands[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts
}

/// Drop the trailing `@` string terminator.
pub fn strip_terminator(text: &str) -> &str {
    text.strip_suffix('@').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_only() {
        let line = Line::lex("RATTATAEvosAttacks:");
        assert_eq!(
            line.label,
            Some(Label {
                name: "RATTATAEvosAttacks"
            })
        );
        assert!(line.directive.is_none());
    }

    #[test]
    fn test_label_with_directive_and_double_colon() {
        let line = Line::lex("StenchName: rawchar \"Stench@\"");
        assert_eq!(line.label.map(|l| l.name), Some("StenchName"));
        let directive = line.directive.unwrap();
        assert_eq!(directive.keyword, "rawchar");
        assert_eq!(directive.string(), Some("Stench"));

        let line = Line::lex("BulbasaurPokedexEntry::");
        assert_eq!(line.label.map(|l| l.name), Some("BulbasaurPokedexEntry"));
        assert!(line.directive.is_none());
    }

    #[test]
    fn test_directive_with_comment() {
        let line = Line::lex("\tdb 0 ; no more evolutions");
        let directive = line.directive.unwrap();
        assert!(directive.is_terminator());
        assert_eq!(line.comment, Some("no more evolutions"));
    }

    #[test]
    fn test_semicolon_inside_string() {
        let line = Line::lex("\ttext \"Wait; what\" ; note");
        assert_eq!(line.directive.unwrap().string(), Some("Wait; what"));
        assert_eq!(line.comment, Some("note"));
    }

    #[test]
    fn test_operands() {
        let line = Line::lex("\tevo_data EVOLVE_ITEM, LEAF_STONE, EXEGGUTOR, ALOLAN");
        assert_eq!(
            line.directive.unwrap().operands(),
            vec!["EVOLVE_ITEM", "LEAF_STONE", "EXEGGUTOR", "ALOLAN"]
        );
        let line = Line::lex("\tdone");
        assert!(line.directive.unwrap().operands().is_empty());
    }

    #[test]
    fn test_comment_only_and_blank() {
        assert_eq!(Line::lex("\t; morn").comment_only(), Some("morn"));
        assert!(Line::lex("   ").is_blank());
        assert!(Line::lex("").is_blank());
    }

    #[test]
    fn test_keyword_is_not_a_label() {
        let line = Line::lex("\ttext \"Ends: the battle\"");
        assert!(line.label.is_none());
        assert_eq!(line.directive.unwrap().keyword, "text");
    }
}
