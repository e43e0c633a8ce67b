// nml/src/parser.rs

//! Parser for namelist text.
//!
//! Groups open with `&name` or `$name` and close with `/`, `&end` or `$end`
//! (case-insensitive). `!` starts a comment outside quoted strings. Values
//! may span lines and use repeat expressions (`3*0.5`). The sentinel style of
//! the first group is recorded on the parsed document so writes reproduce it.

use crate::error::{NmlError, Result};
use crate::namelist::{GroupStyle, Namelist, NamelistGroup};
use crate::value::{parse_repeat, NmlValue};

pub(crate) fn parse_namelist(content: &str) -> Result<Namelist> {
    Parser::new(content).parse()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(content: &str) -> Self {
        Self {
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn parse(&mut self) -> Result<Namelist> {
        let mut nml = Namelist::new();
        let mut style: Option<GroupStyle> = None;

        loop {
            self.skip_blanks();
            let Some(c) = self.peek() else { break };

            if c != '&' && c != '$' {
                return Err(NmlError::parse(
                    format!("expected start of group, found '{}'", c),
                    self.line,
                ));
            }
            self.bump();

            let name = self.read_name();
            if name.is_empty() {
                return Err(NmlError::parse("missing group name", self.line));
            }
            if name.eq_ignore_ascii_case("end") {
                return Err(NmlError::parse("group terminator outside group", self.line));
            }

            if style.is_none() {
                style = Some(if c == '$' {
                    GroupStyle::Dollar
                } else {
                    GroupStyle::Ampersand
                });
            }

            let group = self.parse_group_body()?;
            *nml.insert_group(&name) = group;
        }

        if let Some(style) = style {
            nml.set_style(style);
        }
        Ok(nml)
    }

    fn parse_group_body(&mut self) -> Result<NamelistGroup> {
        let mut group = NamelistGroup::new();

        loop {
            self.skip_blanks();
            let Some(c) = self.peek() else {
                return Err(NmlError::parse("unexpected end of file in group", self.line));
            };

            if c == '/' {
                self.bump();
                return Ok(group);
            }

            if c == '&' || c == '$' {
                self.bump();
                let name = self.read_name();
                if name.eq_ignore_ascii_case("end") {
                    return Ok(group);
                }
                return Err(NmlError::parse(
                    format!("group '{}' starts before the previous group ends", name),
                    self.line,
                ));
            }

            let name = self.read_name();
            if name.is_empty() {
                return Err(NmlError::parse(
                    format!("expected variable name, found '{}'", c),
                    self.line,
                ));
            }

            self.skip_blanks();
            if self.peek() == Some('(') {
                // Array index section like zz(1:5); values land in file order.
                while let Some(c) = self.bump() {
                    if c == ')' {
                        break;
                    }
                }
                self.skip_blanks();
            }

            if self.peek() != Some('=') {
                return Err(NmlError::parse(
                    format!("expected '=' after '{}'", name),
                    self.line,
                ));
            }
            self.bump();

            let value = self.read_values(&name)?;
            group.insert_value(&name, value);
        }
    }

    fn read_values(&mut self, var: &str) -> Result<NmlValue> {
        let mut values: Vec<NmlValue> = Vec::new();

        loop {
            self.skip_blanks();
            let Some(c) = self.peek() else { break };

            match c {
                '/' | '&' | '$' => break,
                ',' => {
                    self.bump();
                }
                '\'' | '"' => {
                    let s = self.read_quoted(c)?;
                    values.push(NmlValue::Character(s));
                }
                _ => {
                    let saved = (self.pos, self.line);
                    let token = self.read_bare_token();
                    if token.is_empty() {
                        return Err(NmlError::parse(
                            format!("unexpected character '{}'", c),
                            self.line,
                        ));
                    }
                    self.skip_blanks();
                    if self.peek() == Some('=') {
                        // The token was the next variable name, not a value.
                        (self.pos, self.line) = saved;
                        break;
                    }
                    let (count, value) = parse_repeat(&token)?;
                    for _ in 0..count {
                        values.push(value.clone());
                    }
                }
            }
        }

        match values.len() {
            0 => Err(NmlError::parse(
                format!("missing value for '{}'", var),
                self.line,
            )),
            1 => Ok(values.into_iter().next().unwrap()),
            _ => Ok(NmlValue::Array(values)),
        }
    }

    fn read_quoted(&mut self, quote: char) -> Result<String> {
        let start_line = self.line;
        self.bump();
        let mut out = String::new();

        loop {
            match self.bump() {
                Some(c) if c == quote => {
                    // Doubled quote is an escaped literal quote.
                    if self.peek() == Some(quote) {
                        self.bump();
                        out.push(quote);
                    } else {
                        return Ok(out);
                    }
                }
                Some(c) => out.push(c),
                None => {
                    return Err(NmlError::parse("unterminated string literal", start_line));
                }
            }
        }
    }

    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c.to_ascii_lowercase());
                self.bump();
            } else {
                break;
            }
        }
        name
    }

    fn read_bare_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, ',' | '/' | '!' | '&' | '$' | '=' | '\'' | '"') {
                break;
            }
            token.push(c);
            self.bump();
        }
        token
    }

    fn skip_blanks(&mut self) {
        while let Some(c) = self.peek() {
            if c == '!' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if let Some(c) = c {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ampersand_group() {
        let nml = parse_namelist("&data_nml x=1 y=2.0 z=.true. /").unwrap();
        let group = nml.get_group("data_nml").unwrap();
        assert_eq!(group.get_i64("x"), Some(1));
        assert_eq!(group.get_f64("y"), Some(2.0));
        assert_eq!(group.get_bool("z"), Some(true));
        assert_eq!(nml.style(), GroupStyle::Ampersand);
    }

    #[test]
    fn test_parse_dollar_group() {
        let text = " $MODEL_GRIDS\n    DTLONG = 30.,\n    EXPNME = 'BRAMS test',\n $END\n";
        let nml = parse_namelist(text).unwrap();
        assert_eq!(nml.style(), GroupStyle::Dollar);
        let group = nml.get_group("model_grids").unwrap();
        assert_eq!(group.get_f64("dtlong"), Some(30.0));
        assert_eq!(group.get_string("expnme"), Some("BRAMS test"));
    }

    #[test]
    fn test_parse_arrays_and_comments() {
        let text = r#"&post  ! output selection
    iplevs = 500, 400, 300, 200   ! pressure levels
    vp = 'topo', 'precip'
/"#;
        let nml = parse_namelist(text).unwrap();
        let group = nml.get_group("post").unwrap();
        assert_eq!(
            group.get("iplevs").unwrap(),
            &NmlValue::from(vec![500i64, 400, 300, 200])
        );
        assert_eq!(
            group.get("vp").unwrap(),
            &NmlValue::from(vec!["topo", "precip"])
        );
    }

    #[test]
    fn test_parse_multiline_array() {
        let text = "&grid\n  zz = 0.0, 100.0,\n       200.0, 350.0\n/";
        let nml = parse_namelist(text).unwrap();
        let group = nml.get_group("grid").unwrap();
        assert_eq!(group.get("zz").unwrap().array_len(), Some(4));
    }

    #[test]
    fn test_parse_repeat_expression() {
        let nml = parse_namelist("&opts gnu = 3*2.0 /").unwrap();
        let group = nml.get_group("opts").unwrap();
        assert_eq!(group.get("gnu").unwrap(), &NmlValue::from(vec![2.0, 2.0, 2.0]));
    }

    #[test]
    fn test_quoted_path_with_slash() {
        let nml = parse_namelist("&files prefix = './data/RAMSIN' /").unwrap();
        let group = nml.get_group("files").unwrap();
        assert_eq!(group.get_string("prefix"), Some("./data/RAMSIN"));
    }

    #[test]
    fn test_unterminated_group_is_error() {
        assert!(parse_namelist("&data_nml x=1").is_err());
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(parse_namelist("&data_nml x= /").is_err());
    }

    #[test]
    fn test_ampersand_end_terminator() {
        let nml = parse_namelist("&core dt = 150.0 &end").unwrap();
        assert_eq!(nml.get_group("core").unwrap().get_f64("dt"), Some(150.0));
    }
}
