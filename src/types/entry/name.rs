use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

/// Whitespace as form validation sees it: no-break spaces and NEL are text,
/// the ASCII information separators are not.
fn is_space(c: char) -> bool {
    match c {
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_space)
}

/// Splits `name` into a first and last name.
///
/// The last run of word characters is the last name and everything before it
/// (trimmed) is the first name. Word and space characters are ASCII only.
/// Names the pattern can't split, including single words and names with
/// accented letters, are kept whole as the first name with an empty last name.
pub fn split(name: &str) -> FullName {
    lazy_static! {
        static ref REGEX: Regex =
            Regex::new(r"(?-u)^([\w\s]*?)\s*(\w*)\s*$").expect("Failed to compile regex");
    }

    let captures = REGEX.captures(name);
    let group = |i| {
        captures
            .as_ref()
            .and_then(|captures| captures.get(i))
            .map_or("", |group| group.as_str())
    };

    let first_name = group(1);

    if first_name.is_empty() {
        return FullName {
            first_name: name.to_owned(),
            last_name: String::new(),
        };
    }

    FullName {
        first_name: first_name.trim().to_owned(),
        last_name: group(2).to_owned(),
    }
}

pub fn is_flagged(name: &str) -> bool {
    lazy_static! {
        static ref REGEX: Regex =
            Regex::new(r"(?-u)^yorha[\s\w]*(9s|2b)[\s\w]*$").expect("Failed to compile regex");
    }

    REGEX.is_match(&name.to_lowercase())
}
