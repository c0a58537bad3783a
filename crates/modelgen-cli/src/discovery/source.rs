//! Extraction of class descriptions from a single C# source text.
//!
//! The scanner is shallow: it splits the text at `{`, `}` and `;`,
//! classifies the header in front of every opening brace, and keeps a stack of
//! open blocks so that properties land on the innermost enclosing type.

use modelgen_core::{ClassDescriptor, PropertyDescriptor};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Safe: literal pattern
static NAMESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^namespace\s+([\w.]+)$").expect("valid namespace regex"));

#[allow(clippy::expect_used)] // Safe: literal pattern
static TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((?:(?:public|internal|private|protected|static|sealed|abstract|partial|readonly|ref|file|unsafe|new)\s+)*)(record(?:\s+(?:class|struct))?|class|struct|interface|enum)\s+(@?\w+)",
    )
    .expect("valid type regex")
});

#[allow(clippy::expect_used)] // Safe: literal pattern
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^public\s+((?:(?:static|virtual|override|required|new|sealed|abstract)\s+)*)([\w.:]+(?:\s*<[\w\s.,:<>?\[\]]*>)?(?:\s*\[[\s,]*\])*\??)\s+(@?\w+)$",
    )
    .expect("valid property regex")
});

#[allow(clippy::expect_used)] // Safe: literal pattern
static ATTRIBUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\[[^\]]*\]\s*)+").expect("valid attribute regex"));

/// A type declaration found in one source text.
#[derive(Debug, Clone)]
pub(crate) struct Declaration {
    pub class: ClassDescriptor,
    /// Declared with the `partial` modifier
    pub partial: bool,
}

/// An open block while scanning.
#[derive(Debug)]
enum Block {
    Namespace(String),
    /// Index into the discovered classes.
    Type(usize),
    /// Index into the discovered classes and offset where the body starts.
    Enum(usize, usize),
    Other,
}

/// Parse C# source text and return its classes, records, structs and enums in
/// declaration order.
pub fn parse_source(source: &str) -> Vec<ClassDescriptor> {
    parse_declarations(source)
        .into_iter()
        .map(|declaration| declaration.class)
        .collect()
}

/// Like [`parse_source`], keeping whether each type was declared `partial`.
pub(crate) fn parse_declarations(source: &str) -> Vec<Declaration> {
    let text = blank_comments_and_literals(source);
    let mut classes: Vec<Declaration> = Vec::new();
    let mut stack: Vec<Block> = Vec::new();
    let mut file_namespace: Option<String> = None;
    let mut segment_start = 0;

    for (offset, c) in text.char_indices() {
        match c {
            '{' => {
                let header = normalize_header(&text[segment_start..offset]);
                let block = open_block(
                    &header,
                    &stack,
                    file_namespace.as_deref(),
                    &mut classes,
                    offset + 1,
                );
                stack.push(block);
                segment_start = offset + 1;
            }
            '}' => {
                if let Some(Block::Enum(index, body_start)) = stack.pop() {
                    classes[index].class.enum_values =
                        parse_enum_members(&text[body_start..offset]);
                }
                segment_start = offset + 1;
            }
            ';' => {
                let statement = normalize_header(&text[segment_start..offset]);
                if stack.iter().all(|b| matches!(b, Block::Namespace(_))) {
                    if let Some(caps) = NAMESPACE_RE.captures(&statement) {
                        file_namespace = Some(caps[1].to_string());
                    }
                }
                segment_start = offset + 1;
            }
            _ => {}
        }
    }

    classes
}

/// Classify the header in front of an opening brace and record any declaration.
fn open_block(
    header: &str,
    stack: &[Block],
    file_namespace: Option<&str>,
    classes: &mut Vec<Declaration>,
    body_start: usize,
) -> Block {
    if let Some(caps) = NAMESPACE_RE.captures(header) {
        return Block::Namespace(caps[1].to_string());
    }

    if let Some(caps) = TYPE_RE.captures(header) {
        let partial = caps[1].split_whitespace().any(|m| m == "partial");
        let name = caps[3].trim_start_matches('@').to_string();
        let namespace = enclosing_namespace(stack, file_namespace);
        let declare = |class: ClassDescriptor| Declaration {
            class: class.with_namespace(namespace),
            partial,
        };
        return match &caps[2] {
            "interface" => Block::Other,
            "enum" => {
                classes.push(declare(ClassDescriptor::enumeration(name, Vec::new())));
                Block::Enum(classes.len() - 1, body_start)
            }
            _ => {
                classes.push(declare(ClassDescriptor::new(name)));
                Block::Type(classes.len() - 1)
            }
        };
    }

    if let Some(caps) = PROPERTY_RE.captures(header) {
        let modifiers = &caps[1];
        if let Some(Block::Type(index)) = stack.last() {
            if !modifiers.split_whitespace().any(|m| m == "static") {
                classes[*index].class.properties.push(PropertyDescriptor::new(
                    caps[3].trim_start_matches('@'),
                    collapse_whitespace(&caps[2]),
                ));
            }
        }
        return Block::Other;
    }

    Block::Other
}

fn enclosing_namespace(stack: &[Block], file_namespace: Option<&str>) -> String {
    let mut parts: Vec<&str> = file_namespace.into_iter().collect();
    parts.extend(stack.iter().filter_map(|b| match b {
        Block::Namespace(ns) => Some(ns.as_str()),
        _ => None,
    }));
    parts.join(".")
}

/// Member names of an enum body, initializers and attributes removed.
fn parse_enum_members(body: &str) -> Vec<String> {
    body.split(',')
        .map(|member| {
            let member = ATTRIBUTES_RE.replace(member.trim(), "");
            member.split('=').next().unwrap_or_default().trim().to_string()
        })
        .filter(|member| !member.is_empty())
        .collect()
}

/// Trim a header, drop preprocessor lines and leading attributes, and collapse
/// whitespace runs.
fn normalize_header(raw: &str) -> String {
    let code: Vec<&str> = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();
    let collapsed = collapse_whitespace(&code.join("\n"));
    ATTRIBUTES_RE.replace(&collapsed, "").trim().to_string()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace comments and the contents of string and char literals with spaces.
///
/// Byte offsets and line breaks are preserved, so braces inside literals or
/// comments never reach the block scanner.
fn blank_comments_and_literals(source: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        Str,
        VerbatimStr,
        /// Raw string literal closed by this many quotes
        RawStr(usize),
        Char,
    }

    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut chars = source.chars().peekable();

    let blank = |out: &mut String, c: char| {
        if c == '\n' {
            out.push('\n');
        } else {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        }
    };

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                }
                '"' => {
                    let verbatim = out.ends_with('@') || out.ends_with("@$");
                    let quotes = 1 + count_quotes(&mut chars);
                    out.extend(std::iter::repeat_n('"', quotes));
                    state = match quotes {
                        1 if verbatim => State::VerbatimStr,
                        1 => State::Str,
                        // empty literal
                        2 => State::Code,
                        n => State::RawStr(n),
                    };
                }
                '\'' => {
                    out.push('\'');
                    state = State::Char;
                }
                _ => out.push(c),
            },
            State::LineComment => {
                blank(&mut out, c);
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::Str | State::Char => {
                let quote = if state == State::Str { '"' } else { '\'' };
                if c == '\\' {
                    blank(&mut out, c);
                    if let Some(escaped) = chars.next() {
                        blank(&mut out, escaped);
                    }
                } else if c == quote || c == '\n' {
                    out.push(c);
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::RawStr(delimiter) => {
                if c == '"' {
                    let quotes = 1 + count_quotes(&mut chars);
                    let fill = if quotes >= delimiter { '"' } else { ' ' };
                    out.extend(std::iter::repeat_n(fill, quotes));
                    if quotes >= delimiter {
                        state = State::Code;
                    }
                } else {
                    blank(&mut out, c);
                }
            }
            State::VerbatimStr => {
                if c == '"' && chars.peek() == Some(&'"') {
                    chars.next();
                    out.push_str("  ");
                } else if c == '"' {
                    out.push('"');
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
        }
    }

    out
}

/// Consume a run of `"` and return its length.
fn count_quotes(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> usize {
    let mut count = 0;
    while chars.next_if_eq(&'"').is_some() {
        count += 1;
    }
    count
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
