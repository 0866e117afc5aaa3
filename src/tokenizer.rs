/// Splits an input line on the space character.
///
/// Only `' '` separates tokens; tabs and other whitespace stay inside them.
/// Each interior run of spaces yields empty tokens between its neighbours,
/// and the empty token left over at the end of the line is dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if ch == ' ' {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// True when a token sequence carries nothing to run.
pub fn is_blank(tokens: &[String]) -> bool {
    tokens.iter().all(|t| t.is_empty())
}
