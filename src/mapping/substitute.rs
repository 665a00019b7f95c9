//! Single-scan substitution over a mapping table.

use super::MappingTable;

/// Apply `table` to `input` in one left-to-right scan.
///
/// At each position the longest matching pattern is replaced and the cursor skips past
/// it; a code unit that starts no pattern is copied unchanged. Every input code unit is
/// consumed exactly once, so the function is total: empty input gives empty output and
/// text the table knows nothing about comes back as-is.
pub fn apply(table: &MappingTable, input: &str) -> String {
    if input.is_empty() || table.is_empty() {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len() + input.len() / 2);
    let mut cursor = 0;

    while cursor < chars.len() {
        match table.longest_match(&chars[cursor..]) {
            Some((consumed, replacement)) => {
                output.push_str(replacement);
                cursor += consumed;
            },
            None => {
                output.push(chars[cursor]);
                cursor += 1;
            },
        }
    }

    output
}
