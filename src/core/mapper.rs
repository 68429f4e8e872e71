//! Native script text -> ordered code sequence

use super::mapping::LanguageMapping;

/// Map each recognized character (or cluster) of `script_text` to its code
///
/// Longer keys win: at each position clusters up to the table's longest key
/// are tried before the single character. Characters with no entry
/// (vowel signs, virama, punctuation, digits) produce nothing.
pub fn map_to_values(script_text: &str, mapping: &LanguageMapping) -> Vec<String> {
    let chars: Vec<char> = script_text.chars().collect();
    let mut values = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let longest = mapping.max_key_chars().min(chars.len() - i);
        let matched = (1..=longest).rev().find_map(|n| {
            let key: String = chars[i..i + n].iter().collect();
            mapping.get(&key).map(|code| (n, code))
        });

        match matched {
            Some((n, code)) => {
                values.push(code.to_string());
                i += n;
            }
            None => i += 1,
        }
    }

    values
}
