/*!
 * Camel-case boundary splitting.
 *
 * Words such as `HelloWorld` or `parseHTTPRequest` are looked up unit by
 * unit (`parseHTTP`, `Request`). A unit starts at an uppercase letter
 * followed by a lowercase one, or at a trailing uppercase letter preceded
 * by a lowercase one. Runs of capitals stay together.
 */

/// Whether the character at `index` opens a new unit
fn is_boundary(chars: &[char], index: usize) -> bool {
    if !chars[index].is_uppercase() {
        return false;
    }

    let last = chars.len() - 1;
    if index < last {
        return chars[index + 1].is_lowercase();
    }

    // trailing capital after a lowercase letter: "fooB" -> "foo", "B"
    index > 0 && chars[index - 1].is_lowercase()
}

/// Split a word into lookup units; the units concatenate back to `word`
pub fn split_word(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        if is_boundary(&chars, index) && !current.is_empty() {
            units.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        units.push(current);
    }

    units
}
