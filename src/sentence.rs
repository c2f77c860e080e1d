/*
    Turns raw sentences into the tokens the parser works on
*/

const PUNCTUATION: &str = ",.;:!?\"'()[]{}";

// Lower-cases, turns punctuation into spaces and splits on whitespace
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence.trim()
        .to_lowercase()
        .chars()
        .map(|c| if PUNCTUATION.contains(c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
