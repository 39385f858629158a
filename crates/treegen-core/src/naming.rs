/// Derives the TitleCase identifier of a snake_case node name by splitting
/// on `_` and upper-casing the first character of every token.
pub fn title_case(snake_case_name: &str) -> String {
    let mut title = String::with_capacity(snake_case_name.len());
    for token in snake_case_name.split('_') {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title
}
