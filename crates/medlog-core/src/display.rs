//! Display helpers.

/// Turn a slug like `baria-ddz-studie` into `Baria Ddz Studie`.
#[must_use]
pub fn beautify_name(slug: &str) -> String {
    slug.replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::beautify_name;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(beautify_name("baria-ddz-studie"), "Baria Ddz Studie");
        assert_eq!(beautify_name("plis"), "Plis");
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(beautify_name("a--b"), "A  B");
        assert_eq!(beautify_name(""), "");
    }
}
