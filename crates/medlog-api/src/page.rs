use serde::Deserialize;

/// List endpoints answer either with a bare array or with a paginated
/// envelope (`total_count`, `offset`, `count`, `items`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Page { items: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Page { items } | Self::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_shapes() {
        let page: Listing<u8> =
            serde_json::from_str(r#"{"total_count": 2, "offset": 0, "count": 2, "items": [1, 2]}"#)
                .unwrap();
        assert_eq!(page.into_items(), vec![1, 2]);
        let plain: Listing<u8> = serde_json::from_str("[3]").unwrap();
        assert_eq!(plain.into_items(), vec![3]);
    }
}
