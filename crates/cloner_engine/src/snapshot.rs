use std::collections::BTreeMap;

/// selector -> (property -> value)
pub type StyleMap = BTreeMap<String, BTreeMap<String, String>>;

/// Structural capture of a page at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedSnapshot {
    pub url: String,
    pub title: String,
    pub html_snippet: String,
    pub computed_styles: StyleMap,
    pub metadata: SnapshotMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotMetadata {
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
}

/// Builds a [`StyleMap`] from literal `(selector, [(property, value)])` rows.
pub fn style_map<'a, I, P>(rows: I) -> StyleMap
where
    I: IntoIterator<Item = (&'a str, P)>,
    P: IntoIterator<Item = (&'a str, &'a str)>,
{
    rows.into_iter()
        .map(|(selector, props)| {
            let props = props
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (selector.to_string(), props)
        })
        .collect()
}
