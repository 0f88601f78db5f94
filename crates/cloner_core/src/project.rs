use std::collections::BTreeMap;

/// A generated codebase: relative file path -> source text.
///
/// The primary path is the path of the first entry the generator returned.
/// It is remembered separately because the mapping itself is ordered by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedProject {
    files: BTreeMap<String, String>,
    primary_path: Option<String>,
}

impl GeneratedProject {
    /// Builds a project from `(path, content)` pairs in response order.
    /// A repeated path overwrites the earlier content (last write wins).
    pub fn from_entries<I, P, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let mut project = Self::default();
        for (path, content) in entries {
            let path = path.into();
            if project.primary_path.is_none() {
                project.primary_path = Some(path.clone());
            }
            project.files.insert(path, content.into());
        }
        project
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    pub fn primary_path(&self) -> Option<&str> {
        self.primary_path.as_deref()
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replaces the content of an existing entry. Unknown paths are left alone.
    pub(crate) fn replace_content(&mut self, path: &str, content: String) -> bool {
        match self.files.get_mut(path) {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }
}
