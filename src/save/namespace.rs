use std::collections::HashSet;

/// The namespace declarations written on one start tag.
///
/// A table lives for the duration of a single start tag. Declarations made by
/// ancestors are not visible in it.
#[derive(Debug, Default)]
pub struct NamespaceTable<'a> {
    /// namespace URIs declared so far
    declared: HashSet<&'a str>,
}

impl<'a> NamespaceTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `uri` is declared on this start tag.
    pub fn declare(&mut self, uri: &'a str) {
        self.declared.insert(uri);
    }

    pub fn is_declared(&self, uri: &str) -> bool {
        self.declared.contains(uri)
    }

    /// Check if an attribute in `uri` needs its own declaration on an element in
    /// `owner_uri`.
    pub fn needs_declaration(&self, uri: &str, owner_uri: Option<&str>) -> bool {
        !uri.is_empty() && owner_uri != Some(uri) && !self.is_declared(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_table_test() {
        let mut table = NamespaceTable::new();
        assert!(table.needs_declaration("cp_ns", Some("hoge")));
        assert!(!table.needs_declaration("hoge", Some("hoge")));
        assert!(!table.needs_declaration("", None));

        table.declare("cp_ns");
        assert!(table.is_declared("cp_ns"));
        assert!(!table.needs_declaration("cp_ns", Some("hoge")));

        table.declare("hoge");
        assert!(table.is_declared("hoge"));
        assert!(!table.is_declared("fuga"));
    }
}
