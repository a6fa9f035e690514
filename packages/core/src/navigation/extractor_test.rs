//! Tests for NavigationExtractor
//!
//! Tests cover:
//! - Eligibility rules (deleted, missing/empty metadata, temporary names)
//! - Position parsing and error reporting
//! - Stable ordering of duplicate positions
//! - Store error pass-through

#[cfg(test)]
mod tests {
    use crate::config::NavigationConfig;
    use crate::models::{NavigationEntry, ResourceNode, ResourceState};
    use crate::navigation::extractor::{parse_position, NavigationExtractor};
    use crate::navigation::NavigationError;
    use crate::store::{MemoryStore, ResourceStore};

    /// Helper: add a resource with navigation metadata
    fn add(store: &mut MemoryStore, node: ResourceNode, pos: &str, text: &str) -> ResourceNode {
        store.insert_with_nav(node.clone(), "navPos", pos, "navText", text);
        node
    }

    fn links(entries: &[NavigationEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.link.as_str()).collect()
    }

    #[test]
    fn test_sorts_by_position() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![
            add(&mut store, ResourceNode::folder("/a/"), "1", "A"),
            add(&mut store, ResourceNode::folder("/b/"), "0.5", "B"),
            add(&mut store, ResourceNode::file("/c.html"), "10", "C"),
            add(&mut store, ResourceNode::file("/d.html"), "2", "D"),
        ];

        let entries = NavigationExtractor::new(&store, &config)
            .extract(&nodes, "/index.html")
            .unwrap();

        assert_eq!(links(&entries), vec!["/b/", "/a/", "/d.html", "/c.html"]);
        assert_eq!(entries[0].text, "B");
        assert_eq!(entries[0].position, 0.5);
    }

    #[test]
    fn test_equal_positions_keep_store_order() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![
            add(&mut store, ResourceNode::file("/x.html"), "1", "X"),
            add(&mut store, ResourceNode::file("/y.html"), "0", "Y"),
            add(&mut store, ResourceNode::file("/z.html"), "1", "Z"),
            add(&mut store, ResourceNode::file("/w.html"), "1.0", "W"),
        ];
        let extractor = NavigationExtractor::new(&store, &config);

        let entries = extractor.extract(&nodes, "/").unwrap();
        assert_eq!(links(&entries), vec!["/y.html", "/x.html", "/z.html", "/w.html"]);

        // Permuting the tied inputs permutes the tied outputs the same way
        let permuted = vec![
            nodes[3].clone(),
            nodes[1].clone(),
            nodes[2].clone(),
            nodes[0].clone(),
        ];
        let entries = extractor.extract(&permuted, "/").unwrap();
        assert_eq!(links(&entries), vec!["/y.html", "/w.html", "/z.html", "/x.html"]);
    }

    #[test]
    fn test_skips_deleted_resources() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![
            add(
                &mut store,
                ResourceNode::folder("/gone/").with_state(ResourceState::Deleted),
                "1",
                "Gone",
            ),
            add(
                &mut store,
                ResourceNode::folder("/changed/").with_state(ResourceState::Changed),
                "2",
                "Changed",
            ),
            add(
                &mut store,
                ResourceNode::folder("/new/").with_state(ResourceState::New),
                "3",
                "New",
            ),
        ];

        let entries = NavigationExtractor::new(&store, &config)
            .extract(&nodes, "/")
            .unwrap();
        assert_eq!(links(&entries), vec!["/changed/", "/new/"]);
    }

    #[test]
    fn test_skips_missing_or_empty_metadata() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();

        let no_props = ResourceNode::file("/plain.html");
        store.insert(no_props.clone());

        let only_pos = ResourceNode::file("/pos.html");
        store.insert(only_pos.clone());
        store.set_property("/pos.html", "navPos", "1");

        let empty_text = add(&mut store, ResourceNode::file("/empty-text.html"), "1", "");
        let empty_pos = add(&mut store, ResourceNode::file("/empty-pos.html"), "", "Text");
        let ok = add(&mut store, ResourceNode::file("/ok.html"), "5", "Ok");

        let nodes = vec![no_props, only_pos, empty_text, empty_pos, ok];
        let entries = NavigationExtractor::new(&store, &config)
            .extract(&nodes, "/")
            .unwrap();
        assert_eq!(links(&entries), vec!["/ok.html"]);
    }

    #[test]
    fn test_temporary_resources_shown_only_when_requested() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig {
            temp_prefix: "tmp_".to_string(),
            ..Default::default()
        };
        let nodes = vec![
            add(&mut store, ResourceNode::folder("/a/"), "1", "A"),
            add(&mut store, ResourceNode::folder("/tmp_x/"), "2", "T"),
        ];
        let extractor = NavigationExtractor::new(&store, &config);

        let entries = extractor.extract(&nodes, "/a/index.html").unwrap();
        assert_eq!(links(&entries), vec!["/a/"]);

        let entries = extractor.extract(&nodes, "/tmp_x/").unwrap();
        assert_eq!(links(&entries), vec!["/a/", "/tmp_x/"]);
    }

    #[test]
    fn test_default_temp_prefix_is_tilde() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![add(&mut store, ResourceNode::file("/~draft.html"), "1", "Draft")];
        let extractor = NavigationExtractor::new(&store, &config);

        assert!(extractor.extract(&nodes, "/").unwrap().is_empty());
        assert_eq!(extractor.extract(&nodes, "/~draft.html").unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_position_is_an_input_error() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![
            add(&mut store, ResourceNode::file("/ok.html"), "1", "Ok"),
            add(&mut store, ResourceNode::file("/bad.html"), "first", "Bad"),
        ];

        let err = NavigationExtractor::new(&store, &config)
            .extract(&nodes, "/")
            .unwrap_err();
        match err {
            NavigationError::InvalidPosition { path, value } => {
                assert_eq!(path, "/bad.html");
                assert_eq!(value, "first");
            }
            other => panic!("expected InvalidPosition, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_position_on_ineligible_resource_is_ignored() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig::default();
        let nodes = vec![add(
            &mut store,
            ResourceNode::file("/bad.html").with_state(ResourceState::Deleted),
            "first",
            "Bad",
        )];

        let entries = NavigationExtractor::new(&store, &config)
            .extract(&nodes, "/")
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("/a", "1").unwrap(), 1.0);
        assert_eq!(parse_position("/a", " 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_position("/a", "-3").unwrap(), -3.0);
        assert_eq!(parse_position("/a", "1e2").unwrap(), 100.0);
        assert!(parse_position("/a", "NaN").is_err());
        assert!(parse_position("/a", "1,5").is_err());
        assert!(parse_position("/a", "   ").is_err());
    }

    #[test]
    fn test_custom_property_names() {
        let mut store = MemoryStore::new();
        let config = NavigationConfig {
            position_property: "NavPos".to_string(),
            text_property: "NavText".to_string(),
            ..Default::default()
        };
        let node = ResourceNode::folder("/a/");
        store.insert_with_nav(node.clone(), "NavPos", "1", "NavText", "A");

        let entries = NavigationExtractor::new(&store, &config)
            .extract(&[node], "/")
            .unwrap();
        assert_eq!(entries, vec![NavigationEntry::new("/a/", "A", 1.0)]);
    }

    struct FailingStore;

    impl ResourceStore for FailingStore {
        fn list_subfolders(&self, _path: &str) -> anyhow::Result<Vec<ResourceNode>> {
            Ok(Vec::new())
        }

        fn list_files(&self, _path: &str) -> anyhow::Result<Vec<ResourceNode>> {
            Ok(Vec::new())
        }

        fn read_property(&self, path: &str, _name: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("access denied: {path}")
        }
    }

    #[test]
    fn test_store_errors_propagate() {
        let config = NavigationConfig::default();
        let err = NavigationExtractor::new(&FailingStore, &config)
            .extract(&[ResourceNode::folder("/secret/")], "/")
            .unwrap_err();
        assert!(matches!(err, NavigationError::Store(_)));
        assert!(err.to_string().contains("access denied: /secret/"));
    }
}
