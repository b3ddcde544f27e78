//! Fixed topic taxonomy for CS2040C notes

/// All valid topic names, in syllabus order.
pub const TOPICS: &[&str] = &[
    "SORTING",
    "LINKED_LIST",
    "STACK",
    "QUEUE",
    "HASH_TABLE",
    "HEAP",
    "UFDS",
    "BINARY_SEARCH_TREE",
    "GRAPH_STRUCTURES",
    "GRAPH_TRAVERSAL",
    "SHORTEST_PATH",
    "MINIMUM_SPANNING_TREE",
];

/// Lookup over the fixed set of topics.
///
/// Topic names are case-sensitive: `linked_list` is not a topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicRegistry;

impl TopicRegistry {
    pub fn is_valid_topic(topic: &str) -> bool {
        TOPICS.contains(&topic)
    }
}
