//! Community topic catalog
//!
//! Static lookup from topic name to the assets backing its detail card, plus
//! case-insensitive title search. A missing topic is a lookup miss, not a
//! fault.

use serde::Serialize;

/// Assets backing one community topic card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetails {
    pub title: &'static str,
    pub image: &'static str,
    pub pdf: &'static str,
    pub audio: &'static str,
}

const TOPICS: &[(&str, TopicDetails)] = &[
    (
        "AI",
        TopicDetails {
            title: "Artificial Intelligence",
            image: "assets/ai.jpg",
            pdf: "assets/ai.pdf",
            audio: "assets/ai.mp3",
        },
    ),
    (
        "Windmills",
        TopicDetails {
            title: "Windmills",
            image: "assets/windmills.jpg",
            pdf: "assets/windmills.pdf",
            audio: "assets/windmills.mp3",
        },
    ),
    (
        "Electric Vehicles",
        TopicDetails {
            title: "Electric Vehicles",
            image: "assets/electric-vehicles.jpg",
            pdf: "assets/electric-vehicles.pdf",
            audio: "assets/electric-vehicles.mp3",
        },
    ),
    (
        "Robotics",
        TopicDetails {
            title: "Robotics",
            image: "assets/robotics.jpg",
            pdf: "assets/robotics.pdf",
            audio: "assets/robotics.mp3",
        },
    ),
    (
        "Blockchain",
        TopicDetails {
            title: "Blockchain",
            image: "assets/blockchain.jpg",
            pdf: "assets/blockchain.pdf",
            audio: "assets/blockchain.mp3",
        },
    ),
    (
        "Space Exploration",
        TopicDetails {
            title: "Space Exploration",
            image: "assets/space-exploration.jpg",
            pdf: "assets/space-exploration.pdf",
            audio: "assets/space-exploration.mp3",
        },
    ),
    (
        "Quantum Computing",
        TopicDetails {
            title: "Quantum Computing",
            image: "assets/quantum-computing.jpg",
            pdf: "assets/quantum-computing.pdf",
            audio: "assets/quantum-computing.mp3",
        },
    ),
    (
        "Biotechnology",
        TopicDetails {
            title: "Biotechnology",
            image: "assets/biotechnology.jpg",
            pdf: "assets/biotechnology.pdf",
            audio: "assets/biotechnology.mp3",
        },
    ),
    (
        "Cybersecurity",
        TopicDetails {
            title: "Cybersecurity",
            image: "assets/cybersecurity.jpg",
            pdf: "assets/cybersecurity.pdf",
            audio: "assets/cybersecurity.mp3",
        },
    ),
];

/// Look up a topic by its exact name
pub fn lookup(name: &str) -> Option<&'static TopicDetails> {
    TOPICS.iter().find(|(n, _)| *n == name).map(|(_, d)| d)
}

/// All topics, in catalog order
pub fn all() -> Vec<&'static TopicDetails> {
    TOPICS.iter().map(|(_, d)| d).collect()
}

/// Case-insensitive substring search over topic titles
pub fn search(query: &str) -> Vec<&'static TopicDetails> {
    let query = query.to_lowercase();
    TOPICS
        .iter()
        .filter(|(_, d)| d.title.to_lowercase().contains(&query))
        .map(|(_, d)| d)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        let topic = lookup("AI").unwrap();
        assert_eq!(topic.title, "Artificial Intelligence");
        assert_eq!(topic.audio, "assets/ai.mp3");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("Gardening").is_none());
        // lookup is exact, not case-insensitive
        assert!(lookup("ai").is_none());
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().len(), 9);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search("quantum");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Quantum Computing");
    }

    #[test]
    fn test_search_matches_substrings() {
        let results = search("tech");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Biotechnology");
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        assert_eq!(search("").len(), 9);
    }
}
