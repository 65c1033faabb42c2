use serde::{Deserialize, Serialize};

/// Summary shown after study material has been uploaded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub title: String,
    pub page_count: u32,
    pub word_count: u32,
    pub last_modified: String,
    pub main_topics: Vec<TopicSummary>,
    pub key_terms: Vec<KeyTerm>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub title: String,
    pub subtopics: Vec<String>,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}
