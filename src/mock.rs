//! Fixture data
//!
//! Hardcoded payloads standing in for the backend: the exam catalogue, the
//! machine-learning practice set, the uploaded document's summary, landing
//! page copy, and the catalogue/leaderboard/user data the fixture server
//! answers with.

use crate::models::{
    Activity, ActivityKind, DocumentSummary, Exam, Feature, KeyTerm, LeaderboardEntry, Question,
    Subject, Testimonial, Topic, TopicSummary, User, UserRank, UserStats,
};

/// Id of the user the fixture server treats as logged in
pub const CURRENT_USER_ID: &str = "u-current";

pub fn exams() -> Vec<Exam> {
    vec![
        Exam::new(1, "Machine Learning Basics", 60),
        Exam::new(2, "Data Structures and Algorithms", 90),
        Exam::new(3, "Introduction to AI", 120),
    ]
}

fn options(items: [&str; 4]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The ten-question practice set
pub fn practice_questions() -> Vec<Question> {
    vec![
        Question::new(
            "1",
            "Which of the following is NOT a characteristic of supervised learning?",
            options([
                "Uses labeled data for training",
                "Learns patterns without explicit labels",
                "Can be used for classification problems",
                "Requires a target variable",
            ]),
            1,
        )
        .category("Supervised Learning")
        .explanation("Supervised learning uses labeled training data with known outcomes. Learning without explicit labels is a characteristic of unsupervised learning.")
        .hint("Think about what distinguishes supervised learning from unsupervised learning."),
        Question::new(
            "2",
            "Which algorithm is commonly used for regression problems?",
            options(["K-means", "Linear Regression", "DBSCAN", "Principal Component Analysis"]),
            1,
        )
        .category("Supervised Learning")
        .explanation("Linear Regression is a supervised learning algorithm used for predicting continuous values in regression problems.")
        .hint("Consider which algorithm is designed to predict numerical values rather than categories."),
        Question::new(
            "3",
            "What is the main purpose of cross-validation in supervised learning?",
            options([
                "To speed up model training",
                "To reduce the need for labeled data",
                "To prevent overfitting",
                "To visualize high-dimensional data",
            ]),
            2,
        )
        .category("Supervised Learning")
        .explanation("Cross-validation helps prevent overfitting by evaluating how the model performs on different subsets of data.")
        .hint("It's related to making sure your model generalizes well to new data."),
        Question::new(
            "4",
            "K-means is an example of which type of unsupervised learning?",
            options([
                "Dimensionality reduction",
                "Clustering",
                "Association rule learning",
                "Density estimation",
            ]),
            1,
        )
        .category("Unsupervised Learning")
        .explanation("K-means is a clustering algorithm that groups similar data points into clusters.")
        .hint("It divides data into groups based on similarity."),
        Question::new(
            "5",
            "What is the primary purpose of Principal Component Analysis (PCA)?",
            options([
                "Classification of data",
                "Regression analysis",
                "Dimensionality reduction",
                "Reinforcement learning",
            ]),
            2,
        )
        .category("Unsupervised Learning")
        .explanation("PCA is used for dimensionality reduction while preserving as much variance in the data as possible.")
        .hint("It's commonly used when you have too many features and want to reduce them."),
        Question::new(
            "6",
            "Which statement about unsupervised learning is correct?",
            options([
                "It requires labeled training data",
                "It always performs better than supervised learning",
                "It works with unlabeled data",
                "It can't be used for clustering",
            ]),
            2,
        )
        .category("Unsupervised Learning")
        .explanation("Unsupervised learning works with unlabeled data to find patterns and structures without known outcomes.")
        .hint("Think about what kind of input data unsupervised learning uses."),
        Question::new(
            "7",
            "In reinforcement learning, what is an agent?",
            options([
                "The training dataset",
                "The decision-making entity that interacts with the environment",
                "The reward function",
                "The validation set",
            ]),
            1,
        )
        .category("Reinforcement Learning")
        .explanation("In reinforcement learning, the agent is the decision-making entity that interacts with the environment to learn optimal behavior.")
        .hint("It's the part of the system that makes decisions and learns from feedback."),
        Question::new(
            "8",
            "What guides the learning process in reinforcement learning?",
            options([
                "Labeled examples",
                "Clustering similarity",
                "Rewards and penalties",
                "Feature extraction",
            ]),
            2,
        )
        .category("Reinforcement Learning")
        .explanation("Reinforcement learning uses rewards and penalties to guide the learning process, encouraging desirable behaviors and discouraging undesirable ones.")
        .hint("Think about how the algorithm knows if it's doing well or poorly."),
        Question::new(
            "9",
            "Which of the following is an application of reinforcement learning?",
            options([
                "Email spam detection",
                "Customer segmentation",
                "Image classification",
                "Game playing AI",
            ]),
            3,
        )
        .category("Reinforcement Learning")
        .explanation("Game playing AI is a common application of reinforcement learning, where agents learn optimal strategies through repeated interactions with the game environment.")
        .hint("Think about applications where an AI needs to make sequential decisions."),
        Question::new(
            "10",
            "Which learning paradigm would be most appropriate for a self-driving car?",
            options([
                "Only supervised learning",
                "Only unsupervised learning",
                "Only reinforcement learning",
                "A combination of supervised and reinforcement learning",
            ]),
            3,
        )
        .category("Mixed")
        .explanation("Self-driving cars typically use supervised learning for perception tasks (like object detection) and reinforcement learning for decision-making and control.")
        .hint("Consider the different tasks a self-driving car needs to perform."),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Summary shown after an upload completes
pub fn document_summary() -> DocumentSummary {
    DocumentSummary {
        title: "Introduction to Machine Learning".to_string(),
        page_count: 42,
        word_count: 15240,
        last_modified: "2025-03-20".to_string(),
        main_topics: vec![
            TopicSummary {
                title: "Supervised Learning".to_string(),
                subtopics: strings(&[
                    "Classification Algorithms",
                    "Regression Techniques",
                    "Evaluation Metrics",
                ]),
                key_points: strings(&[
                    "Supervised learning uses labeled data to train models",
                    "Common algorithms include decision trees, SVMs, and neural networks",
                    "Cross-validation helps prevent overfitting",
                ]),
            },
            TopicSummary {
                title: "Unsupervised Learning".to_string(),
                subtopics: strings(&[
                    "Clustering Methods",
                    "Dimensionality Reduction",
                    "Anomaly Detection",
                ]),
                key_points: strings(&[
                    "Unsupervised learning works with unlabeled data",
                    "K-means is a popular clustering algorithm",
                    "PCA helps reduce feature dimensions while preserving variance",
                ]),
            },
            TopicSummary {
                title: "Reinforcement Learning".to_string(),
                subtopics: strings(&["Q-Learning", "Policy Gradients", "Multi-armed Bandits"]),
                key_points: strings(&[
                    "RL involves agents learning through interaction with environments",
                    "Rewards and penalties guide the learning process",
                    "Applications include game playing and robotics",
                ]),
            },
        ],
        key_terms: vec![
            KeyTerm {
                term: "Overfitting".to_string(),
                definition: "When a model learns the training data too well, including noise and outliers".to_string(),
            },
            KeyTerm {
                term: "Feature Engineering".to_string(),
                definition: "The process of selecting and transforming variables for model training".to_string(),
            },
            KeyTerm {
                term: "Hyperparameter".to_string(),
                definition: "Model configuration settings that are not learned during training".to_string(),
            },
            KeyTerm {
                term: "Cross-validation".to_string(),
                definition: "Technique to evaluate model performance on unseen data".to_string(),
            },
            KeyTerm {
                term: "Gradient Descent".to_string(),
                definition: "Optimization algorithm used to minimize the loss function".to_string(),
            },
        ],
        summary: "This document provides a comprehensive introduction to machine learning concepts, methodologies, and applications. It covers the three main paradigms: supervised learning, unsupervised learning, and reinforcement learning. The material explains fundamental algorithms, evaluation techniques, and practical considerations for implementing machine learning solutions. Case studies and examples illustrate real-world applications across various domains including healthcare, finance, and computer vision. The document also addresses common challenges in machine learning projects and strategies to overcome them.".to_string(),
    }
}

/// Dashboard "Top Performers" placeholder rows
pub fn top_performers() -> Vec<LeaderboardEntry> {
    (1..=3)
        .map(|n| LeaderboardEntry {
            user: User::new(format!("top-{}", n), "John Doe").score(950),
            score: 950,
        })
        .collect()
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            name: "Intelligent Content Analysis",
            description: "Our AI analyzes your uploaded study materials to understand key concepts and learning objectives.",
            icon: "📖",
        },
        Feature {
            name: "AI Chat Support",
            description: "Get instant, contextual help from our AI assistant that understands your specific course materials.",
            icon: "💬",
        },
        Feature {
            name: "Adaptive Exercise Generation",
            description: "Practice with questions tailored to your level and curriculum that adapt as you improve.",
            icon: "✏️",
        },
        Feature {
            name: "Exam Simulation",
            description: "Experience full-length practice exams that mimic real test conditions and question styles.",
            icon: "📄",
        },
        Feature {
            name: "Personalized Learning",
            description: "Receive customized explanations and summaries of key concepts based on your learning style.",
            icon: "🧠",
        },
        Feature {
            name: "Progress Tracking",
            description: "Monitor your improvement with detailed analytics and targeted recommendations.",
            icon: "📊",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            content: "StudyBuddy AI transformed my study routine. The personalized practice questions helped me identify weak areas I didn't even know I had.",
            author: "Jamie Chen",
            role: "Computer Science Student",
            avatar: "/avatars/mn.jpg",
        },
        Testimonial {
            content: "As a medical student, I have mountains of material to learn. StudyBuddy AI helped me organize concepts and create perfect flashcards automatically.",
            author: "Priya Sharma",
            role: "Medical Student",
            avatar: "/avatars/wm.jpg",
        },
        Testimonial {
            content: "The exam simulation feature is incredibly realistic. It helped me overcome test anxiety and improved my scores dramatically.",
            author: "Marcus Johnson",
            role: "MBA Candidate",
            avatar: "/avatars/mn2.jpg",
        },
    ]
}

// ---- Catalogue ----

pub fn subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: "machine-learning".to_string(),
            name: "Machine Learning".to_string(),
            description: "Supervised, unsupervised and reinforcement learning".to_string(),
            progress: Some(65),
        },
        Subject {
            id: "data-structures".to_string(),
            name: "Data Structures".to_string(),
            description: "Trees, graphs and the algorithms that walk them".to_string(),
            progress: Some(30),
        },
        Subject {
            id: "statistics".to_string(),
            name: "Statistics".to_string(),
            description: "Probability and statistical inference".to_string(),
            progress: None,
        },
    ]
}

pub fn subject(id: &str) -> Option<Subject> {
    subjects().into_iter().find(|s| s.id == id)
}

fn topic(id: &str, name: &str) -> Topic {
    Topic {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Topics of a subject; `None` for an unknown subject
pub fn topics(subject_id: &str) -> Option<Vec<Topic>> {
    let topics = match subject_id {
        "machine-learning" => vec![
            topic("ml-supervised", "Supervised Learning"),
            topic("ml-unsupervised", "Unsupervised Learning"),
            topic("ml-reinforcement", "Reinforcement Learning"),
        ],
        "data-structures" => vec![
            topic("ds-trees", "Trees"),
            topic("ds-graphs", "Graphs"),
        ],
        "statistics" => vec![
            topic("stats-probability", "Probability"),
            topic("stats-inference", "Statistical Inference"),
        ],
        _ => return None,
    };
    Some(topics)
}

/// Quiz questions for a topic; `None` for an unknown topic. A known topic
/// may have no questions.
pub fn questions_for_topic(topic_id: &str) -> Option<Vec<Question>> {
    let by_category = |category: &str| {
        practice_questions()
            .into_iter()
            .filter(|q| q.category == category)
            .collect::<Vec<_>>()
    };

    let questions = match topic_id {
        "ml-supervised" => by_category("Supervised Learning"),
        "ml-unsupervised" => by_category("Unsupervised Learning"),
        "ml-reinforcement" => by_category("Reinforcement Learning"),
        "ds-trees" => vec![
            Question::new(
                "ds-t1",
                "What is the height of a balanced binary search tree with n nodes?",
                options(["O(1)", "O(log n)", "O(n)", "O(n log n)"]),
                1,
            )
            .category("Trees")
            .explanation("Balancing keeps both subtrees within one level of each other, so height grows logarithmically."),
            Question::new(
                "ds-t2",
                "Which traversal visits a binary search tree's keys in sorted order?",
                options(["Pre-order", "Post-order", "In-order", "Level-order"]),
                2,
            )
            .category("Trees")
            .explanation("In-order traversal visits the left subtree, the node, then the right subtree."),
        ],
        "ds-graphs" => vec![
            Question::new(
                "ds-g1",
                "Which algorithm finds shortest paths from one source with non-negative edge weights?",
                options(["Kruskal", "Dijkstra", "Prim", "Topological sort"]),
                1,
            )
            .category("Graphs")
            .explanation("Dijkstra's algorithm greedily settles the closest unsettled vertex."),
            Question::new(
                "ds-g2",
                "Breadth-first search is typically implemented with which structure?",
                options(["Stack", "Heap", "Queue", "Hash map"]),
                2,
            )
            .category("Graphs"),
        ],
        "stats-probability" => vec![Question::new(
            "st-p1",
            "What is the probability of rolling a sum of 7 with two fair dice?",
            options(["1/12", "1/6", "1/4", "7/36"]),
            1,
        )
        .category("Probability")
        .explanation("Six of the 36 equally likely outcomes sum to 7.")],
        "stats-inference" => Vec::new(),
        _ => return None,
    };
    Some(questions)
}

// ---- Leaderboard and user ----

const LEADERBOARD_NAMES: [&str; 25] = [
    "Jamie Chen",
    "Priya Sharma",
    "Marcus Johnson",
    "Sofia Rossi",
    "Liam O'Brien",
    "Aisha Bello",
    "Noah Kim",
    "Mia Müller",
    "Ethan Park",
    "Zara Ahmed",
    "Lucas Silva",
    "Hana Suzuki",
    "Omar Haddad",
    "Chloe Martin",
    "Mateo García",
    "Ava Novak",
    "Ravi Patel",
    "Ingrid Larsen",
    "Kwame Mensah",
    "Elena Popescu",
    "Diego Torres",
    "Yuki Tanaka",
    "Fatima Zahra",
    "Alex Morgan",
    "Sam Rivera",
];

/// Ranked entries for a subject, best first; `None` for an unknown subject
pub fn leaderboard(subject_id: &str) -> Option<Vec<LeaderboardEntry>> {
    let subject = subject(subject_id)?;
    let offset = (subject.name.len() as u32 % 5) * 10;

    Some(
        LEADERBOARD_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let score = 980 + offset - (i as u32) * 25;
                let id = if *name == "Alex Morgan" {
                    CURRENT_USER_ID.to_string()
                } else {
                    format!("u-{}", i + 1)
                };
                let mut user = User::new(id, *name).score(score);
                if i < 3 {
                    user = user.picture(format!("/avatars/top-{}.jpg", i + 1));
                }
                LeaderboardEntry { user, score }
            })
            .collect(),
    )
}

/// Rank of the current user on a subject's leaderboard
pub fn user_rank(subject_id: &str) -> Option<UserRank> {
    let board = leaderboard(subject_id)?;
    let position = board
        .iter()
        .position(|entry| entry.user.id == CURRENT_USER_ID)?;
    Some(UserRank {
        rank: position as u32 + 1,
    })
}

pub fn profile() -> User {
    User::new(CURRENT_USER_ID, "Alex Morgan").score(405)
}

pub fn activity() -> Vec<Activity> {
    vec![
        Activity {
            kind: ActivityKind::Quiz,
            description: "Completed Supervised Learning quiz with 80%".to_string(),
            timestamp: Some("2 hours ago".to_string()),
        },
        Activity {
            kind: ActivityKind::Note,
            description: "Uploaded Introduction to Machine Learning".to_string(),
            timestamp: Some("Yesterday".to_string()),
        },
        Activity {
            kind: ActivityKind::Other,
            description: "Studied for 45 minutes".to_string(),
            timestamp: Some("Yesterday".to_string()),
        },
        Activity {
            kind: ActivityKind::Quiz,
            description: "Completed Trees quiz with 50%".to_string(),
            timestamp: Some("3 days ago".to_string()),
        },
        Activity {
            kind: ActivityKind::Note,
            description: "Reviewed Graphs key terms".to_string(),
            timestamp: Some("4 days ago".to_string()),
        },
        Activity {
            kind: ActivityKind::Quiz,
            description: "Completed Probability quiz with 100%".to_string(),
            timestamp: Some("1 week ago".to_string()),
        },
    ]
}

pub fn stats() -> UserStats {
    UserStats {
        questions_answered: 148,
        topics_completed: 6,
        study_time: 23,
        streak: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_set() {
        let questions = practice_questions();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.correct_answer < q.options.len()));
        assert!(questions.iter().all(|q| q.hint.is_some() && q.explanation.is_some()));
    }

    #[test]
    fn test_document_summary() {
        let summary = document_summary();
        assert_eq!(summary.page_count, 42);
        assert_eq!(summary.word_count, 15240);
        assert_eq!(summary.main_topics.len(), 3);
        assert_eq!(summary.key_terms.len(), 5);
    }

    #[test]
    fn test_every_topic_resolves() {
        for subject in subjects() {
            for topic in topics(&subject.id).unwrap() {
                assert!(questions_for_topic(&topic.id).is_some(), "{}", topic.id);
            }
        }
        assert_eq!(questions_for_topic("stats-inference"), Some(Vec::new()));
        assert_eq!(topics("nope"), None);
    }

    #[test]
    fn test_leaderboard_is_descending_and_ranks_current_user_past_podium() {
        let board = leaderboard("machine-learning").unwrap();
        assert_eq!(board.len(), 25);
        assert!(board.windows(2).all(|w| w[0].score > w[1].score));

        let rank = user_rank("machine-learning").unwrap().rank;
        assert_eq!(rank, 24);
        assert_eq!(board[rank as usize - 1].user.name, profile().name);
    }

    #[test]
    fn test_top_performers_placeholder() {
        let top = top_performers();
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|e| e.user.name == "John Doe" && e.score == 950));
    }
}
