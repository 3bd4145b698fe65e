//! The default question set installed the first time a store is opened.

use crate::model::Question;
use chrono::{DateTime, Utc};

pub const SEED_COUNT: u64 = 5;

struct SeedEntry {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
    category: &'static str,
    difficulty: &'static str,
}

const SEED: [SeedEntry; SEED_COUNT as usize] = [
    SeedEntry {
        question: "What does TCP stand for in network protocols?",
        options: [
            "Transfer Control Protocol",
            "Transmission Control Protocol",
            "Transport Communication Protocol",
            "Terminal Connection Protocol",
        ],
        correct_answer: 1,
        category: "Computer Networks",
        difficulty: "Basic",
    },
    SeedEntry {
        question: "Which encryption algorithm is considered unbreakable when implemented correctly?",
        options: ["AES-256", "RSA-2048", "One-Time Pad", "DES"],
        correct_answer: 2,
        category: "Cryptography",
        difficulty: "Intermediate",
    },
    SeedEntry {
        question: "What is the primary purpose of a firewall in network security?",
        options: [
            "Encrypt data transmission",
            "Filter and control network traffic",
            "Provide user authentication",
            "Compress network packets",
        ],
        correct_answer: 1,
        category: "Cybersecurity",
        difficulty: "Basic",
    },
    SeedEntry {
        question: "In cryptography, what does 'salting' refer to?",
        options: [
            "Adding random data to passwords before hashing",
            "Encrypting data multiple times",
            "Converting plain text to cipher text",
            "Generating encryption keys",
        ],
        correct_answer: 0,
        category: "Cryptography",
        difficulty: "Intermediate",
    },
    SeedEntry {
        question: "Which OSI layer is responsible for routing packets between networks?",
        options: [
            "Transport Layer (Layer 4)",
            "Data Link Layer (Layer 2)",
            "Network Layer (Layer 3)",
            "Session Layer (Layer 5)",
        ],
        correct_answer: 2,
        category: "Computer Networks",
        difficulty: "Intermediate",
    },
];

/// Build the seed questions with ids `1..=SEED_COUNT`, all stamped with `now`.
pub fn seed_questions(now: DateTime<Utc>) -> Vec<Question> {
    SEED.iter()
        .zip(1u64..)
        .map(|(entry, id)| Question {
            id,
            question: entry.question.to_string(),
            options: entry.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: entry.correct_answer,
            category: entry.category.to_string(),
            difficulty: entry.difficulty.to_string(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
