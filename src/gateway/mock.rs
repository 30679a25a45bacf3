//! Scripted gateway for deterministic tests
//!
//! Outcomes are queued and consumed in order. An empty queue is an error so
//! that a test which triggers an unexpected call fails loudly.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CardGateway, GatewayError, Result};
use crate::flashcards::{Card, GenerationRequest, LanguagePair};

#[derive(Default)]
pub struct MockGateway {
    batches: Mutex<VecDeque<Result<Vec<Card>>>>,
    translations: Mutex<VecDeque<Result<String>>>,
    generation_calls: Mutex<Vec<GenerationRequest>>,
    translation_calls: Mutex<Vec<(String, LanguagePair)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_batch(&self, outcome: Result<Vec<Card>>) {
        self.batches.lock().unwrap().push_back(outcome);
    }

    pub fn queue_translation(&self, outcome: Result<String>) {
        self.translations.lock().unwrap().push_back(outcome);
    }

    pub fn generation_calls(&self) -> Vec<GenerationRequest> {
        self.generation_calls.lock().unwrap().clone()
    }

    pub fn translation_calls(&self) -> Vec<(String, LanguagePair)> {
        self.translation_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardGateway for MockGateway {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_batch(&self, request: &GenerationRequest) -> Result<Vec<Card>> {
        self.generation_calls.lock().unwrap().push(request.clone());
        self.batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::MalformedResponse("no batch queued".to_string())))
    }

    async fn translate_one(&self, word: &str, pair: LanguagePair) -> Result<String> {
        self.translation_calls
            .lock()
            .unwrap()
            .push((word.to_string(), pair));
        self.translations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GatewayError::MalformedResponse(
                    "no translation queued".to_string(),
                ))
            })
    }
}

/// `count` distinct cards, handy for filling a batch
pub fn sample_cards(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card::new(format!("слово {}", i), format!("word {}", i)))
        .collect()
}
