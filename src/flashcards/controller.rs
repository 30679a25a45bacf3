//! Card creation: manual entry, AI-generated batches and auto-translation
//!
//! The assisted paths are split into `begin_*` / `finish_*` halves so the
//! TUI can run the gateway call on a background task. The `begin` half
//! validates input and raises the loading flag; the `finish` half always
//! lowers it and applies the outcome. The async helpers compose the two
//! for callers that can simply await.

use std::sync::Arc;

use thiserror::Error;

use super::models::{
    Card, GenerationRequest, LanguagePair, ManualDraft, MAX_GENERATION_COUNT,
    MIN_GENERATION_COUNT,
};
use super::store::CardStore;
use crate::gateway::{self, CardGateway, GatewayError};

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("{0}")]
    Validation(String),

    #[error("A {0} request is already in progress")]
    Busy(&'static str),

    #[error("No cards to study yet; create some first")]
    EmptyStore,

    #[error("Cards cannot be deleted during a study session")]
    StudyActive,

    #[error("Card generation failed: {0}")]
    Generation(#[source] GatewayError),

    #[error("Translation failed: {0}")]
    Translation(#[source] GatewayError),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

pub struct CreationController {
    gateway: Arc<dyn CardGateway>,
    /// Request currently out at the gateway, if any
    pending_generation: Option<GenerationRequest>,
    /// Word sent for translation, if any
    pending_translation: Option<String>,
}

impl CreationController {
    pub fn new(gateway: Arc<dyn CardGateway>) -> Self {
        Self {
            gateway,
            pending_generation: None,
            pending_translation: None,
        }
    }

    pub fn gateway(&self) -> Arc<dyn CardGateway> {
        Arc::clone(&self.gateway)
    }

    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    pub fn is_translating(&self) -> bool {
        self.pending_translation.is_some()
    }

    // ==================== Manual Path ====================

    /// Append one card built from the trimmed fields
    pub fn add_manual(&self, store: &mut CardStore, front: &str, back: &str) -> Result<Card> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            log::warn!("Rejected manual card with an empty side");
            return Err(FlashcardError::Validation(
                "Fill in both the word and its translation".to_string(),
            ));
        }

        let card = Card::new(front, back);
        store.push(card.clone());
        log::info!("Added card '{}' ({} total)", card.front, store.len());
        Ok(card)
    }

    // ==================== Assisted Path ====================

    /// Validate a generation request and mark generation as in flight
    pub fn begin_generation(
        &mut self,
        topic: &str,
        count: u8,
        language_pair: LanguagePair,
    ) -> Result<GenerationRequest> {
        if self.is_generating() {
            return Err(FlashcardError::Busy("generation"));
        }

        let topic = topic.trim();
        if topic.is_empty() {
            log::warn!("Rejected generation request without a topic");
            return Err(FlashcardError::Validation(
                "Enter a topic to generate cards for".to_string(),
            ));
        }

        if !(MIN_GENERATION_COUNT..=MAX_GENERATION_COUNT).contains(&count) {
            return Err(FlashcardError::Validation(format!(
                "Card count must be between {} and {}",
                MIN_GENERATION_COUNT, MAX_GENERATION_COUNT
            )));
        }

        let request = GenerationRequest {
            topic: topic.to_string(),
            count,
            language_pair,
        };
        self.pending_generation = Some(request.clone());
        Ok(request)
    }

    /// Apply a finished generation call. The whole batch is appended or
    /// nothing is; the loading flag is cleared either way.
    pub fn finish_generation(
        &mut self,
        store: &mut CardStore,
        outcome: gateway::Result<Vec<Card>>,
    ) -> Result<usize> {
        let request = self.pending_generation.take();

        let batch = outcome.and_then(|batch| {
            if let Some(expected) = request.as_ref().map(|r| r.count as usize) {
                if batch.len() != expected {
                    return Err(GatewayError::CountMismatch {
                        expected,
                        actual: batch.len(),
                    });
                }
            }
            if batch
                .iter()
                .any(|c| c.front.trim().is_empty() || c.back.trim().is_empty())
            {
                return Err(GatewayError::MalformedResponse(
                    "batch contains a card with an empty side".to_string(),
                ));
            }
            Ok(batch)
        });

        match batch {
            Ok(batch) => {
                let added = store.extend_batch(batch);
                log::info!("Added {} generated cards ({} total)", added, store.len());
                Ok(added)
            }
            Err(e) => {
                log::error!("Card generation failed: {}", e);
                Err(FlashcardError::Generation(e))
            }
        }
    }

    /// Validate, call the gateway and apply the result
    pub async fn add_generated(
        &mut self,
        store: &mut CardStore,
        topic: &str,
        count: u8,
        language_pair: LanguagePair,
    ) -> Result<usize> {
        let request = self.begin_generation(topic, count, language_pair)?;
        let gateway = self.gateway();
        log::debug!("Requesting {} cards from the {} gateway", request.count, gateway.name());
        let outcome = gateway.generate_batch(&request).await;
        self.finish_generation(store, outcome)
    }

    // ==================== Auto-translate ====================

    /// Validate the word to translate and mark translation as in flight.
    /// Returns the trimmed word.
    pub fn begin_translation(&mut self, word: &str) -> Result<String> {
        if self.is_translating() {
            return Err(FlashcardError::Busy("translation"));
        }

        let word = word.trim();
        if word.is_empty() {
            return Err(FlashcardError::Validation(
                "Enter a word to translate".to_string(),
            ));
        }

        self.pending_translation = Some(word.to_string());
        Ok(word.to_string())
    }

    /// Apply a finished translation to the draft's back field. Returns
    /// `false` when the draft's front no longer holds the word that was
    /// sent; the result is dropped and `back` is left alone.
    pub fn finish_translation(
        &mut self,
        draft: &mut ManualDraft,
        outcome: gateway::Result<String>,
    ) -> Result<bool> {
        let word = self.pending_translation.take();

        match outcome {
            Ok(translation) => {
                if let Some(word) = word.filter(|w| w.as_str() != draft.front.trim()) {
                    log::warn!("Dropping translation of '{}': the word has changed", word);
                    return Ok(false);
                }
                draft.back = translation.trim().to_string();
                Ok(true)
            }
            Err(e) => {
                log::error!("Translation failed: {}", e);
                Err(FlashcardError::Translation(e))
            }
        }
    }

    /// Translate the draft's front field into its back field
    pub async fn auto_translate(&mut self, draft: &mut ManualDraft) -> Result<()> {
        let word = self.begin_translation(&draft.front)?;
        let gateway = self.gateway();
        log::debug!("Translating '{}' with the {} gateway", word, gateway.name());
        let outcome = gateway.translate_one(&word, draft.language_pair).await;
        self.finish_translation(draft, outcome).map(|_| ())
    }
}
