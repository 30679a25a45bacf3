//! Top-level flashcard state
//!
//! The workspace is the only owner of the card store. Creation and study
//! both go through it, which is what lets it refuse deletions while a
//! study session holds a cursor into the store.

use std::sync::Arc;

use super::controller::{CreationController, FlashcardError, Result};
use super::models::{Card, GenerationRequest, LanguagePair, ManualDraft};
use super::session::{StudyMode, StudySession};
use super::store::CardStore;
use crate::gateway::{self, CardGateway};

pub struct Workspace {
    store: CardStore,
    controller: CreationController,
    study: StudyMode,
}

impl Workspace {
    pub fn new(gateway: Arc<dyn CardGateway>) -> Self {
        Self {
            store: CardStore::new(),
            controller: CreationController::new(gateway),
            study: StudyMode::Inactive,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn controller(&self) -> &CreationController {
        &self.controller
    }

    pub fn gateway(&self) -> Arc<dyn CardGateway> {
        self.controller.gateway()
    }

    // ==================== Creation ====================

    pub fn add_manual(&mut self, front: &str, back: &str) -> Result<Card> {
        self.controller.add_manual(&mut self.store, front, back)
    }

    pub fn begin_generation(
        &mut self,
        topic: &str,
        count: u8,
        language_pair: LanguagePair,
    ) -> Result<GenerationRequest> {
        self.controller.begin_generation(topic, count, language_pair)
    }

    pub fn finish_generation(&mut self, outcome: gateway::Result<Vec<Card>>) -> Result<usize> {
        self.controller.finish_generation(&mut self.store, outcome)
    }

    pub async fn add_generated(
        &mut self,
        topic: &str,
        count: u8,
        language_pair: LanguagePair,
    ) -> Result<usize> {
        self.controller
            .add_generated(&mut self.store, topic, count, language_pair)
            .await
    }

    pub fn begin_translation(&mut self, word: &str) -> Result<String> {
        self.controller.begin_translation(word)
    }

    pub fn finish_translation(
        &mut self,
        draft: &mut ManualDraft,
        outcome: gateway::Result<String>,
    ) -> Result<bool> {
        self.controller.finish_translation(draft, outcome)
    }

    pub async fn auto_translate(&mut self, draft: &mut ManualDraft) -> Result<()> {
        self.controller.auto_translate(draft).await
    }

    /// Delete the card at `index`. Out-of-range indexes are a no-op
    /// (`Ok(None)`); deleting during study is refused.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Card>> {
        if self.study.is_active() {
            return Err(FlashcardError::StudyActive);
        }
        Ok(self.store.remove_at(index))
    }

    // ==================== Study ====================

    pub fn study(&self) -> &StudyMode {
        &self.study
    }

    /// Enter study mode on the first card. Re-entering restarts from the top.
    pub fn start_study(&mut self) -> Result<()> {
        let session = StudySession::start(&self.store).ok_or(FlashcardError::EmptyStore)?;
        log::info!("Study session started with {} cards", self.store.len());
        self.study = StudyMode::Active(session);
        Ok(())
    }

    pub fn exit_study(&mut self) {
        if self.study.is_active() {
            log::info!("Study session ended");
        }
        self.study = StudyMode::Inactive;
    }

    pub fn flip(&mut self) {
        if let Some(session) = self.study.session_mut() {
            session.flip();
        }
    }

    pub fn next_card(&mut self) {
        if let StudyMode::Active(session) = &mut self.study {
            session.next(&self.store);
        }
    }

    pub fn previous_card(&mut self) {
        if let StudyMode::Active(session) = &mut self.study {
            session.previous(&self.store);
        }
    }

    pub fn current_study_card(&self) -> Option<&Card> {
        self.study.session().and_then(|s| s.current(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::{sample_cards, MockGateway};

    fn workspace() -> (Workspace, Arc<MockGateway>) {
        let mock = Arc::new(MockGateway::new());
        (Workspace::new(mock.clone()), mock)
    }

    #[test]
    fn test_start_study_on_empty_store_is_rejected() {
        let (mut ws, _) = workspace();

        let err = ws.start_study().unwrap_err();
        assert!(matches!(err, FlashcardError::EmptyStore));
        assert!(!ws.study().is_active());
    }

    #[test]
    fn test_reentering_study_resets_cursor() {
        let (mut ws, _) = workspace();
        ws.add_manual("один", "one").unwrap();
        ws.add_manual("два", "two").unwrap();

        ws.start_study().unwrap();
        ws.next_card();
        ws.flip();
        assert_eq!(ws.study().session().unwrap().card_index(), 1);

        ws.exit_study();
        assert!(ws.study().session().is_none());

        ws.start_study().unwrap();
        let session = ws.study().session().unwrap();
        assert_eq!(session.card_index(), 0);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_navigation_through_workspace() {
        let (mut ws, _) = workspace();
        ws.add_manual("один", "one").unwrap();
        ws.add_manual("два", "two").unwrap();
        ws.add_manual("три", "three").unwrap();
        ws.start_study().unwrap();

        ws.previous_card();
        assert_eq!(ws.current_study_card().unwrap().front, "три");
        ws.next_card();
        assert_eq!(ws.current_study_card().unwrap().front, "один");
    }

    #[test]
    fn test_delete_refused_while_studying() {
        let (mut ws, _) = workspace();
        ws.add_manual("один", "one").unwrap();
        ws.start_study().unwrap();

        let err = ws.remove_at(0).unwrap_err();
        assert!(matches!(err, FlashcardError::StudyActive));
        assert_eq!(ws.store().len(), 1);

        ws.exit_study();
        assert_eq!(ws.remove_at(0).unwrap(), Some(Card::new("один", "one")));
        assert!(ws.store().is_empty());
        assert_eq!(ws.remove_at(0).unwrap(), None);
    }

    #[test]
    fn test_navigation_is_noop_when_inactive() {
        let (mut ws, _) = workspace();
        ws.add_manual("один", "one").unwrap();

        ws.flip();
        ws.next_card();
        ws.previous_card();
        assert!(ws.current_study_card().is_none());
    }

    #[tokio::test]
    async fn test_generated_cards_are_studyable() {
        let (mut ws, mock) = workspace();
        mock.queue_batch(Ok(sample_cards(5)));

        ws.add_generated("numbers", 5, LanguagePair::RuEn).await.unwrap();
        ws.start_study().unwrap();
        assert_eq!(
            ws.study().session().unwrap().position_label(ws.store()),
            "Card 1 of 5"
        );
    }
}
