use std::fmt::Display;
use std::sync::mpsc::{self, Receiver, Sender};

use vocards_lib::flashcards::{Card, GenerationForm, GenerationRequest, ManualDraft, Workspace};
use vocards_lib::gateway;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cards,
    Manual,
    Generate,
    Study,
}

/// Focused field of the manual form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
}

/// A gateway call that finished on a background task
pub enum TaskOutcome {
    Generated(gateway::Result<Vec<Card>>),
    Translated(gateway::Result<String>),
}

pub struct TuiState {
    pub app: App,
    pub workspace: Workspace,
    pub mode: Mode,

    // Card list
    pub selected: usize,

    // Forms
    pub manual: ManualDraft,
    pub manual_field: ManualField,
    pub generate: GenerationForm,

    pub flash: Option<Flash>,
    pub show_help: bool,
    pub quit: bool,

    /// Frame counter for the loading spinner
    pub tick: usize,

    tasks_tx: Sender<TaskOutcome>,
    tasks_rx: Receiver<TaskOutcome>,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let (tasks_tx, tasks_rx) = mpsc::channel();

        Self {
            workspace: app.new_workspace(),
            manual: app.manual_draft(),
            generate: app.generation_form(),
            app,
            mode: Mode::Cards,
            selected: 0,
            manual_field: ManualField::Front,
            flash: None,
            show_help: false,
            quit: false,
            tick: 0,
            tasks_tx,
            tasks_rx,
        }
    }

    pub fn is_busy(&self) -> bool {
        let controller = self.workspace.controller();
        controller.is_generating() || controller.is_translating()
    }

    pub fn flash_info(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash {
            text: text.into(),
            kind: FlashKind::Info,
        });
    }

    pub fn flash_error(&mut self, err: impl Display) {
        self.flash = Some(Flash {
            text: err.to_string(),
            kind: FlashKind::Error,
        });
    }

    // ==================== Background tasks ====================

    /// Apply every gateway result that has arrived since the last frame
    pub fn poll_tasks(&mut self) {
        while let Ok(outcome) = self.tasks_rx.try_recv() {
            match outcome {
                TaskOutcome::Generated(result) => match self.workspace.finish_generation(result) {
                    Ok(added) => {
                        self.generate.topic.clear();
                        self.flash_info(format!("Added {} cards", added));
                    }
                    Err(e) => self.flash_error(e),
                },
                TaskOutcome::Translated(result) => {
                    match self.workspace.finish_translation(&mut self.manual, result) {
                        Ok(true) => self.manual_field = ManualField::Back,
                        Ok(false) => self.flash_info("Word changed, translation discarded"),
                        Err(e) => self.flash_error(e),
                    }
                }
            }
        }
    }

    fn spawn_generation(&self, request: GenerationRequest) {
        let gateway = self.workspace.gateway();
        let tx = self.tasks_tx.clone();
        log::debug!("Spawning generation on the {} gateway", gateway.name());
        self.app.runtime.spawn(async move {
            let outcome = gateway.generate_batch(&request).await;
            let _ = tx.send(TaskOutcome::Generated(outcome));
        });
    }

    fn spawn_translation(&self, word: String) {
        let gateway = self.workspace.gateway();
        let pair = self.manual.language_pair;
        let tx = self.tasks_tx.clone();
        log::debug!("Spawning translation on the {} gateway", gateway.name());
        self.app.runtime.spawn(async move {
            let outcome = gateway.translate_one(&word, pair).await;
            let _ = tx.send(TaskOutcome::Translated(outcome));
        });
    }

    // ==================== Card list ====================

    pub fn move_down(&mut self) {
        let len = self.workspace.store().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.workspace.store().get(self.selected)
    }

    pub fn delete_selected(&mut self) {
        match self.workspace.remove_at(self.selected) {
            Ok(Some(card)) => {
                let len = self.workspace.store().len();
                if self.selected >= len {
                    self.selected = len.saturating_sub(1);
                }
                self.flash_info(format!("Deleted \"{}\"", card.front));
            }
            Ok(None) => {}
            Err(e) => self.flash_error(e),
        }
    }

    // ==================== Study ====================

    pub fn start_study(&mut self) {
        match self.workspace.start_study() {
            Ok(()) => self.mode = Mode::Study,
            Err(e) => self.flash_error(e),
        }
    }

    pub fn exit_study(&mut self) {
        if let Some(session) = self.workspace.study().session() {
            self.selected = session.card_index();
        }
        self.workspace.exit_study();
        self.mode = Mode::Cards;
    }

    // ==================== Forms ====================

    pub fn open_manual(&mut self) {
        self.manual_field = ManualField::Front;
        self.mode = Mode::Manual;
    }

    pub fn open_generate(&mut self) {
        self.mode = Mode::Generate;
    }

    pub fn close_form(&mut self) {
        self.mode = Mode::Cards;
    }

    pub fn toggle_manual_field(&mut self) {
        self.manual_field = match self.manual_field {
            ManualField::Front => ManualField::Back,
            ManualField::Back => ManualField::Front,
        };
    }

    /// The word field stays fixed while its translation is in flight
    pub fn manual_input_locked(&self) -> bool {
        self.manual_field == ManualField::Front && self.workspace.controller().is_translating()
    }

    pub fn manual_input(&mut self) -> &mut String {
        match self.manual_field {
            ManualField::Front => &mut self.manual.front,
            ManualField::Back => &mut self.manual.back,
        }
    }

    pub fn add_manual_card(&mut self) {
        match self.workspace.add_manual(&self.manual.front, &self.manual.back) {
            Ok(card) => {
                self.manual.clear();
                self.manual_field = ManualField::Front;
                self.selected = self.workspace.store().len().saturating_sub(1);
                self.flash_info(format!("Added \"{}\"", card.front));
            }
            Err(e) => self.flash_error(e),
        }
    }

    pub fn request_translation(&mut self) {
        match self.workspace.begin_translation(&self.manual.front) {
            Ok(word) => self.spawn_translation(word),
            Err(e) => self.flash_error(e),
        }
    }

    pub fn submit_generation(&mut self) {
        let form = &self.generate;
        match self
            .workspace
            .begin_generation(&form.topic, form.count, form.language_pair)
        {
            Ok(request) => self.spawn_generation(request),
            Err(e) => self.flash_error(e),
        }
    }

    /// Flip the direction of whichever form is open
    pub fn toggle_direction(&mut self) {
        match self.mode {
            Mode::Manual => self.manual.language_pair = self.manual.language_pair.reversed(),
            Mode::Generate => self.generate.language_pair = self.generate.language_pair.reversed(),
            _ => {}
        }
    }
}
