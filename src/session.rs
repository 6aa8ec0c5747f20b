use crate::difficulty::DifficultyConfig;
use crate::error::Result;
use crate::feedback::LetterFeedback;
use crate::game_state::{Command, EngineEvent, EngineSnapshot, GameEngine, GameOverState};
use crate::persistence::PersistenceStore;
use crate::wordbank::{TargetWord, WordSetProvider};
use crate::{debug_log, info_log};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Input(Command),
    NewGame,
    Exit,
}

/// What the engine needs from a front end.
pub trait GameInterface {
    fn render(&mut self, view: &EngineView<'_>);
    /// Block until the player does something. `None` means nothing usable was entered.
    fn next_action(&mut self) -> Option<UserAction>;
    fn notify_invalid_word(&mut self, word: &str);
    fn notify_game_over(&mut self, outcome: GameOverState, target: Option<&TargetWord>);
    fn notify_error(&mut self, message: &str);
}

/// Snapshot plus the derived data renderers want.
pub struct EngineView<'a> {
    pub label: &'a str,
    pub snapshot: EngineSnapshot<'a>,
    /// Per-row colouring; `None` for rows not yet played.
    pub feedback: Vec<Option<Vec<LetterFeedback>>>,
    pub disabled_letters: Vec<char>,
}

impl<'a> EngineView<'a> {
    pub fn new<S>(engine: &'a GameEngine<S>) -> Self {
        let rows = engine.grid().row_count();
        Self {
            label: engine.config().label,
            snapshot: engine.snapshot(),
            feedback: (0..rows).map(|row| engine.row_feedback(row)).collect(),
            disabled_letters: engine.disabled_letters().into_iter().collect(),
        }
    }
}

/// Load the bank, run the provider and build a ready engine.
///
/// A provider failure leaves the engine in its not-ready state; the error is
/// returned alongside so the caller can surface it.
pub fn start_engine<S, P>(
    config: &DifficultyConfig,
    provider: &mut P,
    store: S,
) -> (GameEngine<S>, Result<()>)
where
    S: PersistenceStore,
    P: WordSetProvider,
{
    let mut engine = GameEngine::load(config.clone(), store);
    let selection = config
        .word_bank
        .load()
        .and_then(|raw| provider.generate_words_set(&raw, config));
    match selection {
        Ok(selection) => {
            engine.install_words(selection);
            (engine, Ok(()))
        }
        Err(e) => {
            log::error!("Word set unavailable: {e}");
            (engine, Err(e))
        }
    }
}

/// Drive one engine per game until the interface asks to exit. Returns the store for reuse.
pub fn game_loop<S, P, I>(
    config: &DifficultyConfig,
    provider: &mut P,
    store: S,
    interface: &mut I,
) -> S
where
    S: PersistenceStore,
    P: WordSetProvider,
    I: GameInterface,
{
    let (mut engine, started) = start_engine(config, provider, store);
    if let Err(e) = started {
        interface.notify_error(&e.to_string());
    }
    interface.render(&EngineView::new(&engine));
    if engine.status().is_over() {
        interface.notify_game_over(engine.game_over_state(), engine.target());
    }

    loop {
        let Some(action) = interface.next_action() else {
            continue;
        };
        debug_log!("game_loop() - Action: {:?}", action);

        match action {
            UserAction::Exit => {
                info_log!("game_loop() - Exit requested");
                break;
            }
            UserAction::NewGame => {
                if !engine.status().is_over() {
                    engine.discard_saved_game();
                }
                let (next, started) = start_engine(config, provider, engine.into_store());
                engine = next;
                if let Err(e) = started {
                    interface.notify_error(&e.to_string());
                }
                log::info!("New {} game started", config.label);
                interface.render(&EngineView::new(&engine));
            }
            UserAction::Input(command) => {
                let event = engine.apply(command);
                interface.render(&EngineView::new(&engine));
                match event {
                    EngineEvent::InvalidWordSubmitted { word } => {
                        interface.notify_invalid_word(&word);
                    }
                    EngineEvent::Won { .. } | EngineEvent::Lost => {
                        interface.notify_game_over(engine.game_over_state(), engine.target());
                    }
                    _ => {}
                }
            }
        }
    }
    engine.into_store()
}
