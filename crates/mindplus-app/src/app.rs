//! Main egui application — wires the orchestrator, calm session and
//! browser adapters to the panels.

use std::rc::Rc;

use egui::{self, CentralPanel};

use mindplus_core::calm::CalmSession;
use mindplus_core::coping::{plan_from_text, PlanSlot};
use mindplus_core::event_bus::EventBus;
use mindplus_core::orchestrator::ChatOrchestrator;
use mindplus_core::ports::EmotionServicePort;
use mindplus_core::preset::resolve_preset;
use mindplus_core::techniques::TechniqueCatalog;
use mindplus_platform::clock::now_ms;
use mindplus_platform::{ChatApiClient, EmotionServiceClient, IntervalTicker, SessionIdentity};
use mindplus_types::calm::VisualPreset;
use mindplus_types::config::MindConfig;
use mindplus_types::message::Role;
use mindplus_ui::panels::{calm_panel, chat_panel, CalmAction, CalmAnimation, ChatAction};
use mindplus_ui::state::{Screen, UiState};
use mindplus_ui::theme;

/// The main application state
pub struct MindApp {
    ui_state: UiState,
    config: MindConfig,
    event_bus: EventBus,
    orchestrator: Rc<ChatOrchestrator>,
    emotion: Rc<dyn EmotionServicePort>,
    catalog: TechniqueCatalog,
    calm: Option<CalmSession>,
    calm_animation: CalmAnimation,
    /// Filled by the coping lookup that runs while a calm session is open
    pending_plan: PlanSlot,
    first_frame: bool,
}

impl MindApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: MindConfig) -> Self {
        let event_bus = EventBus::new();
        let identity = Rc::new(SessionIdentity::from_local_storage());
        let chat = Rc::new(ChatApiClient::new(config.chat.clone()));
        let orchestrator = ChatOrchestrator::new(config.clone(), chat, identity, event_bus.clone());
        let emotion = Rc::new(EmotionServiceClient::new(config.emotion.clone()));

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            orchestrator: Rc::new(orchestrator),
            emotion,
            catalog: TechniqueCatalog::new(),
            calm: None,
            calm_animation: CalmAnimation::new(now_ms()),
            pending_plan: PlanSlot::new(),
            first_frame: true,
        }
    }

    /// Open (or reopen) the chat session (async)
    fn start_session(&self, ctx: &egui::Context) {
        let orchestrator = self.orchestrator.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // failures are already published on the event bus
            let _ = orchestrator.start_session().await;
            ctx.request_repaint();
        });
    }

    /// Send a user message through the orchestrator (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let orchestrator = self.orchestrator.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = orchestrator.send_message(&text).await {
                log::warn!("Message not sent: {}", e);
            }
            ctx.request_repaint();
        });
    }

    /// Start a calm session themed from the current status, then refine the
    /// preset from the emotion service in the background.
    fn open_calm(&mut self, ctx: &egui::Context) {
        let status = self.orchestrator.status();
        let preset = resolve_preset(status.emotion.as_deref(), status.stress_level.as_deref());
        self.start_calm(preset);
        if self.calm.is_none() {
            return;
        }
        let generation = self.pending_plan.begin();

        let last_user_text = self
            .ui_state
            .messages
            .iter()
            .rev()
            .find(|m| m.sender == Role::User)
            .map(|m| m.text.clone());
        if let Some(text) = last_user_text {
            let emotion = self.emotion.clone();
            let slot = self.pending_plan.clone();
            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match plan_from_text(emotion.as_ref(), &text).await {
                    Ok(plan) => {
                        slot.deliver(generation, plan);
                    }
                    Err(e) => log::warn!("Coping lookup failed: {}", e),
                }
                ctx.request_repaint();
            });
        }
    }

    fn start_calm(&mut self, preset: VisualPreset) {
        // drop the old session first so only one ticker ever runs
        self.calm = None;
        let ticker = Box::new(IntervalTicker::new());
        match CalmSession::new(&self.config.calm, preset, self.event_bus.clone(), ticker) {
            Ok(mut session) => match session.activate() {
                Ok(()) => {
                    self.calm = Some(session);
                    self.calm_animation = CalmAnimation::new(now_ms());
                    self.ui_state.screen = Screen::Calm;
                }
                Err(e) => log::error!("Calm session failed to start: {}", e),
            },
            Err(e) => log::error!("Calm session unavailable: {}", e),
        }
    }

    fn handle_calm_action(&mut self, action: CalmAction) {
        match action {
            CalmAction::Close => {
                self.calm = None;
                self.pending_plan.begin();
                self.ui_state.screen = Screen::Chat;
            }
            CalmAction::Pause => {
                if let Some(calm) = self.calm.as_mut() {
                    calm.pause();
                }
            }
            CalmAction::Resume => {
                if let Some(calm) = self.calm.as_mut() {
                    calm.resume();
                }
            }
            CalmAction::Restart => {
                if let Some(calm) = self.calm.as_mut() {
                    if let Err(e) = calm.activate() {
                        log::error!("Calm restart failed: {}", e);
                    }
                }
            }
        }
    }

    fn apply_pending_plan(&mut self) {
        let plan = self.pending_plan.take();
        let Some(plan) = plan else {
            return;
        };
        let Some(calm) = self.calm.as_mut() else {
            return;
        };
        log::info!(
            "Coping plan: {} ({}) → {}",
            plan.strategy.emotion,
            plan.strategy.severity.as_str(),
            plan.preset.label
        );
        calm.set_preset(plan.preset);
    }
}

impl eframe::App for MindApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.start_session(ctx);
            self.first_frame = false;
        }

        // Drain events from the core
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        self.apply_pending_plan();

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| match self.ui_state.screen {
            Screen::Chat => match chat_panel(ui, &mut self.ui_state, &self.catalog) {
                Some(ChatAction::Send(text)) => self.dispatch_message(text, ctx),
                Some(ChatAction::Reconnect) => self.start_session(ctx),
                Some(ChatAction::OpenCalm) => self.open_calm(ctx),
                None => {}
            },
            Screen::Calm => {
                let Some(calm) = self.calm.as_ref() else {
                    self.ui_state.screen = Screen::Chat;
                    return;
                };
                let preset = calm.preset().clone();
                let now = now_ms();
                if let Some(action) = calm_panel(ui, &preset, &self.ui_state, &mut self.calm_animation, now) {
                    self.handle_calm_action(action);
                }
            }
        });
    }
}
