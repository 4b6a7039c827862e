//! Coping technique catalog and quick-start prompts.

use std::collections::HashMap;

/// Quick-start prompts offered above the chat input
pub const PRESET_PROMPTS: [&str; 3] = [
    "I'm overwhelmed with exams",
    "I can't focus on studying",
    "I'm scared I'll fail",
];

const GENERIC_DESCRIPTION: &str = "This is a grounding or coping technique. You can try it gently and notice how your body responds.";

/// Descriptions for the techniques the chat service suggests
pub struct TechniqueCatalog {
    details: HashMap<String, String>,
}

impl TechniqueCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            details: HashMap::new(),
        };
        catalog.register_builtins();
        catalog
    }

    /// Known description, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.details.get(name).map(String::as_str)
    }

    /// Description to show for a technique chip; never empty.
    pub fn describe(&self, name: &str) -> &str {
        self.get(name).unwrap_or(GENERIC_DESCRIPTION)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.details.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    fn register(&mut self, name: &str, description: &str) {
        self.details.insert(name.to_string(), description.to_string());
    }

    fn register_builtins(&mut self) {
        self.register(
            "5-4-3-2-1 grounding",
            "Look around and gently notice: 5 things you can see, 4 you can feel, 3 you can hear, 2 you can smell, and 1 you can taste.",
        );
        self.register(
            "Box breathing (4-4-4-4)",
            "Inhale through your nose for 4 seconds, hold for 4, exhale for 4, hold for 4. Repeat this slow rhythm a few times.",
        );
        self.register(
            "Self-compassion check-in",
            "Pause and speak to yourself as you would to a kind friend. Acknowledge that what you feel is valid and understandable.",
        );
        self.register(
            "Small activation task",
            "Pick one tiny, doable task (like opening your notes or writing a title) to gently move things forward.",
        );
        self.register(
            "4-7-8 breathing",
            "Breathe in for 4 seconds, hold for 7, and exhale slowly for 8. This can calm your nervous system.",
        );
        self.register(
            "Cognitive defusion",
            "Notice your thoughts as mental events, not facts. You might say: 'I am having the thought that…' instead of 'This is true'.",
        );
        self.register(
            "5-minute micro-break",
            "Step away for 5 minutes: stretch, drink water, or look out of a window. Let your body reset a little.",
        );
        self.register(
            "Energy audit",
            "Gently scan your day and notice what activities drain you and what restores you. Adjust one small thing in your favour.",
        );
        self.register(
            "Task chunking (25/5 Pomodoro)",
            "Work for 25 minutes on a single task, then rest for 5. Repeat a few cycles and keep tasks small and specific.",
        );
        self.register(
            "Two-minute small start",
            "Commit to only 2 minutes of a task. Often, starting is the hardest step and momentum will carry you afterwards.",
        );
        self.register(
            "Mindful breathing",
            "Bring attention to your breath. Notice the air moving in and out, and gently return your focus when your mind wanders.",
        );
    }
}

impl Default for TechniqueCatalog {
    fn default() -> Self {
        Self::new()
    }
}
