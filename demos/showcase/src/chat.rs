/// Chat feed demo: a scripted dialogue appears one message at a time.

use curtain_engine::{Scene, SceneContext, SceneError};

use crate::menu::{MainMenu, COMMAND_BACK};

/// Seconds between two messages.
const MESSAGE_INTERVAL: f32 = 2.0;

const DIALOGUE: [(&str, &str); 6] = [
    ("Ada", "I admit the robot was a bit much."),
    ("Ben", "A bit? It set the kitchen on fire."),
    ("Cleo", "Can someone explain why my door is open?"),
    ("Ada", "The robot wanted to say hello."),
    ("Ben", "We are getting a fire extinguisher."),
    ("Cleo", "Get two."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub speaker: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Default)]
pub struct ChatFeed {
    shown: Vec<Message>,
    since_message: f32,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.shown.len() >= DIALOGUE.len()
    }

    fn append_next(&mut self) {
        if let Some(&(speaker, text)) = DIALOGUE.get(self.shown.len()) {
            self.shown.push(Message { speaker, text });
        }
    }
}

impl Scene for ChatFeed {
    fn name(&self) -> &str {
        "chat-feed"
    }

    fn on_enter(&mut self, _ctx: &mut SceneContext) -> Result<(), SceneError> {
        self.shown.clear();
        self.since_message = 0.0;
        self.append_next();
        Ok(())
    }

    fn on_exit(&mut self) -> Result<(), SceneError> {
        self.shown.clear();
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext, delta: f32) -> Result<(), SceneError> {
        if ctx.commands().any(|id| id == COMMAND_BACK) {
            ctx.request_scene(MainMenu::new(), None);
        }
        if self.is_finished() {
            return Ok(());
        }

        self.since_message += ctx.seconds(delta);
        while self.since_message >= MESSAGE_INTERVAL {
            self.since_message -= MESSAGE_INTERVAL;
            self.append_next();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curtain_engine::{InputEvent, SceneManager, StageConfig, Viewport};

    #[test]
    fn first_message_shows_on_enter() {
        let mut ctx = SceneContext::new(Viewport::default());
        let mut feed = ChatFeed::new();
        feed.on_enter(&mut ctx).unwrap();
        assert_eq!(feed.messages().len(), 1);
        assert_eq!(feed.messages()[0].speaker, "Ada");
    }

    #[test]
    fn one_message_every_two_seconds() {
        let mut ctx = SceneContext::new(Viewport::default());
        let mut feed = ChatFeed::new();
        feed.on_enter(&mut ctx).unwrap();

        feed.update(&mut ctx, 60.0).unwrap();
        assert_eq!(feed.messages().len(), 1);
        feed.update(&mut ctx, 60.0).unwrap();
        assert_eq!(feed.messages().len(), 2);

        for _ in 0..20 {
            feed.update(&mut ctx, 60.0).unwrap();
        }
        assert!(feed.is_finished());
        assert_eq!(feed.messages().len(), DIALOGUE.len());
    }

    #[test]
    fn back_command_returns_to_menu() {
        let mut manager = SceneManager::new(StageConfig::default()).unwrap();
        manager.change_scene(Box::new(ChatFeed::new()), None).unwrap();
        for _ in 0..48 {
            manager.update(1.0);
        }
        manager.push_input(InputEvent::Command { id: COMMAND_BACK });
        for _ in 0..49 {
            manager.update(1.0);
        }
        assert_eq!(manager.current_scene().map(|s| s.name()), Some("main-menu"));
    }
}
