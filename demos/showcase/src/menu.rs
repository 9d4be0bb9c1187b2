/// Main menu: title plus one entry per demo scene.
///
/// The host draws the entries from `entries()` and reports clicks either as
/// `Command` input (1, 2, 3) or as raw pointer releases, which are hit-tested
/// against the current layout.

use curtain_engine::{InputEvent, Resizable, Scene, SceneContext, SceneError, Viewport};
use glam::Vec2;

use crate::cards::CardDeal;
use crate::chat::ChatFeed;
use crate::flames::Flames;

/// Command id that returns from a demo scene to the menu.
pub const COMMAND_BACK: u32 = 0;
pub const COMMAND_CARDS: u32 = 1;
pub const COMMAND_CHAT: u32 = 2;
pub const COMMAND_FLAMES: u32 = 3;

// ── Layout ───────────────────────────────────────────────────────────

const TITLE_Y: f32 = 150.0;
const MENU_START_Y: f32 = 300.0;
const ENTRY_SPACING: f32 = 120.0;
/// Narrower than this gets the compact layout.
const COMPACT_WIDTH: f32 = 768.0;

const ENTRIES: [(&str, u32); 3] = [
    ("ACE OF SHADOWS", COMMAND_CARDS),
    ("MAGIC WORDS", COMMAND_CHAT),
    ("PHOENIX FLAMES", COMMAND_FLAMES),
];

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub command: u32,
    /// Center of the entry.
    pub center: Vec2,
    pub size: Vec2,
}

impl MenuEntry {
    fn contains(&self, point: Vec2) -> bool {
        let half = self.size * 0.5;
        let d = (point - self.center).abs();
        d.x <= half.x && d.y <= half.y
    }
}

#[derive(Debug, Default)]
pub struct MainMenu {
    title: Vec2,
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn title_position(&self) -> Vec2 {
        self.title
    }

    fn layout(&mut self, viewport: Viewport) {
        let compact = viewport.width < COMPACT_WIDTH;
        let width = if compact {
            (viewport.width - 60.0).min(400.0)
        } else {
            (viewport.width - 100.0).min(600.0)
        };
        let height = if compact { 80.0 } else { 110.0 };
        let center_x = viewport.width / 2.0;

        self.title = Vec2::new(center_x, TITLE_Y);
        self.entries = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, &(label, command))| MenuEntry {
                label,
                command,
                center: Vec2::new(center_x, MENU_START_Y + i as f32 * ENTRY_SPACING),
                size: Vec2::new(width.max(0.0), height),
            })
            .collect();
    }

    fn entry_at(&self, point: Vec2) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.contains(point))
            .map(|entry| entry.command)
    }
}

/// Open the demo scene behind `command`. Unknown ids are ignored.
fn open(ctx: &mut SceneContext, command: u32) {
    match command {
        COMMAND_CARDS => ctx.request_scene(CardDeal::new(), None),
        COMMAND_CHAT => ctx.request_scene(ChatFeed::new(), None),
        COMMAND_FLAMES => ctx.request_scene(Flames::new(ctx.viewport()), None),
        _ => {}
    }
}

impl Scene for MainMenu {
    fn name(&self) -> &str {
        "main-menu"
    }

    fn on_enter(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError> {
        self.layout(ctx.viewport());
        Ok(())
    }

    fn on_exit(&mut self) -> Result<(), SceneError> {
        self.entries.clear();
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext, _delta: f32) -> Result<(), SceneError> {
        let mut selected = None;
        for event in ctx.input() {
            match *event {
                InputEvent::Command { id } if id != COMMAND_BACK => selected = Some(id),
                InputEvent::PointerUp { x, y } => {
                    if let Some(command) = self.entry_at(Vec2::new(x, y)) {
                        selected = Some(command);
                    }
                }
                _ => {}
            }
        }
        // Only the first request of a burst can win; the rest would be dropped anyway.
        if let Some(command) = selected {
            open(ctx, command);
        }
        Ok(())
    }

    fn as_resizable(&mut self) -> Option<&mut dyn Resizable> {
        Some(self)
    }
}

impl Resizable for MainMenu {
    fn on_resize(&mut self, ctx: &mut SceneContext) -> Result<(), SceneError> {
        self.layout(ctx.viewport());
        Ok(())
    }
}
