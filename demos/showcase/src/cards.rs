/// Card deal demo: one card per second flies from the main stack to the
/// destination stacks in turn, until the main stack is empty.

use curtain_engine::{Easing, Scene, SceneContext, SceneError};

use crate::menu::{MainMenu, COMMAND_BACK};

const TOTAL_CARDS: u32 = 144;
const NUM_STACKS: usize = 5;
const MAIN_STACK: usize = 0;
const FIRST_DEST_STACK: usize = 1;

/// Seconds between two moves.
const MOVE_INTERVAL: f32 = 1.0;
/// Seconds a card spends in flight.
const MOVE_DURATION: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub card: u32,
    pub from: usize,
    pub to: usize,
    elapsed: f32,
}

impl Flight {
    /// Eased travel fraction in [0, 1].
    pub fn travel(&self) -> f32 {
        Easing::QuadInOut.apply(self.elapsed / MOVE_DURATION)
    }
}

#[derive(Debug, Default)]
pub struct CardDeal {
    stacks: Vec<Vec<u32>>,
    flights: Vec<Flight>,
    since_move: f32,
    moves: usize,
}

impl CardDeal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacks(&self) -> &[Vec<u32>] {
        &self.stacks
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    fn launch(&mut self) {
        let Some(card) = self.stacks.get_mut(MAIN_STACK).and_then(|stack| stack.pop()) else {
            return;
        };
        let to = FIRST_DEST_STACK + self.moves % (NUM_STACKS - FIRST_DEST_STACK);
        self.moves += 1;
        self.flights.push(Flight { card, from: MAIN_STACK, to, elapsed: 0.0 });
    }

    fn land(&mut self, seconds: f32) {
        for flight in &mut self.flights {
            flight.elapsed += seconds;
        }
        let stacks = &mut self.stacks;
        self.flights.retain(|flight| {
            if flight.elapsed < MOVE_DURATION {
                return true;
            }
            if let Some(stack) = stacks.get_mut(flight.to) {
                stack.push(flight.card);
            }
            false
        });
    }
}

impl Scene for CardDeal {
    fn name(&self) -> &str {
        "card-deal"
    }

    fn on_enter(&mut self, _ctx: &mut SceneContext) -> Result<(), SceneError> {
        self.stacks = vec![Vec::new(); NUM_STACKS];
        self.stacks[MAIN_STACK] = (0..TOTAL_CARDS).collect();
        self.flights.clear();
        self.since_move = 0.0;
        self.moves = 0;
        log::debug!("card-deal: {} cards on the main stack", TOTAL_CARDS);
        Ok(())
    }

    fn on_exit(&mut self) -> Result<(), SceneError> {
        self.stacks.clear();
        self.flights.clear();
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext, delta: f32) -> Result<(), SceneError> {
        if ctx.commands().any(|id| id == COMMAND_BACK) {
            ctx.request_scene(MainMenu::new(), None);
        }

        let seconds = ctx.seconds(delta);
        self.land(seconds);

        self.since_move += seconds;
        while self.since_move >= MOVE_INTERVAL {
            self.since_move -= MOVE_INTERVAL;
            self.launch();
        }
        Ok(())
    }
}
