//! Notification types for external observers.
//!
//! The engine itself never publishes; the controlling loop constructs the
//! matching [`GameEvent`] after each successful engine call and hands it to
//! an [`EventBus`]. Kept deliberately free of decision logic.

use crate::core::{PlayerId, Position, Wall};

/// Something observable that happened to a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PlayerAdded(PlayerId),
    PawnMoved {
        player: PlayerId,
        from: Position,
        to: Position,
    },
    WallPlaced {
        player: PlayerId,
        wall: Wall,
    },
    TurnChanged(PlayerId),
    GameWon(PlayerId),
    Undone,
    Redone,
}

/// Receives game events. Implemented by renderers, loggers, and the like.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Fans events out to subscribed observers in subscription order.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn GameObserver>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn publish(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
