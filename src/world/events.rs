use crate::world::block::BlockType;
use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::IVec3;

/// Change notification for whatever is mirroring the world (a renderer,
/// a test harness). A `Set` on an occupied coordinate carries the
/// replacement; the subscriber discards any stale representation for that
/// coordinate on either event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    Set { pos: IVec3, block: BlockType },
    Removed { pos: IVec3 },
}

/// Fan-out of world mutations to any number of subscribers. Receivers that
/// have been dropped are pruned on the next broadcast.
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Vec<Sender<BlockEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<BlockEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn broadcast(&mut self, event: BlockEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_broadcast_order() {
        let mut hub = EventHub::new();
        let rx = hub.subscribe();

        let pos = IVec3::new(1, 2, 3);
        hub.broadcast(BlockEvent::Set {
            pos,
            block: BlockType::Stone,
        });
        hub.broadcast(BlockEvent::Removed { pos });

        assert_eq!(
            rx.try_recv().unwrap(),
            BlockEvent::Set {
                pos,
                block: BlockType::Stone
            }
        );
        assert_eq!(rx.try_recv().unwrap(), BlockEvent::Removed { pos });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut hub = EventHub::new();
        let rx = hub.subscribe();
        drop(rx);
        assert_eq!(hub.subscriber_count(), 1);

        hub.broadcast(BlockEvent::Removed {
            pos: IVec3::ZERO,
        });
        assert_eq!(hub.subscriber_count(), 0);
    }
}
