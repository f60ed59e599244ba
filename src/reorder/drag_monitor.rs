use tracing::{event, Level};

use crate::instance::InstanceId;

/// Data carried by a draggable element.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSource<Id> {
    pub instance_id: InstanceId,
    pub entity_id: Id,
}

/// Data carried by a droppable element.
#[derive(Clone, Debug, PartialEq)]
pub struct DropTarget<Id> {
    pub entity_id: Id,
}

/// A finished gesture as delivered by the pointer layer. `target` is `None`
/// when the element was released outside any drop target.
#[derive(Clone, Debug, PartialEq)]
pub struct DropEvent<Id> {
    pub source: DragSource<Id>,
    pub target: Option<DropTarget<Id>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Move<Id> {
    pub source: Id,
    pub destination: Id,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
}

/// Auto-scroll of the nearest scrollable ancestor while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoScroll {
    pub axis: ScrollAxis,
}

/// Observes every drag in the document and keeps only the ones started in its
/// own list instance.
#[derive(Debug)]
pub struct DragMonitor {
    instance_id: InstanceId,
    dragging: bool,
}

impl DragMonitor {
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            dragging: false,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    pub fn source_for<Id>(&self, entity_id: Id) -> DragSource<Id> {
        DragSource {
            instance_id: self.instance_id,
            entity_id,
        }
    }

    pub fn on_drag_start<Id>(&mut self, source: &DragSource<Id>) {
        if source.instance_id == self.instance_id {
            self.dragging = true;
        }
    }

    pub fn on_drag_cancel(&mut self) {
        self.dragging = false;
    }

    /// Vertical-only, and only while a drag from this instance is in progress.
    pub fn auto_scroll(&self) -> Option<AutoScroll> {
        self.dragging.then_some(AutoScroll {
            axis: ScrollAxis::Vertical,
        })
    }

    pub fn on_drop<Id>(&mut self, event: DropEvent<Id>) -> Option<Move<Id>>
    where
        Id: PartialEq + std::fmt::Debug,
    {
        if event.source.instance_id != self.instance_id {
            return None;
        }
        self.dragging = false;

        let target = match event.target {
            Some(target) => target,
            None => {
                event!(
                    target: "reorder",
                    Level::DEBUG,
                    "Drop outside any target ignored: {:?}",
                    event.source.entity_id
                );
                return None;
            }
        };
        if target.entity_id == event.source.entity_id {
            return None;
        }

        Some(Move {
            source: event.source.entity_id,
            destination: target.entity_id,
        })
    }
}
