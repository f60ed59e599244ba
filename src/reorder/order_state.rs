use tracing::{event, Level};

use crate::{
    diff::{diff, move_item},
    drag_monitor::{DragMonitor, DropEvent},
    instance::InstanceId,
    types::{Orderable, ReorderRequest},
};

/// Client-side best-known order of one list.
///
/// The order is seeded from a server fetch and reset whenever a fetch with a
/// new generation is observed; between fetches it is mutated optimistically by
/// drops. It is always a permutation of the ids of the last fetch.
#[derive(Debug)]
pub struct OrderedList<E: Orderable> {
    monitor: DragMonitor,
    ordered_ids: Vec<E::Id>,
    generation: Option<u64>,
}

impl<E: Orderable> OrderedList<E> {
    pub fn new() -> Self {
        Self {
            monitor: DragMonitor::new(InstanceId::new()),
            ordered_ids: vec![],
            generation: None,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.monitor.instance_id()
    }

    pub fn monitor(&self) -> &DragMonitor {
        &self.monitor
    }

    pub fn monitor_mut(&mut self) -> &mut DragMonitor {
        &mut self.monitor
    }

    pub fn ordered_ids(&self) -> &[E::Id] {
        &self.ordered_ids
    }

    /// Observes a list fetch result. Only a new `generation` discards the
    /// optimistic order; re-rendering the same result keeps it.
    pub fn sync(&mut self, generation: u64, items: &[E]) {
        if self.generation == Some(generation) {
            return;
        }
        self.generation = Some(generation);
        self.ordered_ids = items.iter().map(|item| item.order_id()).collect();
    }

    /// Moves `source` to the slot of `destination` and returns the positions
    /// that changed. The local order is updated before anything is persisted.
    /// Unknown ids are ignored.
    pub fn apply_move(
        &mut self,
        source: &E::Id,
        destination: &E::Id,
    ) -> Option<ReorderRequest<E::Id>> {
        let source_index = self.ordered_ids.iter().position(|id| id == source);
        let destination_index = self.ordered_ids.iter().position(|id| id == destination);
        let (source_index, destination_index) = match (source_index, destination_index) {
            (Some(source_index), Some(destination_index)) => (source_index, destination_index),
            _ => {
                event!(
                    target: "reorder",
                    Level::DEBUG,
                    "Move between unknown ids ignored: {:?} -> {:?}",
                    source,
                    destination
                );
                return None;
            }
        };

        let updated_ids = move_item(&self.ordered_ids, source_index, destination_index);
        let order_objects = diff(&self.ordered_ids, &updated_ids);
        self.ordered_ids = updated_ids;

        if order_objects.is_empty() {
            None
        } else {
            Some(ReorderRequest { order_objects })
        }
    }

    pub fn handle_drop(&mut self, event: DropEvent<E::Id>) -> Option<ReorderRequest<E::Id>> {
        let drag_move = self.monitor.on_drop(event)?;
        self.apply_move(&drag_move.source, &drag_move.destination)
    }
}

impl<E: Orderable> Default for OrderedList<E> {
    fn default() -> Self {
        Self::new()
    }
}
