use serde::{Deserialize, Serialize};

/// One changed position. `position` is the zero-based index in the new order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderObject<Id> {
    pub id: Id,
    pub position: i32,
}

/// Body of the reorder procedure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReorderRequest<Id> {
    #[serde(rename = "orderObjects")]
    pub order_objects: Vec<OrderObject<Id>>,
}

impl<Id> ReorderRequest<Id> {
    pub fn is_empty(&self) -> bool {
        self.order_objects.is_empty()
    }
}

/// An entity that can be placed in an ordered list.
pub trait Orderable {
    type Id: Clone + PartialEq + std::fmt::Debug;

    fn order_id(&self) -> Self::Id;
}
