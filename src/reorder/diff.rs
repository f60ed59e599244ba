use crate::types::OrderObject;

/// Moves the element at `from` to `to`, shifting everything in between by one
/// slot. Indices out of range leave the order untouched.
pub fn move_item<Id: Clone>(ids: &[Id], from: usize, to: usize) -> Vec<Id> {
    let mut updated = ids.to_vec();
    if from >= updated.len() || to >= updated.len() {
        return updated;
    }
    let item = updated.remove(from);
    updated.insert(to, item);
    updated
}

/// Positional diff: one entry per index whose id changed, carrying the index in
/// `updated` as the new position.
pub fn diff<Id: Clone + PartialEq>(previous: &[Id], updated: &[Id]) -> Vec<OrderObject<Id>> {
    updated
        .iter()
        .enumerate()
        .filter(|(index, id)| previous.get(*index) != Some(*id))
        .map(|(index, id)| OrderObject {
            id: id.clone(),
            position: index as i32,
        })
        .collect()
}
