use std::collections::HashSet;

use reorder::OrderObject;
use uuid::Uuid;

use crate::UseCaseError;

/// Rejects empty batches and batches naming the same id twice.
pub(crate) fn validate_order_objects(
    order_objects: &[OrderObject<Uuid>],
) -> Result<Vec<(Uuid, i32)>, UseCaseError> {
    if order_objects.is_empty() {
        return Err(UseCaseError::BadRequest(
            "orderObjects must not be empty.".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    if !order_objects.iter().all(|object| seen.insert(object.id)) {
        return Err(UseCaseError::BadRequest(
            "orderObjects must not contain duplicate ids.".to_string(),
        ));
    }
    Ok(order_objects
        .iter()
        .map(|object| (object.id, object.position))
        .collect())
}
