pub(crate) mod create;
mod delete;
pub(crate) mod list;
mod reorder;
mod update;

use actix_web::web::{scope, ServiceConfig};

/// Card routes addressed by card id. Listing and creating live under the
/// dashboard scope.
pub fn card_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/cards")
            .service(reorder::reorder_cards_endpoint)
            .service(update::update_card_endpoint)
            .service(delete::delete_card_endpoint),
    );
}
