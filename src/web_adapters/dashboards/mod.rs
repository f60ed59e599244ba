mod create;
mod delete;
mod get;
mod list;
mod reorder;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::cards;

pub fn dashboard_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/dashboards")
            .service(list::list_dashboards_endpoint)
            .service(create::create_dashboard_endpoint)
            // Must come before "/{dashboard_id}".
            .service(reorder::reorder_dashboards_endpoint)
            .service(
                scope("/{dashboard_id}/cards")
                    .service(cards::list::list_cards_endpoint)
                    .service(cards::create::create_card_endpoint),
            )
            .service(get::get_dashboard_endpoint)
            .service(update::update_dashboard_endpoint)
            .service(delete::delete_dashboard_endpoint),
    );
}
