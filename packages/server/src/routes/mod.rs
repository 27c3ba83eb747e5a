use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::pereval::*;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_pereval))
        .routes(routes!(get_pereval))
}
