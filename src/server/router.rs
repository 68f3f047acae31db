use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::car::{
        __path_create_car, __path_delete_car, __path_find_cars_by_color, __path_find_cars_by_name,
        __path_find_cars_by_power, __path_get_car_by_id, __path_list_cars, __path_replace_car,
        create_car, delete_car, find_cars_by_color, find_cars_by_name, find_cars_by_power,
        get_car_by_id, list_cars, replace_car,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "cars", description = "Car management endpoints")
))]
struct ApiDoc;

/// Builds the application route table.
///
/// Handlers are registered through `OpenApiRouter` so the OpenAPI document is
/// derived from the same table the server actually routes with. Literal
/// segments (`/cars/name`, `/cars/color`, `/cars/power`) take precedence over
/// the `/cars/{id}` capture.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_cars, create_car, replace_car))
        .routes(routes!(find_cars_by_name))
        .routes(routes!(find_cars_by_color))
        .routes(routes!(find_cars_by_power))
        .routes(routes!(get_car_by_id, delete_car))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
