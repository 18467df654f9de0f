use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    QueryParams, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::guard::{ConnectionGuard, connection_guard};
use crate::models::{CreateProduct, DeleteResponse, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "Products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ProductFilter, DeleteResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Product router; every route sits behind the connection guard
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    guard: ConnectionGuard,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products::<R>).post(create_product::<R>))
        .route(
            "/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, connection_guard))
        .with_state(shared_service)
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update the supplied fields of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<DeleteResponse>> {
    let response = service.delete_product(id).await?;
    Ok(Json(response))
}
