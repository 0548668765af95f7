//! HTTP surface: one endpoint that executes GraphQL on POST and serves
//! GraphiQL on GET.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::graphql::FolioSchema;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use std::time::Instant;

struct Endpoint(String);

async fn graphql(schema: web::Data<FolioSchema>, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    let operation = request.operation_name.clone();
    let started = Instant::now();
    let response = schema.execute(request).await;
    tracing::info!(
        operation = operation.as_deref().unwrap_or("-"),
        errors = response.errors.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "graphql request"
    );
    response.into()
}

async fn graphiql(endpoint: web::Data<Endpoint>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(&endpoint.0).finish())
}

/// Mount the schema at `endpoint`.
pub fn configure(cfg: &mut web::ServiceConfig, schema: FolioSchema, endpoint: &str) {
    cfg.app_data(web::Data::new(schema))
        .app_data(web::Data::new(Endpoint(endpoint.to_string())))
        .service(
            web::resource(endpoint)
                .route(web::post().to(graphql))
                .route(web::get().to(graphiql)),
        );
}

/// Serve until the process is stopped.
pub async fn serve(schema: FolioSchema, config: &ServerConfig) -> Result<()> {
    let endpoint = config.graphql_path.clone();
    let server = HttpServer::new(move || {
        let schema = schema.clone();
        let endpoint = endpoint.clone();
        App::new().configure(move |cfg| configure(cfg, schema, &endpoint))
    })
    .bind(config.bind.as_str())?;

    tracing::info!(
        bind = %config.bind,
        endpoint = %config.graphql_path,
        "GraphQL server listening"
    );
    server.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BlogApi;
    use crate::graphql::build_schema;
    use crate::query::SearchMode;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;
    use actix_web::test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn schema() -> FolioSchema {
        let store: Box<dyn DataStore> = Box::new(StoreFixture::seeded().store);
        build_schema(Arc::new(BlogApi::new(store, SearchMode::default())))
    }

    #[actix_web::test]
    async fn executes_posted_queries() {
        let app = test::init_service(
            App::new().configure(|cfg| configure(cfg, schema(), "/api/graphql")),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/api/graphql")
            .set_json(json!({ "query": "{ tags { slug } }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["data"]["tags"].as_array().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn serves_graphiql_on_get() {
        let app = test::init_service(
            App::new().configure(|cfg| configure(cfg, schema(), "/api/graphql")),
        )
        .await;
        let request = test::TestRequest::get().uri("/api/graphql").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("/api/graphql"));
    }
}
