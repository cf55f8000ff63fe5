use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use wayfinder_core::{Edge, Graph, GraphName, Vertex, Weight, WeightedEdge};
use wayfinder_storage::GraphManager;
use crate::error::{ApiError, ErrorBody};

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Deserialize)]
struct UpsertGraphRequest {
    #[serde(default)]
    edges: Vec<WeightedEdge>,
}

#[derive(Deserialize)]
struct RenameGraphRequest {
    name: GraphName,
}

#[derive(Serialize)]
struct GraphSummary {
    name: String,
}

#[derive(Serialize)]
struct GraphDetail {
    name: String,
    edges: Vec<WeightedEdge>,
}

impl From<&Graph<WeightedEdge>> for GraphDetail {
    fn from(graph: &Graph<WeightedEdge>) -> Self {
        Self {
            name: graph.name().value().to_string(),
            edges: graph.edges().to_vec(),
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(manager: Arc<GraphManager>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(manager.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every route; the app must provide `web::Data<Arc<GraphManager>>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = ErrorBody::response(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .route("/graphs", web::get().to(list_graphs))
        .route("/graphs/{name}", web::get().to(get_graph))
        .route("/graphs/{name}", web::put().to(upsert_graph))
        .route("/graphs/{name}", web::delete().to(delete_graph))
        .route("/graphs/{name}/exists", web::get().to(graph_exists))
        .route("/graphs/{name}/vertices", web::get().to(get_vertices))
        .route("/graphs/{name}/edges", web::put().to(upsert_edge))
        .route("/graphs/{name}/edges", web::delete().to(delete_edge))
        .route("/graphs/{name}/rename", web::post().to(rename_graph))
        .route("/dijkstra/{graph}/{source}/{destination}", web::get().to(shortest_path));
}

async fn list_graphs(manager: web::Data<Arc<GraphManager>>) -> ApiResult {
    let graphs: Vec<GraphSummary> = manager
        .list_graphs()?
        .into_iter()
        .map(|name| GraphSummary { name: name.value().to_string() })
        .collect();
    Ok(HttpResponse::Ok().json(graphs))
}

async fn get_graph(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    match manager.get_graph(&name)? {
        Some(graph) => Ok(HttpResponse::Ok().json(GraphDetail::from(&graph))),
        None => Ok(ErrorBody::response(StatusCode::NOT_FOUND, "Graph not found")),
    }
}

async fn upsert_graph(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
    req: web::Json<UpsertGraphRequest>,
) -> ApiResult {
    let mut graph = Graph::new(GraphName::new(path.into_inner())?);
    for edge in req.into_inner().edges {
        graph.upsert_edge(edge)?;
    }
    manager.upsert_graph(&graph)?;
    Ok(HttpResponse::Ok().json(GraphDetail::from(&graph)))
}

async fn delete_graph(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    if manager.delete_graph(&name)? {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "result": true })))
    } else {
        Ok(ErrorBody::response(StatusCode::NOT_FOUND, "Graph not found"))
    }
}

async fn graph_exists(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    let exists = manager.exists(&name)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": exists })))
}

async fn get_vertices(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    let vertices: Vec<Vertex> = manager.vertices(&name)?;
    Ok(HttpResponse::Ok().json(vertices))
}

async fn upsert_edge(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
    req: web::Json<WeightedEdge>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    let graph = manager.upsert_edge(&name, req.into_inner())?;
    Ok(HttpResponse::Ok().json(GraphDetail::from(&graph)))
}

async fn delete_edge(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
    req: web::Json<Edge>,
) -> ApiResult {
    let name = GraphName::new(path.into_inner())?;
    // identity ignores weight, any value finds the stored edge
    let edge = WeightedEdge::from_edge(req.into_inner(), Weight::default());
    let deleted = manager.delete_edge(&name, &edge)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": deleted })))
}

async fn rename_graph(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<String>,
    req: web::Json<RenameGraphRequest>,
) -> ApiResult {
    let from = GraphName::new(path.into_inner())?;
    let graph = manager.rename_graph(&from, req.into_inner().name)?;
    Ok(HttpResponse::Ok().json(GraphDetail::from(&graph)))
}

async fn shortest_path(
    manager: web::Data<Arc<GraphManager>>,
    path: web::Path<(String, String, String)>,
) -> ApiResult {
    let (graph, source, destination) = path.into_inner();
    let name = GraphName::new(graph)?;
    let source = Vertex::new(source)?;
    let destination = Vertex::new(destination)?;

    let result = manager.shortest_path(&name, &source, &destination)?;
    info!(
        "Path {} -> {} in '{}': {} edges",
        source,
        destination,
        name,
        result.paths().len()
    );
    Ok(HttpResponse::Ok().json(result))
}
