use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{not_found, BookRouter};
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::Router;
use error_stack::ResultExt;
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod extract;
mod handler;
mod request;
mod response;
mod route;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,server=debug,tower_http=debug,sqlx=info"
                            .into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;

    let port = dotenvy::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {}", bind);

    axum::serve(tcp, router(app).into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}

fn router(app: AppModule) -> Router {
    Router::new()
        .nest("/api", Router::new().route_book())
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        ))
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

#[cfg(test)]
mod test {
    use std::net::SocketAddr;

    use reqwest::{Client, StatusCode};
    use serde_json::Value;
    use tokio::net::TcpListener;

    use crate::handler::AppModule;

    async fn serve() -> String {
        let app = AppModule::new().await.unwrap();
        let tcp = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = tcp.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(tcp, super::router(app).into_make_service())
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    // Kept as one sequential scenario: every step depends on the catalog
    // state the previous one left behind.
    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn catalog_routes() {
        let base = serve().await;
        let books = format!("{}/api/books", base);
        let client = Client::new();

        let res = client
            .post(&books)
            .json(&serde_json::json!({ "title": "test" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let created: Value = res.json().await.unwrap();
        assert_eq!(created["title"], "test");
        assert_eq!(created["comments"], serde_json::json!([]));
        let id = created["_id"].as_str().unwrap().to_string();

        let res = client
            .post(&books)
            .json(&serde_json::json!({ "title": "" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "missing title");

        let res = client.post(&books).send().await.unwrap();
        assert_eq!(res.text().await.unwrap(), "missing title");

        let res = client
            .post(&books)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "missing title");

        let res = client
            .post(&books)
            .form(&[("title", "form book")])
            .send()
            .await
            .unwrap();
        let form_book: Value = res.json().await.unwrap();
        assert_eq!(form_book["title"], "form book");

        let list: Vec<Value> = client
            .get(&books)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(!list.is_empty());
        for book in &list {
            assert!(book.get("_id").is_some());
            assert!(book.get("title").is_some());
            assert!(book.get("commentcount").is_some());
        }

        for missing in [uuid::Uuid::new_v4().to_string(), "000000000000000000000001".into()] {
            let res = client
                .get(format!("{}/{}", books, missing))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(res.text().await.unwrap(), "no book exists");
        }

        let book: Value = client
            .get(format!("{}/{}", books, id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(book["_id"], id.as_str());
        assert_eq!(book["title"], "test");
        assert_eq!(book["comments"], serde_json::json!([]));

        let res = client
            .post(format!("{}/{}", books, id))
            .json(&serde_json::json!({ "comment": "test" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let commented: Value = res.json().await.unwrap();
        assert_eq!(commented["comments"], serde_json::json!(["test"]));

        let res = client
            .post(format!("{}/{}", books, uuid::Uuid::new_v4()))
            .json(&serde_json::json!({ "comment": "test" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "no book exists");

        let res = client
            .post(format!("{}/{}", books, id))
            .json(&serde_json::json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(
            res.text().await.unwrap(),
            "missing required field comment"
        );

        let list: Vec<Value> = client
            .get(&books)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let listed = list.iter().find(|book| book["_id"] == id.as_str()).unwrap();
        assert_eq!(listed["commentcount"], 1);

        let res = client
            .delete(format!("{}/{}", books, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "delete successful");

        let res = client
            .get(format!("{}/{}", books, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.text().await.unwrap(), "no book exists");

        let res = client
            .delete(format!("{}/{}", books, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.text().await.unwrap(), "no book exists");

        for _ in 0..2 {
            let res = client.delete(&books).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(res.text().await.unwrap(), "complete delete successful");
        }
        let list: Vec<Value> = client
            .get(&books)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(list.is_empty());

        let res = client
            .get(format!("{}/api/nowhere", base))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.text().await.unwrap(), "Not Found");
    }
}
