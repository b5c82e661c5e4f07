use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

/// Request body accepted either as JSON or as an urlencoded form.
/// A request carrying neither content type, or a JSON request with an empty
/// body, yields `T::default()`.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        } else if content_type.starts_with("application/json") {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self(T::default()));
            }
            let Json(payload) = Json::<T>::from_bytes(&body).map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        } else {
            Ok(Self(T::default()))
        }
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::Request;
    use serde::Deserialize;

    use super::Payload;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Fields {
        title: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Fields {
        let mut builder = Request::builder().method("POST").uri("/api/books");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();
        let Payload(fields) = <Payload<Fields> as FromRequest<()>>::from_request(req, &())
            .await
            .unwrap();
        fields
    }

    #[tokio::test]
    async fn reads_json() {
        let fields = extract(Some("application/json"), r#"{"title":"test"}"#).await;
        assert_eq!(fields.title.as_deref(), Some("test"));
    }

    #[tokio::test]
    async fn reads_form() {
        let fields = extract(
            Some("application/x-www-form-urlencoded"),
            "title=The+Hobbit",
        )
        .await;
        assert_eq!(fields.title.as_deref(), Some("The Hobbit"));
    }

    #[tokio::test]
    async fn empty_form_field_is_kept_empty() {
        let fields = extract(Some("application/x-www-form-urlencoded"), "title=").await;
        assert_eq!(fields.title.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn empty_json_body_is_empty_payload() {
        assert_eq!(extract(Some("application/json"), "").await, Fields::default());
        assert_eq!(
            extract(Some("application/json; charset=utf-8"), "  \n").await,
            Fields::default()
        );
    }

    #[tokio::test]
    async fn missing_content_type_is_empty_payload() {
        assert_eq!(extract(None, "").await, Fields::default());
    }
}
