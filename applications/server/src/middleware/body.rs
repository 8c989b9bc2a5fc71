/// Create-user body parsing
///
/// Accepts JSON and URL-encoded form bodies and decodes both into the strict
/// `CreateUser` contract.
use crate::error::{Result, ServerError};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Form,
};
use roster_core::CreateUser;

/// Decoded create-user request body
#[derive(Debug, Clone)]
pub struct UserPayload(pub CreateUser);

#[axum::async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(input) = Form::<CreateUser>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;
                Ok(Self(input))
            }
            None => decode_json(&read_body(req, state).await?).map(Self),
            Some(ct) if is_json(ct) => decode_json(&read_body(req, state).await?).map(Self),
            Some(ct) => Err(ServerError::BadRequest(format!(
                "Unsupported content type: {}",
                ct
            ))),
        }
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state)
        .await
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Decode a JSON body, treating an empty body as `{}`
pub fn decode_json(body: &[u8]) -> Result<CreateUser> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateUser::default());
    }

    serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_user() {
        assert_eq!(decode_json(b"").unwrap(), CreateUser::default());
        assert_eq!(decode_json(b"  \n").unwrap(), CreateUser::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            decode_json(b"{\"name\":"),
            Err(ServerError::BadRequest(_))
        ));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(decode_json(b"[1,2,3]").is_err());
    }

    #[test]
    fn json_content_types() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("application/merge-patch+json"));
        assert!(!is_json("text/plain"));
    }
}
