use crate::common::error::AppError;
use crate::common::state::AppState;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One file part lifted out of a multipart body.
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Body extractor covering both shapes the mobile client sends: plain JSON
/// and multipart/form-data. Multipart text fields are gathered into a JSON
/// object before deserializing, which is why the arg models accept numbers
/// as strings; file parts are handed to the caller untouched.
pub struct FormPayload<T> {
    pub args: T,
    pub files: Vec<FilePart>,
}

impl<T> FormPayload<T> {
    pub fn take_file(&mut self, field: &str) -> Option<FilePart> {
        let idx = self.files.iter().position(|f| f.field == field)?;
        Some(self.files.remove(idx))
    }

    /// First file part regardless of its field name.
    pub fn take_any_file(&mut self) -> Option<FilePart> {
        if self.files.is_empty() {
            None
        } else {
            Some(self.files.remove(0))
        }
    }
}

impl<T: DeserializeOwned + Send> FromRequest<AppState> for FormPayload<T> {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            return from_multipart(req, state).await;
        }

        // Several list endpoints are POSTed with an empty body; treat that
        // as an empty object so all-optional arg models still decode.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::DecodingRequestFailed)?;
        let args = if bytes.is_empty() {
            serde_json::from_value(Value::Object(Map::new()))
        } else {
            serde_json::from_slice(&bytes)
        }
        .map_err(|_| AppError::DecodingRequestFailed)?;
        Ok(Self {
            args,
            files: Vec::new(),
        })
    }
}

async fn from_multipart<T: DeserializeOwned + Send>(
    req: Request,
    state: &AppState,
) -> Result<FormPayload<T>, AppError> {
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|_| AppError::DecodingRequestFailed)?;

    let mut fields = Map::new();
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::DecodingRequestFailed)?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let content_type = field.content_type().map(str::to_owned);
            let data = field
                .bytes()
                .await
                .map_err(|_| AppError::DecodingRequestFailed)?;
            files.push(FilePart {
                field: name,
                file_name,
                content_type,
                data,
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|_| AppError::DecodingRequestFailed)?;
            fields.insert(name, Value::String(text));
        }
    }

    let args = serde_json::from_value(Value::Object(fields))
        .map_err(|_| AppError::DecodingRequestFailed)?;
    Ok(FormPayload { args, files })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Deserialize)]
    struct Args {
        #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
        userid: Option<i64>,
        title: Option<String>,
    }

    #[test]
    fn multipart_text_fields_decode_like_json() {
        let mut fields = Map::new();
        fields.insert("userid".into(), Value::String("42".into()));
        fields.insert("title".into(), Value::String("旧书".into()));
        let args: Args = serde_json::from_value(Value::Object(fields)).unwrap();
        assert_eq!(args.userid, Some(42));
        assert_eq!(args.title.as_deref(), Some("旧书"));
    }

    #[test]
    fn empty_object_leaves_all_fields_none() {
        let args: Args = serde_json::from_value(Value::Object(Map::new())).unwrap();
        assert!(args.userid.is_none());
        assert!(args.title.is_none());
    }
}
