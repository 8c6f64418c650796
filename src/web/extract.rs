use axum::{extract::{FromRequest, Request}, http::header, Form, Json};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Request body read either as JSON or as an urlencoded form, picked by
/// `Content-Type`. A body that does not deserialize yields `T::default()`, so
/// the handler still answers with a page and its alert.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send
{
    type Rejection = std::convert::Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = request.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);

        let outcome = if is_json {
            Json::<T>::from_request(request, state).await
                .map(|Json(value)| value)
                .map_err(|rejection| rejection.body_text())
        } else {
            Form::<T>::from_request(request, state).await
                .map(|Form(value)| value)
                .map_err(|rejection| rejection.body_text())
        };

        match outcome {
            Ok(value) => Ok(Self(value)),
            Err(reason) => {
                log::warn!("Unreadable request body, treating it as empty: {}", reason);
                Ok(Self(T::default()))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64)
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Integer(number) => number.to_string(),
            TextOrNumber::Float(number) => number.to_string()
        }
    }
}

/// JSON clients may send `"stock": 5`, forms always send text.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de>
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

pub fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where D: Deserializer<'de>
{
    Option::<TextOrNumber>::deserialize(deserializer).map(|value| value.map(String::from))
}
