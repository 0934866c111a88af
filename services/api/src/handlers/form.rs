//! Multipart form reading shared by the listing and avatar endpoints.
//!
//! Listing writes arrive as multipart requests: scalar fields as text
//! parts, `location` / `selectedFeatures` as JSON-encoded parts, images as
//! file parts. The helpers here lift that into typed values, answering
//! 400 for anything malformed.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::domain::types::ImageUpload;
use crate::error::ApiError;

/// Per-request cap on attached files, kept from the legacy upload limits.
pub const MAX_FILES: usize = 20;

fn invalid(msg: impl Into<String>) -> ApiError {
    ApiError::InvalidInput(msg.into())
}

/// Text fields and file attachments lifted out of a multipart request.
#[derive(Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<ImageUpload>,
}

impl MultipartForm {
    /// Drain the request body. Parts named in `file_fields` are collected
    /// as files; every other part is read as text.
    pub async fn read(multipart: &mut Multipart, file_fields: &[&str]) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| invalid("malformed multipart body"))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            if file_fields.contains(&name.as_str()) {
                let filename = field.file_name().unwrap_or("upload").to_owned();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| invalid("unreadable file attachment"))?;
                form.files.push(ImageUpload {
                    filename,
                    content_type,
                    bytes,
                });
                if form.files.len() > MAX_FILES {
                    return Err(invalid("too many file attachments"));
                }
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|_| invalid("unreadable form field"))?;
                form.fields.insert(name, text);
            }
        }
        Ok(form)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, ApiError> {
        self.get(key)
            .ok_or_else(|| invalid(format!("missing field: {key}")))
    }

    pub fn require_i64(&self, key: &str) -> Result<i64, ApiError> {
        self.require(key)?
            .parse()
            .map_err(|_| invalid(format!("invalid number: {key}")))
    }

    pub fn require_i32(&self, key: &str) -> Result<i32, ApiError> {
        self.require(key)?
            .parse()
            .map_err(|_| invalid(format!("invalid number: {key}")))
    }

    pub fn parse_i64(&self, key: &str) -> Result<Option<i64>, ApiError> {
        self.get(key)
            .map(|v| v.parse().map_err(|_| invalid(format!("invalid number: {key}"))))
            .transpose()
    }

    pub fn parse_i32(&self, key: &str) -> Result<Option<i32>, ApiError> {
        self.get(key)
            .map(|v| v.parse().map_err(|_| invalid(format!("invalid number: {key}"))))
            .transpose()
    }

    /// Deserialize a JSON-encoded part, if present.
    pub fn json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ApiError> {
        self.get(key)
            .map(|raw| {
                serde_json::from_str(raw).map_err(|_| invalid(format!("invalid {key} payload")))
            })
            .transpose()
    }
}
