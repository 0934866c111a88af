use anyhow::Context as _;
use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

use crate::domain::repository::ImageStorePort;
use crate::domain::types::ImageUpload;
use crate::error::ApiError;
use crate::infra::watermark;

/// Object-storage adapter for uploaded images. Objects are written under a
/// collision-free key and served from the configured public base URL.
#[derive(Clone)]
pub struct S3ImageStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url,
        }
    }

    fn object_key(filename: &str) -> String {
        format!("{}-{}", Uuid::new_v4(), filename.replace(' ', "_"))
    }
}

impl ImageStorePort for S3ImageStore {
    async fn upload_image(&self, file: &ImageUpload, watermark: bool) -> Result<String, ApiError> {
        if !file.content_type.starts_with("image/") {
            return Err(ApiError::InvalidInput(
                "only image files are allowed".to_owned(),
            ));
        }

        let body = if watermark {
            watermark::apply(&file.bytes).context("watermark image")?
        } else {
            file.bytes.to_vec()
        };

        let key = Self::object_key(&file.filename);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&file.content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .context("upload image to object storage")?;

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        ))
    }
}
