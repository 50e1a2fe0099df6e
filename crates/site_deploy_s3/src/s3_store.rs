use std::future::Future;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use site_deploy_core::{BucketStore, PutObject};

pub struct S3BucketStore {
    bucket: String,
    client: aws_sdk_s3::Client,
}

impl S3BucketStore {
    pub fn new(bucket: impl Into<String>, client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket: bucket.into(),
            client,
        }
    }

    pub async fn connect(bucket: impl Into<String>, region: &str) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(bucket, aws_sdk_s3::Client::new(&aws_config))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// Runs an SDK call to completion from the synchronous store interface.
/// Requires the multi-threaded tokio runtime.
fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

impl BucketStore for S3BucketStore {
    fn put_bucket_policy(&self, policy: &str) -> Result<(), String> {
        block_on(async {
            self.client
                .put_bucket_policy()
                .bucket(&self.bucket)
                .policy(policy)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| {
                    format!("failed to set bucket policy: {}", DisplayErrorContext(&error))
                })
        })
    }

    fn list_keys(&self) -> Result<Vec<String>, String> {
        block_on(async {
            let mut keys = Vec::new();
            let mut pages = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .into_paginator()
                .send();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|error| {
                    format!("failed to list objects: {}", DisplayErrorContext(&error))
                })?;
                keys.extend(
                    page.contents()
                        .iter()
                        .filter_map(|object| object.key().map(str::to_string)),
                );
            }
            Ok(keys)
        })
    }

    fn put_object(&self, object: PutObject) -> Result<(), String> {
        let PutObject {
            key,
            body,
            content_type,
            cache_control,
        } = object;
        block_on(async move {
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(&key)
                .body(ByteStream::from(body))
                .content_type(content_type)
                .cache_control(cache_control)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to upload {key}: {}", DisplayErrorContext(&error)))
        })
    }

    fn delete_object(&self, key: &str) -> Result<(), String> {
        block_on(async {
            self.client
                .delete_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to delete {key}: {}", DisplayErrorContext(&error)))
        })
    }
}
