//! Storage module for course images
//!
//! Provides a MinIO/S3-compatible client for uploads and public URL
//! composition.

mod minio_client;

pub use minio_client::MinioClient;
