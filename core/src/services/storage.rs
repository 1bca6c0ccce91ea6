//! Image store port.
//!
//! The object store is an external collaborator: it accepts a byte stream
//! and returns a stable locator, or fails. The domain treats the upload as
//! a single-attempt asynchronous operation with no retries; retry policy,
//! if any, belongs to the implementation's own contract.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Locator returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Public URL of the stored image
    pub url: String,

    /// Opaque handle identifying the stored binary for later management
    pub storage_ref: String,
}

/// Port for binary image storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload image bytes into a logical folder.
    ///
    /// # Returns
    /// * `Ok(StoredImage)` - The stored image's URL and reference
    /// * `Err(DomainError::Storage)` - The upload failed; nothing was stored
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, DomainError>;

    /// Delete a previously stored image by its reference.
    ///
    /// Used by the ingestion pipeline's compensating branch when metadata
    /// persistence fails after a successful upload.
    async fn delete(&self, storage_ref: &str) -> Result<(), DomainError>;
}

#[async_trait]
impl<T: ImageStore + ?Sized> ImageStore for std::sync::Arc<T> {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, DomainError> {
        (**self).upload(bytes, folder).await
    }

    async fn delete(&self, storage_ref: &str) -> Result<(), DomainError> {
        (**self).delete(storage_ref).await
    }
}

pub mod mock {
    //! Mock image store for testing

    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::{ImageStore, StoredImage};
    use crate::errors::DomainError;

    /// In-memory image store. Can be primed to fail uploads and records
    /// every delete call for assertions.
    pub struct MockImageStore {
        fail_uploads: AtomicBool,
        counter: AtomicU64,
        deleted: Arc<Mutex<Vec<String>>>,
    }

    impl MockImageStore {
        pub fn new() -> Self {
            Self {
                fail_uploads: AtomicBool::new(false),
                counter: AtomicU64::new(0),
                deleted: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Make every subsequent upload fail
        pub fn fail_next_uploads(&self) {
            self.fail_uploads.store(true, Ordering::SeqCst);
        }

        /// Storage refs passed to `delete`, in call order
        pub async fn deleted_refs(&self) -> Vec<String> {
            self.deleted.lock().await.clone()
        }
    }

    impl Default for MockImageStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ImageStore for MockImageStore {
        async fn upload(&self, _bytes: Vec<u8>, folder: &str) -> Result<StoredImage, DomainError> {
            if self.fail_uploads.load(Ordering::SeqCst) {
                return Err(DomainError::Storage {
                    message: "mock upload failure".to_string(),
                });
            }

            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            Ok(StoredImage {
                url: format!("https://images.example.com/{folder}/{n}.png"),
                storage_ref: format!("{folder}/{n}"),
            })
        }

        async fn delete(&self, storage_ref: &str) -> Result<(), DomainError> {
            self.deleted.lock().await.push(storage_ref.to_string());
            Ok(())
        }
    }
}

pub use mock::MockImageStore;
