//! Reply provider contract.

use std::future::Future;
use std::pin::Pin;

use crate::{GenerateRequest, GenerateResponse, ProviderError};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One external generative-language collaborator. Implementations map a
/// validated [`GenerateRequest`] onto their wire format and translate
/// transport outcomes into the shared [`ProviderError`] taxonomy.
pub trait ReplyProvider: Send + Sync {
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        request: GenerateRequest,
    ) -> ProviderFuture<'a, Result<GenerateResponse, ProviderError>>;
}
