use std::{future::Future, pin::Pin, sync::Arc};

/// Boxed future returned by [`InvokeModel::invoke`].
pub type InvokeFuture<'a, E> = Pin<Box<dyn Future<Output = Result<String, E>> + Send + 'a>>;

/// Capability to run one chat-style generation: a system instruction plus a
/// user message in, the model's text out.
///
/// Implement this trait to plug in a hosted model client, or a stub in tests.
/// Failures are reported as `Self::Error` and are never retried here.
pub trait InvokeModel: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn invoke<'a>(&'a self, system: &'a str, user: &'a str) -> InvokeFuture<'a, Self::Error>;
}

impl<T: InvokeModel + ?Sized> InvokeModel for &T {
    type Error = T::Error;

    fn invoke<'a>(&'a self, system: &'a str, user: &'a str) -> InvokeFuture<'a, Self::Error> {
        (**self).invoke(system, user)
    }
}

impl<T: InvokeModel + ?Sized> InvokeModel for Arc<T> {
    type Error = T::Error;

    fn invoke<'a>(&'a self, system: &'a str, user: &'a str) -> InvokeFuture<'a, Self::Error> {
        (**self).invoke(system, user)
    }
}
