//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired dependencies and the session. Command runners
//! call `runtime.usecases().xxx()` to get use cases with their ports attached.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps

use std::sync::Arc;

use vc_app::usecases::{DescribeImage, EncodeImage, SessionOrchestrator};
use vc_app::AppDeps;

/// Application runtime with dependencies.
///
/// 应用运行时：持有依赖和唯一的会话。
pub struct AppRuntime {
    pub deps: AppDeps,
    session: Arc<SessionOrchestrator>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let session = Arc::new(SessionOrchestrator::from_deps(&deps));
        Self { deps, session }
    }

    /// The single session of this process.
    pub fn session(&self) -> &Arc<SessionOrchestrator> {
        &self.session
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Factory for stateless use cases.
/// 无状态用例的工厂。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn encode_image(&self) -> EncodeImage {
        EncodeImage::from_ports(self.runtime.deps.image_reader.clone())
    }

    pub fn describe_image(&self) -> DescribeImage {
        DescribeImage::new(
            Arc::new(self.encode_image()),
            self.runtime.deps.describer.clone(),
        )
    }
}
