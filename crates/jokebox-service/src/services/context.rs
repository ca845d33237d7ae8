//! Service context - dependency container for services
//!
//! Holds the repositories, the upstream joke source and the JWT service.

use std::sync::Arc;

use jokebox_common::auth::JwtService;
use jokebox_core::traits::{JokeRepository, JokeSource, UserRepository, VoteRepository};
use jokebox_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    /// Only used for readiness checks; absent when running on in-memory stores
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    joke_repo: Arc<dyn JokeRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    joke_source: Arc<dyn JokeSource>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn joke_repo(&self) -> &dyn JokeRepository {
        self.joke_repo.as_ref()
    }

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    pub fn joke_source(&self) -> &dyn JokeSource {
        self.joke_source.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    joke_repo: Option<Arc<dyn JokeRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    joke_source: Option<Arc<dyn JokeSource>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn joke_repo(mut self, repo: Arc<dyn JokeRepository>) -> Self {
        self.joke_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn joke_source(mut self, source: Arc<dyn JokeSource>) -> Self {
        self.joke_source = Some(source);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            joke_repo: required(self.joke_repo, "joke_repo")?,
            vote_repo: required(self.vote_repo, "vote_repo")?,
            joke_source: required(self.joke_source, "joke_source")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
