//! Application state
//!
//! Shared by every handler: the service context, the loaded configuration
//! and the session cookie policy derived from it.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use jokebox_common::{AppConfig, JwtService};
use jokebox_service::ServiceContext;

use crate::extractors::ACCESS_TOKEN_COOKIE;

/// Attributes of the `access_token` cookie
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    fn base(self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(ACCESS_TOKEN_COOKIE, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(self.secure);
        cookie
    }

    /// Cookie carrying a freshly issued token for `max_age_secs`
    pub fn issue(self, token: String, max_age_secs: i64) -> Cookie<'static> {
        let mut cookie = self.base(token);
        cookie.set_max_age(time::Duration::seconds(max_age_secs));
        cookie
    }

    /// Empty cookie with `Max-Age=0`
    pub fn expired(self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_max_age(time::Duration::ZERO);
        cookie
    }
}

#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    cookies: SessionCookies,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let cookies = SessionCookies::new(config.app.env.is_production());
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            cookies,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    pub fn cookies(&self) -> SessionCookies {
        self.cookies
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}
