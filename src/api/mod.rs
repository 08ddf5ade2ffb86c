use crate::common::codes::VerificationCodes;
use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::common::uploads::{self, UploadStore};
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, info};

pub mod extract;

pub mod addresses;
pub mod banners;
pub mod classify;
pub mod comments;
pub mod community;
pub mod favorites;
pub mod goods;
pub mod likes;
pub mod message_log;
pub mod news;
pub mod orders;
pub mod replies;
pub mod responds;
pub mod search;
pub mod users;

const CODE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub codes: VerificationCodes,
    pub uploads: UploadStore,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", users::router())
        .nest("/address", addresses::router())
        .nest("/goods", goods::router())
        .nest("/orders", orders::router())
        .nest("/favorites", favorites::router())
        .nest("/likes", likes::router())
        .nest("/comments", comments::router())
        .nest("/reply", replies::router())
        .nest("/community", community::router())
        .nest("/respond", responds::router())
        .nest("/banner", banners::router())
        .nest("/classify", classify::router())
        .nest("/search", search::router())
        .nest("/message", message_log::router())
        .nest("/news", news::router())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;

    let codes = state.codes.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CODE_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let swept = codes.sweep();
            if swept > 0 {
                debug!(swept, "swept expired verification codes");
            }
        }
    });

    let static_route = format!("/{}", uploads::PUBLIC_PREFIX);
    let app = Router::new()
        .merge(router())
        .nest_service(&static_route, ServeDir::new(state.uploads.dir()))
        .layer(CorsLayer::permissive())
        // Goods publication carries up to nine image parts in one request.
        .layer(DefaultBodyLimit::max(settings.max_upload_size * 10))
        .with_state(state);

    let addr = SocketAddr::from((settings.app_host, settings.app_port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            codes: state.codes.clone(),
            uploads: state.uploads.clone(),
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    fn codes(&self) -> &VerificationCodes {
        &self.codes
    }

    fn uploads(&self) -> &UploadStore {
        &self.uploads
    }
}
