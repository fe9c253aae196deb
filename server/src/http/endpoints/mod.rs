//! Generic CRUD and search endpoints, instantiated once per exposed entity.
//!
//! Every entity gets the same six routes under its collection path:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/api/{Entity}` | [`get_all`] |
//! | `POST` | `/api/{Entity}` | [`create`] |
//! | `PUT` | `/api/{Entity}` | [`update`] |
//! | `GET` | `/api/{Entity}/search` | [`search`] |
//! | `GET` | `/api/{Entity}/{id}` | [`get_by_id`] |
//! | `DELETE` | `/api/{Entity}/{id}` | [`delete`] |

mod daily_logs;
mod limits;
mod predictions;
mod scores;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use neurotrack_api::{CollectionResource, Identified, MessageResource, Resource};

use super::hypermedia::LinkBuilder;
use super::{ApiError, AppState};
use crate::persistence::sqlite::{Session, Table};
use crate::persistence::{DailyLog, Limit, Prediction, Score};
use crate::service::{parse_search, EntityService, Transfer};

/// An entity exposed over HTTP.
pub trait ApiResource: Table + Transfer {
    /// Collection path, e.g. `/api/DailyLogs`.
    const PATH: &'static str;
    /// Human label used in update confirmations, e.g. `"Daily log"`.
    const LABEL: &'static str;

    fn links() -> LinkBuilder {
        LinkBuilder::new(Self::PATH)
    }
}

type Dto<E> = <E as Transfer>::Dto;

fn resource<E: ApiResource>(dto: Dto<E>) -> Resource<Dto<E>> {
    let links = E::links().item(dto.id());
    Resource { data: dto, links }
}

/// Routes for every exposed entity.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(entity_routes::<DailyLog>())
        .merge(entity_routes::<Score>())
        .merge(entity_routes::<Prediction>())
        .merge(entity_routes::<Limit>())
}

fn entity_routes<E: ApiResource>() -> Router<AppState> {
    Router::new()
        .route(
            E::PATH,
            get(get_all::<E>).post(create::<E>).put(update::<E>),
        )
        .route(&format!("{}/search", E::PATH), get(search::<E>))
        .route(
            &format!("{}/{{id}}", E::PATH),
            get(get_by_id::<E>).delete(delete::<E>),
        )
}

pub async fn get_all<E: ApiResource>(
    mut session: Session,
) -> Result<Json<CollectionResource<Dto<E>>>, ApiError> {
    tracing::info!(entity = E::NAME, "get_all");
    let page = EntityService::new(session.repository::<E>())
        .get_all()
        .await?;

    Ok(Json(CollectionResource {
        items: page.items.into_iter().map(resource::<E>).collect(),
        page_info: page.page_info,
        links: E::links().collection(),
    }))
}

pub async fn get_by_id<E: ApiResource>(
    mut session: Session,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Resource<Dto<E>>>, ApiError> {
    let Path(id) = id?;
    tracing::info!(entity = E::NAME, id, "get_by_id");
    let dto = EntityService::new(session.repository::<E>())
        .get_by_id(id)
        .await?;
    Ok(Json(resource::<E>(dto)))
}

pub async fn create<E: ApiResource>(
    mut session: Session,
    body: Result<Json<Dto<E>>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Resource<Dto<E>>>), ApiError> {
    let Json(dto) = body?;
    tracing::info!(entity = E::NAME, "create");
    let created = EntityService::new(session.repository::<E>())
        .add(dto)
        .await?;

    let location = E::links().item_href(created.id());
    tracing::info!(entity = E::NAME, id = created.id(), "created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(resource::<E>(created)),
    ))
}

pub async fn update<E: ApiResource>(
    mut session: Session,
    body: Result<Json<Dto<E>>, JsonRejection>,
) -> Result<Json<MessageResource>, ApiError> {
    let Json(dto) = body?;
    tracing::info!(entity = E::NAME, id = dto.id(), "update");
    let id = EntityService::new(session.repository::<E>())
        .update(dto)
        .await?;

    Ok(Json(MessageResource {
        message: format!("{} updated successfully.", E::LABEL),
        links: E::links().item(id),
    }))
}

pub async fn delete<E: ApiResource>(
    mut session: Session,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResource>, ApiError> {
    let Path(id) = id?;
    tracing::info!(entity = E::NAME, id, "delete");
    EntityService::new(session.repository::<E>())
        .delete(id)
        .await?;

    Ok(Json(MessageResource {
        message: format!("{} with id {id} deleted successfully.", E::NAME),
        links: E::links().deleted(),
    }))
}

pub async fn search<E: ApiResource>(
    mut session: Session,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CollectionResource<Dto<E>>>, ApiError> {
    let Query(params) = params?;
    let request = parse_search::<E>(&params)?;
    tracing::info!(
        entity = E::NAME,
        filters = request.filters.len(),
        page = ?request.page,
        page_size = ?request.page_size,
        sort_by = ?request.sort_by,
        sort_dir = ?request.sort_dir,
        "search"
    );
    let page = EntityService::new(session.repository::<E>())
        .search(request)
        .await?;

    let links = E::links().search_results(&page.query, &page.result.page_info);
    Ok(Json(CollectionResource {
        items: page.result.items.into_iter().map(resource::<E>).collect(),
        page_info: page.result.page_info,
        links,
    }))
}
