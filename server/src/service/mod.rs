//! Entity services with modular organization
//!
//! One generic [`EntityService`] serves every exposed entity:
//! - converters: entity ↔ transfer object mapping
//! - parsers: query parameters → typed search requests
//! - paging: default and clamp rules for page, page size and sort

mod converters;
mod paging;
mod parsers;

use neurotrack_api::{Identified, PageInfo, PagedResult};

use crate::persistence::{PersistenceError, Record, Repository, SearchQuery};

pub use converters::Transfer;
pub use paging::SearchRequest;
pub use parsers::{parse_search, PAGE_PARAM, PAGE_SIZE_PARAM, SORT_BY_PARAM, SORT_DIR_PARAM};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// One page of search results plus the normalized query that produced it.
#[derive(Debug, Clone)]
pub struct SearchPage<T> {
    pub result: PagedResult<T>,
    pub query: SearchQuery,
}

/// CRUD and search for one entity, speaking transfer objects on both sides.
pub struct EntityService<R> {
    repo: R,
}

impl<R> EntityService<R>
where
    R: Repository,
    R::Entity: Transfer,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(
        &mut self,
        id: i64,
    ) -> Result<<R::Entity as Transfer>::Dto, ServiceError> {
        let entity = self.repo.get_by_id(id).await?;
        Ok(entity.to_dto())
    }

    /// The whole table as a single page.
    pub async fn get_all(
        &mut self,
    ) -> Result<PagedResult<<R::Entity as Transfer>::Dto>, ServiceError> {
        let rows = self.repo.get_all().await?;
        let page_info = PageInfo::single_page(rows.len() as u64);
        Ok(PagedResult {
            items: rows.iter().map(|row| row.to_dto()).collect(),
            page_info,
        })
    }

    /// Insert and return the row as stored, with its assigned key.
    pub async fn add(
        &mut self,
        dto: <R::Entity as Transfer>::Dto,
    ) -> Result<<R::Entity as Transfer>::Dto, ServiceError> {
        let entity = R::Entity::from_dto(dto);
        let id = self.repo.add(&entity).await?;
        tracing::debug!(entity = R::Entity::NAME, id, "created");
        self.get_by_id(id).await
    }

    /// Replace every non-key field of the row named by the transfer object's
    /// key.
    pub async fn update(&mut self, dto: <R::Entity as Transfer>::Dto) -> Result<i64, ServiceError> {
        let id = dto.id();
        self.repo.update(&R::Entity::from_dto(dto)).await?;
        Ok(id)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        Ok(())
    }

    pub async fn search(
        &mut self,
        request: SearchRequest,
    ) -> Result<SearchPage<<R::Entity as Transfer>::Dto>, ServiceError> {
        let mut query = request.normalize(R::Entity::KEY.name);
        query.resolve_sort(R::Entity::SORTABLE, R::Entity::KEY);
        let (rows, total) = self.repo.search(&query).await?;
        let page_info = PageInfo::new(query.page, query.page_size, total);
        Ok(SearchPage {
            result: PagedResult {
                items: rows.iter().map(|row| row.to_dto()).collect(),
                page_info,
            },
            query,
        })
    }
}
