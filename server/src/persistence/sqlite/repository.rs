//! Generic SQLite repository driven by a per-entity [`Table`] description.

use std::marker::PhantomData;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection};

use crate::persistence::{
    Filter, FilterValue, PersistenceError, Record, Repository, SearchQuery, SortOrder,
};

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Storage layout of a [`Record`].
///
/// Field names of the implementing struct must match the column names, since
/// rows are decoded with `FromRow`.
pub trait Table: Record + for<'r> FromRow<'r, SqliteRow> {
    const TABLE: &'static str;
    /// Non-key columns, in the order [`Table::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

fn select_list<E: Table>() -> String {
    let mut columns = Vec::with_capacity(E::COLUMNS.len() + 1);
    columns.push(E::KEY.column);
    columns.extend_from_slice(E::COLUMNS);
    columns.join(", ")
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filters: &[Filter]) {
    for (i, filter) in filters.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        builder.push(filter.field.column).push(" = ");
        match filter.value {
            FilterValue::Integer(v) => builder.push_bind(v),
            FilterValue::Timestamp(t) => builder.push_bind(t),
        };
    }
}

/// [`Repository`] over any [`Table`], borrowing a session's connection.
pub struct SqliteRepository<'c, E> {
    conn: &'c mut SqliteConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<'c, E: Table> SqliteRepository<'c, E> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }
}

impl<E: Table> Repository for SqliteRepository<'_, E> {
    type Entity = E;

    async fn get_by_id(&mut self, id: i64) -> Result<E, PersistenceError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            select_list::<E>(),
            E::TABLE,
            E::KEY.column
        );
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(PersistenceError::NotFound {
                entity: E::NAME,
                id,
            })
    }

    async fn get_all(&mut self) -> Result<Vec<E>, PersistenceError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {} ASC",
            select_list::<E>(),
            E::TABLE,
            E::KEY.column
        );
        let rows = sqlx::query_as::<_, E>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn add(&mut self, entity: &E) -> Result<i64, PersistenceError> {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(&mut *self.conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&mut self, entity: &E) -> Result<(), PersistenceError> {
        let assignments = E::COLUMNS
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            E::TABLE,
            assignments,
            E::KEY.column
        );
        let id = entity.key();
        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound {
                entity: E::NAME,
                id,
            });
        }
        Ok(())
    }

    async fn delete(&mut self, id: i64) -> Result<(), PersistenceError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::KEY.column);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound {
                entity: E::NAME,
                id,
            });
        }
        Ok(())
    }

    async fn search(&mut self, query: &SearchQuery) -> Result<(Vec<E>, u64), PersistenceError> {
        let mut count = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
        push_filters(&mut count, &query.filters);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&mut *self.conn)
            .await?;

        let order = SortOrder::resolve(E::SORTABLE, E::KEY, &query.sort_by, query.sort_dir);
        let mut select = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {} FROM {}",
            select_list::<E>(),
            E::TABLE
        ));
        push_filters(&mut select, &query.filters);
        select
            .push(" ORDER BY ")
            .push(order.field.column)
            .push(" ")
            .push(order.direction.as_sql());
        if order.field.column != E::KEY.column {
            select.push(", ").push(E::KEY.column).push(" ASC");
        }
        select
            .push(" LIMIT ")
            .push_bind(i64::from(query.page_size))
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let items = select
            .build_query_as::<E>()
            .fetch_all(&mut *self.conn)
            .await?;

        tracing::debug!(
            table = E::TABLE,
            filters = query.filters.len(),
            sort = order.field.column,
            total,
            returned = items.len(),
            "search executed"
        );
        Ok((items, u64::try_from(total).unwrap_or(0)))
    }
}
