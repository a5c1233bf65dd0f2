//! PostgreSQL record store
//!
//! Issues the two fixed queries of the export against the source table:
//!
//! ```sql
//! SELECT count(*) FROM <table>
//! SELECT id, json_filial FROM <table> ORDER BY id ASC LIMIT $1 OFFSET $2
//! ```

use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::store::{RecordStore, RowStream};
use crate::domain::{ProductId, RawProduct, Result, StoreError};
use async_trait::async_trait;
use futures::StreamExt;
use tokio_postgres::Row;

/// PostgreSQL implementation of [`RecordStore`]
///
/// The connection is checked out once and held until the store is dropped.
pub struct PostgreSQLStore {
    conn: deadpool_postgres::Object,
    client: PostgreSQLClient,
}

impl PostgreSQLStore {
    /// Open the store, checking out its connection
    ///
    /// # Errors
    ///
    /// Returns a store error if no connection can be established.
    pub async fn connect(client: PostgreSQLClient) -> Result<Self> {
        let conn = client.get_connection().await?;
        tracing::info!(
            target_db = %client.connection_string_safe(),
            table = %client.table(),
            "Connected to record store"
        );
        Ok(Self { conn, client })
    }

    fn count_query(&self) -> String {
        format!("SELECT count(*) FROM {}", self.client.table())
    }

    fn page_query(&self) -> String {
        format!(
            "SELECT id, json_filial FROM {} ORDER BY id ASC LIMIT $1 OFFSET $2",
            self.client.table()
        )
    }
}

#[async_trait]
impl RecordStore for PostgreSQLStore {
    async fn count(&self) -> Result<u64> {
        let row = self
            .conn
            .query_one(self.count_query().as_str(), &[])
            .await
            .map_err(|e| StoreError::CountFailed(e.to_string()))?;

        let count: i64 = row
            .try_get(0)
            .map_err(|e| StoreError::CountFailed(e.to_string()))?;

        let count = u64::try_from(count)
            .map_err(|_| StoreError::CountFailed(format!("negative row count {count}")))?;
        Ok(count)
    }

    async fn fetch_page(&self, page_size: u64, offset: u64) -> Result<RowStream> {
        let query_failed = |message: String| StoreError::QueryFailed {
            limit: page_size,
            offset,
            message,
        };

        let limit = i64::try_from(page_size).map_err(|e| query_failed(e.to_string()))?;
        let start = i64::try_from(offset).map_err(|e| query_failed(e.to_string()))?;

        let rows = self
            .conn
            .query_raw(self.page_query().as_str(), [limit, start])
            .await
            .map_err(|e| query_failed(e.to_string()))?;

        Ok(rows
            .map(|row| -> Result<RawProduct> {
                let row = row.map_err(|e| StoreError::RowReadFailed(e.to_string()))?;
                read_product(&row)
            })
            .boxed())
    }

    fn describe(&self) -> String {
        format!(
            "{} (table {})",
            self.client.connection_string_safe(),
            self.client.table()
        )
    }
}

/// Read one `(id, json_filial)` row
///
/// `id` may be `int8` or `int4`. A `NULL` payload is a row read failure.
fn read_product(row: &Row) -> Result<RawProduct> {
    let id = match row.try_get::<_, i64>("id") {
        Ok(id) => id,
        Err(_) => row
            .try_get::<_, i32>("id")
            .map(i64::from)
            .map_err(|e| StoreError::RowReadFailed(format!("column id: {e}")))?,
    };

    let payload: Option<String> = row
        .try_get("json_filial")
        .map_err(|e| StoreError::RowReadFailed(format!("column json_filial: {e}")))?;

    let payload = payload.ok_or_else(|| {
        StoreError::RowReadFailed(format!("json_filial is NULL for product {id}"))
    })?;

    Ok(RawProduct::new(ProductId::new(id), payload))
}
