use stocklive_core::lots::{Lot, LotRepositoryTrait, NewLot};
use stocklive_core::Result;

use super::model::{LotDB, NewLotDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::stock_lots;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct LotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LotRepository { pool, writer }
    }
}

#[async_trait]
impl LotRepositoryTrait for LotRepository {
    fn load_lots_for_user(&self, user_id: &str) -> Result<Vec<Lot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stock_lots::table
            .filter(stock_lots::user_id.eq(user_id))
            .order(stock_lots::id.asc())
            .select(LotDB::as_select())
            .load::<LotDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(Lot::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }

    async fn insert_lots(&self, user_id: String, lots: Vec<NewLot>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = Utc::now().naive_utc();
                let rows: Vec<NewLotDB> = lots
                    .into_iter()
                    .map(|lot| NewLotDB::from_domain(&user_id, lot, now))
                    .collect();
                Ok(diesel::insert_into(stock_lots::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
