//! Read queries over bakeries and baked goods.

use crate::error::AppError;
use crate::models::{BakedGoodBody, BakeryDetail, BakerySummary};
use sqlx::SqlitePool;

/// Descending price; equal prices fall back to ascending id so results are deterministic.
const BY_PRICE_DESC: &str = "SELECT id, name, price FROM baked_goods ORDER BY price DESC, id ASC";

pub struct BakeryService;

impl BakeryService {
    /// All bakeries in id order.
    pub async fn list_bakeries(pool: &SqlitePool) -> Result<Vec<BakerySummary>, AppError> {
        let rows = sqlx::query_as::<_, BakerySummary>("SELECT id, name FROM bakeries ORDER BY id ASC")
            .fetch_all(pool)
            .await?;
        tracing::debug!(count = rows.len(), "listed bakeries");
        Ok(rows)
    }

    /// One bakery with its baked goods, or None when no row has this id.
    /// Fetches the bakery, then its goods in a single query, and assembles the two.
    pub async fn get_bakery_by_id(pool: &SqlitePool, id: i64) -> Result<Option<BakeryDetail>, AppError> {
        let bakery = sqlx::query_as::<_, BakerySummary>("SELECT id, name FROM bakeries WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(bakery) = bakery else {
            tracing::debug!(id, "bakery not found");
            return Ok(None);
        };
        let goods = sqlx::query_as::<_, BakedGoodBody>(
            "SELECT id, name, price FROM baked_goods WHERE bakery_id = ? ORDER BY id ASC",
        )
        .bind(bakery.id)
        .fetch_all(pool)
        .await?;
        tracing::debug!(id, baked_goods = goods.len(), "loaded bakery");
        Ok(Some(BakeryDetail::assemble(bakery, goods)))
    }

    pub async fn list_baked_goods_by_price(pool: &SqlitePool) -> Result<Vec<BakedGoodBody>, AppError> {
        let rows = sqlx::query_as::<_, BakedGoodBody>(BY_PRICE_DESC)
            .fetch_all(pool)
            .await?;
        tracing::debug!(count = rows.len(), "listed baked goods by price");
        Ok(rows)
    }

    /// First row of the by-price ordering, or None when the table is empty.
    pub async fn most_expensive_baked_good(pool: &SqlitePool) -> Result<Option<BakedGoodBody>, AppError> {
        let row = sqlx::query_as::<_, BakedGoodBody>(&format!("{} LIMIT 1", BY_PRICE_DESC))
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::store::connect;

    async fn pool() -> SqlitePool {
        let pool = connect("sqlite::memory:").await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    async fn insert_bakery(pool: &SqlitePool, name: &str) -> i64 {
        sqlx::query("INSERT INTO bakeries (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn insert_good(pool: &SqlitePool, bakery_id: i64, name: &str, price: f64) -> i64 {
        sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(price)
            .bind(bakery_id)
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    #[tokio::test]
    async fn list_bakeries_in_id_order() {
        let pool = pool().await;
        let a = insert_bakery(&pool, "Delightful donuts").await;
        let b = insert_bakery(&pool, "Incredible crullers").await;
        let rows = BakeryService::list_bakeries(&pool).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(rows[0].name, "Delightful donuts");
    }

    #[tokio::test]
    async fn get_bakery_only_includes_its_own_goods() {
        let pool = pool().await;
        let a = insert_bakery(&pool, "A").await;
        let b = insert_bakery(&pool, "B").await;
        let g1 = insert_good(&pool, a, "Croissant", 3.5).await;
        insert_good(&pool, b, "Baguette", 4.0).await;
        let g3 = insert_good(&pool, a, "Scone", 2.25).await;

        let detail = BakeryService::get_bakery_by_id(&pool, a).await.unwrap().unwrap();
        assert_eq!(detail.name, "A");
        let ids: Vec<i64> = detail.baked_goods.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![g1, g3]);
    }

    #[tokio::test]
    async fn get_missing_bakery_is_none() {
        let pool = pool().await;
        assert!(BakeryService::get_bakery_by_id(&pool, 999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn by_price_breaks_ties_by_id() {
        let pool = pool().await;
        let bakery = insert_bakery(&pool, "A").await;
        let cheap = insert_good(&pool, bakery, "Roll", 1.25).await;
        let first_tie = insert_good(&pool, bakery, "Pie", 10.0).await;
        let second_tie = insert_good(&pool, bakery, "Cake", 10.0).await;

        let rows = BakeryService::list_baked_goods_by_price(&pool).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![first_tie, second_tie, cheap]);

        let top = BakeryService::most_expensive_baked_good(&pool).await.unwrap().unwrap();
        assert_eq!(top.id, first_tie);
    }

    #[tokio::test]
    async fn by_price_on_empty_table_is_empty() {
        let pool = pool().await;
        assert!(BakeryService::list_baked_goods_by_price(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn most_expensive_on_empty_table_is_none() {
        let pool = pool().await;
        assert!(BakeryService::most_expensive_baked_good(&pool).await.unwrap().is_none());
    }
}
