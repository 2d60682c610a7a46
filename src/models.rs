//! Row types read from storage and the fixed-shape JSON bodies returned by routes.

use serde::Serialize;

/// `bakeries` row. Also the `/bakeries` list item.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BakerySummary {
    pub id: i64,
    pub name: String,
}

/// `baked_goods` row as exposed to clients; the owning bakery id is not part of the body.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BakedGoodBody {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// One bakery with all of its baked goods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakeryDetail {
    pub id: i64,
    pub name: String,
    pub baked_goods: Vec<BakedGoodBody>,
}

impl BakeryDetail {
    pub fn assemble(bakery: BakerySummary, baked_goods: Vec<BakedGoodBody>) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name,
            baked_goods,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
