use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        // INSERT ... RETURNING brings back the store-assigned id and timestamps
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }
}
