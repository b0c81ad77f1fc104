//! Product Service - Data access orchestration

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Product service
///
/// Holds no copy of the data; every call goes to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Insert a product; the store assigns its id and timestamps
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if !input.price.is_finite() {
            return Err(ProductError::Validation(
                "price must be a finite number".to_string(),
            ));
        }

        self.repository.create(input).await
    }

    /// All products currently in the store
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::*;
    use sea_orm::DbErr;

    fn stored(input: &CreateProduct, id: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            title: input.title.clone(),
            price: input.price,
            created_at: now,
            updated_at: now,
            content: input.content.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_product_delegates_to_repository() {
        let input = CreateProduct {
            title: "Book".to_string(),
            price: 9.99,
            content: Some("Hardcover".to_string()),
        };
        let expected = stored(&input, 1);

        let mut mock = MockProductRepository::new();
        let returned = expected.clone();
        mock.expect_create()
            .with(eq(input.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let service = ProductService::new(mock);
        let product = service.create_product(input).await.unwrap();

        assert_eq!(product, expected);
    }

    #[tokio::test]
    async fn test_create_product_rejects_long_title_without_store_call() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().never();

        let service = ProductService::new(mock);
        let result = service
            .create_product(CreateProduct {
                title: "t".repeat(256),
                price: 1.0,
                content: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_rejects_non_finite_price() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().never();

        let service = ProductService::new(mock);
        let result = service
            .create_product(CreateProduct {
                title: "Book".to_string(),
                price: f64::NAN,
                content: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_propagates_store_error() {
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .returning(|_| Err(ProductError::Database(DbErr::Custom("constraint".to_string()))));

        let service = ProductService::new(mock);
        let result = service
            .create_product(CreateProduct {
                title: "Book".to_string(),
                price: 9.99,
                content: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_products_returns_empty_list() {
        let mut mock = MockProductRepository::new();
        mock.expect_list().times(1).returning(|| Ok(vec![]));

        let service = ProductService::new(mock);
        assert!(service.get_products().await.unwrap().is_empty());
    }
}
