use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::models::{CreateProduct, Product};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            content: model.content,
        }
    }
}

// id and both timestamps stay NotSet; the column defaults fill them
impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            title: Set(input.title),
            price: Set(input.price),
            content: Set(input.content),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_model_leaves_store_columns_unset() {
        let active: ActiveModel = CreateProduct {
            title: "Book".to_string(),
            price: 9.99,
            content: None,
        }
        .into();

        assert!(active.id.is_not_set());
        assert!(active.created_at.is_not_set());
        assert!(active.updated_at.is_not_set());
        assert_eq!(active.title, Set("Book".to_string()));
    }
}
