use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::catalog::value_objects::Category;
use crate::domain::logger::Logger;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError> {
        let products = self.repository.get_all().await?;

        // First-seen order, so the UI lists categories the way the catalog does.
        let mut categories: Vec<Category> = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        self.logger
            .debug(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Deal, Product};
    use crate::domain::catalog::value_objects::ProductId;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update_price(&self, id: &ProductId, price: u64) -> Result<Vec<Product>, RepositoryError>;
            async fn get_deals(&self) -> Result<Vec<Deal>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_list_distinct_categories_in_catalog_order() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(["Electronics", "Books", "Electronics", "Clothing"]
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    Product::from_repository(
                        ProductId::new(format!("item-{i}")),
                        10,
                        String::new(),
                        String::new(),
                        Category::new(*c),
                    )
                })
                .collect())
        });

        let use_case = ListCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Electronics", "Books", "Clothing"]);
    }
}
