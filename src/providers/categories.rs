use log::info;
use reqwest::Method;

use super::state::{MutationOutcome, Slice, SliceState};
use crate::api::{ApiClient, FetchError};
use crate::constants::{
    ERROR_CREATE_CATEGORY, ERROR_FETCH_CATEGORIES, PATH_CATEGORIES, PATH_CATEGORY_CREATE, SUCCESS_CATEGORY_CREATED,
};
use crate::models::{Category, NewCategory};
use crate::utils::text::Sanitize;
use crate::validation::validate_category_name;

/// The caller's categories, each with a freshly picked display color.
#[derive(Clone)]
pub struct CategoriesProvider {
    client: ApiClient,
    slice: Slice<Vec<Category>>,
}

impl CategoriesProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_categories(&self) {
        self.slice.track(ERROR_FETCH_CATEGORIES, self.load()).await;
    }

    /// Validate, create, then refresh the list so the new category shows up.
    ///
    /// An invalid name is rejected before any request is made.
    pub async fn create_category(&self, name: &str) -> MutationOutcome {
        if let Err(err) = validate_category_name(name) {
            return MutationOutcome::failed(err.to_string());
        }

        let ticket = self.slice.begin().await;
        let created = self
            .client
            .send(Method::POST, PATH_CATEGORY_CREATE, &NewCategory { name }, true)
            .await;

        match created {
            Ok(_) => {
                info!("Created category {}", name);
                self.slice.settle(ticket).await;
                self.fetch_categories().await;
                MutationOutcome::ok(SUCCESS_CATEGORY_CREATED)
            }
            Err(err) => {
                let message = err.message_or(ERROR_CREATE_CATEGORY);
                self.slice.fail(ticket, message.clone()).await;
                MutationOutcome::failed(message)
            }
        }
    }

    pub async fn state(&self) -> SliceState<Vec<Category>> {
        self.slice.snapshot().await
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.slice.data().await
    }

    async fn load(&self) -> Result<Vec<Category>, FetchError> {
        let categories: Vec<Category> = self.client.get_as(PATH_CATEGORIES).await?;
        info!("Fetched {} categories", categories.len());
        Ok(categories
            .into_iter()
            .map(|c| c.sanitized().with_random_color())
            .collect())
    }
}
