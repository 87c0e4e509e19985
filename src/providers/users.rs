use super::state::{Slice, SliceState};
use crate::api::{ApiClient, FetchError};
use crate::constants::{ERROR_FETCH_USERS, PATH_USERNAMES};
use crate::models::{UserSummary, UsersResponse};

/// Every registered user, for picking group members or assignees.
#[derive(Clone)]
pub struct UsersProvider {
    client: ApiClient,
    slice: Slice<Vec<UserSummary>>,
}

impl UsersProvider {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            slice: Slice::new(),
        }
    }

    pub async fn fetch_users(&self) {
        self.slice
            .track(ERROR_FETCH_USERS, async {
                let response: UsersResponse = self.client.get_as(PATH_USERNAMES).await?;
                Ok::<_, FetchError>(response.users)
            })
            .await;
    }

    pub async fn state(&self) -> SliceState<Vec<UserSummary>> {
        self.slice.snapshot().await
    }

    pub async fn users(&self) -> Vec<UserSummary> {
        self.slice.data().await
    }
}
