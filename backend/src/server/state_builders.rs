//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Wire one shared in-memory store into every HTTP port.
///
/// All Actix workers receive clones of the returned handle so they observe
/// the same records.
pub fn build_http_state(store: Arc<InMemoryStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(store.clone(), store.clone(), store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserRepository;
    use crate::domain::{EmailAddress, Name, NewUser};

    #[tokio::test]
    async fn ports_share_one_store() {
        let store = Arc::new(InMemoryStore::new());
        let state = build_http_state(store.clone());

        let created = state
            .users
            .create(NewUser {
                name: Name::new("Ada").expect("valid name"),
                email: EmailAddress::new("ada@example.com").expect("valid email"),
            })
            .await
            .expect("user stored");

        let seen = store.find_by_id(created.id()).await.expect("lookup succeeds");
        assert_eq!(seen, Some(created));
    }
}
