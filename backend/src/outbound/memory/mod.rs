//! In-process store backing all three repository ports.
//!
//! Records live in per-kind `BTreeMap`s keyed by identifier. Identifiers come
//! from a per-kind counter, so map order is insertion order and listings need
//! no sorting. A single `RwLock` covers all tables: cross-table checks (an
//! item's receipt exists, an email is free) and the insert that follows them
//! happen under one write guard.
//!
//! Nothing is persisted; state is dropped with the process.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ports::{
    ReceiptItemRepository, ReceiptItemRepositoryError, ReceiptRepository, ReceiptRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    EmailAddress, NewReceipt, NewReceiptItem, NewUser, Receipt, ReceiptId, ReceiptItem,
    ReceiptItemId, User, UserId,
};

struct Table<K, V> {
    rows: BTreeMap<K, V>,
    last_id: u64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K: Ord + Copy + From<u64>, V> Table<K, V> {
    fn next_id(&mut self) -> K {
        self.last_id += 1;
        K::from(self.last_id)
    }

    fn insert(&mut self, id: K, row: V) {
        self.rows.insert(id, row);
    }

    fn get(&self, id: K) -> Option<&V> {
        self.rows.get(&id)
    }

    fn contains(&self, id: K) -> bool {
        self.rows.contains_key(&id)
    }

    fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.values()
    }

    fn remove(&mut self, id: K) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Default)]
struct Tables {
    users: Table<UserId, User>,
    receipts: Table<ReceiptId, Receipt>,
    items: Table<ReceiptItemId, ReceiptItem>,
}

/// Shared in-memory store.
///
/// # Examples
/// ```
/// use receipts_backend::domain::ports::UserRepository;
/// use receipts_backend::domain::{EmailAddress, Name, NewUser};
/// use receipts_backend::outbound::memory::InMemoryStore;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// let user = store
///     .create(NewUser {
///         name: Name::new("Ada").unwrap(),
///         email: EmailAddress::new("ada@example.com").unwrap(),
///     })
///     .await
///     .unwrap();
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

const POISONED: &str = "store lock poisoned";

impl InMemoryStore {
    /// Empty store stamping records with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Empty store stamping records with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, &'static str> {
        self.tables.read().map_err(|_| POISONED)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, &'static str> {
        self.tables.write().map_err(|_| POISONED)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut tables = self.write().map_err(UserRepositoryError::unavailable)?;
        if tables
            .users
            .values()
            .any(|existing| existing.email().matches(&user.email))
        {
            return Err(UserRepositoryError::duplicate_email(user.email));
        }

        let id = tables.users.next_id();
        let stored = User::new(id, user, self.clock.utc());
        tables.users.insert(id, stored.clone());
        debug!(user_id = %id, "user stored");
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.read().map_err(UserRepositoryError::unavailable)?;
        Ok(tables.users.get(id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.read().map_err(UserRepositoryError::unavailable)?;
        Ok(tables
            .users
            .values()
            .find(|user| user.email().matches(email))
            .cloned())
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryStore {
    async fn create(&self, receipt: NewReceipt) -> Result<Receipt, ReceiptRepositoryError> {
        let mut tables = self.write().map_err(ReceiptRepositoryError::unavailable)?;
        if let Some(user_id) = receipt.user_id {
            if !tables.users.contains(user_id) {
                return Err(ReceiptRepositoryError::unknown_user(user_id));
            }
        }

        let id = tables.receipts.next_id();
        let stored = Receipt::new(id, receipt, self.clock.utc());
        tables.receipts.insert(id, stored.clone());
        debug!(receipt_id = %id, "receipt stored");
        Ok(stored)
    }

    async fn find_by_id(&self, id: ReceiptId) -> Result<Option<Receipt>, ReceiptRepositoryError> {
        let tables = self.read().map_err(ReceiptRepositoryError::unavailable)?;
        Ok(tables.receipts.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Receipt>, ReceiptRepositoryError> {
        let tables = self.read().map_err(ReceiptRepositoryError::unavailable)?;
        Ok(tables.receipts.values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Receipt>, ReceiptRepositoryError> {
        let tables = self.read().map_err(ReceiptRepositoryError::unavailable)?;
        Ok(tables
            .receipts
            .values()
            .filter(|receipt| receipt.user_id() == Some(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReceiptItemRepository for InMemoryStore {
    async fn create(&self, item: NewReceiptItem) -> Result<ReceiptItem, ReceiptItemRepositoryError> {
        let receipt_id = item.receipt_id;
        let mut stored = self.create_many(receipt_id, vec![item]).await?;
        stored
            .pop()
            .ok_or_else(|| ReceiptItemRepositoryError::unavailable("item was not stored"))
    }

    async fn create_many(
        &self,
        receipt_id: ReceiptId,
        items: Vec<NewReceiptItem>,
    ) -> Result<Vec<ReceiptItem>, ReceiptItemRepositoryError> {
        let mut tables = self
            .write()
            .map_err(ReceiptItemRepositoryError::unavailable)?;
        if !tables.receipts.contains(receipt_id) {
            return Err(ReceiptItemRepositoryError::unknown_receipt(receipt_id));
        }

        let inserted_at = self.clock.utc();
        let stored: Vec<ReceiptItem> = items
            .into_iter()
            .map(|draft| {
                let id = tables.items.next_id();
                let item = ReceiptItem::new(id, draft.for_receipt(receipt_id), inserted_at);
                tables.items.insert(id, item.clone());
                item
            })
            .collect();
        debug!(receipt_id = %receipt_id, count = stored.len(), "receipt items stored");
        Ok(stored)
    }

    async fn list_by_receipt(
        &self,
        receipt_id: ReceiptId,
    ) -> Result<Vec<ReceiptItem>, ReceiptItemRepositoryError> {
        let tables = self
            .read()
            .map_err(ReceiptItemRepositoryError::unavailable)?;
        Ok(tables
            .items
            .values()
            .filter(|item| item.receipt_id() == receipt_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ReceiptItemId) -> Result<bool, ReceiptItemRepositoryError> {
        let mut tables = self
            .write()
            .map_err(ReceiptItemRepositoryError::unavailable)?;
        let removed = tables.items.remove(id);
        debug!(item_id = %id, removed, "receipt item delete");
        Ok(removed)
    }
}
