use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;
use crate::dom;
use crate::error::{PageError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Strips surrounding whitespace, counting U+FEFF (byte order mark) as
/// whitespace the way browsers' `String.prototype.trim` does.
pub fn trim_email(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Syntactic `local@domain.tld` check. Says nothing about deliverability.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// String key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
    pub fn local() -> Result<Self> {
        match dom::window()?.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            _ => Err(PageError::StorageUnavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| PageError::Storage(format!("read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("write {}: {:?}", key, e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Added,
    AlreadySubscribed,
}

/// Ordered, duplicate-free list of subscriber emails persisted under one key.
pub struct SubscriberList<S> {
    store: S,
    key: &'static str,
}

impl SubscriberList<BrowserStorage> {
    pub fn browser() -> Result<Self> {
        Ok(Self::new(BrowserStorage::local()?, config::SUBSCRIBERS_KEY))
    }
}

impl<S: KeyValueStore> SubscriberList<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Current subscribers. Missing or malformed storage reads as empty.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read subscribers: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!("Ignoring malformed subscriber list under {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub fn subscribe(&self, email: &str) -> Result<SubscribeOutcome> {
        let mut subscribers = self.load();
        if subscribers.iter().any(|existing| existing == email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        subscribers.push(email.to_string());
        let encoded = serde_json::to_string(&subscribers)
            .map_err(|e| PageError::Storage(e.to_string()))?;
        self.store.set(self.key, &encoded)?;
        debug!("Stored subscriber #{}", subscribers.len());
        Ok(SubscribeOutcome::Added)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        pub fail_writes: bool,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(PageError::Storage("quota exceeded".to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const KEY: &str = "subscribers";

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("person@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "not-an-email", "a@b", "a b@example.com", "@example.com", "a@@b.com", "a@b."] {
            assert!(!is_valid_email(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(trim_email("\u{FEFF} person@example.com\u{FEFF}\n"), "person@example.com");
        assert_eq!(trim_email("\u{00A0}person@example.com"), "person@example.com");
        assert!(!is_valid_email("per\u{FEFF}son@example.com"));
    }

    #[test]
    fn first_subscription_creates_the_list() {
        let list = SubscriberList::new(MemoryStore::default(), KEY);
        assert_eq!(list.subscribe("person@example.com").unwrap(), SubscribeOutcome::Added);
        assert_eq!(list.load(), vec!["person@example.com".to_string()]);
        assert_eq!(list.store.raw(KEY).as_deref(), Some(r#"["person@example.com"]"#));
    }

    #[test]
    fn resubscribing_leaves_the_list_unchanged() {
        let list = SubscriberList::new(MemoryStore::default(), KEY);
        list.subscribe("person@example.com").unwrap();
        let before = list.store.raw(KEY);

        assert_eq!(
            list.subscribe("person@example.com").unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );
        assert_eq!(list.store.raw(KEY), before);
        assert!(list.load().contains(&"person@example.com".to_string()));
    }

    #[test]
    fn new_address_grows_the_list_by_one_in_order() {
        let list = SubscriberList::new(MemoryStore::with(KEY, r#"["a@x.io","b@x.io"]"#), KEY);
        list.subscribe("c@x.io").unwrap();
        assert_eq!(list.load(), vec!["a@x.io", "b@x.io", "c@x.io"]);
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        for raw in ["{not json", r#"{"email":"a@x.io"}"#, "[1, 2]", "null"] {
            let list = SubscriberList::new(MemoryStore::with(KEY, raw), KEY);
            assert!(list.load().is_empty(), "{:?} should read as empty", raw);
        }
    }

    #[test]
    fn failed_write_is_reported() {
        let store = MemoryStore { fail_writes: true, ..Default::default() };
        let list = SubscriberList::new(store, KEY);
        assert!(matches!(list.subscribe("person@example.com"), Err(PageError::Storage(_))));
        assert!(list.load().is_empty());
    }
}
