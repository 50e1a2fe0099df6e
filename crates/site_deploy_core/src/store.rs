use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub cache_control: &'static str,
}

pub trait BucketStore {
    fn put_bucket_policy(&self, policy: &str) -> Result<(), String>;
    fn list_keys(&self) -> Result<Vec<String>, String>;
    fn put_object(&self, object: PutObject) -> Result<(), String>;
    fn delete_object(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketEvent {
    PolicySet,
    Put(String),
    Deleted(String),
}

/// In-process bucket used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryBucket {
    state: Mutex<MemoryState>,
    failure_injection_keys: Vec<String>,
}

#[derive(Debug, Default)]
struct MemoryState {
    policy: Option<String>,
    objects: BTreeMap<String, PutObject>,
    events: Vec<BucketEvent>,
}

impl MemoryBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let bucket = Self::new();
        {
            let mut state = bucket.lock();
            for key in keys {
                let key = key.into();
                let object = PutObject {
                    key: key.clone(),
                    body: Vec::new(),
                    content_type: crate::content_type::FALLBACK_CONTENT_TYPE,
                    cache_control: crate::content_type::IMMUTABLE_CACHE,
                };
                state.objects.insert(key, object);
            }
        }
        bucket
    }

    /// Any put or delete touching one of `keys` fails.
    pub fn failing_on(mut self, keys: &[&str]) -> Self {
        self.failure_injection_keys = keys.iter().map(|key| key.to_string()).collect();
        self
    }

    pub fn policy(&self) -> Option<String> {
        self.lock().policy.clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().objects.keys().cloned().collect()
    }

    pub fn object(&self, key: &str) -> Option<PutObject> {
        self.lock().objects.get(key).cloned()
    }

    pub fn events(&self) -> Vec<BucketEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_injected_failure(&self, key: &str) -> Result<(), String> {
        if self.failure_injection_keys.iter().any(|failing| failing == key) {
            return Err(format!("injected failure for key '{key}'"));
        }
        Ok(())
    }
}

impl BucketStore for MemoryBucket {
    fn put_bucket_policy(&self, policy: &str) -> Result<(), String> {
        let mut state = self.lock();
        state.policy = Some(policy.to_string());
        state.events.push(BucketEvent::PolicySet);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, String> {
        Ok(self.keys())
    }

    fn put_object(&self, object: PutObject) -> Result<(), String> {
        self.check_injected_failure(&object.key)?;
        let mut state = self.lock();
        state.events.push(BucketEvent::Put(object.key.clone()));
        state.objects.insert(object.key.clone(), object);
        Ok(())
    }

    fn delete_object(&self, key: &str) -> Result<(), String> {
        self.check_injected_failure(key)?;
        let mut state = self.lock();
        state.objects.remove(key);
        state.events.push(BucketEvent::Deleted(key.to_string()));
        Ok(())
    }
}
