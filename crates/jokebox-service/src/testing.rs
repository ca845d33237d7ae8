//! In-memory repositories and a stub joke source for service tests
//!
//! A single `tokio::sync::Mutex` guards the whole store, so every
//! `submit` is one atomic read-modify-write like the Postgres transaction.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jokebox_common::auth::JwtService;
use jokebox_core::traits::{
    FetchedJoke, JokeRepository, JokeSource, RepoResult, UserRepository, VoteOutcome,
    VoteRepository,
};
use jokebox_core::{
    DomainError, Joke, JokeId, Reaction, ReactionTally, User, UserId, VoteRecord, reconcile,
};
use tokio::sync::Mutex;

use crate::services::ServiceContext;

#[derive(Default)]
struct Store {
    users: HashMap<UserId, (User, String)>,
    jokes: HashMap<JokeId, Joke>,
    votes: HashMap<UserId, Vec<VoteRecord>>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Store>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn insert_joke(&self, joke: Joke) {
        self.inner.lock().await.jokes.insert(joke.id, joke);
    }

    pub async fn joke(&self, id: JokeId) -> Option<Joke> {
        self.inner.lock().await.jokes.get(&id).cloned()
    }

    pub async fn joke_count(&self) -> usize {
        self.inner.lock().await.jokes.len()
    }

    /// Overwrite a tally, simulating drift
    pub async fn set_tally(&self, id: JokeId, tally: ReactionTally) {
        if let Some(joke) = self.inner.lock().await.jokes.get_mut(&id) {
            joke.tally = tally;
        }
    }

    /// Insert a vote row directly, bypassing the counters
    pub async fn insert_vote(&self, user_id: UserId, record: VoteRecord) {
        self.inner.lock().await.votes.entry(user_id).or_default().push(record);
    }

    /// Active votes on a joke across all users
    pub async fn active_votes(&self, joke_id: JokeId) -> Vec<Reaction> {
        let store = self.inner.lock().await;
        store
            .votes
            .values()
            .flatten()
            .filter(|r| r.joke_id == joke_id)
            .map(|r| r.reaction)
            .collect()
    }

    pub async fn vote_rows(&self, user_id: UserId, joke_id: JokeId) -> usize {
        let store = self.inner.lock().await;
        store
            .votes
            .get(&user_id)
            .map_or(0, |v| v.iter().filter(|r| r.joke_id == joke_id).count())
    }
}

fn tally_of(votes: &HashMap<UserId, Vec<VoteRecord>>, joke_id: JokeId) -> ReactionTally {
    let mut tally = ReactionTally::zero();
    for record in votes.values().flatten().filter(|r| r.joke_id == joke_id) {
        tally.increment(record.reaction);
    }
    tally
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.inner.lock().await.users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let store = self.inner.lock().await;
        Ok(store.users.values().find(|(u, _)| u.email == email).map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut store = self.inner.lock().await;
        if store.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        store
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.inner.lock().await.users.get(&id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl JokeRepository for InMemoryStore {
    async fn find_by_id(&self, id: JokeId) -> RepoResult<Option<Joke>> {
        Ok(self.joke(id).await)
    }

    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<Joke>> {
        let store = self.inner.lock().await;
        Ok(store.jokes.values().find(|j| j.external_id == external_id).cloned())
    }

    async fn find_by_ids(&self, ids: &[JokeId]) -> RepoResult<Vec<Joke>> {
        let store = self.inner.lock().await;
        Ok(ids.iter().filter_map(|id| store.jokes.get(id).cloned()).collect())
    }

    async fn create_if_absent(&self, joke: &Joke) -> RepoResult<(Joke, bool)> {
        let mut store = self.inner.lock().await;
        if let Some(existing) = store.jokes.values().find(|j| j.external_id == joke.external_id) {
            return Ok((existing.clone(), false));
        }
        store.jokes.insert(joke.id, joke.clone());
        Ok((joke.clone(), true))
    }

    async fn delete_all_zero(&self) -> RepoResult<u64> {
        let mut store = self.inner.lock().await;
        let doomed: Vec<JokeId> = store
            .jokes
            .values()
            .filter(|j| j.tally.is_zero())
            .map(|j| j.id)
            .collect();
        for id in &doomed {
            store.jokes.remove(id);
        }
        for records in store.votes.values_mut() {
            records.retain(|r| !doomed.contains(&r.joke_id));
        }
        Ok(doomed.len() as u64)
    }

    async fn recompute_tallies(&self) -> RepoResult<u64> {
        let mut store = self.inner.lock().await;
        let Store { jokes, votes, .. } = &mut *store;
        let mut corrected = 0;
        for joke in jokes.values_mut() {
            let actual = tally_of(votes, joke.id);
            if joke.tally != actual {
                joke.tally = actual;
                joke.updated_at = Utc::now();
                corrected += 1;
            }
        }
        Ok(corrected)
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<VoteRecord>> {
        let store = self.inner.lock().await;
        let mut records = store.votes.get(&user_id).cloned().unwrap_or_default();
        records.sort_by_key(|r| (r.voted_at, r.joke_id));
        Ok(records)
    }

    async fn submit(
        &self,
        user_id: UserId,
        joke_id: JokeId,
        reaction: Reaction,
        now: DateTime<Utc>,
    ) -> RepoResult<VoteOutcome> {
        let mut store = self.inner.lock().await;
        if !store.users.contains_key(&user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }
        let tally = store
            .jokes
            .get(&joke_id)
            .map(|j| j.tally)
            .ok_or(DomainError::JokeNotFound(joke_id))?;

        let records = store.votes.entry(user_id).or_default();
        let current = records.iter().find(|r| r.joke_id == joke_id).copied();
        let next = reconcile(current.as_ref(), &tally, joke_id, reaction, now);

        records.retain(|r| r.joke_id != joke_id);
        if let Some(entry) = next.entry {
            records.push(entry);
        }

        let joke = store
            .jokes
            .get_mut(&joke_id)
            .ok_or(DomainError::JokeNotFound(joke_id))?;
        joke.tally = next.tally;
        joke.updated_at = now;

        Ok(VoteOutcome {
            transition: next.transition,
            joke: joke.clone(),
            drift: next.drift,
        })
    }
}

/// Joke source that replays a fixed list of jokes in a loop, or always fails
pub struct StubJokeSource {
    jokes: Vec<FetchedJoke>,
    calls: AtomicUsize,
}

impl StubJokeSource {
    pub fn new(jokes: Vec<FetchedJoke>) -> Arc<Self> {
        Arc::new(Self {
            jokes,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn single(external_id: &str) -> Arc<Self> {
        Self::new(vec![fetched(external_id)])
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeSource for StubJokeSource {
    async fn fetch_random(&self) -> Result<FetchedJoke, DomainError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.jokes.is_empty() {
            return Err(DomainError::UpstreamUnavailable("connection refused".to_string()));
        }
        Ok(self.jokes[n % self.jokes.len()].clone())
    }
}

pub fn fetched(external_id: &str) -> FetchedJoke {
    FetchedJoke {
        external_id: external_id.to_string(),
        question: format!("Question {external_id}?"),
        answer: format!("Answer {external_id}."),
    }
}

pub fn context(store: &Arc<InMemoryStore>, source: Arc<dyn JokeSource>) -> ServiceContext {
    ServiceContext::builder()
        .user_repo(store.clone())
        .joke_repo(store.clone())
        .vote_repo(store.clone())
        .joke_source(source)
        .jwt_service(Arc::new(JwtService::new("test-secret-key-for-services", 3600)))
        .build()
        .expect("test context")
}

/// Register a user directly in the store and return it
pub async fn seed_user(store: &InMemoryStore, email: &str) -> User {
    let user = User::new("Test".to_string(), "User".to_string(), email.to_string());
    UserRepository::create(store, &user, "unused-hash")
        .await
        .expect("seed user");
    user
}

/// Store a zero-tally joke and return it
pub async fn seed_joke(store: &InMemoryStore, external_id: &str) -> Joke {
    let f = fetched(external_id);
    let joke = Joke::new(f.external_id, f.question, f.answer);
    store.insert_joke(joke.clone()).await;
    joke
}
