//! ### Extensions
//! Helpers around the core appliers: content hashing, serialized containers and logging setup.

use tokio::sync::{Mutex, MutexGuard};

use crate::api::{Operation, TextContainer};
use crate::errors::ApplyResult;
use crate::Applier;

/// xxh3 hash of given content, to cheaply compare documents between peers
pub fn hash(data: impl AsRef<[u8]>) -> i64 {
	let hash = xxhash_rust::xxh3::xxh3_64(data.as_ref());
	i64::from_ne_bytes(hash.to_ne_bytes())
}

/// a container guarded by an async mutex, held for the whole duration of each application
///
/// appliers perform several discrete mutations per operation, so two operations must never
/// interleave on the same container: wrapping it here enforces a single writer
#[derive(Debug, Default)]
pub struct SharedContainer<C> {
	inner: Mutex<C>,
}

impl<C: TextContainer> SharedContainer<C> {
	pub fn new(container: C) -> Self {
		SharedContainer { inner: Mutex::new(container) }
	}

	/// wait for exclusive access, then apply given operation
	pub async fn apply(&self, applier: &Applier, op: &Operation) -> ApplyResult<()> {
		let mut container = self.inner.lock().await;
		applier.apply_to_container(op, &mut *container)
	}

	/// same as [`SharedContainer::apply`], blocking current thread
	///
	/// panics if called from within an async runtime
	pub fn blocking_apply(&self, applier: &Applier, op: &Operation) -> ApplyResult<()> {
		let mut container = self.inner.blocking_lock();
		applier.apply_to_container(op, &mut *container)
	}

	/// exclusive access to the underlying container, e.g. to read its content
	pub async fn lock(&self) -> MutexGuard<'_, C> {
		self.inner.lock().await
	}

	pub fn into_inner(self) -> C {
		self.inner.into_inner()
	}
}

/// install a global fmt subscriber printing to stderr
///
/// returns false if a global subscriber was already set
#[cfg(feature = "logging")]
pub fn setup_tracing(debug: bool) -> bool {
	let level = if debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
	let format = tracing_subscriber::fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_source_location(false);

	tracing_subscriber::fmt()
		.event_format(format)
		.with_max_level(level)
		.with_writer(std::sync::Mutex::new(std::io::stderr()))
		.try_init()
		.is_ok()
}
