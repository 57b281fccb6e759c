//! Box identifiers.
//!
//! A timetable page holds a few dozen boxes and every event names one of
//! them, so ids are interned once and passed around as a `Copy` key.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

static NAMES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Counter behind [`BoxId::untagged`].
static UNTAGGED: AtomicU32 = AtomicU32::new(0);

/// Name of a selectable box, either read from the page or handed out by
/// [`BoxId::untagged`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct BoxId(Spur);

impl BoxId {
    pub fn intern(name: &str) -> Self {
        BoxId(NAMES.get_or_intern(name))
    }

    /// The interned name. Lives as long as the process.
    pub fn as_str(&self) -> &'static str {
        let names: &'static ThreadedRodeo = &NAMES;
        names.resolve(&self.0)
    }

    /// A fresh `box-N` id for a page element that carries none yet.
    pub fn untagged() -> Self {
        let n = UNTAGGED.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("box-{n}"))
    }
}

impl From<String> for BoxId {
    fn from(name: String) -> Self {
        BoxId::intern(&name)
    }
}

impl From<BoxId> for String {
    fn from(id: BoxId) -> Self {
        id.as_str().to_owned()
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Debug for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
