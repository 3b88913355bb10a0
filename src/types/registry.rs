use std::collections::{HashMap, HashSet};

/// Renderable identifier for a named icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(pub u32);

/// Opaque shader resource handed out by a [`GraphicsBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Opaque dash-pattern resource handed out by a [`GraphicsBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashHandle(pub u32);

/// Maps symbolic icon names to renderable identifiers.
///
/// Populated before a style is loaded and only read afterwards.
pub trait IconRegistry {
    fn lookup(&self, name: &str) -> Option<IconId>;
}

/// Turns opaque identifiers from style rules into drawable resources.
///
/// Only invoked when a matched rule declares a shader or a dash pattern.
/// Returning `None` leaves the corresponding paint attribute unchanged.
pub trait GraphicsBackend {
    fn shader(&self, icon: IconId) -> Option<ShaderHandle>;
    fn dash_pattern(&self, pattern: &str) -> Option<DashHandle>;
}

impl IconRegistry for HashMap<String, IconId> {
    fn lookup(&self, name: &str) -> Option<IconId> {
        self.get(name).copied()
    }
}

impl<T: IconRegistry + ?Sized> IconRegistry for &T {
    fn lookup(&self, name: &str) -> Option<IconId> {
        (**self).lookup(name)
    }
}

impl<T: GraphicsBackend + ?Sized> GraphicsBackend for &T {
    fn shader(&self, icon: IconId) -> Option<ShaderHandle> {
        (**self).shader(icon)
    }

    fn dash_pattern(&self, pattern: &str) -> Option<DashHandle> {
        (**self).dash_pattern(pattern)
    }
}

/// In-memory icon registry assigning sequential ids in registration order.
///
/// Every id belongs to at most one name.
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    ids: HashMap<String, IconId>,
    taken: HashSet<IconId>,
    next: u32,
}

impl IconTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon name, returning its id. Registering a name twice
    /// returns the existing id.
    ///
    /// Ids already taken through [`insert`](Self::insert) are skipped.
    /// Returns `None` once the id space is exhausted.
    pub fn register(&mut self, name: &str) -> Option<IconId> {
        if let Some(&id) = self.ids.get(name) {
            return Some(id);
        }
        let mut candidate = self.next;
        while self.taken.contains(&IconId(candidate)) {
            candidate = candidate.checked_add(1)?;
        }
        let id = IconId(candidate);
        self.ids.insert(name.to_owned(), id);
        self.taken.insert(id);
        self.next = candidate.saturating_add(1);
        Some(id)
    }

    /// Register an icon under an id chosen by the caller.
    ///
    /// Returns `false` and leaves the table unchanged when `id` already
    /// belongs to another name. Re-inserting a name moves it to the new id.
    pub fn insert(&mut self, name: &str, id: IconId) -> bool {
        if self.ids.get(name) == Some(&id) {
            return true;
        }
        if self.taken.contains(&id) {
            return false;
        }
        if let Some(previous) = self.ids.insert(name.to_owned(), id) {
            self.taken.remove(&previous);
        }
        self.taken.insert(id);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IconId)> {
        self.ids.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl IconRegistry for IconTable {
    fn lookup(&self, name: &str) -> Option<IconId> {
        self.ids.get(name).copied()
    }
}

impl<'a> FromIterator<&'a str> for IconTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.register(name);
        }
        table
    }
}
