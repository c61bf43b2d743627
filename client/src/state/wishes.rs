//! Guest wishes submitted on the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wishes live only in memory for the lifetime of the page; nothing is sent
//! anywhere and a reload starts again from the seeded messages. The list is
//! kept newest-first and paged `WISHES_PER_PAGE` at a time.

#[cfg(test)]
#[path = "wishes_test.rs"]
mod wishes_test;

use uuid::Uuid;

/// Wishes shown per page.
pub const WISHES_PER_PAGE: usize = 2;
/// Maximum guest name length in characters.
pub const MAX_NAME_CHARS: usize = 60;
/// Maximum message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuestWish {
    pub id: Uuid,
    pub name: String,
    pub message: String,
}

/// Rejected wish submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WishError {
    #[error("Nama wajib diisi.")]
    MissingName,
    #[error("Ucapan wajib diisi.")]
    MissingMessage,
    #[error("Nama maksimal {} karakter.", MAX_NAME_CHARS)]
    NameTooLong,
    #[error("Ucapan maksimal {} karakter.", MAX_MESSAGE_CHARS)]
    MessageTooLong,
}

/// Newest-first wish list with page cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishBook {
    wishes: Vec<GuestWish>,
    page: usize,
    per_page: usize,
}

impl WishBook {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self { wishes: Vec::new(), page: 1, per_page: per_page.max(1) }
    }

    /// Seed with existing `(name, message)` pairs, given newest-first.
    #[must_use]
    pub fn seeded<'a>(per_page: usize, seed: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut book = Self::new(per_page);
        book.wishes = seed
            .into_iter()
            .map(|(name, message)| GuestWish {
                id: Uuid::new_v4(),
                name: name.to_owned(),
                message: message.to_owned(),
            })
            .collect();
        book
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    #[must_use]
    pub fn wishes(&self) -> &[GuestWish] {
        &self.wishes
    }

    /// Validate and prepend a wish. The view returns to the first page so the
    /// new entry is visible.
    ///
    /// # Errors
    ///
    /// Returns a [`WishError`] when the trimmed name or message is empty or
    /// over its length limit.
    pub fn submit(&mut self, name: &str, message: &str) -> Result<&GuestWish, WishError> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(WishError::MissingName);
        }
        if message.is_empty() {
            return Err(WishError::MissingMessage);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(WishError::NameTooLong);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(WishError::MessageTooLong);
        }

        self.wishes.insert(
            0,
            GuestWish { id: Uuid::new_v4(), name: name.to_owned(), message: message.to_owned() },
        );
        self.page = 1;
        Ok(&self.wishes[0])
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.wishes.len().div_ceil(self.per_page).max(1)
    }

    /// Current page, clamped into `[1, total_pages]`.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }

    /// Wishes on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[GuestWish] {
        let start = (self.page() - 1) * self.per_page;
        let end = (start + self.per_page).min(self.wishes.len());
        self.wishes.get(start..end).unwrap_or_default()
    }
}

impl Default for WishBook {
    fn default() -> Self {
        Self::new(WISHES_PER_PAGE)
    }
}
