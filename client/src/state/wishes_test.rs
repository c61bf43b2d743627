use super::*;

fn names(items: &[GuestWish]) -> Vec<&str> {
    items.iter().map(|w| w.name.as_str()).collect()
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_prepends_newest_first() {
    let mut book = WishBook::default();
    book.submit("Ayu", "Selamat!").unwrap();
    book.submit("Bima", "Barakallah").unwrap();
    book.submit("Citra", "Bahagia selalu").unwrap();
    assert_eq!(names(book.wishes()), vec!["Citra", "Bima", "Ayu"]);
}

#[test]
fn submit_trims_input() {
    let mut book = WishBook::default();
    let wish = book.submit("  Ayu ", "\n Selamat menempuh hidup baru  ").unwrap();
    assert_eq!(wish.name, "Ayu");
    assert_eq!(wish.message, "Selamat menempuh hidup baru");
}

#[test]
fn submit_rejects_blank_fields() {
    let mut book = WishBook::default();
    assert_eq!(book.submit("   ", "hi").unwrap_err(), WishError::MissingName);
    assert_eq!(book.submit("Ayu", "  ").unwrap_err(), WishError::MissingMessage);
    assert!(book.is_empty());
}

#[test]
fn submit_rejects_overlong_fields() {
    let mut book = WishBook::default();
    let long_name = "a".repeat(MAX_NAME_CHARS + 1);
    let long_message = "b".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(book.submit(&long_name, "hi").unwrap_err(), WishError::NameTooLong);
    assert_eq!(book.submit("Ayu", &long_message).unwrap_err(), WishError::MessageTooLong);
    assert!(book.submit(&"a".repeat(MAX_NAME_CHARS), "hi").is_ok());
}

#[test]
fn submitted_wishes_get_distinct_ids() {
    let mut book = WishBook::default();
    let first = book.submit("Ayu", "1").unwrap().id;
    let second = book.submit("Ayu", "1").unwrap().id;
    assert_ne!(first, second);
}

#[test]
fn submit_returns_to_first_page() {
    let mut book = WishBook::seeded(2, [("a", "1"), ("b", "2"), ("c", "3")]);
    book.next_page();
    assert_eq!(book.page(), 2);
    book.submit("Dewi", "Selamat").unwrap();
    assert_eq!(book.page(), 1);
    assert_eq!(names(book.page_items()), vec!["Dewi", "a"]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn empty_book_has_one_empty_page() {
    let book = WishBook::default();
    assert_eq!(book.total_pages(), 1);
    assert_eq!(book.page(), 1);
    assert!(book.page_items().is_empty());
    assert!(!book.has_prev());
    assert!(!book.has_next());
}

#[test]
fn seeded_keeps_given_order() {
    let book = WishBook::seeded(2, [("a", "1"), ("b", "2"), ("c", "3")]);
    assert_eq!(book.len(), 3);
    assert_eq!(book.total_pages(), 2);
    assert_eq!(names(book.page_items()), vec!["a", "b"]);
}

#[test]
fn last_page_can_be_partial() {
    let mut book = WishBook::seeded(2, [("a", "1"), ("b", "2"), ("c", "3")]);
    book.next_page();
    assert_eq!(names(book.page_items()), vec!["c"]);
    assert!(book.has_prev());
    assert!(!book.has_next());
}

#[test]
fn paging_is_clamped_to_bounds() {
    let mut book = WishBook::seeded(2, [("a", "1"), ("b", "2"), ("c", "3")]);
    book.prev_page();
    assert_eq!(book.page(), 1);
    book.next_page();
    book.next_page();
    book.next_page();
    assert_eq!(book.page(), 2);
    book.set_page(99);
    assert_eq!(book.page(), 2);
    book.set_page(0);
    assert_eq!(book.page(), 1);
}

#[test]
fn zero_per_page_is_treated_as_one() {
    let book = WishBook::seeded(0, [("a", "1"), ("b", "2")]);
    assert_eq!(book.total_pages(), 2);
    assert_eq!(book.page_items().len(), 1);
}
