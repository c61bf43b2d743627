use super::*;
use std::collections::HashSet;

const ALL_SECTIONS: [SectionId; 6] = [
    SectionId::Invitation,
    SectionId::Couple,
    SectionId::Story,
    SectionId::Events,
    SectionId::Gallery,
    SectionId::Wishes,
];

#[test]
fn section_dom_ids_are_unique_and_anchor_safe() {
    let ids: HashSet<&str> = ALL_SECTIONS.iter().map(|s| s.dom_id()).collect();
    assert_eq!(ids.len(), ALL_SECTIONS.len());
    for id in ids {
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "bad id {id}");
    }
}

#[test]
fn section_labels_and_icons_are_present() {
    for section in ALL_SECTIONS {
        let config = section_config(section);
        assert!(!config.label.is_empty());
        assert!(config.icon.starts_with('<'));
    }
}

#[test]
fn gallery_images_have_unique_sources() {
    let sources: HashSet<&str> = GALLERY.iter().map(|image| image.src).collect();
    assert_eq!(sources.len(), GALLERY.len());
    assert!(GALLERY.iter().all(|image| image.src.starts_with("/gallery/")));
}

#[test]
fn seed_wishes_fill_more_than_one_page() {
    assert!(SEED_WISHES.len() > crate::state::wishes::WISHES_PER_PAGE);
}

#[test]
fn gift_card_lists_bank_transfer_details() {
    assert!(!GIFT.bank_name.is_empty());
    assert!(GIFT.account_number.chars().all(|c| c.is_ascii_digit()));
    assert!(!GIFT.account_number.is_empty());
    assert!(COUPLE.iter().any(|person| person.name == GIFT.account_holder));
}
