use super::*;

/// `term` must already be lowercase.
fn matches_lowercase(contact: &Contact, term: &str) -> bool {
    contact.name.to_lowercase().contains(term)
        || contact.email.to_lowercase().contains(term)
        || contact.phone.to_lowercase().contains(term)
}

/// Case-insensitive substring filter on name, email and phone, keeping the
/// order of `contacts`. An empty term matches every contact.
pub fn filter_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let term = term.to_lowercase();

    contacts
        .iter()
        .filter(|contact| matches_lowercase(contact, &term))
        .collect()
}
