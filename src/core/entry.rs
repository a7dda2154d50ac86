//! Roster entries and the collection that owns them.
//!
//! An [`Entry`] is the inner markup of one list item. The only structure the
//! pager reads out of it is the display name between `<h3>` and `</h3>`.

const NAME_OPEN: &str = "<h3>";
const NAME_CLOSE: &str = "</h3>";

/// One renderable record, stored as the inner markup of its list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    markup: String,
}

impl Entry {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Inner markup, exactly as supplied.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Display name embedded in the `<h3>` tag, trimmed.
    ///
    /// Returns `None` when the tag is missing or unterminated.
    pub fn name(&self) -> Option<&str> {
        self.text_between(NAME_OPEN, NAME_CLOSE)
    }

    /// Name split into first and last parts.
    pub fn student_name(&self) -> Option<StudentName<'_>> {
        self.name().map(StudentName::parse)
    }

    /// Text of the first `<span class="email">` element, if present.
    pub fn email(&self) -> Option<&str> {
        self.text_between(r#"<span class="email">"#, "</span>")
    }

    fn text_between(&self, open: &str, close: &str) -> Option<&str> {
        let start = self.markup.find(open)? + open.len();
        let len = self.markup[start..].find(close)?;
        Some(self.markup[start..start + len].trim())
    }
}

/// A display name split at its first space.
///
/// A name without a space is all first name and an empty last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentName<'a> {
    pub full: &'a str,
    pub first: &'a str,
    pub last: &'a str,
}

impl<'a> StudentName<'a> {
    pub fn parse(full: &'a str) -> Self {
        match full.split_once(' ') {
            Some((first, last)) => Self {
                full,
                first: first.trim(),
                last: last.trim(),
            },
            None => Self {
                full,
                first: full,
                last: "",
            },
        }
    }
}

/// The full, ordered list of entries for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Entry>> for Collection {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str) -> Entry {
        Entry::new(format!(
            r#"<div class="student-details"><img class="avatar" src="a.jpg"><h3>{name}</h3><span class="email">{}@example.com</span></div>"#,
            name.to_lowercase().replace(' ', ".")
        ))
    }

    #[test]
    fn test_entry_name_extraction() {
        let entry = student("Aaron Ng");
        assert_eq!(entry.name(), Some("Aaron Ng"));
        assert_eq!(entry.email(), Some("aaron.ng@example.com"));
    }

    #[test]
    fn test_entry_name_is_trimmed() {
        let entry = Entry::new("<h3>  Zoe Yu </h3>");
        assert_eq!(entry.name(), Some("Zoe Yu"));
    }

    #[test]
    fn test_malformed_name_markup() {
        assert_eq!(Entry::new("<div>no heading</div>").name(), None);
        assert_eq!(Entry::new("<h3>Unclosed").name(), None);
        assert!(Entry::new("").student_name().is_none());
    }

    #[test]
    fn test_student_name_split_at_first_space() {
        let name = StudentName::parse("Mary Ann Smith");
        assert_eq!(name.first, "Mary");
        assert_eq!(name.last, "Ann Smith");
        assert_eq!(name.full, "Mary Ann Smith");
    }

    #[test]
    fn test_student_name_without_space() {
        let name = StudentName::parse("Cher");
        assert_eq!(name.first, "Cher");
        assert_eq!(name.last, "");
    }

    #[test]
    fn test_collection_accessors() {
        let collection: Collection = ["Aaron Ng", "Bea Ortiz"].iter().map(|n| student(n)).collect();
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
        assert_eq!(
            collection.get(1).and_then(Entry::name),
            Some("Bea Ortiz")
        );
        assert!(collection.get(2).is_none());
        assert!(Collection::default().is_empty());
    }
}
