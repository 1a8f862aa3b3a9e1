/// A single user-entered category label.
/// The label is always non-empty after trimming; blank input is rejected
/// before a Category is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
}

/// Opaque identity handle for one live entry in the collection.
/// Removal goes through this handle rather than a rendered index, so entries
/// can be removed out of order without the remaining handles going stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// One row of the rendered view: the label to display plus the identity
/// handle its remove affordance is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub id: EntryId,
    pub label: &'a str,
}

/// The single form value the controller writes on every mutation.
/// Mirrors a hidden form input: a field name and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedField {
    pub name: String,
    pub value: String,
}

impl SerializedField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: EntryId,
    category: Category,
}

/// Owner of the ordered category collection.
///
/// The rendered list and the serialized field value are both derived views of
/// the collection: the controller re-derives the serialized value after every
/// mutation, so the two can never diverge between events. All operations are
/// total - blank input and stale handles degrade to silent no-ops.
#[derive(Debug, Clone)]
pub struct TagListController {
    entries: Vec<Entry>,
    next_id: u64,
    field: SerializedField,
}

impl TagListController {
    /// Create an empty controller writing into a field with the given name.
    pub fn new(field_name: &str) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            field: SerializedField::new(field_name),
        }
    }

    /// Create a controller pre-seeded from host-provided labels.
    /// Each label goes through the normal add path, so blanks are dropped
    /// and the serialized value is consistent from the start.
    pub fn from_labels<I, S>(field_name: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut controller = Self::new(field_name);
        for label in labels {
            controller.add_category(label.as_ref());
        }
        controller
    }

    /// Append a category to the end of the collection.
    ///
    /// The input is trimmed first; if nothing remains the collection and the
    /// serialized value are left untouched and `None` is returned. Duplicate
    /// labels are permitted. Returns the identity handle of the new entry.
    pub fn add_category(&mut self, raw: &str) -> Option<EntryId> {
        let label = raw.trim();
        if label.is_empty() {
            return None;
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            category: Category {
                label: label.to_string(),
            },
        });
        self.reserialize();
        Some(id)
    }

    /// Remove the entry with the given identity.
    ///
    /// A handle that no longer resolves to a live entry (already removed, or
    /// never issued by this controller) is a silent no-op returning `false`.
    pub fn remove_category(&mut self, id: EntryId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        self.reserialize();
        true
    }

    /// Produce the full visual list for the current collection, in insertion
    /// order. The previous rendering is always replaced wholesale; rows hold
    /// no state of their own beyond the identity handle for removal.
    pub fn render(&self) -> Vec<ListEntry<'_>> {
        self.entries
            .iter()
            .map(|e| ListEntry {
                id: e.id,
                label: e.category.label.as_str(),
            })
            .collect()
    }

    /// The comma-joined label string as last written to the field.
    ///
    /// Labels containing a comma are joined as-is; the split/join round-trip
    /// is lossy for such labels. This matches the value format the host form
    /// expects, so no escaping is applied.
    pub fn serialized_value(&self) -> &str {
        &self.field.value
    }

    /// The form field the controller keeps up to date (name + value).
    pub fn field(&self) -> &SerializedField {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-derive the serialized value from the collection.
    /// Entries with blank labels cannot exist (add_category rejects them),
    /// but the filter keeps the serialization invariant local to this
    /// function rather than spread across the mutation paths.
    fn reserialize(&mut self) {
        let labels: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.category.label.trim())
            .filter(|label| !label.is_empty())
            .collect();
        self.field.value = labels.join(",");
    }
}

/// Split a comma-separated value into trimmed, non-empty labels.
/// Inverse of the controller's join, up to labels containing commas.
pub fn split_labels(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_join() {
        let controller =
            TagListController::from_labels("categoriesString", ["Food", "Rent", "Utilities"]);
        assert_eq!(controller.serialized_value(), "Food,Rent,Utilities");
    }

    #[test]
    fn add_trims_before_storing() {
        let mut controller = TagListController::new("categoriesString");
        controller.add_category("  Food  ");
        assert_eq!(controller.serialized_value(), "Food");
        assert_eq!(controller.render()[0].label, "Food");
    }

    #[test]
    fn blank_add_is_a_no_op() {
        let mut controller = TagListController::from_labels("categoriesString", ["Food"]);
        assert_eq!(controller.add_category(""), None);
        assert_eq!(controller.add_category("   "), None);
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.serialized_value(), "Food");
    }

    #[test]
    fn removal_by_identity() {
        let mut controller = TagListController::new("categoriesString");
        controller.add_category("Food");
        let rent = controller.add_category("Rent").unwrap();
        controller.add_category("Utilities");

        assert!(controller.remove_category(rent));
        assert_eq!(controller.serialized_value(), "Food,Utilities");

        let entries = controller.render();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Food");
        assert_eq!(entries[1].label, "Utilities");
    }

    #[test]
    fn stale_remove_is_a_no_op() {
        let mut controller = TagListController::new("categoriesString");
        let id = controller.add_category("Food").unwrap();
        assert!(controller.remove_category(id));
        assert!(!controller.remove_category(id));
        assert!(controller.is_empty());
        assert_eq!(controller.serialized_value(), "");
    }

    #[test]
    fn add_remove_add_keeps_insertion_order() {
        let mut controller = TagListController::new("categoriesString");
        let a = controller.add_category("A").unwrap();
        controller.add_category("B");
        controller.remove_category(a);
        controller.add_category("C");
        assert_eq!(controller.serialized_value(), "B,C");
    }

    #[test]
    fn render_is_idempotent() {
        let controller = TagListController::from_labels("categoriesString", ["Food", "Rent"]);
        assert_eq!(controller.render(), controller.render());
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut controller = TagListController::new("categoriesString");
        let first = controller.add_category("Food").unwrap();
        let second = controller.add_category("Food").unwrap();
        assert_ne!(first, second);
        assert_eq!(controller.serialized_value(), "Food,Food");

        // Removing one duplicate leaves the other untouched
        controller.remove_category(first);
        assert_eq!(controller.serialized_value(), "Food");
    }

    #[test]
    fn serialized_value_tracks_every_mutation() {
        let mut controller = TagListController::new("categoriesString");
        assert_eq!(controller.serialized_value(), "");

        let id = controller.add_category("Groceries").unwrap();
        assert_eq!(controller.serialized_value(), "Groceries");

        controller.remove_category(id);
        assert_eq!(controller.serialized_value(), "");
    }

    #[test]
    fn field_name_is_preserved() {
        let controller = TagListController::new("categoriesString");
        assert_eq!(controller.field().name, "categoriesString");
    }

    #[test]
    fn embedded_comma_is_joined_verbatim() {
        // Known limitation: the join is not escaped, so a label containing a
        // comma is indistinguishable from two labels on the wire.
        let controller = TagListController::from_labels("categoriesString", ["Food, Drink"]);
        assert_eq!(controller.serialized_value(), "Food, Drink");
        assert_eq!(split_labels(controller.serialized_value()).len(), 2);
    }

    #[test]
    fn split_labels_filters_blanks() {
        assert_eq!(split_labels("Food, ,Rent,,"), vec!["Food", "Rent"]);
        assert_eq!(split_labels("   "), Vec::<String>::new());
        assert_eq!(split_labels(""), Vec::<String>::new());
    }
}
